use micro_tetris::term::GravityClock;

#[test]
fn gravity_clock_starts_disarmed() {
    let mut c = GravityClock::new(800);
    assert!(!c.is_armed());
    assert_eq!(c.timeout_ms(0), None);
    assert!(!c.poll(10_000));
}

#[test]
fn gravity_clock_fires_after_interval() {
    let mut c = GravityClock::new(800);
    c.arm(0);
    assert!(!c.poll(1));
    assert!(!c.poll(799));
    assert!(c.poll(800));
    // Rescheduled a full interval out.
    assert!(!c.poll(801));
    assert!(c.poll(1600));
}

#[test]
fn gravity_clock_late_poll_fires_once() {
    let mut c = GravityClock::new(100);
    c.arm(0);
    assert!(c.poll(1_000));
    assert!(!c.poll(1_050));
    assert_eq!(c.timeout_ms(1_050), Some(50));
}

#[test]
fn gravity_clock_follows_pause_state() {
    let mut c = GravityClock::new(800);
    c.follow(true, 0);
    assert!(c.is_armed());

    // Following again keeps the schedule.
    c.follow(true, 500);
    assert_eq!(c.timeout_ms(500), Some(300));

    c.follow(false, 600);
    assert!(!c.is_armed());
    assert!(!c.poll(900));

    // Resuming waits a full interval.
    c.follow(true, 1_000);
    assert!(!c.poll(1_799));
    assert!(c.poll(1_800));
}

#[test]
fn gravity_clock_interval_is_at_least_one() {
    let c = GravityClock::new(0);
    assert_eq!(c.interval_ms(), 1);
    assert_eq!(GravityClock::default().interval_ms(), 800);
}
