//! Shape table and rotation tests

use micro_tetris::core::PieceShape;
use micro_tetris::types::{Cell, PieceKind};

fn rows(shape: &PieceShape) -> Vec<Vec<Cell>> {
    shape.rows().map(|r| r.to_vec()).collect()
}

// ============== Shape Tests ==============

#[test]
fn test_shape_table() {
    let expected: [(PieceKind, Vec<Vec<Cell>>); 7] = [
        (PieceKind::L, vec![vec![2, 2, 2], vec![2, 0, 0]]),
        (PieceKind::J, vec![vec![6, 6, 6], vec![0, 0, 6]]),
        (PieceKind::T, vec![vec![3, 3, 3], vec![0, 3, 0]]),
        (PieceKind::I, vec![vec![4, 4, 4, 4]]),
        (PieceKind::Z, vec![vec![7, 7, 0], vec![0, 7, 7]]),
        (PieceKind::S, vec![vec![0, 1, 1], vec![1, 1, 0]]),
        (PieceKind::O, vec![vec![5, 5], vec![5, 5]]),
    ];
    for (kind, want) in expected {
        assert_eq!(rows(&PieceShape::of(kind)), want, "{:?}", kind);
    }
}

#[test]
fn test_every_shape_has_four_cells_of_its_color() {
    for kind in PieceKind::ALL {
        let minos = PieceShape::of(kind).minos();
        assert_eq!(minos.len(), 4);
        assert!(minos.iter().all(|&(_, _, c)| c == kind.color()));
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_t_rotations() {
    let t = PieceShape::of(PieceKind::T);

    let r1 = t.rotated();
    assert_eq!(rows(&r1), vec![vec![3, 0], vec![3, 3], vec![3, 0]]);

    let r2 = r1.rotated();
    assert_eq!(rows(&r2), vec![vec![0, 3, 0], vec![3, 3, 3]]);

    let r3 = r2.rotated();
    assert_eq!(rows(&r3), vec![vec![0, 3], vec![3, 3], vec![0, 3]]);
}

#[test]
fn test_bar_rotation_is_vertical() {
    let i = PieceShape::of(PieceKind::I).rotated();
    assert_eq!(rows(&i), vec![vec![4], vec![4], vec![4], vec![4]]);
}

#[test]
fn test_square_rotation_is_identity() {
    let o = PieceShape::of(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let shape = PieceShape::of(kind);
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_never_mutates_source() {
    let s = PieceShape::of(PieceKind::S);
    let copy = s;
    let _ = s.rotated();
    assert_eq!(s, copy);
}

#[test]
fn test_custom_shape() {
    let shape = PieceShape::from_rows(&[&[1, 0], &[1, 1]]).unwrap();
    assert_eq!(shape.width(), 2);
    assert_eq!(shape.height(), 2);
    assert_eq!(rows(&shape.rotated()), vec![vec![0, 1], vec![1, 1]]);
}
