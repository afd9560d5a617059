//! Command-line arguments: `micro-tetris [ROWS COLUMNS [TICK_MS]]`.
//!
//! Board geometry and the gravity interval are both optional; each is
//! validated by `EngineConfig::validate` before the terminal is touched.

use anyhow::{bail, Context, Result};

use crate::core::EngineConfig;

pub const USAGE: &str = "usage: micro-tetris [ROWS COLUMNS [TICK_MS]]";

/// Build the engine configuration from positional arguments (program name
/// already stripped). Missing values keep their defaults.
pub fn parse_args<I, S>(args: I) -> Result<EngineConfig>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut config = EngineConfig::default();

    match args.len() {
        0 => {}
        2 | 3 => {
            let rows = parse_number(args[0].as_ref(), "ROWS")?;
            let columns = parse_number(args[1].as_ref(), "COLUMNS")?;
            config = config.with_size(rows as usize, columns as usize);
            if let Some(ms) = args.get(2) {
                config = config.with_tick_interval_ms(parse_number(ms.as_ref(), "TICK_MS")?);
            }
        }
        _ => bail!("{}", USAGE),
    }

    config.validate()?;
    Ok(config)
}

fn parse_number(value: &str, name: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("{} must be a non-negative integer, got {:?}", name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let cfg = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn geometry_and_interval() {
        let cfg = parse_args(["10", "6", "250"]).unwrap();
        assert_eq!((cfg.rows, cfg.columns, cfg.tick_interval_ms), (10, 6, 250));
    }

    #[test]
    fn single_argument_is_rejected() {
        let err = parse_args(["10"]).unwrap_err();
        assert!(err.to_string().contains("usage"));
    }

    #[test]
    fn non_numeric_is_rejected() {
        let err = parse_args(["ten", "6"]).unwrap_err();
        assert!(err.to_string().contains("ROWS"));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        assert!(parse_args(["2", "6"]).is_err());
        assert!(parse_args(["20", "11", "0"]).is_err());
    }

    #[test]
    fn oversized_geometry_is_rejected() {
        let err = parse_args(["5", "40000"]).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(parse_args(["255", "255"]).is_ok());
    }
}
