//! Common utilities shared across CLI commands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use florist::Canvas;

/// Seeded RNG when a seed is given, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Write a canvas to a PNG file.
///
/// PNG is binary, so `-` (stdout) is refused.
pub fn write_png(canvas: &Canvas, path: &str) -> Result<()> {
    if path == "-" {
        bail!("PNG output cannot be written to stdout; pass a file path with -o");
    }
    canvas
        .save_png(Path::new(path))
        .with_context(|| format!("Failed to write {}", path))?;
    log::info!("Wrote: {} ({}x{})", path, canvas.size(), canvas.size());
    Ok(())
}

/// Parse a comma-separated list (`4,5,6`).
pub fn parse_list<T>(raw: &str, what: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", what, s, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_parse() {
        assert_eq!(parse_list::<u32>("4, 5,6", "count").unwrap(), vec![4, 5, 6]);
        assert_eq!(parse_list::<f64>("0.1", "scale_x").unwrap(), vec![0.1]);
        assert!(parse_list::<u8>("1,x", "kind").is_err());
    }

    #[test]
    fn stdout_png_is_refused() {
        let canvas = Canvas::new(4, florist::Color::WHITE).unwrap();
        let err = write_png(&canvas, "-").unwrap_err();
        assert!(err.to_string().contains("stdout"));
    }

    #[test]
    fn seeded_rngs_repeat() {
        use rand::Rng;
        let a: u64 = make_rng(Some(9)).random();
        let b: u64 = make_rng(Some(9)).random();
        assert_eq!(a, b);
    }
}
