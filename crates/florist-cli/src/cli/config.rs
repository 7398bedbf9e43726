//! Flower configuration files.
//!
//! Configs are YAML files mirroring `florist::FlowerConfig`. Every field is
//! optional; missing fields fall back to the classic two-level hot flower.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use florist::FlowerConfig;

/// Annotated example printed by `florist config --example`.
pub const EXAMPLE_CONFIG: &str = r#"# florist flower configuration
#
# Per-level fields (petal_counts, petal_kinds, scales, scale_x) accept:
#   random        draw a value for every level
#   5             use the same value on every level
#   [5, 6, 4]     one value per level (at least `levels` entries)

# Output image side in pixels
size: 300

# Center disk radius and color (RGB, 0..1)
center_size: 40
center_color: [1.0, 1.0, 0.0]

# Placeholder petals are filled with before the gradient pass.
# Must differ from white and from center_color.
fill_color: [0.5, 0.5, 0.5]

# Number of petal rings, largest first
levels: 2

# Gradient sweep: top_down, diagonal or center
fill_type: center

# Gradient colors: hot, cold, pink or random
palette: hot

# Petals per ring (random: 4-6)
petal_counts: random

# Petal shape ids 1-8 (random: any)
petal_kinds: random

# Percent scale, larger = smaller petals (random: 90-99)
scales: random

# Narrow/wide distortion in [0, 0.6] (random: 0.00-0.39)
scale_x: random
"#;

/// Load a flower config from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FlowerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config YAML: {}", path.display()))
}

/// Execute the config command.
pub fn cmd_config(example: bool, defaults: bool) -> Result<()> {
    if defaults {
        let yaml = serde_yaml::to_string(&FlowerConfig::default()).context("Failed to serialize defaults")?;
        print!("{}", yaml);
    } else if example {
        print!("{}", EXAMPLE_CONFIG);
    } else {
        bail!("Usage: florist config --example | --defaults");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use florist::{FillType, LevelParam, Palette};
    use std::io::Write;

    #[test]
    fn config_without_a_flag_is_an_error() {
        let err = cmd_config(false, false).unwrap_err();
        assert!(err.to_string().contains("--example"));
    }

    #[test]
    fn example_parses_to_defaults() {
        let config: FlowerConfig = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, FlowerConfig::default());
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "levels: 3\nfill_type: diagonal\npalette: pink\npetal_kinds: [1, 2, 3]").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.levels, 3);
        assert_eq!(config.fill_type, FillType::Diagonal);
        assert_eq!(config.palette, Palette::Pink);
        assert_eq!(config.petal_kinds, LevelParam::PerLevel(vec![1, 2, 3]));
        assert_eq!(config.size, 300);
    }

    #[test]
    fn bad_yaml_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fill_type: spiral").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config YAML"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("/definitely/not/here.yaml").is_err());
    }
}
