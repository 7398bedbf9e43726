//! Draw command implementation.

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use florist::{Flower, FlowerConfig, LevelParam};

use super::common::{make_rng, parse_list, write_png};
use super::config::load_config;

#[derive(Args, Debug, Default)]
pub struct DrawArgs {
    /// Output PNG file
    #[arg(short, long, default_value = "flower.png")]
    pub output: String,

    /// YAML config file (flags below override it)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Image side in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Number of petal rings
    #[arg(long)]
    pub levels: Option<usize>,

    /// Gradient sweep: top_down, diagonal or center
    #[arg(short = 't', long)]
    pub fill_type: Option<String>,

    /// Gradient colors: hot, cold, pink or random
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Random seed for reproducible flowers
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Petal kind ids, one value or one per level (e.g. 1,4)
    #[arg(long)]
    pub petal_kinds: Option<String>,

    /// Petals per ring, one value or one per level (e.g. 5,6)
    #[arg(long)]
    pub petal_counts: Option<String>,

    /// Percent scales, one value or one per level (e.g. 95,92)
    #[arg(long)]
    pub scales: Option<String>,

    /// Narrow/wide distortion, one value or one per level (e.g. 0.1,0.3)
    #[arg(long)]
    pub scale_x: Option<String>,

    /// Center disk radius
    #[arg(long)]
    pub center_size: Option<u32>,
}

impl DrawArgs {
    /// Layer command-line overrides on top of a base config.
    pub fn apply(&self, mut config: FlowerConfig) -> Result<FlowerConfig> {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(levels) = self.levels {
            config.levels = levels;
        }
        if let Some(center_size) = self.center_size {
            config.center_size = center_size;
        }
        if let Some(name) = &self.fill_type {
            config.fill_type = name.parse()?;
        }
        if let Some(name) = &self.palette {
            config.palette = name.parse()?;
        }
        if let Some(raw) = &self.petal_kinds {
            config.petal_kinds = LevelParam::from_values(parse_list(raw, "petal kind")?);
        }
        if let Some(raw) = &self.petal_counts {
            config.petal_counts = LevelParam::from_values(parse_list(raw, "petal count")?);
        }
        if let Some(raw) = &self.scales {
            config.scales = LevelParam::from_values(parse_list(raw, "scale")?);
        }
        if let Some(raw) = &self.scale_x {
            config.scale_x = LevelParam::from_values(parse_list(raw, "scale_x")?);
        }
        Ok(config)
    }
}

/// Execute the draw command.
pub fn cmd_draw(args: &DrawArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => FlowerConfig::default(),
    };
    let config = args.apply(base)?;

    let mut rng = make_rng(args.seed);
    let mut flower = Flower::new(config.clone(), &mut rng).context("Invalid flower configuration")?;

    info!(
        "Drawing {}x{} flower: {} levels, {} fill, {} palette",
        config.size, config.size, config.levels, config.fill_type, config.palette
    );
    for (i, level) in flower.levels().iter().enumerate() {
        info!(
            "  level {}: kind {}, {} petals, scale {}, scale_x {:.2}",
            i + 1,
            level.kind,
            level.petal_count,
            level.scale,
            level.scale_x
        );
    }

    flower.draw(&mut rng).context("Failed to draw flower")?;
    write_png(flower.canvas(), &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use florist::{FillType, Palette};

    #[test]
    fn overrides_replace_config_values() {
        let args = DrawArgs {
            size: Some(128),
            levels: Some(3),
            fill_type: Some("diagonal".to_string()),
            palette: Some("cold".to_string()),
            petal_kinds: Some("1,4,7".to_string()),
            petal_counts: Some("5".to_string()),
            scale_x: Some("0.2,0.1,0".to_string()),
            ..DrawArgs::default()
        };
        let config = args.apply(FlowerConfig::default()).unwrap();

        assert_eq!(config.size, 128);
        assert_eq!(config.levels, 3);
        assert_eq!(config.fill_type, FillType::Diagonal);
        assert_eq!(config.palette, Palette::Cold);
        assert_eq!(config.petal_kinds, LevelParam::PerLevel(vec![1, 4, 7]));
        assert_eq!(config.petal_counts, LevelParam::One(5));
        assert_eq!(config.scale_x, LevelParam::PerLevel(vec![0.2, 0.1, 0.0]));
        assert_eq!(config.scales, LevelParam::random());
    }

    #[test]
    fn unknown_names_are_errors() {
        let args = DrawArgs {
            palette: Some("sepia".to_string()),
            ..DrawArgs::default()
        };
        assert!(args.apply(FlowerConfig::default()).is_err());
    }
}
