//! Named color palettes for petal gradients.
//!
//! A palette draw yields three colors: the gradient start, the gradient end
//! and the outline. Named palettes draw each channel in tenths from a fixed
//! integer range; `random` draws every channel uniformly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{FlowerError, Result};

/// Colors for one flower level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColors {
    pub from: Color,
    pub to: Color,
    pub border: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Hot,
    Cold,
    Pink,
    Random,
}

/// Per-channel `[min, max)` ranges, in tenths.
type ChannelRanges = ([u32; 3], [u32; 3]);

impl Palette {
    /// Get all available palettes.
    pub fn all() -> &'static [Palette] {
        &[Palette::Hot, Palette::Cold, Palette::Pink, Palette::Random]
    }

    /// Get palette name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Hot => "hot",
            Palette::Cold => "cold",
            Palette::Pink => "pink",
            Palette::Random => "random",
        }
    }

    /// Parse palette from string.
    pub fn from_name(name: &str) -> Option<Palette> {
        match name.to_lowercase().as_str() {
            "hot" => Some(Palette::Hot),
            "cold" => Some(Palette::Cold),
            "pink" => Some(Palette::Pink),
            "random" => Some(Palette::Random),
            _ => None,
        }
    }

    /// Get palette description.
    pub fn description(&self) -> &'static str {
        match self {
            Palette::Hot => "reds, oranges and yellows",
            Palette::Cold => "blues and teals",
            Palette::Pink => "magentas and pinks",
            Palette::Random => "any color at all",
        }
    }

    fn ranges(&self) -> Option<ChannelRanges> {
        match self {
            Palette::Hot => Some(([3, 0, 0], [11, 11, 1])),
            Palette::Cold => Some(([0, 0, 3], [2, 8, 11])),
            Palette::Pink => Some(([1, 1, 1], [11, 3, 11])),
            Palette::Random => None,
        }
    }

    /// Draw a single color from this palette.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Color {
        match self.ranges() {
            Some((min, max)) => {
                let mut channel = |i: usize| rng.random_range(min[i]..max[i]) as f64 / 10.0;
                Color::new(channel(0), channel(1), channel(2))
            }
            None => Color::new(rng.random(), rng.random(), rng.random()),
        }
    }

    /// Draw gradient start, gradient end and outline colors.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> GradientColors {
        let from = self.sample(rng);
        let to = self.sample(rng);
        let border = self.sample(rng);
        GradientColors { from, to, border }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Palette {
    type Err = FlowerError;

    fn from_str(s: &str) -> Result<Self> {
        Palette::from_name(s).ok_or_else(|| FlowerError::UnknownPalette(s.to_string()))
    }
}
