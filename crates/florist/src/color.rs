//! RGB colors and gradient splitting.

use serde::{Deserialize, Serialize};

/// An RGB color with floating-point channels, nominally in [0, 1].
///
/// Palette draws can overshoot to 1.1; values are clamped only when a
/// color is quantized for the canvas. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Scale every channel down by `factor` (used for border strokes).
    #[inline]
    pub fn darken(&self, factor: f64) -> Self {
        Self::new(self.r / factor, self.g / factor, self.b / factor)
    }

    /// Quantize to 8-bit channels.
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

/// Split the range between two colors into `count` gradient steps.
///
/// Each channel moves from `from` toward `to` by `|from - to| / count` per
/// step; `to` itself is never reached. A channel that does not change stays
/// constant. `count == 0` gives an empty gradient.
pub fn split_colors(count: usize, from: Color, to: Color) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }

    let [r, g, b] = [
        split_channel(count, from.r, to.r),
        split_channel(count, from.g, to.g),
        split_channel(count, from.b, to.b),
    ];

    r.into_iter()
        .zip(g)
        .zip(b)
        .map(|((r, g), b)| Color::new(r, g, b))
        .collect()
}

fn split_channel(count: usize, from: f64, to: f64) -> Vec<f64> {
    if from == to {
        return vec![from; count];
    }

    let step = (from - to).abs() / count as f64;
    let direction = if to > from { 1.0 } else { -1.0 };
    (0..count).map(|i| from + direction * step * i as f64).collect()
}
