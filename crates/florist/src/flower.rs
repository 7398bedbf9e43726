//! Flower assembly.
//!
//! A flower is a center disk plus a stack of petal rings ("levels"). Each
//! level synthesizes ONE petal outline and ONE interior traversal, then
//! stamps them around the center at evenly spaced angles. Levels shrink as
//! they go, so later rings sit on top of earlier ones.
//!
//! ## Rust Lesson #12: Generics over traits
//!
//! `draw<R: Rng>(&mut self, rng: &mut R)` works with any random source.
//! The CLI passes an OS-seeded `StdRng`, tests pass `StdRng::seed_from_u64`
//! and get the exact same flower every time.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{FlowerError, Result};
use crate::fill::{fill_gradient, FillPolicy, Gradient};
use crate::geometry::{Bucket, Contour, GridPoint};
use crate::palette::{GradientColors, Palette};
use crate::petal::{round_coord, synthesize, PetalShape};
use crate::template::{template, PETAL_KINDS};
use crate::traversal::FillType;

/// Random petal count range per level.
const PETAL_COUNT_RANGE: std::ops::Range<u32> = 4..7;
/// Random scale range per level (percent).
const SCALE_RANGE: std::ops::Range<u32> = 90..100;
/// Random scale_x range per level, in hundredths.
const SCALE_X_RANGE: std::ops::Range<u32> = 0..40;
/// Upper bound on the first petal's angle (degrees).
const SHIFT_DEGREE: i32 = 60;
/// Outline colors are this many times darker than their palette draw.
pub const BORDER_DARKNESS: f64 = 2.5;
/// Strongest narrow/wide distortion a config may ask for.
const MAX_SCALE_X: f64 = 0.6;

/// Serialized as the bare string `random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomMarker {
    Random,
}

/// A per-level parameter: drawn at random, shared, or listed per level.
///
/// In YAML:
/// ```yaml
/// petal_counts: random    # drawn for every level
/// petal_kinds: 4          # same for every level
/// scales: [95, 92, 90]    # one per level
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelParam<T> {
    Random(RandomMarker),
    One(T),
    PerLevel(Vec<T>),
}

impl<T> Default for LevelParam<T> {
    fn default() -> Self {
        LevelParam::Random(RandomMarker::Random)
    }
}

impl<T: Copy> LevelParam<T> {
    pub fn random() -> Self {
        Self::default()
    }

    /// A single value becomes `One`, several become `PerLevel`.
    pub fn from_values(values: Vec<T>) -> Self {
        match values.as_slice() {
            [single] => LevelParam::One(*single),
            _ => LevelParam::PerLevel(values),
        }
    }

    /// Expand to exactly `levels` values.
    ///
    /// `draw` is called once per level, in level order, for `random`.
    pub fn resolve<R, F>(&self, name: &str, levels: usize, rng: &mut R, mut draw: F) -> Result<Vec<T>>
    where
        R: Rng,
        F: FnMut(&mut R) -> T,
    {
        match self {
            LevelParam::Random(_) => Ok((0..levels).map(|_| draw(&mut *rng)).collect()),
            LevelParam::One(value) => Ok(vec![*value; levels]),
            LevelParam::PerLevel(values) if values.len() < levels => Err(FlowerError::Config(format!(
                "{} lists {} values but the flower has {} levels",
                name,
                values.len(),
                levels
            ))),
            LevelParam::PerLevel(values) => Ok(values[..levels].to_vec()),
        }
    }
}

/// Everything needed to draw a flower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    /// Side of the square output image in pixels
    pub size: u32,
    /// Radius of the center disk
    pub center_size: u32,
    pub center_color: Color,
    /// Placeholder petals are filled with before the gradient pass
    pub fill_color: Color,
    pub levels: usize,
    pub fill_type: FillType,
    pub palette: Palette,
    pub petal_counts: LevelParam<u32>,
    pub petal_kinds: LevelParam<u8>,
    /// Percentage scale per level; larger means smaller petals
    pub scales: LevelParam<u32>,
    /// Narrow/wide distortion strength per level, in [0, 0.6]
    pub scale_x: LevelParam<f64>,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            size: 300,
            center_size: 40,
            center_color: Color::new(1.0, 1.0, 0.0),
            fill_color: Color::new(0.5, 0.5, 0.5),
            levels: 2,
            fill_type: FillType::default(),
            palette: Palette::default(),
            petal_counts: LevelParam::random(),
            petal_kinds: LevelParam::random(),
            scales: LevelParam::random(),
            scale_x: LevelParam::random(),
        }
    }
}

/// Resolved parameters for one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelPlan {
    pub petal_count: u32,
    pub kind: u8,
    pub scale: u32,
    pub scale_x: f64,
}

impl FlowerConfig {
    /// Check the parts of the config that do not depend on random draws.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(FlowerError::InvalidCanvasSize(0));
        }

        let blank = self.fill_color.to_rgb8();
        if blank == Color::WHITE.to_rgb8() || blank == self.center_color.to_rgb8() {
            return Err(FlowerError::Config(
                "fill_color must differ from the background and the center color".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve every per-level parameter, drawing the random ones.
    pub fn plan<R: Rng>(&self, rng: &mut R) -> Result<Vec<LevelPlan>> {
        let n = self.levels;
        let counts = self
            .petal_counts
            .resolve("petal_counts", n, rng, |r| r.random_range(PETAL_COUNT_RANGE))?;
        let kinds = self
            .petal_kinds
            .resolve("petal_kinds", n, rng, |r| r.random_range(1..=PETAL_KINDS.len() as u8))?;
        let scales = self.scales.resolve("scales", n, rng, |r| r.random_range(SCALE_RANGE))?;
        let scale_x = self
            .scale_x
            .resolve("scale_x", n, rng, |r| r.random_range(SCALE_X_RANGE) as f64 / 100.0)?;

        let levels: Vec<LevelPlan> = (0..n)
            .map(|i| LevelPlan {
                petal_count: counts[i],
                kind: kinds[i],
                scale: scales[i],
                scale_x: scale_x[i],
            })
            .collect();

        for (i, level) in levels.iter().enumerate() {
            if level.petal_count == 0 {
                return Err(FlowerError::Config(format!("level {} has zero petals", i + 1)));
            }
            if level.scale == 0 {
                return Err(FlowerError::Config(format!("level {} has zero scale", i + 1)));
            }
            if !(0.0..=MAX_SCALE_X).contains(&level.scale_x) {
                return Err(FlowerError::Config(format!(
                    "level {} scale_x {} is outside [0, {}]",
                    i + 1,
                    level.scale_x,
                    MAX_SCALE_X
                )));
            }
            template(level.kind)?;
        }

        Ok(levels)
    }
}

/// Size of the next level: `level_size` scaled by `tenths / 10`.
fn shrink_level(level_size: i32, tenths: i32) -> i32 {
    round_coord(level_size as f64 * (tenths as f64 / 10.0))
}

/// Move a traversal-space point onto the canvas.
///
/// Shifts by `-center_dist`, rotates by `degrees`, then shifts by
/// `+offset`. Rotated coordinates are rounded to 5 decimals and truncated
/// toward zero.
pub fn place_point(p: GridPoint, center_dist: i32, degrees: i32, offset: i32) -> GridPoint {
    let x = (p.row - center_dist) as f64;
    let y = (p.col - center_dist) as f64;
    let (sin, cos) = (degrees as f64).to_radians().sin_cos();

    let settle = |v: f64| ((v * 1e5).round_ties_even() / 1e5).trunc() as i32;
    GridPoint::new(settle(x * cos - y * sin) + offset, settle(x * sin + y * cos) + offset)
}

/// Fill a petal with the placeholder, stroke it, then paint its gradient.
fn paint_petal(
    canvas: &mut Canvas,
    contour: &Contour,
    buckets: &[Bucket],
    colors: &GradientColors,
    blank: Color,
    policy: FillPolicy,
) -> usize {
    canvas.fill_contour(contour, blank);
    canvas.stroke_contour(contour, colors.border);
    let gradient = Gradient {
        from: colors.from,
        to: colors.to,
        blank,
    };
    fill_gradient(canvas, buckets, &gradient, policy)
}

/// A flower being drawn onto its canvas.
pub struct Flower {
    config: FlowerConfig,
    levels: Vec<LevelPlan>,
    canvas: Canvas,
}

impl Flower {
    /// Validate the config, resolve its levels and paint the center disk.
    pub fn new<R: Rng>(config: FlowerConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut canvas = Canvas::new(config.size, Color::WHITE)?;
        let center = round_coord(config.size as f64 / 2.0);
        canvas.fill_circle(center, center, config.center_size as f32, config.center_color);

        let levels = config.plan(rng)?;
        Ok(Self {
            config,
            levels,
            canvas,
        })
    }

    pub fn levels(&self) -> &[LevelPlan] {
        &self.levels
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Draw every level, largest first.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let mut level_size = self.config.size as i32;
        for i in 0..self.levels.len() {
            let center_dist = rng.random_range(0..20) - 10;
            self.draw_level(i, level_size, center_dist, rng)?;
            level_size = shrink_level(level_size, rng.random_range(5..8));
        }
        Ok(())
    }

    fn draw_level<R: Rng>(&mut self, index: usize, level_size: i32, center_dist: i32, rng: &mut R) -> Result<()> {
        let level = self.levels[index];
        let mut colors = self.config.palette.draw(rng);
        colors.border = colors.border.darken(BORDER_DARKNESS);

        let half = round_coord(self.config.size as f64 / 2.0);
        let target = round_coord(level_size as f64 / 3.0);
        let narrow = rng.random_range(0..10) > 5;

        let shape = PetalShape::new(target)
            .with_narrow(narrow)
            .with_scale(level.scale)
            .with_scale_x(level.scale_x);
        let contour = synthesize(template(level.kind)?, &shape);

        let space = round_coord(target as f64 / level.scale as f64 * 120.0);
        let buckets = self.config.fill_type.buckets(&contour, space, rng);

        let step = round_coord(360.0 / level.petal_count as f64);
        let mut angle = rng.random_range(0..SHIFT_DEGREE);

        debug!(
            "level {}: kind {} x{} petals, target {}, scale {}, scale_x {}, {} buckets",
            index + 1,
            level.kind,
            level.petal_count,
            target,
            level.scale,
            level.scale_x,
            buckets.len()
        );

        let policy = self.config.fill_type.policy();
        let blank = self.config.fill_color;
        for _ in 0..level.petal_count {
            let place = |p: GridPoint| place_point(p, center_dist, angle, half);
            let placed = contour.map(place);
            let placed_buckets: Vec<Bucket> = buckets
                .iter()
                .map(|bucket| bucket.iter().copied().map(place).collect())
                .collect();

            let painted = paint_petal(&mut self.canvas, &placed, &placed_buckets, &colors, blank, policy);
            debug!("  petal at {} deg: {} pixels painted", angle, painted);
            angle += step;
        }

        Ok(())
    }
}

/// Build and draw a flower in one go.
pub fn render<R: Rng>(config: FlowerConfig, rng: &mut R) -> Result<Canvas> {
    let mut flower = Flower::new(config, rng)?;
    flower.draw(rng)?;
    Ok(flower.into_canvas())
}

/// Draw a single petal, unrotated, on its own white canvas.
///
/// The canvas is `canvas_size` pixels wide and the traversal runs over the
/// same space.
pub fn render_petal<R: Rng>(
    contour: &Contour,
    canvas_size: u32,
    fill_type: FillType,
    colors: &GradientColors,
    blank: Color,
    rng: &mut R,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(canvas_size, Color::WHITE)?;
    let buckets = fill_type.buckets(contour, canvas_size as i32, rng);
    let painted = paint_petal(&mut canvas, contour, &buckets, colors, blank, fill_type.policy());
    debug!("petal: {} buckets, {} pixels painted", buckets.len(), painted);
    Ok(canvas)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(config: FlowerConfig, seed: u64) -> Canvas {
        render(config, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn pixels(canvas: &Canvas) -> Vec<Option<[u8; 3]>> {
        let n = canvas.size() as i32;
        (0..n).flat_map(|y| (0..n).map(move |x| (x, y))).map(|(x, y)| canvas.pixel(x, y)).collect()
    }

    #[test]
    fn defaults_match_classic_flower() {
        let config = FlowerConfig::default();
        assert_eq!(config.size, 300);
        assert_eq!(config.center_size, 40);
        assert_eq!(config.levels, 2);
        assert_eq!(config.fill_type, FillType::Center);
        assert_eq!(config.palette, Palette::Hot);
        assert_eq!(config.petal_kinds, LevelParam::random());
    }

    #[test]
    fn level_params_resolve() {
        let mut rng = StdRng::seed_from_u64(1);
        let one: LevelParam<u32> = LevelParam::One(5);
        assert_eq!(one.resolve("x", 3, &mut rng, |_| 0).unwrap(), vec![5, 5, 5]);

        let list = LevelParam::PerLevel(vec![4, 5, 6, 7]);
        assert_eq!(list.resolve("x", 2, &mut rng, |_| 0).unwrap(), vec![4, 5]);
        assert!(matches!(list.resolve("x", 5, &mut rng, |_| 0), Err(FlowerError::Config(_))));

        let random: LevelParam<u32> = LevelParam::random();
        let drawn = random.resolve("x", 4, &mut rng, |r| r.random_range(PETAL_COUNT_RANGE)).unwrap();
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(|c| PETAL_COUNT_RANGE.contains(c)));

        assert_eq!(LevelParam::from_values(vec![3u32]), LevelParam::One(3));
        assert_eq!(LevelParam::from_values(vec![3u32, 4]), LevelParam::PerLevel(vec![3, 4]));
    }

    #[test]
    fn random_plan_stays_in_ranges() {
        let config = FlowerConfig {
            levels: 6,
            ..FlowerConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            for level in config.plan(&mut rng).unwrap() {
                assert!(PETAL_COUNT_RANGE.contains(&level.petal_count));
                assert!((1..=8).contains(&level.kind));
                assert!(SCALE_RANGE.contains(&level.scale));
                assert!((0.0..0.4).contains(&level.scale_x));
            }
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad_kind = FlowerConfig {
            petal_kinds: LevelParam::One(9),
            ..FlowerConfig::default()
        };
        assert!(matches!(bad_kind.plan(&mut rng), Err(FlowerError::UnknownPetalKind(9))));

        let zero_petals = FlowerConfig {
            petal_counts: LevelParam::One(0),
            ..FlowerConfig::default()
        };
        assert!(matches!(zero_petals.plan(&mut rng), Err(FlowerError::Config(_))));

        let zero_scale = FlowerConfig {
            scales: LevelParam::PerLevel(vec![95, 0]),
            ..FlowerConfig::default()
        };
        assert!(matches!(zero_scale.plan(&mut rng), Err(FlowerError::Config(_))));

        let too_wide = FlowerConfig {
            scale_x: LevelParam::One(0.9),
            ..FlowerConfig::default()
        };
        assert!(matches!(too_wide.plan(&mut rng), Err(FlowerError::Config(_))));

        let white_blank = FlowerConfig {
            fill_color: Color::WHITE,
            ..FlowerConfig::default()
        };
        assert!(matches!(white_blank.validate(), Err(FlowerError::Config(_))));

        let empty = FlowerConfig {
            size: 0,
            ..FlowerConfig::default()
        };
        assert!(matches!(Flower::new(empty, &mut rng), Err(FlowerError::InvalidCanvasSize(0))));
    }

    #[test]
    fn place_point_rotates_about_the_origin() {
        assert_eq!(place_point(GridPoint::new(10, 0), 0, 0, 0), GridPoint::new(10, 0));
        assert_eq!(place_point(GridPoint::new(10, 0), 0, 90, 0), GridPoint::new(0, 10));
        assert_eq!(place_point(GridPoint::new(10, 0), 0, 180, 0), GridPoint::new(-10, 0));
        assert_eq!(place_point(GridPoint::new(0, 10), 0, 90, 0), GridPoint::new(-10, 0));
    }

    #[test]
    fn level_shrink_scales_by_tenths() {
        // 45 * 0.7 sits just under 31.5
        assert_eq!(shrink_level(45, 7), 31);
        assert_eq!(shrink_level(300, 5), 150);
        assert_eq!(shrink_level(300, 7), 210);
    }

    #[test]
    fn place_point_shifts_then_offsets() {
        // (12, 7) - 2 = (10, 5); 90 deg -> (-5, 10); + 150
        assert_eq!(place_point(GridPoint::new(12, 7), 2, 90, 150), GridPoint::new(145, 160));
        // 45 deg: (10, 0) -> (7.07.., 7.07..) truncated
        assert_eq!(place_point(GridPoint::new(10, 0), 0, 45, 0), GridPoint::new(7, 7));
        // Negative values truncate toward zero
        assert_eq!(place_point(GridPoint::new(-10, 0), 0, 45, 0), GridPoint::new(-7, -7));
    }

    #[test]
    fn seeded_flowers_are_deterministic() {
        let config = FlowerConfig {
            size: 160,
            center_size: 20,
            ..FlowerConfig::default()
        };
        let a = seeded(config.clone(), 1234);
        let b = seeded(config.clone(), 1234);
        assert_eq!(pixels(&a), pixels(&b));
    }

    #[test]
    fn flower_has_gradient_pixels() {
        for fill_type in FillType::all() {
            let config = FlowerConfig {
                size: 200,
                center_size: 25,
                fill_type: *fill_type,
                petal_kinds: LevelParam::One(4),
                petal_counts: LevelParam::One(5),
                ..FlowerConfig::default()
            };
            let canvas = seeded(config.clone(), 77);

            let known = [
                Color::WHITE.to_rgb8(),
                config.fill_color.to_rgb8(),
                config.center_color.to_rgb8(),
            ];
            let painted: HashSet<[u8; 3]> = pixels(&canvas)
                .into_iter()
                .flatten()
                .filter(|p| !known.contains(p))
                .collect();
            // Outlines add one color per level; everything else is gradient
            assert!(painted.len() > 10, "{} fill produced only {} colors", fill_type, painted.len());
        }
    }

    #[test]
    fn zero_levels_draws_just_the_center() {
        let config = FlowerConfig {
            size: 100,
            center_size: 10,
            levels: 0,
            ..FlowerConfig::default()
        };
        let canvas = seeded(config.clone(), 3);
        assert!(canvas.count_color(config.center_color) > 250);
        assert_eq!(canvas.count_color(config.fill_color), 0);
    }

    #[test]
    fn single_petal_render() {
        let contour = synthesize(template(2).unwrap(), &PetalShape::new(100));
        let colors = GradientColors {
            from: Color::new(0.2, 0.0, 0.6),
            to: Color::new(0.9, 0.6, 1.0),
            border: Color::new(0.1, 0.0, 0.2),
        };
        let blank = Color::new(0.5, 0.5, 0.5);
        let mut rng = StdRng::seed_from_u64(2);
        let canvas = render_petal(&contour, 120, FillType::TopDown, &colors, blank, &mut rng).unwrap();

        assert!(canvas.count_color(colors.border) > 0);
        assert_eq!(canvas.pixel(5, 110), Some([255, 255, 255]));

        let plain = [Color::WHITE.to_rgb8(), blank.to_rgb8(), colors.border.to_rgb8()];
        let gradient = pixels(&canvas).into_iter().flatten().filter(|p| !plain.contains(p)).count();
        // Only a thin rim along the outline may stay blank
        assert!(gradient > 5 * canvas.count_color(blank));
    }

    #[test]
    fn yaml_config_forms() {
        let yaml = r#"
size: 240
levels: 3
fill_type: top_down
palette: cold
center_color: [0.9, 0.8, 0.1]
petal_counts: random
petal_kinds: 4
scales: [95, 92, 90]
scale_x: 0.25
"#;
        let config: FlowerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.size, 240);
        assert_eq!(config.fill_type, FillType::TopDown);
        assert_eq!(config.palette, Palette::Cold);
        assert_eq!(config.center_color, Color::new(0.9, 0.8, 0.1));
        assert_eq!(config.petal_counts, LevelParam::random());
        assert_eq!(config.petal_kinds, LevelParam::One(4));
        assert_eq!(config.scales, LevelParam::PerLevel(vec![95, 92, 90]));
        assert_eq!(config.scale_x, LevelParam::One(0.25));
        // Unset fields keep their defaults
        assert_eq!(config.center_size, 40);

        let back: FlowerConfig = serde_yaml::from_str(&serde_yaml::to_string(&config).unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
