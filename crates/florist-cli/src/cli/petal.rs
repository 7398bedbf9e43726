//! Petal command: synthesize a single petal contour.
//!
//! Either dumps the contour as JSON (for plotting or debugging) or renders
//! the petal alone with its gradient fill.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use serde::Serialize;

use florist::flower::{render_petal, BORDER_DARKNESS};
use florist::{synthesize, template, Color, FillType, GridPoint, Palette, PetalShape};

use super::common::{make_rng, write_png};

#[derive(Args, Debug)]
pub struct PetalArgs {
    /// Petal kind id (see `florist kinds`)
    pub kind: u8,

    /// Target size the petal is laid out in
    #[arg(long, default_value_t = 100)]
    pub size: i32,

    /// Percent scale, larger = smaller petal
    #[arg(long, default_value_t = 100)]
    pub scale: u32,

    /// Narrow/wide distortion strength
    #[arg(long, default_value_t = 0.0)]
    pub scale_x: f64,

    /// Widen instead of narrow
    #[arg(long)]
    pub wide: bool,

    /// Keep raw key points instead of smoothed curves
    #[arg(long)]
    pub no_smooth: bool,

    /// Print the contour as JSON instead of rendering
    #[arg(long)]
    pub json: bool,

    /// Output PNG file
    #[arg(short, long, default_value = "petal.png")]
    pub output: String,

    /// Gradient sweep: top_down, diagonal or center
    #[arg(short = 't', long, default_value = "center")]
    pub fill_type: String,

    /// Gradient colors: hot, cold, pink or random
    #[arg(short, long, default_value = "hot")]
    pub palette: String,

    /// Random seed for reproducible colors and centers
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// JSON dump of one synthesized petal.
#[derive(Serialize)]
struct PetalDump<'a> {
    kind: u8,
    target_size: i32,
    scale: u32,
    scale_x: f64,
    narrow: bool,
    smooth: bool,
    len: usize,
    bounding_box: Option<(i32, i32, i32, i32)>,
    points: &'a [GridPoint],
}

impl PetalArgs {
    fn shape(&self) -> PetalShape {
        PetalShape::new(self.size)
            .with_smooth(!self.no_smooth)
            .with_narrow(!self.wide)
            .with_scale(self.scale)
            .with_scale_x(self.scale_x)
    }

    /// Square canvas that fits the petal with some margin.
    fn canvas_size(&self) -> u32 {
        (self.size as f64 / self.scale as f64 * 120.0).round().max(1.0) as u32
    }
}

/// Execute the petal command.
pub fn cmd_petal(args: &PetalArgs) -> Result<()> {
    if args.size <= 0 || args.scale == 0 {
        anyhow::bail!("--size and --scale must be positive");
    }

    let template = template(args.kind)?;
    let shape = args.shape();
    let contour = synthesize(template, &shape);

    if args.json {
        let dump = PetalDump {
            kind: args.kind,
            target_size: shape.target_size,
            scale: shape.scale,
            scale_x: shape.scale_x,
            narrow: shape.narrow,
            smooth: shape.smooth,
            len: contour.len(),
            bounding_box: contour.bounding_box(),
            points: &contour.points,
        };
        let json = serde_json::to_string_pretty(&dump).context("Failed to serialize contour")?;
        println!("{}", json);
        return Ok(());
    }

    let fill_type: FillType = args.fill_type.parse()?;
    let palette: Palette = args.palette.parse()?;
    let mut rng = make_rng(args.seed);

    let mut colors = palette.draw(&mut rng);
    colors.border = colors.border.darken(BORDER_DARKNESS);
    let blank = Color::new(0.5, 0.5, 0.5);

    info!(
        "Petal kind {}: {} contour points, {} fill, {} palette",
        args.kind,
        contour.len(),
        fill_type,
        palette
    );

    let canvas = render_petal(&contour, args.canvas_size(), fill_type, &colors, blank, &mut rng)
        .context("Failed to render petal")?;
    write_png(&canvas, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: u8) -> PetalArgs {
        PetalArgs {
            kind,
            size: 100,
            scale: 100,
            scale_x: 0.0,
            wide: false,
            no_smooth: false,
            json: true,
            output: "petal.png".to_string(),
            fill_type: "center".to_string(),
            palette: "hot".to_string(),
            seed: Some(1),
        }
    }

    #[test]
    fn shape_follows_flags() {
        let mut a = args(3);
        a.wide = true;
        a.no_smooth = true;
        a.scale_x = 0.3;
        let shape = a.shape();
        assert!(!shape.narrow);
        assert!(!shape.smooth);
        assert_eq!(shape.scale_x, 0.3);
    }

    #[test]
    fn canvas_leaves_a_margin() {
        let mut a = args(1);
        assert_eq!(a.canvas_size(), 120);
        a.scale = 90;
        assert_eq!(a.canvas_size(), 133);
    }

    #[test]
    fn unknown_kind_fails() {
        assert!(cmd_petal(&args(42)).is_err());
    }
}
