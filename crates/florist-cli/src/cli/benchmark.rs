//! Benchmark command implementation.
//!
//! Times contour synthesis, each traversal and the gradient fill for every
//! petal kind at one target size.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;

use florist::{fill_gradient, synthesize, Canvas, Color, FillType, Gradient, PetalShape, PETAL_KINDS};

use super::common::make_rng;

const BLANK: Color = Color::new(0.5, 0.5, 0.5);
const BORDER: Color = Color::new(0.2, 0.1, 0.0);

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Execute the benchmark command.
pub fn cmd_benchmark(size: i32, seed: u64) -> Result<()> {
    if size <= 0 {
        anyhow::bail!("--size must be positive");
    }
    let canvas_size = size as u32 + size as u32 / 5;
    let gradient = Gradient {
        from: Color::new(0.9, 0.2, 0.0),
        to: Color::new(1.0, 0.9, 0.0),
        blank: BLANK,
    };
    let mut rng = make_rng(Some(seed));

    info!("Benchmarking {} petal kinds at size {}", PETAL_KINDS.len(), size);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  FLORIST BENCHMARK: size {} (canvas {})", size, canvas_size);
    println!("═══════════════════════════════════════════════════════════════");
    println!(
        "  {:<5} {:>7} {:>10} {:>12} {:>12} {:>12}",
        "kind", "points", "synth ms", "top_down ms", "diagonal ms", "center ms"
    );

    let start = Instant::now();
    for t in PETAL_KINDS {
        let shape = PetalShape::new(size);
        let t0 = Instant::now();
        let contour = synthesize(t, &shape);
        let synth = t0.elapsed();

        let mut timings = Vec::new();
        for fill_type in FillType::all() {
            let mut canvas = Canvas::new(canvas_size, Color::WHITE)?;
            canvas.fill_contour(&contour, BLANK);
            canvas.stroke_contour(&contour, BORDER);

            let t0 = Instant::now();
            let buckets = fill_type.buckets(&contour, canvas_size as i32, &mut rng);
            fill_gradient(&mut canvas, &buckets, &gradient, fill_type.policy());
            timings.push(t0.elapsed());
        }

        println!(
            "  {:<5} {:>7} {:>10.3} {:>12.2} {:>12.2} {:>12.2}",
            t.kind,
            contour.len(),
            ms(synth),
            ms(timings[0]),
            ms(timings[1]),
            ms(timings[2])
        );
    }
    let elapsed = start.elapsed();

    println!("───────────────────────────────────────────────────────────────");
    println!("  Total: {:.2}ms", ms(elapsed));
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
