//! Registry listings: petal kinds, palettes and fill types.

use florist::{FillPolicy, FillType, Palette, PETAL_KINDS};

/// Execute the kinds command.
pub fn cmd_kinds() {
    println!("Petal kinds:");
    for t in PETAL_KINDS {
        let key_points: usize = t.groups.iter().map(|g| g.points.len()).sum();
        let smoothable = t.groups.iter().filter(|g| g.smoothable).count();
        println!(
            "  {}  {} groups ({} smoothable), {} key points",
            t.kind,
            t.groups.len(),
            smoothable,
            key_points
        );
    }
}

/// Execute the palettes command.
pub fn cmd_palettes() {
    println!("Palettes:");
    for p in Palette::all() {
        println!("  {:<8} {}", p.name(), p.description());
    }
}

/// Execute the fills command.
pub fn cmd_fills() {
    println!("Fill types:");
    for ft in FillType::all() {
        let detail = match ft {
            FillType::TopDown => "one color per row",
            FillType::Diagonal => "one color per anti-diagonal",
            FillType::Center => "a gradient along every ray from a random center",
        };
        let policy = match ft.policy() {
            FillPolicy::Uniform => "uniform",
            FillPolicy::PerBucket => "per-bucket",
        };
        println!("  {:<10} {:<11} {}", ft.name(), policy, detail);
    }
}
