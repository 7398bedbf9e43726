//! florist - procedural flower generator
//!
//! Usage:
//!   florist draw [-o flower.png] [--config flower.yaml] [--seed N]
//!   florist petal <kind> [--json | -o petal.png]
//!   florist kinds | palettes | fills
//!   florist benchmark [--size N]
//!   florist config --example

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::{DrawArgs, LoggingConfig, PetalArgs};

#[derive(Parser)]
#[command(name = "florist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Procedural flower generator", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a flower to PNG
    Draw(DrawArgs),

    /// Synthesize a single petal
    Petal(PetalArgs),

    /// List petal kinds
    Kinds,

    /// List color palettes
    Palettes,

    /// List gradient fill types
    Fills,

    /// Time contour synthesis and gradient fills
    Benchmark {
        /// Petal target size
        #[arg(long, default_value_t = 300)]
        size: i32,

        /// Seed for the center traversal
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Print configuration templates
    Config {
        /// Print an annotated example config
        #[arg(long)]
        example: bool,

        /// Print the default config as plain YAML
        #[arg(long, conflicts_with = "example")]
        defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(LoggingConfig::from_verbosity(cli.verbose));

    match cli.command {
        Commands::Draw(args) => cli::cmd_draw(&args),
        Commands::Petal(args) => cli::cmd_petal(&args),
        Commands::Kinds => {
            cli::cmd_kinds();
            Ok(())
        }
        Commands::Palettes => {
            cli::cmd_palettes();
            Ok(())
        }
        Commands::Fills => {
            cli::cmd_fills();
            Ok(())
        }
        Commands::Benchmark { size, seed } => cli::cmd_benchmark(size, seed),
        Commands::Config { example, defaults } => cli::cmd_config(example, defaults),
    }
}
