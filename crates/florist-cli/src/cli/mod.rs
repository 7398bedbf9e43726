//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `draw` - Render a flower to PNG
//! - `petal` - Synthesize a single petal (JSON contour or PNG)
//! - `kinds` / `palettes` / `fills` - List registries
//! - `benchmark` - Time synthesis and fills per petal kind
//! - `config` - Print an example configuration

pub mod common;
pub mod config;
pub mod draw;
pub mod petal;
pub mod list;
pub mod benchmark;
pub mod logging;

pub use config::cmd_config;
pub use draw::{cmd_draw, DrawArgs};
pub use petal::{cmd_petal, PetalArgs};
pub use list::{cmd_fills, cmd_kinds, cmd_palettes};
pub use benchmark::cmd_benchmark;
pub use logging::{init_logging, LoggingConfig};
