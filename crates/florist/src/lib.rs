//! # florist
//!
//! Procedural flower drawing: petal contour synthesis and contour-bounded
//! gradient fills on a raster canvas.
//!
//! The pipeline for one petal:
//! 1. [`template`]: pick a hand-authored key-point template
//! 2. [`petal`]: scale, smooth, distort and mirror it into a closed contour
//! 3. [`traversal`]: bucket the contour's interior in gradient order
//! 4. [`fill`]: paint the buckets over the blank placeholder on the [`canvas`]
//!
//! [`flower`] stamps petals around a center, level by level.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod canvas;
pub mod color;
pub mod error;
pub mod fill;
pub mod flower;
pub mod geometry;
pub mod inside;
pub mod palette;
pub mod petal;
pub mod spline;
pub mod template;
pub mod traversal;

// Re-export common types at crate root for convenience.
pub use canvas::Canvas;
pub use color::{split_colors, Color};
pub use error::{FlowerError, Result};
pub use fill::{fill_gradient, FillPolicy, Gradient};
pub use flower::{render, render_petal, Flower, FlowerConfig, LevelParam, LevelPlan};
pub use geometry::{Bucket, Contour, GridPoint};
pub use palette::{GradientColors, Palette};
pub use petal::{synthesize, PetalShape};
pub use template::{template, PetalTemplate, PETAL_KINDS};
pub use traversal::FillType;
