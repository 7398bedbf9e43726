//! Error type for florist.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` boilerplate from the `#[error(...)]`
//! attributes, and `#[from]` lets `?` convert foreign errors for us.

/// Everything that can go wrong while building a flower.
///
/// Degenerate geometry is NOT an error: a bad template/scale combination
/// produces an odd-looking or empty petal, never a failed run.
#[derive(Debug, thiserror::Error)]
pub enum FlowerError {
    #[error("unknown petal kind {0} (known kinds: 1-{max})", max = crate::template::PETAL_KINDS.len())]
    UnknownPetalKind(u8),

    #[error("unknown palette '{0}' (use hot, cold, pink or random)")]
    UnknownPalette(String),

    #[error("unknown fill type '{0}' (use top_down, diagonal or center)")]
    UnknownFillType(String),

    #[error("invalid canvas size {0}x{0}")]
    InvalidCanvasSize(u32),

    #[error("invalid flower config: {0}")]
    Config(String),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlowerError>;
