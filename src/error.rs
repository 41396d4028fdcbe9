//! Error types for asset processing and configuration
//!
//! The simulation core itself has no recoverable errors; everything here is
//! raised before a session starts.

use std::io;

/// Failures while turning rasters into masked sprites
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    #[error("sprite of {width}x{height} pixels has no opaque pixel")]
    Invisible { width: u32, height: u32 },

    #[error("frame set must contain at least one frame")]
    EmptyFrameSet,

    #[error("raster buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Failures while assembling the media of a session
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("no levels were supplied")]
    NoLevels,

    #[error("failed to load {what}: {source}")]
    Sprite {
        what: String,
        #[source]
        source: SpriteError,
    },

    #[error("layer {layer} of level {level} is {width}x{height}, expected {expected_width}x{expected_height}")]
    LayerSize {
        level: usize,
        layer: &'static str,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

/// Failures while loading balance tuning
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed tuning file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}
