//! Dance Runaway - outrun the troll by dancing the mat
//!
//! Core modules:
//! - `sim`: Deterministic simulation (event queue, actors, collisions, game state)
//! - `sprite`: Rasters, opacity masks and run-cycle frame sets
//! - `assets`: Media bundle handed over at session start
//! - `session`: Frame driver around the simulation
//! - `input`: Dance mat and keyboard mapping
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod autopilot;
pub mod error;
pub mod input;
pub mod session;
pub mod sim;
pub mod sprite;
pub mod tuning;

pub use assets::{AssetProvider, Cast, Media, ProceduralAssets};
pub use error::{AssetError, SpriteError, TuningError};
pub use session::{Scene, Session};
pub use tuning::Tuning;

/// Scene and timing constants shared with the renderer
pub mod consts {
    /// Logical scene resolution; the renderer scales it to fit the display
    pub const SCENE_WIDTH: u32 = 640;
    pub const SCENE_HEIGHT: u32 = 480;

    /// Both actors run along this line (top edge of their sprites)
    pub const ACTORS_Y: f32 = 330.0;

    /// Frames per second of the frame driver
    pub const FRAME_RATE: u32 = 30;

    /// A pixel is opaque if its alpha exceeds this value
    pub const ALPHA_THRESHOLD: u8 = 127;
}
