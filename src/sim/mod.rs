//! Deterministic simulation module
//!
//! All gameplay decisions live here. This module must stay pure:
//! - Clock supplied by the caller, never read from the system
//! - Events processed strictly in FIFO order
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod dispatch;
pub mod event;
pub mod geometry;
pub mod state;

pub use actor::{Actor, Chaser, Runaway};
pub use dispatch::{EventQueue, dispatch, drain, next_pending_button};
pub use event::{Button, Event, GameOverKind};
pub use geometry::{BoundingBox, intersect};
pub use state::{ActorSnapshot, GameState, Outcome, Snapshot};
