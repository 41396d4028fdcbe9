//! Game state and its render snapshot
//!
//! `GameState` is the single authoritative, mutable snapshot of a play
//! session. The dispatcher is its only writer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Chaser, Runaway};
use super::event::GameOverKind;
use crate::consts::ACTORS_Y;
use crate::sprite::FrameSet;
use crate::tuning::Tuning;

/// Terminal classification of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }
}

impl From<GameOverKind> for Outcome {
    fn from(kind: GameOverKind) -> Self {
        match kind {
            GameOverKind::HappyEnd => Outcome::Won,
            GameOverKind::Busted => Outcome::Lost,
        }
    }
}

/// Complete state of a play session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Clock at the last processed tick (seconds)
    pub clock_now: f64,
    /// Clock when the session started (seconds)
    pub clock_at_start: f64,
    /// Current level (0-based)
    pub level_index: usize,
    level_count: usize,
    pub runaway: Runaway,
    pub chaser: Chaser,
    pub outcome: Outcome,
}

impl GameState {
    /// Fresh session: the runaway gets a head start, the chaser waits just off-screen
    pub fn new(
        start: f64,
        runaway_frames: FrameSet,
        chaser_frames: FrameSet,
        level_count: usize,
        tuning: &Tuning,
    ) -> Self {
        assert!(level_count > 0, "a session needs at least one level");

        let runaway = Runaway::new(Actor::new(
            Vec2::new(tuning.runaway_start_x, ACTORS_Y),
            runaway_frames,
        ));

        let chaser_x = -(chaser_frames.frame(0).width() as f32);
        let chaser = Chaser::new(
            Actor::new(Vec2::new(chaser_x, ACTORS_Y), chaser_frames),
            tuning.initial_chaser_velocity,
            start + tuning.chaser_frame_interval,
        );

        Self {
            clock_now: start,
            clock_at_start: start,
            level_index: 0,
            level_count,
            runaway,
            chaser,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    #[inline]
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 == self.level_count
    }

    /// Seconds since the session started
    pub fn elapsed(&self) -> f64 {
        self.clock_now - self.clock_at_start
    }

    /// Record the end of the session; the first recorded outcome wins.
    /// Returns whether this call changed the outcome.
    pub fn record_game_over(&mut self, kind: GameOverKind) -> bool {
        if self.outcome.is_over() {
            return false;
        }
        self.outcome = kind.into();
        log::info!(
            "Game over ({kind:?}) on level {} after {:.2}s",
            self.level_index + 1,
            self.elapsed()
        );
        true
    }

    /// Immutable copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clock_now: self.clock_now,
            elapsed: self.elapsed(),
            level_index: self.level_index,
            level_count: self.level_count,
            outcome: self.outcome,
            runaway: ActorSnapshot::new(&self.runaway.actor, self.runaway.velocity),
            chaser: ActorSnapshot::new(&self.chaser.actor, self.chaser.velocity),
        }
    }
}

/// Render-facing view of one actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub position: Vec2,
    pub frame_index: usize,
    pub velocity: f32,
    /// Velocity as shown on the in-game gauge
    pub speed_gauge: f32,
}

impl ActorSnapshot {
    fn new(actor: &Actor, velocity: f32) -> Self {
        Self {
            position: actor.position,
            frame_index: actor.frame_index(),
            velocity,
            speed_gauge: velocity / 10.0,
        }
    }
}

/// Per-frame copy of the game state handed to rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub clock_now: f64,
    pub elapsed: f64,
    pub level_index: usize,
    pub level_count: usize,
    pub outcome: Outcome,
    pub runaway: ActorSnapshot,
    pub chaser: ActorSnapshot,
}
