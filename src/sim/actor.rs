//! Actors: the runaway, the chaser and their shared geometry
//!
//! Both variants embed an [`Actor`] for position and animation and carry
//! their own motion parameters next to it.

use glam::{IVec2, Vec2};

use super::event::Button;
use super::geometry::BoundingBox;
use crate::sprite::{FrameSet, MaskedSprite};

/// A positioned, animated entity
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Top-left corner in scene coordinates
    pub position: Vec2,
    frames: FrameSet,
    frame_index: usize,
}

impl Actor {
    pub fn new(position: Vec2, frames: FrameSet) -> Self {
        Self {
            position,
            frames,
            frame_index: 0,
        }
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Cycle to the next animation frame
    pub fn advance_frame(&mut self) {
        self.frame_index = (self.frame_index + 1) % self.frames.len();
    }

    #[inline]
    pub fn current_frame(&self) -> &MaskedSprite {
        self.frames.frame(self.frame_index)
    }

    /// Box covered by the current frame
    pub fn bounding_box(&self) -> BoundingBox {
        let frame = self.current_frame();
        BoundingBox::new(
            self.position.x,
            self.position.y,
            self.position.x + frame.width() as f32,
            self.position.y + frame.height() as f32,
        )
    }

    /// Scene x of the leftmost opaque column of the current frame
    pub fn masked_left_edge(&self) -> f32 {
        self.position.x + self.current_frame().first_opaque_column() as f32
    }

    /// Pixel-accurate collision: prune by bounding boxes, then overlap the masks
    pub fn collides_with(&self, other: &Actor) -> bool {
        let bbox = self.bounding_box();
        let other_bbox = other.bounding_box();

        if !bbox.intersects(&other_bbox) {
            return false;
        }

        let offset = IVec2::new(
            (other_bbox.xmin - bbox.xmin).round_ties_even() as i32,
            (other_bbox.ymin - bbox.ymin).round_ties_even() as i32,
        );

        self.current_frame()
            .mask()
            .overlap(other.current_frame().mask(), offset)
            .is_some()
    }
}

/// The non-player actor chasing the runaway
#[derive(Debug, Clone, PartialEq)]
pub struct Chaser {
    pub actor: Actor,
    /// Horizontal velocity in pixels/s, never negative
    pub velocity: f32,
    /// Clock time of the next animation frame
    pub next_frame_swap_at: f64,
}

impl Chaser {
    pub fn new(actor: Actor, velocity: f32, next_frame_swap_at: f64) -> Self {
        debug_assert!(velocity >= 0.0);
        Self {
            actor,
            velocity,
            next_frame_swap_at,
        }
    }

    /// Move horizontally by `velocity * dt`
    pub fn advance(&mut self, dt: f32) {
        self.actor.position.x += self.velocity * dt;
    }

    /// Swap to the next frame once the swap time has come
    pub fn animate(&mut self, now: f64, interval: f64) {
        if now >= self.next_frame_swap_at {
            self.actor.advance_frame();
            self.next_frame_swap_at = now + interval;
        }
    }
}

/// The player-controlled fugitive
#[derive(Debug, Clone, PartialEq)]
pub struct Runaway {
    pub actor: Actor,
    /// Horizontal velocity in pixels/s, never negative
    pub velocity: f32,
    /// Clock time of the next animation frame, absent while standing still
    pub next_frame_swap_at: Option<f64>,
    /// Button that completes the next step gesture
    pub pending_button: Option<Button>,
}

impl Runaway {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            velocity: 0.0,
            next_frame_swap_at: None,
            pending_button: None,
        }
    }

    /// Add a step's worth of velocity, capped at `max`
    pub fn make_step(&mut self, increment: f32, max: f32) {
        self.velocity = (self.velocity + increment).min(max);
    }

    /// Decelerate, never below zero
    pub fn apply_friction(&mut self, friction: f32, dt: f32) {
        self.velocity = (self.velocity - friction * dt).max(0.0);
    }

    /// Move and animate while running; freeze the animation once stopped
    pub fn run(&mut self, now: f64, dt: f32, interval: f64) {
        if self.velocity > 0.0 {
            self.actor.position.x += self.velocity * dt;

            let due = self.next_frame_swap_at.is_none_or(|at| now >= at);
            if due {
                self.next_frame_swap_at = Some(now + interval);
                self.actor.advance_frame();
            }
        } else {
            self.next_frame_swap_at = None;
        }
    }
}
