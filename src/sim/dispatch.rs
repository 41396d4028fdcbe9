//! Event queue and dispatcher
//!
//! The dispatcher pops exactly one event per call, strictly in FIFO order,
//! and mutates the game state. Handlers may append follow-up events to the
//! back of the queue (a button press turns into a step). Once the session
//! is over every event is consumed without effect.

use std::collections::VecDeque;

use glam::Vec2;

use super::event::{Button, Event, GameOverKind};
use super::state::GameState;
use crate::consts::{ACTORS_Y, SCENE_WIDTH};
use crate::tuning::Tuning;

/// Pending events, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the back
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Remove from the front
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

/// Process the event at the front of the queue.
///
/// `now` is the simulation clock for this drain cycle. Returns the event that
/// was consumed, or `None` if the queue was empty.
pub fn dispatch(
    state: &mut GameState,
    queue: &mut EventQueue,
    now: f64,
    tuning: &Tuning,
) -> Option<Event> {
    let event = queue.pop()?;

    if state.outcome.is_over() {
        // Frozen at game over: consume without effect
        return Some(event);
    }

    match event {
        Event::Tick => on_tick(state, now, tuning),
        Event::ButtonDown(button) => on_button_down(state, queue, button),
        Event::MakeStep => on_make_step(state, tuning),
        Event::GameOver(kind) => {
            state.record_game_over(kind);
        }
    }

    Some(event)
}

/// Dispatch until the queue is empty, including events appended on the way.
/// Returns the number of dispatched events.
pub fn drain(state: &mut GameState, queue: &mut EventQueue, now: f64, tuning: &Tuning) -> usize {
    let mut dispatched = 0;
    while dispatch(state, queue, now, tuning).is_some() {
        dispatched += 1;
    }
    dispatched
}

/// Alternation rule for step gestures.
///
/// Returns the new pending button if pressing `pressed` while `pending` is
/// expected completes a step, `None` if the press is ignored.
pub fn next_pending_button(pending: Option<Button>, pressed: Button) -> Option<Button> {
    match (pending, pressed) {
        (None, Button::Left) => Some(Button::Right),
        (None, Button::Right) => Some(Button::Left),
        (Some(Button::Right), Button::Right) => Some(Button::Left),
        (Some(Button::Left), Button::Left) => Some(Button::Right),
        _ => None,
    }
}

fn on_tick(state: &mut GameState, now: f64, tuning: &Tuning) {
    let mut dt = now - state.clock_now;
    if dt < 0.0 {
        log::warn!("Clock went back by {:.4}s, treating as no time passed", -dt);
        dt = 0.0;
    }
    state.clock_now = state.clock_now.max(now);
    let dt = dt as f32;

    // Chaser
    state.chaser.advance(dt);
    state.chaser.animate(now, tuning.chaser_frame_interval);

    if state.chaser.actor.collides_with(&state.runaway.actor) {
        state.record_game_over(GameOverKind::Busted);
        return;
    }

    // Did the runaway leave the scene?
    if state.runaway.actor.masked_left_edge() >= SCENE_WIDTH as f32 {
        if state.is_last_level() {
            state.record_game_over(GameOverKind::HappyEnd);
            return;
        }
        advance_level(state, tuning);
    }

    // Runaway
    state.runaway.apply_friction(tuning.runaway_friction, dt);
    state.runaway.run(now, dt, tuning.runaway_frame_interval);

    log::trace!(
        "t={:.3} runaway x={:.1} v={:.1} chaser x={:.1} v={:.1}",
        now,
        state.runaway.actor.position.x,
        state.runaway.velocity,
        state.chaser.actor.position.x,
        state.chaser.velocity
    );
}

fn advance_level(state: &mut GameState, tuning: &Tuning) {
    state.level_index += 1;

    state.chaser.velocity =
        (state.chaser.velocity * tuning.chaser_level_speedup).min(tuning.max_chaser_velocity);

    // The runaway starts the next level at the left edge ...
    state.runaway.actor.position = Vec2::new(0.0, ACTORS_Y);

    // ... and the chaser further behind than in the first level, where the
    // head start was only there to let novices find their feet.
    let chaser_width = state.chaser.actor.current_frame().width() as f32;
    state.chaser.actor.position = Vec2::new(
        -chaser_width - tuning.chaser_reentry_lag * state.chaser.velocity,
        ACTORS_Y,
    );

    log::info!(
        "Advanced to level {}/{} (chaser velocity {:.1})",
        state.level_index + 1,
        state.level_count(),
        state.chaser.velocity
    );
}

fn on_button_down(state: &mut GameState, queue: &mut EventQueue, button: Button) {
    if let Some(pending) = next_pending_button(state.runaway.pending_button, button) {
        state.runaway.pending_button = Some(pending);
        queue.push(Event::MakeStep);
    }
}

fn on_make_step(state: &mut GameState, tuning: &Tuning) {
    state
        .runaway
        .make_step(tuning.runaway_step_velocity, tuning.runaway_max_velocity);
    log::debug!("Step! Runaway velocity {:.1}", state.runaway.velocity);
}
