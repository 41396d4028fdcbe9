//! Frame driver
//!
//! Each frame: queue the inputs received since the last frame, queue a tick,
//! drain the queue, then tell the renderer what to show. Quit and restart
//! requests are handled here, outside the simulation; the quit flag
//! outlives individual play sessions.

use crate::assets::Cast;
use crate::input::Input;
use crate::sim::{Event, EventQueue, GameOverKind, GameState, Outcome, drain};
use crate::tuning::Tuning;

/// What the renderer should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Show the "quitting" screen, then leave the frame loop
    Quit,
    /// The session just ended; show the game-over screen once
    GameOver(GameOverKind),
    /// The game-over screen is already up and nothing changed
    Unchanged,
    /// Draw the running game
    Game,
}

/// A play session plus the state that survives restarts
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    queue: EventQueue,
    tuning: Tuning,
    cast: Cast,
    level_count: usize,
    received_quit: bool,
}

impl Session {
    pub fn new(start: f64, cast: Cast, level_count: usize, tuning: Tuning) -> Self {
        let state = GameState::new(
            start,
            cast.runaway.clone(),
            cast.chaser.clone(),
            level_count,
            &tuning,
        );
        log::info!("Session started with {level_count} levels");
        Self {
            state,
            queue: EventQueue::new(),
            tuning,
            cast,
            level_count,
            received_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn received_quit(&self) -> bool {
        self.received_quit
    }

    /// Queue an event to be processed with the next frame
    pub fn enqueue(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Start over from a fresh state, optionally with a different cast.
    /// Events still waiting in the queue belong to the old session and are dropped.
    pub fn restart(&mut self, now: f64, cast: Option<Cast>) {
        if let Some(cast) = cast {
            self.cast = cast;
        }
        self.queue.clear();
        self.state = GameState::new(
            now,
            self.cast.runaway.clone(),
            self.cast.chaser.clone(),
            self.level_count,
            &self.tuning,
        );
        log::info!("Session restarted at t={now:.2}");
    }

    /// Run one frame at clock `now` with the inputs received since the last frame
    pub fn frame(&mut self, now: f64, inputs: impl IntoIterator<Item = Input>) -> Scene {
        let was_over = self.state.outcome.is_over();

        for input in inputs {
            match input {
                Input::ButtonDown(button) => self.queue.push(Event::ButtonDown(button)),
                Input::Quit => {
                    if !self.received_quit {
                        log::info!("Quit requested");
                    }
                    self.received_quit = true;
                }
                Input::Restart => self.restart(now, None),
            }
        }

        self.queue.push(Event::Tick);
        drain(&mut self.state, &mut self.queue, now, &self.tuning);

        if self.received_quit {
            return Scene::Quit;
        }

        match (was_over, self.state.outcome) {
            (_, Outcome::InProgress) => Scene::Game,
            (true, _) => Scene::Unchanged,
            (false, Outcome::Won) => Scene::GameOver(GameOverKind::HappyEnd),
            (false, Outcome::Lost) => Scene::GameOver(GameOverKind::Busted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Button;
    use crate::sprite::{FrameSet, MaskedSprite, Raster};

    fn cast() -> Cast {
        let frames = |width| {
            let sprite = MaskedSprite::new(Raster::filled(width, 40, [255; 4])).unwrap();
            FrameSet::new(vec![sprite.clone(), sprite]).unwrap()
        };
        Cast {
            runaway: frames(24),
            chaser: frames(32),
        }
    }

    fn session() -> Session {
        Session::new(0.0, cast(), 2, Tuning::default())
    }

    #[test]
    fn test_steps_land_behind_the_frame_tick() {
        let mut session = session();
        let scene = session.frame(
            0.1,
            [Input::ButtonDown(Button::Left), Input::ButtonDown(Button::Right)],
        );
        assert_eq!(scene, Scene::Game);
        // The tick ran before both steps, so nothing moved yet
        assert_eq!(session.state().runaway.velocity, 12.0);
        assert_eq!(session.state().runaway.actor.position.x, 51.0);
        assert_eq!(session.state().clock_now, 0.1);

        session.frame(0.2, []);
        assert!(session.state().runaway.actor.position.x > 51.0);
    }

    #[test]
    fn test_game_over_scene_shown_once() {
        let mut session = session();
        session.enqueue(Event::GameOver(GameOverKind::HappyEnd));
        assert_eq!(session.frame(0.1, []), Scene::GameOver(GameOverKind::HappyEnd));
        assert_eq!(session.frame(0.2, []), Scene::Unchanged);
        assert_eq!(session.state().outcome, Outcome::Won);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = session();
        session.enqueue(Event::GameOver(GameOverKind::Busted));
        session.frame(0.1, []);

        let scene = session.frame(5.0, [Input::Restart]);
        assert_eq!(scene, Scene::Game);
        let state = session.state();
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.clock_at_start, 5.0);
        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_restart_drops_queued_events_and_can_swap_cast() {
        let mut session = session();
        session.enqueue(Event::MakeStep);
        let swapped = Cast {
            runaway: session.cast().chaser.clone(),
            chaser: session.cast().runaway.clone(),
        };
        session.restart(1.0, Some(swapped.clone()));
        session.frame(1.0, []);
        assert_eq!(session.state().runaway.velocity, 0.0);
        assert_eq!(session.cast(), &swapped);
        assert_eq!(session.state().chaser.actor.position.x, -24.0);
    }

    #[test]
    fn test_quit_survives_restart() {
        let mut session = session();
        assert_eq!(session.frame(0.1, [Input::Quit]), Scene::Quit);
        assert_eq!(session.frame(0.2, [Input::Restart]), Scene::Quit);
        assert!(session.received_quit());
    }
}
