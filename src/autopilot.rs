//! Demo player that dances the mat on its own
//!
//! Alternates feet at a jittered cadence and now and then stumbles onto the
//! same foot twice. Seeded, so a run can be replayed exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::Input;
use crate::sim::Button;

/// Seeded autopilot producing button presses over time
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    next_press_at: f64,
    next_foot: Button,
    /// Mean seconds between presses
    pub cadence: f64,
    /// Maximum deviation from the cadence (seconds)
    pub jitter: f64,
    /// Probability of pressing the same foot again
    pub stumble_rate: f64,
}

impl Autopilot {
    pub fn new(seed: u64, start: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_press_at: start,
            next_foot: Button::Left,
            cadence: 0.15,
            jitter: 0.05,
            stumble_rate: 0.1,
        }
    }

    /// Presses that fell due up to and including `now`, oldest first
    pub fn poll(&mut self, now: f64) -> Vec<Input> {
        let mut presses = Vec::new();
        while self.next_press_at <= now {
            presses.push(Input::ButtonDown(self.next_foot));

            let stumble = self.rng.random_bool(self.stumble_rate.clamp(0.0, 1.0));
            if !stumble {
                self.next_foot = self.next_foot.other_foot().unwrap_or(Button::Left);
            }

            let jitter = if self.jitter > 0.0 {
                self.rng.random_range(-self.jitter..=self.jitter)
            } else {
                0.0
            };
            // Never schedule two presses at the same instant
            self.next_press_at += (self.cadence + jitter).max(1e-3);
        }
        presses
    }
}
