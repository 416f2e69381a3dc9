//! Seedable randomness for the per-round team draw.
//!
//! Every round starts with one draw deciding which team plays `X`.
//! Seeding the generator makes a whole match reproducible.

use crate::Team;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Deterministic RNG used for team-to-mark assignment.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Creates an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the team that plays `X` for the next round.
    ///
    /// A uniform value in `[0, 1)` above one half gives `X` to the home team.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn draw_x_team(&mut self) -> Team {
        let roll: f64 = self.inner.gen_range(0.0..1.0);
        let team = if roll > 0.5 { Team::Home } else { Team::Visitor };
        debug!(roll, %team, "Drew team for X");
        team
    }
}

impl Default for RoundRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
