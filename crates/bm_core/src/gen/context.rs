use crate::data::NamePool;
use crate::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// All mutable state for one generation run.
///
/// Holds the RNG, the remaining name pool, and the three id counters so
/// every factory stays reentrant; nothing in the crate touches
/// process-global state.
#[derive(Debug)]
pub struct GenContext {
    rng: ChaCha8Rng,
    names: NamePool,
    next_player_id: u32,
    next_team_id: u32,
    next_event_id: u32,
}

impl GenContext {
    /// Seeded context; the same seed and name pool reproduce a run exactly.
    pub fn new(names: NamePool, seed: u64) -> Self {
        Self::with_rng(names, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Context seeded from OS entropy, for one-off runs.
    pub fn from_entropy(names: NamePool) -> Self {
        Self::with_rng(names, ChaCha8Rng::from_entropy())
    }

    fn with_rng(names: NamePool, rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            names,
            next_player_id: 1,
            next_team_id: 1,
            next_event_id: 1,
        }
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Names still available for player generation.
    pub fn names_left(&self) -> usize {
        self.names.len()
    }

    /// Draw a name and remove it from the pool.
    pub(crate) fn draw_name(&mut self) -> Result<String> {
        self.names.draw(&mut self.rng)
    }

    pub(crate) fn next_player_id(&mut self) -> u32 {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    pub(crate) fn next_team_id(&mut self) -> u32 {
        let id = self.next_team_id;
        self.next_team_id += 1;
        id
    }

    pub(crate) fn next_event_id(&mut self) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;
        id
    }
}
