//! Layout generation pipeline: expansion, dead-end repair, typing, and grafting.

mod dead_ends;
mod layout;
mod room_types;
mod secret;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::events::GenerationReport;
use crate::model::GeneratedDungeon;
use crate::rng::{DungeonRng, mix_seed_stream};

use dead_ends::ensure_dead_end;
use layout::{close_loops, expand_layout};
use room_types::assign_room_types;
use secret::graft_secret_room;

pub struct DungeonGenerator {
    config: GeneratorConfig,
    seed: u64,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs one full pass. Every random draw comes from a generator seeded
    /// with `self.seed`, so the same inputs always give the same dungeon.
    pub fn generate(&self) -> Result<GeneratedDungeon, GenerationError> {
        self.config.validate()?;

        let mut rng = DungeonRng::seed_from_u64(self.seed);
        let mut report = GenerationReport::new(self.seed);

        let mut graph = expand_layout(&self.config, &mut rng, &mut report);
        close_loops(&mut graph, self.config.loop_chance, &mut rng, &mut report);
        ensure_dead_end(&mut graph, &mut rng, &mut report)?;

        let weights = self.config.room_weights();
        assign_room_types(&mut graph, &weights, &mut rng, &mut report)?;
        graft_secret_room(
            &mut graph,
            self.config.secret_room_chance,
            self.config.max_rooms,
            &mut rng,
            &mut report,
        );

        Ok(GeneratedDungeon::new(graph, report, self.config.room_distance))
    }
}

/// Retries with derived seeds until a pass succeeds. Attempt 0 uses `seed`
/// itself. Configuration errors are returned immediately.
pub fn generate_with_retries(
    config: &GeneratorConfig,
    seed: u64,
    attempts: u32,
) -> Result<GeneratedDungeon, GenerationError> {
    config.validate()?;
    let mut last_error = GenerationError::NoDeadEndAvailable { rooms: 0 };
    for attempt in 0..attempts.max(1) {
        let attempt_seed =
            if attempt == 0 { seed } else { mix_seed_stream(seed, u64::from(attempt)) };
        match DungeonGenerator::new(config.clone(), attempt_seed).generate() {
            Ok(dungeon) => return Ok(dungeon),
            Err(error) => last_error = error,
        }
    }
    Err(last_error)
}
