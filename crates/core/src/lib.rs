//! Procedural dungeon layout generation.
//!
//! A layout is a connected graph of typed rooms on an integer grid: one start
//! room at the origin, one boss room at a dead end, and every room reachable
//! from the start. [`generate_dungeon`] is the entry point.

pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod graph;
pub mod model;
pub mod publish;
pub mod rng;
pub mod snapshot;
pub mod types;

mod config_file;

pub use config::{GeneratorConfig, RoomWeights};
pub use error::{ConfigError, GenerationError, InvariantViolation};
pub use events::{GenerationEvent, GenerationReport};
pub use generator::{DungeonGenerator, generate_with_retries};
pub use graph::{RoomGraph, RoomNode};
pub use model::GeneratedDungeon;
pub use publish::{LayoutListener, LayoutPublisher};
pub use snapshot::{LayoutSnapshot, RoomSnapshot};
pub use types::*;

pub fn generate_dungeon(
    config: &GeneratorConfig,
    seed: u64,
) -> Result<GeneratedDungeon, GenerationError> {
    DungeonGenerator::new(config.clone(), seed).generate()
}

#[cfg(test)]
mod tests {
    use super::{DungeonGenerator, GeneratorConfig};

    #[test]
    fn generate_dungeon_matches_generator_output() {
        let config = GeneratorConfig::default();
        let seed = 123_u64;

        let from_helper = super::generate_dungeon(&config, seed).expect("generates");
        let from_generator = DungeonGenerator::new(config, seed).generate().expect("generates");

        assert_eq!(from_helper.fingerprint(), from_generator.fingerprint());
    }
}
