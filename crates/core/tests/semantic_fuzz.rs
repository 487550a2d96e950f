use dungeon_core::{GeneratorConfig, RoomType, generate_dungeon};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_config(rng: &mut ChaCha8Rng) -> GeneratorConfig {
    let min_rooms = choose(rng, &[2_usize, 3, 4, 6, 10, 20, 35]);
    let extra_rooms = choose(rng, &[0_usize, 1, 5, 15]);
    GeneratorConfig {
        min_rooms,
        max_rooms: min_rooms + extra_rooms,
        branch_chance: choose(rng, &[0.0, 0.3, 0.8, 1.0]),
        normal_chance: choose(rng, &[0.0, 0.4, 0.7, 1.0]),
        elite_chance: choose(rng, &[0.0, 0.15, 0.5]),
        shop_chance: choose(rng, &[0.0, 0.1, 0.6]),
        treasure_chance: choose(rng, &[0.0, 0.05, 0.9]),
        secret_room_chance: choose(rng, &[0.0, 0.2, 1.0]),
        loop_chance: choose(rng, &[0.0, 0.1, 0.5, 1.0]),
        ..GeneratorConfig::default()
    }
}

fn run_fuzz_generation(map_seed: u64, config_seed: u64) -> Result<(), String> {
    let mut rng = ChaCha8Rng::seed_from_u64(config_seed);
    let config = random_config(&mut rng);

    let dungeon = generate_dungeon(&config, map_seed)
        .map_err(|err| format!("generation failed on map_seed {map_seed} with {config:?}: {err}"))?;
    let graph = dungeon.graph();

    graph
        .check_invariants()
        .map_err(|violation| format!("Invariant failed on map_seed {map_seed}: {violation}"))?;

    if graph.count_of(RoomType::Boss) != 1 {
        return Err(format!("Invariant failed: boss count on map_seed {map_seed}"));
    }
    if graph.len() > config.max_rooms {
        return Err(format!("Invariant failed: too many rooms on map_seed {map_seed}"));
    }
    if !dungeon.report().was_exhausted() && graph.layout_room_count() < config.min_rooms {
        return Err(format!("Invariant failed: silent shortfall on map_seed {map_seed}"));
    }
    if graph.count_of(RoomType::Secret) > 1 {
        return Err(format!("Invariant failed: several secret rooms on map_seed {map_seed}"));
    }
    if graph.rooms().any(|(_, room)| room.visited) {
        return Err(format!("Invariant failed: traversal flags left set on map_seed {map_seed}"));
    }

    Ok(())
}

#[test]
fn test_fuzz_layout_generation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(200));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, config_seed)| {
            run_fuzz_generation(map_seed, config_seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz generation should preserve invariants");
}
