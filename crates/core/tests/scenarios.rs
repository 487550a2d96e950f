use std::collections::BTreeSet;

use dungeon_core::{
    Direction, GenerationError, GeneratorConfig, RoomType, generate_dungeon,
    generate_with_retries,
};

fn typical_config() -> GeneratorConfig {
    GeneratorConfig {
        min_rooms: 10,
        max_rooms: 15,
        branch_chance: 0.3,
        normal_chance: 0.7,
        elite_chance: 0.15,
        shop_chance: 0.1,
        treasure_chance: 0.05,
        secret_room_chance: 0.2,
        ..GeneratorConfig::default()
    }
}

#[test]
fn minimal_dungeon_has_no_boss_candidate() {
    let config = GeneratorConfig { min_rooms: 1, max_rooms: 1, ..GeneratorConfig::default() };
    let err = generate_dungeon(&config, 3).expect_err("a lone start room has no dead end");
    assert_eq!(err, GenerationError::NoDeadEndAvailable { rooms: 1 });
}

#[test]
fn typical_runs_keep_invariants_and_proportions() {
    let config = typical_config();
    let mut counts = [0_usize; 7];
    let mut assignable_rooms = 0_usize;

    for seed in 0..1_000_u64 {
        let dungeon = generate_dungeon(&config, seed).expect("typical config always generates");
        let graph = dungeon.graph();

        assert_eq!(graph.check_invariants(), Ok(()), "seed={seed}");
        assert_eq!(graph.count_of(RoomType::Start), 1, "seed={seed}");
        assert_eq!(graph.count_of(RoomType::Boss), 1, "seed={seed}");
        let boss = dungeon.boss().expect("boss placed");
        assert_eq!(graph.connection_count(boss), 1, "seed={seed} boss must be a dead end");

        assert!(graph.len() <= config.max_rooms, "seed={seed} has {} rooms", graph.len());
        let layout_rooms = graph.layout_room_count();
        if !dungeon.report().was_exhausted() {
            assert!(layout_rooms >= config.min_rooms, "seed={seed} placed {layout_rooms} rooms");
        }

        for room_type in RoomType::ALL {
            counts[room_type.code() as usize] += graph.count_of(room_type);
        }
        assignable_rooms += layout_rooms - 2;
    }

    let share = |room_type: RoomType| {
        counts[room_type.code() as usize] as f64 / assignable_rooms as f64
    };
    for (room_type, expected, tolerance) in [
        (RoomType::Elite, 0.15, 0.05),
        (RoomType::Shop, 0.10, 0.05),
        (RoomType::Treasure, 0.05, 0.02),
        (RoomType::Normal, 0.70, 0.08),
    ] {
        let actual = share(room_type);
        assert!(
            (actual - expected).abs() < tolerance,
            "{} share {actual} is too far from {expected}",
            room_type.label()
        );
    }
    let secret_rooms = counts[RoomType::Secret.code() as usize];
    assert!(
        secret_rooms > 100,
        "secret rooms should appear in about a sixth of runs, got {secret_rooms}"
    );
}

#[test]
fn secret_room_is_one_extra_leaf_on_a_normal_or_elite_host() {
    let config = GeneratorConfig { secret_room_chance: 1.0, ..typical_config() };
    for seed in 0..200_u64 {
        let dungeon = generate_dungeon(&config, seed).expect("generates");
        let graph = dungeon.graph();
        assert!(graph.layout_room_count() >= 4);
        assert!(graph.len() <= config.max_rooms, "seed={seed} has {} rooms", graph.len());

        let secrets: Vec<_> = graph
            .rooms()
            .filter(|(_, room)| room.room_type == RoomType::Secret)
            .collect();
        if graph.layout_room_count() == config.max_rooms {
            assert!(secrets.is_empty(), "seed={seed} a full layout has no room for a secret");
            continue;
        }
        assert_eq!(secrets.len(), 1, "seed={seed}");

        let (secret_id, secret) = secrets[0];
        assert_eq!(secret.connection_count(), 1, "seed={seed} secret room must be a leaf");
        let (direction, host) = secret.neighbours().next().expect("linked to a host");
        let host_room = graph.room(host).expect("host exists");
        assert!(
            matches!(host_room.room_type, RoomType::Normal | RoomType::Elite),
            "seed={seed} host was {:?}",
            host_room.room_type
        );
        assert_eq!(host_room.connection(direction.opposite()), Some(secret_id));
        assert_eq!(graph.check_invariants(), Ok(()), "seed={seed}");
    }
}

#[test]
fn doors_match_connections_for_every_room() {
    let dungeon = generate_dungeon(&typical_config(), 4_242).expect("generates");
    for (id, room) in dungeon.graph().rooms() {
        let doors = dungeon.doors(id).expect("every room has door flags");
        for direction in Direction::ALL {
            assert_eq!(doors.has(direction), room.connection(direction).is_some());
        }
    }
}

#[test]
fn map_positions_are_unique_and_scaled() {
    let config = GeneratorConfig { room_distance: 32.0, ..typical_config() };
    let dungeon = generate_dungeon(&config, 8).expect("generates");
    let mut seen = BTreeSet::new();
    for (id, room) in dungeon.graph().rooms() {
        let (x, y) = dungeon.map_position(id).expect("room exists");
        assert_eq!((x, y), (room.position.x as f32 * 32.0, room.position.y as f32 * 32.0));
        assert!(seen.insert((x.to_bits(), y.to_bits())));
    }
}

#[test]
fn retry_helper_generates_typical_layouts() {
    let dungeon = generate_with_retries(&typical_config(), 55, 5).expect("generates");
    assert_eq!(dungeon.graph().check_invariants(), Ok(()));
}
