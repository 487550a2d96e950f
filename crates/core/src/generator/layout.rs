//! Phase 1: breadth-first room expansion from the origin, plus loop closing.

use std::collections::VecDeque;

use crate::config::GeneratorConfig;
use crate::events::{GenerationEvent, GenerationReport};
use crate::graph::RoomGraph;
use crate::rng::DungeonRng;
use crate::types::{Direction, RoomId, RoomType};

const START_MAX_CONNECTIONS: usize = 4;
const ROOM_MIN_CONNECTIONS: usize = 1;
const ROOM_MAX_CONNECTIONS: usize = 3;

pub(super) fn expand_layout(
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
    report: &mut GenerationReport,
) -> RoomGraph {
    let target_rooms = rng.range_inclusive(config.min_rooms, config.max_rooms);
    report.target_rooms = target_rooms;
    report.record(GenerationEvent::TargetChosen { target_rooms });

    let mut graph = RoomGraph::with_start();
    let mut open = VecDeque::from([graph.start()]);
    let mut refill_round = 0_u32;

    loop {
        expand_from_queue(&mut graph, &mut open, target_rooms, config.branch_chance, rng);

        if graph.len() >= config.min_rooms {
            break;
        }
        if refill_round >= config.refill_rounds {
            record_exhaustion(graph.len(), config.min_rooms, report);
            break;
        }

        refill_round += 1;
        let reseeded: Vec<RoomId> = graph
            .room_ids()
            .into_iter()
            .filter(|&id| !graph.free_directions(id).is_empty())
            .collect();
        if reseeded.is_empty() {
            record_exhaustion(graph.len(), config.min_rooms, report);
            break;
        }
        log::debug!("refill round {refill_round}: {} rooms back in the queue", reseeded.len());
        report.record(GenerationEvent::RoomsRefilled {
            round: refill_round,
            reseeded: reseeded.len(),
        });
        open.extend(reseeded);
    }

    graph
}

fn record_exhaustion(placed: usize, requested: usize, report: &mut GenerationReport) {
    log::warn!("expansion stopped at {placed} rooms, below min_rooms {requested}");
    report.record(GenerationEvent::Exhausted { placed, requested });
}

fn expand_from_queue(
    graph: &mut RoomGraph,
    open: &mut VecDeque<RoomId>,
    target_rooms: usize,
    branch_chance: f64,
    rng: &mut DungeonRng,
) {
    while graph.len() < target_rooms {
        let Some(current) = open.pop_front() else {
            return;
        };

        let max_connections = if current == graph.start() {
            START_MAX_CONNECTIONS
        } else {
            rng.range_inclusive(ROOM_MIN_CONNECTIONS, ROOM_MAX_CONNECTIONS)
        };

        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        for direction in directions {
            if graph.connection_count(current) >= max_connections || graph.len() >= target_rooms {
                break;
            }
            let Some(position) = graph.position(current).map(|pos| pos.step(direction)) else {
                break;
            };
            if graph.is_occupied(position) {
                continue;
            }

            let room = graph.attach_room(current, direction, RoomType::Normal);
            open.push_back(room);
            // A second queue entry gives the new room another chance to branch.
            if rng.chance(branch_chance) {
                open.push_back(room);
            }
        }
    }
}

/// Links grid-adjacent rooms that expansion left apart. Each pair is seen once
/// by only looking East and North.
pub(super) fn close_loops(
    graph: &mut RoomGraph,
    loop_chance: f64,
    rng: &mut DungeonRng,
    report: &mut GenerationReport,
) {
    let mut count = 0_usize;
    for id in graph.room_ids() {
        for direction in [Direction::East, Direction::North] {
            let Some(room) = graph.room(id) else {
                continue;
            };
            if room.connection(direction).is_some()
                || !graph.is_occupied(room.position.step(direction))
            {
                continue;
            }
            if rng.chance(loop_chance) && graph.connect(id, direction) {
                count += 1;
            }
        }
    }
    if count > 0 {
        log::debug!("closed {count} loops between adjacent rooms");
        report.record(GenerationEvent::LoopsClosed { count });
    }
}
