//! Phase 2: make sure at least one dead end exists for the boss room.

use crate::error::GenerationError;
use crate::events::{GenerationEvent, GenerationReport};
use crate::graph::RoomGraph;
use crate::rng::DungeonRng;
use crate::types::{Direction, RoomId};

/// Cuts links until some non-start room is left with a single connection.
///
/// A cut is only kept when every room is still reachable from the start. While
/// no dead end exists every non-start room has two or more links, so a cut
/// never leaves a room with none and nothing is ever discarded.
pub(super) fn ensure_dead_end(
    graph: &mut RoomGraph,
    rng: &mut DungeonRng,
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let mut removed_edges = 0_usize;

    while graph.dead_ends().is_empty() {
        let mut candidates = removable_links(graph);
        rng.shuffle(&mut candidates);

        let cut = candidates.into_iter().any(|(from, direction)| try_cut(graph, from, direction));
        if !cut {
            graph.clear_visited();
            return Err(GenerationError::NoDeadEndAvailable { rooms: graph.len() });
        }
        removed_edges += 1;
    }

    graph.clear_visited();
    if removed_edges > 0 {
        log::debug!("cut {removed_edges} links to open a dead end");
        report.record(GenerationEvent::DeadEndRepaired { removed_edges });
    }
    Ok(())
}

/// Every link touching a room with more than one connection, listed once.
fn removable_links(graph: &RoomGraph) -> Vec<(RoomId, Direction)> {
    let mut links = Vec::new();
    for (id, room) in graph.rooms() {
        if room.connection_count() <= 1 {
            continue;
        }
        for (direction, other) in room.neighbours() {
            let listed_from_other_side = graph.connection_count(other) > 1;
            let canonical_side = matches!(direction, Direction::East | Direction::North);
            if canonical_side || !listed_from_other_side {
                links.push((id, direction));
            }
        }
    }
    links
}

/// Removes one link and keeps the cut if the layout stays whole; otherwise the
/// link is restored and `false` returned.
fn try_cut(graph: &mut RoomGraph, from: RoomId, direction: Direction) -> bool {
    if graph.disconnect(from, direction).is_none() {
        return false;
    }
    if graph.mark_reachable_from_start() != graph.len() {
        graph.connect(from, direction);
        return false;
    }
    true
}
