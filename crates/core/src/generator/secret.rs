//! Grafting the optional secret room onto a finished layout.

use crate::events::{GenerationEvent, GenerationReport};
use crate::graph::RoomGraph;
use crate::rng::DungeonRng;
use crate::types::{RoomId, RoomType};

/// Layouts this small never get a secret room.
const MIN_ROOMS_FOR_SECRET: usize = 4;

/// Attaches one Secret leaf to a random Normal or Elite host. The secret room
/// counts toward `max_rooms`, so a layout already at the cap is left alone.
pub(super) fn graft_secret_room(
    graph: &mut RoomGraph,
    secret_room_chance: f64,
    max_rooms: usize,
    rng: &mut DungeonRng,
    report: &mut GenerationReport,
) -> Option<RoomId> {
    if graph.len() < MIN_ROOMS_FOR_SECRET || !rng.chance(secret_room_chance) {
        return None;
    }
    if graph.len() >= max_rooms {
        log::debug!("secret room skipped: layout already holds {} rooms", graph.len());
        report.record(GenerationEvent::SecretSkipped);
        return None;
    }

    let hosts: Vec<RoomId> = graph
        .rooms()
        .filter(|(_, room)| matches!(room.room_type, RoomType::Normal | RoomType::Elite))
        .map(|(id, _)| id)
        .filter(|&id| !graph.free_directions(id).is_empty())
        .collect();
    let Some(&host) = rng.pick(&hosts) else {
        log::debug!("secret room skipped: no normal or elite room has a free side");
        report.record(GenerationEvent::SecretSkipped);
        return None;
    };

    let free_directions = graph.free_directions(host);
    let &direction = rng.pick(&free_directions)?;
    let secret = graph.attach_room(host, direction, RoomType::Secret);

    if let (Some(host_position), Some(position)) = (graph.position(host), graph.position(secret)) {
        report.record(GenerationEvent::SecretGrafted { host: host_position, position });
    }
    Some(secret)
}
