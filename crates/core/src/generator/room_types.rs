//! Phase 3: boss placement and quota-based room typing.

use crate::config::RoomWeights;
use crate::error::GenerationError;
use crate::events::{GenerationEvent, GenerationReport};
use crate::graph::RoomGraph;
use crate::rng::DungeonRng;
use crate::types::{RoomId, RoomType};

/// Dead end farthest from the origin; ties go to the larger `(y, x)`.
pub(super) fn farthest_dead_end(graph: &RoomGraph) -> Option<RoomId> {
    graph.dead_ends().into_iter().max_by_key(|&id| {
        let position = graph.position(id).unwrap_or_default();
        (position.distance_squared_from_origin(), position.y, position.x)
    })
}

pub(super) fn assign_room_types(
    graph: &mut RoomGraph,
    weights: &RoomWeights,
    rng: &mut DungeonRng,
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let Some(boss) = farthest_dead_end(graph) else {
        return Err(GenerationError::NoDeadEndAvailable { rooms: graph.len() });
    };
    graph.set_room_type(boss, RoomType::Boss);
    if let Some(position) = graph.position(boss) {
        report.record(GenerationEvent::BossPlaced { position });
    }

    if let Some(original_sum) = weights.renormalized_from {
        log::warn!(
            "room type proportions sum to {original_sum}, renormalized with normal share {:.3}",
            weights.normal
        );
        report.record(GenerationEvent::RenormalizedWeights { original_sum });
    }

    let mut pool: Vec<RoomId> = graph
        .room_ids()
        .into_iter()
        .filter(|&id| id != graph.start() && id != boss)
        .collect();
    let assignable = pool.len();
    rng.shuffle(&mut pool);

    let quotas = [
        (RoomType::Elite, weights.quota(assignable, weights.elite), Preference::Any),
        (RoomType::Shop, weights.quota(assignable, weights.shop), Preference::NotDeadEnd),
        (RoomType::Treasure, weights.quota(assignable, weights.treasure), Preference::DeadEnd),
    ];

    for (room_type, quota, preference) in quotas {
        order_by_preference(graph, &mut pool, preference);
        let taken = quota.min(pool.len());
        for id in pool.drain(..taken) {
            graph.set_room_type(id, room_type);
        }
        if taken < quota {
            log::debug!("{} quota short by {} rooms", room_type.label(), quota - taken);
            report.record(GenerationEvent::QuotaUnfilled { room_type, missing: quota - taken });
        }
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Preference {
    Any,
    DeadEnd,
    NotDeadEnd,
}

/// Stable partition, so rooms keep their shuffled order inside each group.
fn order_by_preference(graph: &RoomGraph, pool: &mut [RoomId], preference: Preference) {
    match preference {
        Preference::Any => {}
        Preference::DeadEnd => pool.sort_by_key(|&id| !graph.is_dead_end(id)),
        Preference::NotDeadEnd => pool.sort_by_key(|&id| graph.is_dead_end(id)),
    }
}
