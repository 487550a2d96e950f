//! Flat, serializable export of a finished layout.

use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

use crate::graph::RoomGraph;
use crate::types::{DoorMask, GridPos, RoomId, RoomType};

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub index: usize,
    pub position: GridPos,
    pub room_type: RoomType,
    pub doors: DoorMask,
    pub map_position: (f32, f32),
    /// Indices of linked rooms, in North/East/South/West order.
    pub links: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub format_version: u32,
    pub room_distance: f32,
    pub start: usize,
    pub boss: Option<usize>,
    pub rooms: Vec<RoomSnapshot>,
}

impl LayoutSnapshot {
    /// Rooms are numbered densely in arena order.
    pub fn capture(graph: &RoomGraph, room_distance: f32) -> Self {
        let mut indices: SecondaryMap<RoomId, usize> = SecondaryMap::with_capacity(graph.len());
        for (index, (id, _)) in graph.rooms().enumerate() {
            indices.insert(id, index);
        }

        let rooms = graph
            .rooms()
            .map(|(id, room)| RoomSnapshot {
                index: indices[id],
                position: room.position,
                room_type: room.room_type,
                doors: room.doors(),
                map_position: graph.map_position(id, room_distance).unwrap_or_default(),
                links: room
                    .neighbours()
                    .filter_map(|(_, other)| indices.get(other).copied())
                    .collect(),
            })
            .collect();

        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            room_distance,
            start: indices[graph.start()],
            boss: graph.boss().and_then(|boss| indices.get(boss).copied()),
            rooms,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn count_of(&self, room_type: RoomType) -> usize {
        self.rooms.iter().filter(|room| room.room_type == room_type).count()
    }
}
