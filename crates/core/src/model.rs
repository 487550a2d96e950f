//! The finished dungeon handed to collaborators.

use slotmap::SecondaryMap;

use crate::events::GenerationReport;
use crate::graph::RoomGraph;
use crate::snapshot::LayoutSnapshot;
use crate::types::{DoorMask, GridPos, RoomId, RoomType};

/// A layout that passed every phase. The graph is only reachable through
/// shared references, so collaborators cannot reshape it.
#[derive(Clone, Debug)]
pub struct GeneratedDungeon {
    graph: RoomGraph,
    doors: SecondaryMap<RoomId, DoorMask>,
    report: GenerationReport,
    room_distance: f32,
}

impl GeneratedDungeon {
    pub(crate) fn new(graph: RoomGraph, report: GenerationReport, room_distance: f32) -> Self {
        let doors = finalize_connections(&graph);
        Self { graph, doors, report, room_distance }
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn seed(&self) -> u64 {
        self.report.seed
    }

    pub fn room_count(&self) -> usize {
        self.graph.len()
    }

    pub fn start(&self) -> RoomId {
        self.graph.start()
    }

    pub fn boss(&self) -> Option<RoomId> {
        self.graph.boss()
    }

    pub fn room_type(&self, id: RoomId) -> Option<RoomType> {
        self.graph.room_type(id)
    }

    pub fn position(&self, id: RoomId) -> Option<GridPos> {
        self.graph.position(id)
    }

    pub fn doors(&self, id: RoomId) -> Option<DoorMask> {
        self.doors.get(id).copied()
    }

    pub fn room_distance(&self) -> f32 {
        self.room_distance
    }

    /// Map-display coordinates using the configured room spacing.
    pub fn map_position(&self, id: RoomId) -> Option<(f32, f32)> {
        self.graph.map_position(id, self.room_distance)
    }

    pub fn fingerprint(&self) -> u64 {
        self.graph.fingerprint()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(&self.graph, self.room_distance)
    }
}

/// Door flags per room, fixed once typing and grafting are done.
fn finalize_connections(graph: &RoomGraph) -> SecondaryMap<RoomId, DoorMask> {
    let mut doors = SecondaryMap::with_capacity(graph.len());
    for (id, room) in graph.rooms() {
        doors.insert(id, room.doors());
    }
    doors
}
