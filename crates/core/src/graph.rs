//! Arena-backed room graph with symmetric, grid-aligned connections.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use slotmap::SlotMap;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::InvariantViolation;
use crate::types::{Direction, DoorMask, GridPos, RoomId, RoomType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomNode {
    pub position: GridPos,
    pub room_type: RoomType,
    pub connections: [Option<RoomId>; 4],
    /// Scratch flag for traversals; carries no meaning once generation ends.
    pub visited: bool,
}

impl RoomNode {
    fn new(position: GridPos, room_type: RoomType) -> Self {
        Self { position, room_type, connections: [None; 4], visited: false }
    }

    pub fn connection(&self, direction: Direction) -> Option<RoomId> {
        self.connections[direction.index()]
    }

    pub fn connection_count(&self) -> usize {
        self.connections.iter().flatten().count()
    }

    pub fn doors(&self) -> DoorMask {
        DoorMask {
            north: self.connection(Direction::North).is_some(),
            east: self.connection(Direction::East).is_some(),
            south: self.connection(Direction::South).is_some(),
            west: self.connection(Direction::West).is_some(),
        }
    }

    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.connection(direction).map(|id| (direction, id)))
    }
}

#[derive(Clone, Debug)]
pub struct RoomGraph {
    rooms: SlotMap<RoomId, RoomNode>,
    by_position: BTreeMap<GridPos, RoomId>,
    start: RoomId,
    boss: Option<RoomId>,
}

impl RoomGraph {
    /// A graph holding only the start room at the origin.
    pub fn with_start() -> Self {
        let mut rooms = SlotMap::with_key();
        let start = rooms.insert(RoomNode::new(GridPos::ORIGIN, RoomType::Start));
        let by_position = BTreeMap::from([(GridPos::ORIGIN, start)]);
        Self { rooms, by_position, start, boss: None }
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn boss(&self) -> Option<RoomId> {
        self.boss
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms placed by expansion, i.e. everything except grafted secret rooms.
    pub fn layout_room_count(&self) -> usize {
        self.len() - self.count_of(RoomType::Secret)
    }

    pub fn room(&self, id: RoomId) -> Option<&RoomNode> {
        self.rooms.get(id)
    }

    pub fn room_at(&self, position: GridPos) -> Option<RoomId> {
        self.by_position.get(&position).copied()
    }

    pub fn is_occupied(&self, position: GridPos) -> bool {
        self.by_position.contains_key(&position)
    }

    /// Rooms in arena order, which is stable for a given seed.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &RoomNode)> {
        self.rooms.iter()
    }

    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys().collect()
    }

    pub fn room_type(&self, id: RoomId) -> Option<RoomType> {
        self.rooms.get(id).map(|room| room.room_type)
    }

    pub fn position(&self, id: RoomId) -> Option<GridPos> {
        self.rooms.get(id).map(|room| room.position)
    }

    pub fn doors(&self, id: RoomId) -> Option<DoorMask> {
        self.rooms.get(id).map(RoomNode::doors)
    }

    /// Display-space centre of a room, `room_distance` units per grid step.
    pub fn map_position(&self, id: RoomId, room_distance: f32) -> Option<(f32, f32)> {
        self.position(id)
            .map(|pos| (pos.x as f32 * room_distance, pos.y as f32 * room_distance))
    }

    pub fn connection_count(&self, id: RoomId) -> usize {
        self.rooms.get(id).map_or(0, RoomNode::connection_count)
    }

    pub fn is_dead_end(&self, id: RoomId) -> bool {
        id != self.start && self.connection_count(id) == 1
    }

    pub fn dead_ends(&self) -> Vec<RoomId> {
        self.rooms.keys().filter(|&id| self.is_dead_end(id)).collect()
    }

    pub fn count_of(&self, room_type: RoomType) -> usize {
        self.rooms.values().filter(|room| room.room_type == room_type).count()
    }

    pub fn free_directions(&self, id: RoomId) -> Vec<Direction> {
        let Some(room) = self.rooms.get(id) else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter(|&direction| !self.is_occupied(room.position.step(direction)))
            .collect()
    }

    pub(crate) fn add_room(&mut self, position: GridPos, room_type: RoomType) -> RoomId {
        debug_assert!(!self.is_occupied(position), "room already placed at {position:?}");
        let id = self.rooms.insert(RoomNode::new(position, room_type));
        self.by_position.insert(position, id);
        id
    }

    /// Places a new room next to `from` and links both sides.
    pub(crate) fn attach_room(
        &mut self,
        from: RoomId,
        direction: Direction,
        room_type: RoomType,
    ) -> RoomId {
        let position = self.rooms[from].position.step(direction);
        let id = self.add_room(position, room_type);
        self.connect(from, direction);
        id
    }

    /// Links `from` to the room in `direction`, writing both sides at once.
    /// Returns false when there is no room there.
    pub(crate) fn connect(&mut self, from: RoomId, direction: Direction) -> bool {
        let target_position = self.rooms[from].position.step(direction);
        let Some(to) = self.room_at(target_position) else {
            return false;
        };
        self.rooms[from].connections[direction.index()] = Some(to);
        self.rooms[to].connections[direction.opposite().index()] = Some(from);
        true
    }

    /// Removes the link leaving `from` in `direction` together with its mirror.
    pub(crate) fn disconnect(&mut self, from: RoomId, direction: Direction) -> Option<RoomId> {
        let to = self.rooms.get_mut(from)?.connections[direction.index()].take()?;
        if let Some(other) = self.rooms.get_mut(to) {
            other.connections[direction.opposite().index()] = None;
        }
        Some(to)
    }

    pub(crate) fn set_room_type(&mut self, id: RoomId, room_type: RoomType) {
        if let Some(room) = self.rooms.get_mut(id) {
            room.room_type = room_type;
            if room_type == RoomType::Boss {
                self.boss = Some(id);
            } else if self.boss == Some(id) {
                self.boss = None;
            }
        }
    }

    /// Breadth-first walk from the start room; marks `visited` on every room reached.
    pub(crate) fn mark_reachable_from_start(&mut self) -> usize {
        for room in self.rooms.values_mut() {
            room.visited = false;
        }
        let mut open = VecDeque::from([self.start]);
        self.rooms[self.start].visited = true;
        let mut reached = 1;
        while let Some(id) = open.pop_front() {
            let neighbours: Vec<RoomId> = self.rooms[id].neighbours().map(|(_, id)| id).collect();
            for next in neighbours {
                let Some(room) = self.rooms.get_mut(next) else {
                    continue;
                };
                if room.visited {
                    continue;
                }
                room.visited = true;
                reached += 1;
                open.push_back(next);
            }
        }
        reached
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_count() == self.len()
    }

    pub(crate) fn clear_visited(&mut self) {
        for room in self.rooms.values_mut() {
            room.visited = false;
        }
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let starts = self.count_of(RoomType::Start);
        if starts != 1 {
            return Err(InvariantViolation::StartCount(starts));
        }
        if self.rooms.get(self.start).map(|room| room.position) != Some(GridPos::ORIGIN) {
            return Err(InvariantViolation::StartNotAtOrigin);
        }

        let bosses = self.count_of(RoomType::Boss);
        if bosses > 1 {
            return Err(InvariantViolation::BossCount(bosses));
        }
        if let Some(boss) = self.rooms.values().find(|room| room.room_type == RoomType::Boss) {
            let connections = boss.connection_count();
            if connections != 1 {
                return Err(InvariantViolation::BossNotDeadEnd(connections));
            }
        }

        let mut positions = BTreeMap::new();
        for (id, room) in &self.rooms {
            if positions.insert(room.position, id).is_some() {
                return Err(InvariantViolation::DuplicatePosition(room.position));
            }
            for (direction, to) in room.neighbours() {
                let Some(other) = self.rooms.get(to) else {
                    return Err(InvariantViolation::AsymmetricConnection { from: id, to });
                };
                if other.connection(direction.opposite()) != Some(id) {
                    return Err(InvariantViolation::AsymmetricConnection { from: id, to });
                }
                if room.position.step(direction) != other.position {
                    return Err(InvariantViolation::NonAdjacentConnection { from: id, to });
                }
            }
        }

        let unreachable = self.len() - self.reachable_count();
        if unreachable > 0 {
            return Err(InvariantViolation::Disconnected(unreachable));
        }
        Ok(())
    }

    fn reachable_count(&self) -> usize {
        let mut seen = BTreeSet::from([self.start]);
        let mut open = VecDeque::from([self.start]);
        while let Some(id) = open.pop_front() {
            for (_, next) in self.rooms[id].neighbours() {
                if self.rooms.contains_key(next) && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len()
    }

    /// Position-ordered encoding of every room; independent of arena slot numbers.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.by_position.len() as u32).to_le_bytes());
        for (&position, &id) in &self.by_position {
            let room = &self.rooms[id];
            bytes.extend(position.x.to_le_bytes());
            bytes.extend(position.y.to_le_bytes());
            bytes.push(room.room_type.code());
            bytes.push(room.doors().bits());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
