use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct RoomId;
}

/// Integer cell on the room grid. The start room always sits on [`GridPos::ORIGIN`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Squared Euclidean distance from the origin; orders rooms the same way as
    /// the true distance without leaving integer arithmetic.
    pub fn distance_squared_from_origin(self) -> i64 {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        x * x + y * y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Start,
    Normal,
    Elite,
    Boss,
    Shop,
    Treasure,
    Secret,
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        RoomType::Start,
        RoomType::Normal,
        RoomType::Elite,
        RoomType::Boss,
        RoomType::Shop,
        RoomType::Treasure,
        RoomType::Secret,
    ];

    /// Stable byte used by canonical encodings; never renumber.
    pub fn code(self) -> u8 {
        match self {
            RoomType::Start => 0,
            RoomType::Normal => 1,
            RoomType::Elite => 2,
            RoomType::Boss => 3,
            RoomType::Shop => 4,
            RoomType::Treasure => 5,
            RoomType::Secret => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoomType::Start => "start",
            RoomType::Normal => "normal",
            RoomType::Elite => "elite",
            RoomType::Boss => "boss",
            RoomType::Shop => "shop",
            RoomType::Treasure => "treasure",
            RoomType::Secret => "secret",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            RoomType::Start => '@',
            RoomType::Normal => 'o',
            RoomType::Elite => 'E',
            RoomType::Boss => 'B',
            RoomType::Shop => '$',
            RoomType::Treasure => 'T',
            RoomType::Secret => '?',
        }
    }
}

/// Per-direction door flags handed to collaborators once a layout is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorMask {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl DoorMask {
    pub fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn count(self) -> usize {
        Direction::ALL.iter().filter(|&&direction| self.has(direction)).count()
    }

    pub fn bits(self) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.has(direction))
            .fold(0_u8, |bits, direction| bits | (1 << direction.index()))
    }
}
