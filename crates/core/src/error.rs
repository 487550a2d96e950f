//! Error values surfaced by configuration validation and layout generation.

use thiserror::Error;

use crate::types::{GridPos, RoomId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("min_rooms must be at least 1")]
    ZeroRooms,

    #[error("min_rooms ({min}) must not exceed max_rooms ({max})")]
    RoomBounds { min: usize, max: usize },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    ChanceOutOfRange { field: &'static str, value: f64 },

    #[error("room_distance must be a finite non-negative number, got {0}")]
    InvalidRoomDistance(f32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no dead end available for the boss room ({rooms} rooms placed)")]
    NoDeadEndAvailable { rooms: usize },
}

/// A broken structural guarantee found by [`crate::RoomGraph::check_invariants`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("expected exactly one start room, found {0}")]
    StartCount(usize),

    #[error("start room is not at the origin")]
    StartNotAtOrigin,

    #[error("expected at most one boss room, found {0}")]
    BossCount(usize),

    #[error("boss room has {0} connections instead of 1")]
    BossNotDeadEnd(usize),

    #[error("two rooms share grid position {0:?}")]
    DuplicatePosition(GridPos),

    #[error("connection from {from:?} is not mirrored by {to:?}")]
    AsymmetricConnection { from: RoomId, to: RoomId },

    #[error("connected rooms {from:?} and {to:?} are not grid neighbours")]
    NonAdjacentConnection { from: RoomId, to: RoomId },

    #[error("{0} rooms are unreachable from the start room")]
    Disconnected(usize),
}
