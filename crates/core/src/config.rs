//! Generator configuration, validation, and room-type weight normalization.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_rooms: usize,
    pub max_rooms: usize,
    /// Display spacing between neighbouring rooms; only used by map projections.
    pub room_distance: f32,
    pub branch_chance: f64,
    pub normal_chance: f64,
    pub elite_chance: f64,
    pub shop_chance: f64,
    pub treasure_chance: f64,
    pub secret_room_chance: f64,
    /// Probability of linking two adjacent rooms that expansion left unconnected.
    pub loop_chance: f64,
    /// How many times expansion may restart from existing rooms before a
    /// shortfall below `min_rooms` is accepted.
    pub refill_rounds: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_rooms: 10,
            max_rooms: 15,
            room_distance: 20.0,
            branch_chance: 0.3,
            normal_chance: 0.7,
            elite_chance: 0.15,
            shop_chance: 0.1,
            treasure_chance: 0.05,
            secret_room_chance: 0.2,
            loop_chance: 0.0,
            refill_rounds: 8,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rooms == 0 {
            return Err(ConfigError::ZeroRooms);
        }
        if self.min_rooms > self.max_rooms {
            return Err(ConfigError::RoomBounds { min: self.min_rooms, max: self.max_rooms });
        }
        if !self.room_distance.is_finite() || self.room_distance < 0.0 {
            return Err(ConfigError::InvalidRoomDistance(self.room_distance));
        }
        for (field, value) in self.chances() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChanceOutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Room-type proportions with the Normal share absorbing any shortfall or excess.
    pub fn room_weights(&self) -> RoomWeights {
        let special_sum = self.elite_chance + self.shop_chance + self.treasure_chance;
        let original_sum = special_sum + self.normal_chance;
        if (original_sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            return RoomWeights {
                normal: self.normal_chance,
                elite: self.elite_chance,
                shop: self.shop_chance,
                treasure: self.treasure_chance,
                renormalized_from: None,
            };
        }

        if special_sum > 1.0 {
            return RoomWeights {
                normal: 0.0,
                elite: self.elite_chance / special_sum,
                shop: self.shop_chance / special_sum,
                treasure: self.treasure_chance / special_sum,
                renormalized_from: Some(original_sum),
            };
        }

        RoomWeights {
            normal: 1.0 - special_sum,
            elite: self.elite_chance,
            shop: self.shop_chance,
            treasure: self.treasure_chance,
            renormalized_from: Some(original_sum),
        }
    }

    fn chances(&self) -> [(&'static str, f64); 7] {
        [
            ("branch_chance", self.branch_chance),
            ("normal_chance", self.normal_chance),
            ("elite_chance", self.elite_chance),
            ("shop_chance", self.shop_chance),
            ("treasure_chance", self.treasure_chance),
            ("secret_room_chance", self.secret_room_chance),
            ("loop_chance", self.loop_chance),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomWeights {
    pub normal: f64,
    pub elite: f64,
    pub shop: f64,
    pub treasure: f64,
    /// The configured total when it differed from 1 and had to be adjusted.
    pub renormalized_from: Option<f64>,
}

impl RoomWeights {
    pub fn special_sum(&self) -> f64 {
        self.elite + self.shop + self.treasure
    }

    /// `round(rooms * proportion / total)`, the number of rooms a type should claim.
    pub fn quota(&self, rooms: usize, proportion: f64) -> usize {
        let total = self.special_sum() + self.normal;
        if total <= 0.0 {
            return 0;
        }
        (rooms as f64 * proportion / total).round() as usize
    }
}
