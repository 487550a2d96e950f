//! Typed record of the notable decisions taken during one generation pass.
//!
//! Phases also emit the same decisions through the `log` facade; warnings mark
//! the ones a caller usually wants to see (renormalized weights, exhaustion).

use serde::Serialize;

use crate::types::{GridPos, RoomType};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GenerationEvent {
    TargetChosen { target_rooms: usize },
    RoomsRefilled { round: u32, reseeded: usize },
    /// Expansion stopped below `min_rooms`; the smaller layout is still returned.
    Exhausted { placed: usize, requested: usize },
    LoopsClosed { count: usize },
    DeadEndRepaired { removed_edges: usize },
    RenormalizedWeights { original_sum: f64 },
    BossPlaced { position: GridPos },
    QuotaUnfilled { room_type: RoomType, missing: usize },
    SecretGrafted { host: GridPos, position: GridPos },
    SecretSkipped,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub target_rooms: usize,
    pub events: Vec<GenerationEvent>,
}

impl GenerationReport {
    pub fn new(seed: u64) -> Self {
        Self { seed, target_rooms: 0, events: Vec::new() }
    }

    pub fn record(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }

    pub fn was_exhausted(&self) -> bool {
        self.events.iter().any(|event| matches!(event, GenerationEvent::Exhausted { .. }))
    }

    pub fn secret_grafted(&self) -> bool {
        self.events.iter().any(|event| matches!(event, GenerationEvent::SecretGrafted { .. }))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flags_follow_recorded_events() {
        let mut report = GenerationReport::new(7);
        assert!(!report.was_exhausted());
        report.record(GenerationEvent::Exhausted { placed: 3, requested: 5 });
        report.record(GenerationEvent::SecretSkipped);
        assert!(report.was_exhausted());
        assert!(!report.secret_grafted());
    }

    #[test]
    fn events_serialize_with_variant_names() {
        let event = GenerationEvent::LoopsClosed { count: 2 };
        let json = serde_json::to_string(&event).expect("serialize");
        assert_eq!(json, r#"{"LoopsClosed":{"count":2}}"#);
    }
}
