//! Table events.
//!
//! Every effective transition of a `TableSession` appends one event. Hosts
//! drain them with `take_events` to drive re-renders, animations or sound;
//! declined operations produce no event.

use serde::{Deserialize, Serialize};

use super::rules::TargetSet;
use crate::core::{CardId, MoveOutcome, Phase, PlayerId};
use crate::zones::ZoneId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableEvent {
    CardSpawned {
        card: CardId,
        zone: ZoneId,
    },
    CardSelected {
        card: CardId,
        selected: bool,
    },
    CardTapped {
        card: CardId,
        tapped: bool,
    },
    DragStarted {
        card: CardId,
        source: ZoneId,
        #[serde(rename = "validTargets")]
        valid_targets: TargetSet,
    },
    /// The drag ended without a move (cancel or declined drop).
    DragEnded {
        card: CardId,
    },
    CardMoved(MoveOutcome),
    PhaseChanged {
        phase: Phase,
    },
    TurnChanged {
        turn: u32,
        player: PlayerId,
    },
    Reset,
}

impl TableEvent {
    /// Card the event concerns, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            TableEvent::CardSpawned { card, .. }
            | TableEvent::CardSelected { card, .. }
            | TableEvent::CardTapped { card, .. }
            | TableEvent::DragStarted { card, .. }
            | TableEvent::DragEnded { card } => Some(*card),
            TableEvent::CardMoved(outcome) => Some(outcome.card),
            TableEvent::PhaseChanged { .. } | TableEvent::TurnChanged { .. } | TableEvent::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneKind;

    #[test]
    fn test_event_card() {
        let outcome = MoveOutcome {
            card: CardId::new(2),
            from: ZoneId::of(PlayerId::new(0), ZoneKind::Hand),
            to: ZoneId::shared(ZoneKind::Stack),
        };

        assert_eq!(TableEvent::CardMoved(outcome).card(), Some(CardId::new(2)));
        assert_eq!(TableEvent::Reset.card(), None);
    }

    #[test]
    fn test_event_serializes_tagged() {
        let json = serde_json::to_string(&TableEvent::CardTapped {
            card: CardId::new(1),
            tapped: true,
        })
        .unwrap();

        assert!(json.contains(r#""type":"cardTapped""#));
    }
}
