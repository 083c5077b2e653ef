//! Drag state.
//!
//! At most one card is held at a time. `Dragging` carries a snapshot of the
//! held card taken at drag start, the pointer's offset from the card's
//! top-left corner, the source zone and the highlighted target kinds.

use serde::{Deserialize, Serialize};

use super::rules::TargetSet;
use crate::cards::Card;
use crate::core::CardId;
use crate::layout::Point;
use crate::zones::{ZoneId, ZoneKind};

/// A drag in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDrag {
    pub card: Card,
    pub grab_offset: Point,
    pub source: ZoneId,
    pub valid_targets: TargetSet,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(drag) => Some(drag),
        }
    }

    /// Snapshot of the held card.
    #[must_use]
    pub fn dragged_card(&self) -> Option<&Card> {
        self.active().map(|drag| &drag.card)
    }

    #[must_use]
    pub fn dragged_id(&self) -> Option<CardId> {
        self.active().map(|drag| drag.card.id)
    }

    #[must_use]
    pub fn source(&self) -> Option<ZoneId> {
        self.active().map(|drag| drag.source)
    }

    #[must_use]
    pub fn grab_offset(&self) -> Option<Point> {
        self.active().map(|drag| drag.grab_offset)
    }

    /// Highlighted kinds; empty when idle.
    #[must_use]
    pub fn valid_targets(&self) -> &[ZoneKind] {
        self.active().map_or(&[], |drag| drag.valid_targets.as_slice())
    }

    #[must_use]
    pub fn is_valid_target(&self, kind: ZoneKind) -> bool {
        self.valid_targets().contains(&kind)
    }
}
