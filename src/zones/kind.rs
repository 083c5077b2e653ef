//! Zone kinds and their capability table.
//!
//! Every per-kind property (drop eligibility, default layout, visibility,
//! sharing) is answered by `ZoneKind::caps`. Adding a zone kind means adding
//! one variant and one row in that table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of zone kinds across all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneKind {
    Hand,
    #[serde(alias = "battlefield")]
    Field,
    #[serde(alias = "library")]
    Deck,
    Graveyard,
    Stack,
    Flag,
    AzothRow,
    CombatRow,
    #[serde(rename = "removedFromPlay", alias = "exile")]
    Removed,
    LifeCards,
}

/// How cards are arranged inside a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Near-coincident pile with a small per-index offset.
    Stack,
    /// Evenly spaced, slightly rotated hand.
    Fan,
    /// Rows and columns.
    Grid,
}

/// Who may see the cards in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneVisibility {
    /// All cards visible to all players.
    Public,
    /// Face-up to the owner only.
    OwnerOnly,
    /// Face-down; rendered as a single pile, not card by card.
    Hidden,
}

/// Static properties of a zone kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneCaps {
    pub droppable: bool,
    pub layout: LayoutKind,
    pub visibility: ZoneVisibility,
    /// One instance for the whole table instead of one per player.
    pub shared: bool,
}

impl ZoneKind {
    /// Every zone kind.
    pub const ALL: [ZoneKind; 10] = [
        ZoneKind::Hand,
        ZoneKind::Field,
        ZoneKind::Deck,
        ZoneKind::Graveyard,
        ZoneKind::Stack,
        ZoneKind::Flag,
        ZoneKind::AzothRow,
        ZoneKind::CombatRow,
        ZoneKind::Removed,
        ZoneKind::LifeCards,
    ];

    /// Capability table.
    #[must_use]
    pub const fn caps(self) -> ZoneCaps {
        use LayoutKind::{Fan, Grid, Stack};
        use ZoneVisibility::{Hidden, OwnerOnly, Public};

        let (droppable, layout, visibility, shared) = match self {
            ZoneKind::Hand => (true, Fan, OwnerOnly, false),
            ZoneKind::Field => (true, Grid, Public, false),
            ZoneKind::Deck => (false, Stack, Hidden, false),
            ZoneKind::Graveyard => (true, Stack, Public, false),
            ZoneKind::Stack => (true, Stack, Public, true),
            ZoneKind::Flag => (false, Stack, Public, false),
            ZoneKind::AzothRow => (true, Grid, Public, false),
            ZoneKind::CombatRow => (true, Grid, Public, false),
            ZoneKind::Removed => (true, Stack, Public, false),
            ZoneKind::LifeCards => (false, Stack, Hidden, false),
        };

        ZoneCaps {
            droppable,
            layout,
            visibility,
            shared,
        }
    }

    #[must_use]
    pub const fn is_droppable(self) -> bool {
        self.caps().droppable
    }

    #[must_use]
    pub const fn default_layout(self) -> LayoutKind {
        self.caps().layout
    }

    #[must_use]
    pub const fn visibility(self) -> ZoneVisibility {
        self.caps().visibility
    }

    #[must_use]
    pub const fn is_shared(self) -> bool {
        self.caps().shared
    }

    /// Stable name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneKind::Hand => "hand",
            ZoneKind::Field => "field",
            ZoneKind::Deck => "deck",
            ZoneKind::Graveyard => "graveyard",
            ZoneKind::Stack => "stack",
            ZoneKind::Flag => "flag",
            ZoneKind::AzothRow => "azothRow",
            ZoneKind::CombatRow => "combatRow",
            ZoneKind::Removed => "removedFromPlay",
            ZoneKind::LifeCards => "lifeCards",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A zone name that matches no kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown zone kind `{0}`")]
pub struct UnknownZoneKind(pub String);

impl FromStr for ZoneKind {
    type Err = UnknownZoneKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "battlefield" => ZoneKind::Field,
            "library" => ZoneKind::Deck,
            "exile" | "removed" => ZoneKind::Removed,
            other => ZoneKind::ALL
                .into_iter()
                .find(|kind| kind.name() == other)
                .ok_or_else(|| UnknownZoneKind(other.to_string()))?,
        };
        Ok(kind)
    }
}
