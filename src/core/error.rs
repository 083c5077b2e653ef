//! Error types.
//!
//! Nothing in the table core is fatal. `MoveError` is returned by the state
//! layer and swallowed (logged) by the interaction session; `ConfigError`
//! only surfaces when loading configuration or layout profiles;
//! `InvariantViolation` is what `GameState::check_invariants` reports, and
//! why a state snapshot failed to deserialize.

use thiserror::Error;

use super::config::GameVariant;
use super::entity::CardId;
use super::player::PlayerId;
use crate::zones::{ZoneId, ZoneKind};

/// Why a card move was declined. State is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is not in any zone")]
    CardNotFound(CardId),

    #[error("{0} is already on the table")]
    AlreadyPlaced(CardId),

    #[error("{zone} is not on this table")]
    UnknownZone { zone: ZoneId },

    #[error("drop onto {target} rejected by strict drop policy")]
    DropRejected { target: ZoneId },
}

/// Invalid table configuration or layout profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("world width must be positive and finite, got {0}")]
    WorldWidth(f32),

    #[error("arrangement constant `{0}` must be finite and non-negative")]
    Arrange(&'static str),

    #[error("card size must be positive and finite")]
    CardSize,

    #[error("zone {kind}: {reason}")]
    ZoneRect { kind: ZoneKind, reason: &'static str },

    #[error("zone {kind}: {reason}")]
    ZoneParams { kind: ZoneKind, reason: &'static str },

    #[error("layout profile `{profile}` declares no rectangle for zone {kind}")]
    MissingZone { profile: String, kind: ZoneKind },
}

/// A broken card-uniqueness invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{card} appears in {count} zones")]
    Duplicated { card: CardId, count: usize },

    #[error("{0} is in the card table but in no zone")]
    Orphaned(CardId),

    #[error("{zone} lists {card}, which is not in the card table")]
    Dangling { zone: ZoneId, card: CardId },

    #[error("phase index {index} is out of range for {phases} phases")]
    PhaseOutOfRange { index: usize, phases: usize },

    #[error("zones do not match the {0:?} zone set")]
    ZoneSet(GameVariant),

    #[error("expected 2 seats, found {0}")]
    SeatCount(usize),

    #[error("{0} has no seat")]
    UnknownSeat(PlayerId),

    #[error("card table key {key} holds {card}")]
    Mislabeled { key: CardId, card: CardId },

    #[error("next card id {next} is not past {card}")]
    StaleCounter { next: u32, card: CardId },
}
