//! Core table types: card ids, players, state, configuration, errors.
//!
//! Everything here is variant-agnostic. Variants plug in through
//! `GameVariant` rather than by modifying the core.

pub mod entity;
pub mod player;
pub mod config;
pub mod error;
pub mod state;

pub use entity::CardId;
pub use player::{Player, PlayerId, PlayerMap};
pub use config::{DropPolicy, GameVariant, Phase, TableConfig, PLAYER_COUNT};
pub use error::{ConfigError, InvariantViolation, MoveError};
pub use state::{GameState, MoveOutcome};
