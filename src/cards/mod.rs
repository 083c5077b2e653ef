//! Cards: display payload, type class, and per-card table flags.
//!
//! ## Key Types
//!
//! - `CardData`: Host-supplied display attributes (opaque to the table)
//! - `CardClass`: Land / creature / instant / other, computed once
//! - `Card`: A card in the session's card table

pub mod class;
pub mod instance;

pub use class::CardClass;
pub use instance::{Card, CardData};
pub use crate::core::entity::CardId;
