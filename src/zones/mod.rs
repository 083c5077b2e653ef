//! Zone system for card locations.
//!
//! Zone kinds form a closed enumeration with a capability table; each
//! variant picks which kinds every player gets. Zones hold ordered card id
//! lists, the card payloads live in the game state's card table.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Closed set of zone kinds (hand, field, deck, ...)
//! - `ZoneCaps`: Droppable flag, default layout, visibility, sharing
//! - `ZoneId`: Address of one zone (owner + kind)
//! - `ZoneManager`: Card location tracking and movement

pub mod kind;
pub mod manager;

pub use kind::{LayoutKind, UnknownZoneKind, ZoneCaps, ZoneKind, ZoneVisibility};
pub use manager::{Zone, ZoneId, ZoneManager};
