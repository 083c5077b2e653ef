//! Player interaction with the table.
//!
//! ## Key Types
//!
//! - `TableSession`: Owns the game state and drives every user transition
//! - `DragState`: `Idle` or `Dragging` one card
//! - `DropRules`: Which zone kinds a dragged card may target
//! - `TableEvent`: Change notifications drained by the host

pub mod drag;
pub mod event;
pub mod rules;
pub mod session;

pub use drag::{ActiveDrag, DragState};
pub use event::TableEvent;
pub use rules::{DropRule, DropRules, TargetSet};
pub use session::TableSession;
