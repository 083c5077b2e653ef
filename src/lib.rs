//! # ccg-table
//!
//! Core of a two-player card game table simulator: zones and card
//! movement, board geometry for 2D and 3D renderers, and the
//! select/tap/drag/drop interaction model.
//!
//! ## Design Principles
//!
//! 1. **One Core, Many Variants**: Zone sets, phases and resources come from
//!    `GameVariant`. Nothing else branches on the variant.
//!
//! 2. **Single Card Location**: Cards live in one arena keyed by `CardId`;
//!    zones hold ordered id lists. A card is always in exactly one zone.
//!
//! 3. **Pure Geometry**: Layout is a function of zone rectangles, card
//!    counts and viewport size. Nothing positional is stored in game state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`, so
//!   renderers can hold a frame's state while the session moves on.
//!
//! - **Silent Interaction**: Session operations never fail. Declined
//!   mutations are logged through `tracing` and leave state untouched.
//!
//! ## Modules
//!
//! - `core`: Card ids, players, game state, configuration, errors
//! - `zones`: Zone kinds, capability table, zone manager
//! - `cards`: Card payload and type class
//! - `layout`: Zone rectangles, per-card arrangement, 2D/3D mapping
//! - `interaction`: Table session, drag state, drop rules, events
//! - `device`: Device classification and layout profiles
//! - `render`: Render adapters and input routing

pub mod core;
pub mod zones;
pub mod cards;
pub mod layout;
pub mod interaction;
pub mod device;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId, PlayerMap, Player,
    GameVariant, Phase, DropPolicy, TableConfig,
    GameState, MoveOutcome,
    MoveError, ConfigError, InvariantViolation,
};

pub use crate::zones::{ZoneId, ZoneKind, ZoneManager, LayoutKind, ZoneVisibility};

pub use crate::cards::{Card, CardClass, CardData};

pub use crate::layout::{
    ArrangeConfig, ZoneParams, ZoneRect, Point, Size,
    Placement2d, Placement3d, WorldLayout,
};

pub use crate::interaction::{TableSession, DragState, DropRules, TableEvent};

pub use crate::device::{classify, DeviceClass, DeviceHints, DeviceInfo, LayoutProfile};

pub use crate::render::{build_scene, apply_input, RenderAdapter, DomAdapter, WorldAdapter, InputEvent};
