//! Responsive policy: device classification and layout profiles.
//!
//! ## Key Types
//!
//! - `DeviceHints`: Viewport, platform string and input facts from the host
//! - `DeviceInfo`: Desktop/tablet/phone, orientation, rotation prompt
//! - `LayoutProfile`: Card size, zone rectangles and affordances
//!
//! The host supplies hints; nothing here touches a platform API.

pub mod classify;
pub mod profile;

pub use classify::{classify, DeviceClass, DeviceHints, DeviceInfo, Orientation, TABLET_MIN_SHORT_SIDE};
pub use profile::{Affordances, LayoutProfile, ZoneLayoutDecl};
