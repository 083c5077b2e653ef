//! Layout geometry: declared zone rectangles to 2D and 3D placements.
//!
//! ## Key Types
//!
//! - `ZoneRect`: A zone's rectangle as a layout profile declares it
//! - `ArrangeConfig`, `ZoneParams`: Per-card arrangement constants
//! - `Slot`: A card's offset inside its zone (shared by 2D and 3D)
//! - `WorldLayout`: Zones mapped into world space
//!
//! The pipeline is `ZoneRect` -> `RectPx` (viewport) -> optional `RectWorld`,
//! then `slot` + `place_2d`/`place_3d` per card. Every step is a pure
//! function, so identical inputs yield identical placements.

pub mod arrange;
pub mod geometry;
pub mod mapper;
pub mod rect;

pub use arrange::{arrange, grid_cell, slot, ArrangeConfig, ZoneParams};
pub use geometry::{Placement2d, Placement3d, Point, RectPx, RectWorld, Size, Slot};
pub use mapper::{
    bounding_box, map_2d, map_3d, place_2d, place_3d, DeclaredZone, MappedZone2d, MappedZone3d,
    WorldLayout,
};
pub use rect::{RectUnit, ZoneRect, MIN_EXTENT};
