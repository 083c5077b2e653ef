//! Coordinate mapping from declared zone rectangles to render geometry.
//!
//! ## 2D
//!
//! `map_2d` converts every declared rectangle to an absolute pixel box on
//! the viewport. `place_2d` turns a zone box plus a `Slot` into a CSS-style
//! card box.
//!
//! ## 3D
//!
//! `map_3d` fits the board into a world of fixed width:
//! 1. The pixel bounding box of all zones defines the board's extent.
//! 2. World depth follows the bounding box's aspect ratio.
//! 3. Zone centers and half extents map linearly; pixel X -> world X, pixel
//!    Y -> world Z; the bounding box center becomes the world origin.
//!
//! Everything here is a pure function of its inputs.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::geometry::{Placement2d, Placement3d, Point, RectPx, RectWorld, Size, Slot};
use super::rect::{ZoneRect, MIN_EXTENT};
use crate::zones::ZoneId;

/// A zone rectangle ready for mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclaredZone {
    pub id: ZoneId,
    pub rect: ZoneRect,
    /// Reflect through the board center (opponent's half).
    pub mirrored: bool,
}

/// A zone mapped to viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappedZone2d {
    pub id: ZoneId,
    pub rect: RectPx,
    pub mirrored: bool,
}

/// A zone mapped to world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappedZone3d {
    pub id: ZoneId,
    pub rect: RectWorld,
    pub mirrored: bool,
}

/// Result of a 3D mapping pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldLayout {
    /// Board extent in world units (width along X, height along Z).
    pub world: Size,
    /// World units per pixel.
    pub scale: f32,
    /// Pixel point that maps to the world origin.
    pub origin_px: Point,
    pub zones: Vec<MappedZone3d>,
}

impl WorldLayout {
    /// Viewport pixel -> world (x, z).
    #[must_use]
    pub fn to_world(&self, point: Point) -> (f32, f32) {
        (
            (point.x - self.origin_px.x) * self.scale,
            (point.y - self.origin_px.y) * self.scale,
        )
    }

    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&MappedZone3d> {
        self.zones.iter().find(|zone| zone.id == id)
    }
}

/// Map declared zones to absolute pixel boxes on a viewport.
#[must_use]
pub fn map_2d(zones: &[DeclaredZone], viewport: Size) -> Vec<MappedZone2d> {
    zones
        .iter()
        .map(|zone| MappedZone2d {
            id: zone.id,
            rect: zone.rect.to_px(viewport, zone.mirrored),
            mirrored: zone.mirrored,
        })
        .collect()
}

/// Pixel bounding box of a set of boxes, each side floored at `MIN_EXTENT`.
#[must_use]
pub fn bounding_box(rects: impl IntoIterator<Item = RectPx>) -> RectPx {
    let mut iter = rects.into_iter();
    let Some(first) = iter.next() else {
        return RectPx::new(0.0, 0.0, MIN_EXTENT, MIN_EXTENT);
    };

    let (mut min_x, mut min_y) = (first.left, first.top);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());
    for rect in iter {
        min_x = min_x.min(rect.left);
        min_y = min_y.min(rect.top);
        max_x = max_x.max(rect.right());
        max_y = max_y.max(rect.bottom());
    }

    RectPx::new(
        min_x,
        min_y,
        (max_x - min_x).max(MIN_EXTENT),
        (max_y - min_y).max(MIN_EXTENT),
    )
}

/// Map declared zones into a world of the given width, preserving the
/// aspect ratio of the zones' bounding box.
#[must_use]
pub fn map_3d(zones: &[DeclaredZone], viewport: Size, world_width: f32) -> WorldLayout {
    let boxes = map_2d(zones, viewport);
    let bounds = bounding_box(boxes.iter().map(|zone| zone.rect));

    let scale = world_width / bounds.width;
    let world = Size::new(world_width, bounds.height * scale);
    let origin_px = bounds.center();

    let zones = boxes
        .iter()
        .map(|zone| {
            let center = zone.rect.center();
            MappedZone3d {
                id: zone.id,
                rect: RectWorld {
                    center_x: (center.x - origin_px.x) * scale,
                    center_z: (center.y - origin_px.y) * scale,
                    half_width: zone.rect.width / 2.0 * scale,
                    half_depth: zone.rect.height / 2.0 * scale,
                },
                mirrored: zone.mirrored,
            }
        })
        .collect();

    trace!(
        world_width = world.width,
        world_depth = world.height,
        scale,
        "mapped board to world"
    );

    WorldLayout {
        world,
        scale,
        origin_px,
        zones,
    }
}

/// Position a card box inside a pixel zone.
///
/// Mirrored zones reflect the slot offset and turn the card upside down.
#[must_use]
pub fn place_2d(zone: &MappedZone2d, card: Size, slot: Slot) -> Placement2d {
    let center = zone.rect.center();
    let (dx, dy, turn) = if zone.mirrored {
        (-slot.dx, -slot.dy, 180.0)
    } else {
        (slot.dx, slot.dy, 0.0)
    };

    Placement2d {
        left: center.x + dx - card.width / 2.0,
        top: center.y + dy - card.height / 2.0 - slot.lift,
        width: card.width,
        height: card.height,
        rotation_deg: slot.rotation_deg + turn,
        z_index: slot.z_order,
    }
}

/// Position a card inside a world zone. `card` is in world units.
///
/// World Y is up, so clockwise on screen is a negative Y rotation.
#[must_use]
pub fn place_3d(zone: &MappedZone3d, card: Size, slot: Slot) -> Placement3d {
    let (dx, dz, turn) = if zone.mirrored {
        (-slot.dx, -slot.dy, std::f32::consts::PI)
    } else {
        (slot.dx, slot.dy, 0.0)
    };

    Placement3d {
        x: zone.rect.center_x + dx,
        y: slot.lift,
        z: zone.rect.center_z + dz,
        rotation_y: -slot.rotation_deg.to_radians() + turn,
        width: card.width,
        depth: card.height,
    }
}
