//! Plain geometry values produced by the mapper.
//!
//! None of these are stored in the game state; they are recomputed on every
//! render pass.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides scaled by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in viewport pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectPx {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectPx {
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inclusive of the top-left edge, exclusive of the bottom-right edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }
}

/// Zone footprint on the world XZ plane, board center at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectWorld {
    pub center_x: f32,
    pub center_z: f32,
    pub half_width: f32,
    pub half_depth: f32,
}

impl RectWorld {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.half_width * 2.0, self.half_depth * 2.0)
    }

    #[must_use]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        (x - self.center_x).abs() <= self.half_width && (z - self.center_z).abs() <= self.half_depth
    }
}

/// A card's offset inside its zone, relative to the zone center.
///
/// Units are whatever the zone and card sizes were given in (pixels for
/// 2D, world units for 3D). `dy` grows downward on screen / toward the
/// viewer on the table; `lift` is height above the zone surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub dx: f32,
    pub dy: f32,
    pub lift: f32,
    /// Clockwise on screen, in degrees.
    pub rotation_deg: f32,
    pub z_order: u32,
}

/// Absolutely positioned card box for a DOM-style renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement2d {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// CSS `rotate()` degrees.
    pub rotation_deg: f32,
    pub z_index: u32,
}

/// Card transform in world space (Y up).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement3d {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation around the world Y axis, radians.
    pub rotation_y: f32,
    pub width: f32,
    pub depth: f32,
}
