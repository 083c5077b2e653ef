//! Declared zone rectangles.
//!
//! Layout profiles declare each zone's rectangle in percent of the board (or
//! in pixels). Conversion to pixels floors both sides at `MIN_EXTENT` so a
//! zero-sized declaration never produces a zero divisor downstream.

use serde::{Deserialize, Serialize};

use super::geometry::{RectPx, Size};
use crate::core::error::ConfigError;
use crate::zones::ZoneKind;

/// Smallest width/height a mapped rectangle may have, in pixels.
pub const MIN_EXTENT: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectUnit {
    /// Percent of the board, 0..=100.
    #[default]
    Percent,
    Pixel,
}

/// A zone rectangle as declared, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub unit: RectUnit,
}

impl ZoneRect {
    #[must_use]
    pub const fn percent(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: RectUnit::Percent,
        }
    }

    #[must_use]
    pub const fn pixel(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: RectUnit::Pixel,
        }
    }

    /// Convert to a pixel box on a board of the given size.
    ///
    /// With `mirrored`, the box is reflected through the board center, which
    /// is how the opponent's half is derived from the local seat's table.
    ///
    /// ```
    /// use ccg_table::layout::{RectPx, Size, ZoneRect};
    ///
    /// let board = Size::new(1000.0, 500.0);
    /// let rect = ZoneRect::percent(10.0, 80.0, 20.0, 20.0);
    ///
    /// assert_eq!(rect.to_px(board, false), RectPx::new(100.0, 400.0, 200.0, 100.0));
    /// assert_eq!(rect.to_px(board, true), RectPx::new(700.0, 0.0, 200.0, 100.0));
    /// ```
    #[must_use]
    pub fn to_px(&self, board: Size, mirrored: bool) -> RectPx {
        let (sx, sy) = match self.unit {
            RectUnit::Percent => (board.width / 100.0, board.height / 100.0),
            RectUnit::Pixel => (1.0, 1.0),
        };
        let width = (self.width * sx).max(MIN_EXTENT);
        let height = (self.height * sy).max(MIN_EXTENT);
        let mut left = self.x * sx;
        let mut top = self.y * sy;

        if mirrored {
            left = board.width - left - width;
            top = board.height - top - height;
        }
        RectPx::new(left, top, width, height)
    }

    /// Reject non-finite or negative values. Zero sizes are allowed.
    pub fn validate(&self, kind: ZoneKind) -> Result<(), ConfigError> {
        let values = [self.x, self.y, self.width, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ZoneRect {
                kind,
                reason: "rectangle values must be finite",
            });
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ConfigError::ZoneRect {
                kind,
                reason: "width and height must not be negative",
            });
        }
        Ok(())
    }
}
