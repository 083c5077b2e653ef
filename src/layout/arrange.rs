//! Per-card arrangement inside a zone.
//!
//! `slot` places card `index` of `count` according to the zone's layout
//! kind, relative to the zone center and in the same units as the zone and
//! card sizes it is given. The 2D and 3D mappers share it; only the final
//! conversion to screen or world coordinates differs.
//!
//! - `Stack`: near-coincident pile, each card nudged right and lifted by a
//!   fixed fraction per index so later cards sit on top.
//! - `Fan`: evenly spaced and centered; rotation grows with signed distance
//!   from the visual center `(count - 1) / 2`, clamped to a maximum.
//! - `Grid`: `columns = ceil(count / max_rows)`, `row = index / columns`,
//!   `col = index % columns`, centered in the zone.

use serde::{Deserialize, Serialize};

use super::geometry::{Size, Slot};
use crate::core::error::ConfigError;
use crate::zones::{LayoutKind, ZoneKind};

/// Arrangement constants shared by every zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrangeConfig {
    /// Horizontal stack nudge per index, as a fraction of card width.
    pub stack_offset: f32,
    /// Stack lift per index, as a fraction of card height.
    pub stack_lift: f32,
    /// Fan rotation per unit of distance from center, degrees.
    pub fan_step_degrees: f32,
    /// Fan rotation limit, degrees.
    pub fan_max_degrees: f32,
    /// Fan arc drop per unit of distance, as a fraction of card height.
    pub fan_arc: f32,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            stack_offset: 0.02,
            stack_lift: 0.005,
            fan_step_degrees: 4.0,
            fan_max_degrees: 20.0,
            fan_arc: 0.03,
        }
    }
}

impl ArrangeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("stackOffset", self.stack_offset),
            ("stackLift", self.stack_lift),
            ("fanStepDegrees", self.fan_step_degrees),
            ("fanMaxDegrees", self.fan_max_degrees),
            ("fanArc", self.fan_arc),
        ];
        match fields.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            Some((name, _)) => Err(ConfigError::Arrange(*name)),
            None => Ok(()),
        }
    }
}

/// Per-zone arrangement parameters, declared by the layout profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneParams {
    /// Gap between grid cells, in the profile's pixel units.
    pub card_spacing: f32,
    /// Grid row limit.
    pub max_rows: u32,
    /// Fan overlap, 0 = edge to edge, 0.5 = half a card covered.
    pub overlap: f32,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            card_spacing: 8.0,
            max_rows: 1,
            overlap: 0.3,
        }
    }
}

impl ZoneParams {
    #[must_use]
    pub const fn new(card_spacing: f32, max_rows: u32, overlap: f32) -> Self {
        Self {
            card_spacing,
            max_rows,
            overlap,
        }
    }

    /// Same parameters with spacing converted by `factor` (e.g. px to world).
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            card_spacing: self.card_spacing * factor,
            ..self
        }
    }

    pub fn validate(&self, kind: ZoneKind) -> Result<(), ConfigError> {
        if !(self.card_spacing.is_finite() && self.card_spacing >= 0.0) {
            return Err(ConfigError::ZoneParams {
                kind,
                reason: "card spacing must be finite and non-negative",
            });
        }
        if self.max_rows == 0 {
            return Err(ConfigError::ZoneParams {
                kind,
                reason: "max rows must be at least 1",
            });
        }
        if !(0.0..1.0).contains(&self.overlap) {
            return Err(ConfigError::ZoneParams {
                kind,
                reason: "overlap must be in [0, 1)",
            });
        }
        Ok(())
    }
}

/// Grid cell of card `index` among `count`: `(row, column, columns)`.
///
/// ```
/// use ccg_table::layout::grid_cell;
///
/// // 7 cards, at most 2 rows: 4 columns
/// assert_eq!(grid_cell(0, 7, 2), (0, 0, 4));
/// assert_eq!(grid_cell(5, 7, 2), (1, 1, 4));
/// ```
#[must_use]
pub fn grid_cell(index: usize, count: usize, max_rows: u32) -> (usize, usize, usize) {
    let rows = (max_rows as usize).max(1);
    let columns = count.div_ceil(rows).max(1);
    (index / columns, index % columns, columns)
}

/// Place card `index` of `count` in a zone. Pure and deterministic.
#[must_use]
pub fn slot(
    layout: LayoutKind,
    zone: Size,
    card: Size,
    index: usize,
    count: usize,
    params: &ZoneParams,
    config: &ArrangeConfig,
) -> Slot {
    let i = index as f32;
    match layout {
        LayoutKind::Stack => Slot {
            dx: i * config.stack_offset * card.width,
            dy: 0.0,
            lift: i * config.stack_lift * card.height,
            rotation_deg: 0.0,
            z_order: index as u32,
        },
        LayoutKind::Fan => {
            let spacing = fan_spacing(zone.width, card.width, count, params.overlap);
            let offset = i - (count.saturating_sub(1) as f32) / 2.0;
            let limit = config.fan_max_degrees;
            Slot {
                dx: offset * spacing,
                dy: offset.abs() * config.fan_arc * card.height,
                lift: 0.0,
                rotation_deg: (offset * config.fan_step_degrees).clamp(-limit, limit),
                z_order: index as u32,
            }
        }
        LayoutKind::Grid => {
            let (row, col, columns) = grid_cell(index, count, params.max_rows);
            let rows = count.div_ceil(columns).max(1);
            let step_x = card.width + params.card_spacing;
            let step_y = card.height + params.card_spacing;
            Slot {
                dx: (col as f32 - (columns - 1) as f32 / 2.0) * step_x,
                dy: (row as f32 - (rows - 1) as f32 / 2.0) * step_y,
                lift: 0.0,
                rotation_deg: 0.0,
                z_order: index as u32,
            }
        }
    }
}

/// Every slot of a zone, in card order.
#[must_use]
pub fn arrange(
    layout: LayoutKind,
    zone: Size,
    card: Size,
    count: usize,
    params: &ZoneParams,
    config: &ArrangeConfig,
) -> Vec<Slot> {
    (0..count)
        .map(|index| slot(layout, zone, card, index, count, params, config))
        .collect()
}

/// Fan spacing: overlap-derived natural spacing, tightened to fit the zone.
fn fan_spacing(zone_width: f32, card_width: f32, count: usize, overlap: f32) -> f32 {
    if count < 2 {
        return 0.0;
    }
    let natural = card_width * (1.0 - overlap);
    let fit = ((zone_width - card_width) / (count - 1) as f32).max(0.0);
    natural.min(fit)
}
