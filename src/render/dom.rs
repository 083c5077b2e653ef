//! 2D adapter: absolutely positioned card boxes in viewport pixels.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::RenderAdapter;
use crate::core::{ConfigError, PlayerId, TableConfig};
use crate::device::LayoutProfile;
use crate::layout::{map_2d, place_2d, slot, ArrangeConfig, MappedZone2d, Placement2d, Point, Size, ZoneParams};
use crate::zones::{ZoneId, ZoneKind};

#[derive(Clone, Debug)]
pub struct DomAdapter {
    local: PlayerId,
    card_size: Size,
    zones: Vec<MappedZone2d>,
    params: FxHashMap<ZoneKind, ZoneParams>,
    arrange: ArrangeConfig,
}

impl DomAdapter {
    /// Lay out the table for `local`'s seat on a viewport.
    ///
    /// Fails if the profile or the configuration does not validate.
    pub fn new(
        profile: &LayoutProfile,
        config: &TableConfig,
        local: PlayerId,
        viewport: Size,
    ) -> Result<Self, ConfigError> {
        profile.validate()?;
        config.validate()?;
        let declared = profile.declared_zones(config.variant, local)?;
        let zones = map_2d(&declared, viewport);
        let params = declared
            .iter()
            .map(|zone| (zone.id.kind, profile.params(zone.id.kind)))
            .collect();

        trace!(zones = zones.len(), profile = %profile.name, "dom layout");
        Ok(Self {
            local,
            card_size: profile.card_size,
            zones,
            params,
            arrange: config.arrange,
        })
    }

    #[must_use]
    pub fn zones(&self) -> &[MappedZone2d] {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&MappedZone2d> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    #[must_use]
    pub fn card_size(&self) -> Size {
        self.card_size
    }
}

impl RenderAdapter for DomAdapter {
    type Position = Placement2d;

    fn local_player(&self) -> PlayerId {
        self.local
    }

    fn position_card(&self, zone: ZoneId, index: usize, count: usize) -> Option<Placement2d> {
        if index >= count {
            return None;
        }
        let mapped = self.zone(zone)?;
        let params = self.params.get(&zone.kind).copied().unwrap_or_default();
        let slot = slot(
            zone.kind.default_layout(),
            mapped.rect.size(),
            self.card_size,
            index,
            count,
            &params,
            &self.arrange,
        );
        Some(place_2d(mapped, self.card_size, slot))
    }

    fn zone_at(&self, point: Point) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|zone| zone.id.kind.is_droppable() && zone.rect.contains(point))
            .map(|zone| zone.id)
    }
}
