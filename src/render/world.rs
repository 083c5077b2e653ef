//! 3D adapter: card transforms on the world XZ plane.
//!
//! Card size and grid spacing come from the profile in pixels and are
//! converted with the same scale as the zones, so a 3D board looks like
//! the 2D one viewed from above.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::RenderAdapter;
use crate::core::{ConfigError, PlayerId, TableConfig};
use crate::device::LayoutProfile;
use crate::layout::{map_3d, place_3d, slot, ArrangeConfig, Placement3d, Point, Size, WorldLayout, ZoneParams};
use crate::zones::{ZoneId, ZoneKind};

#[derive(Clone, Debug)]
pub struct WorldAdapter {
    local: PlayerId,
    layout: WorldLayout,
    /// Card footprint in world units.
    card_size: Size,
    /// Zone params with spacing already in world units.
    params: FxHashMap<ZoneKind, ZoneParams>,
    arrange: ArrangeConfig,
}

impl WorldAdapter {
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
        let layout = map_3d(&declared, viewport, config.world_width);
        let scale = layout.scale;
        let params = declared
            .iter()
            .map(|zone| (zone.id.kind, profile.params(zone.id.kind).scaled(scale)))
            .collect();

        trace!(scale, profile = %profile.name, "world layout");
        Ok(Self {
            local,
            card_size: profile.card_size.scaled(scale),
            layout,
            params,
            arrange: config.arrange,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &WorldLayout {
        &self.layout
    }

    #[must_use]
    pub fn card_size(&self) -> Size {
        self.card_size
    }
}

impl RenderAdapter for WorldAdapter {
    type Position = Placement3d;

    fn local_player(&self) -> PlayerId {
        self.local
    }

    fn position_card(&self, zone: ZoneId, index: usize, count: usize) -> Option<Placement3d> {
        if index >= count {
            return None;
        }
        let mapped = self.layout.zone(zone)?;
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
        Some(place_3d(mapped, self.card_size, slot))
    }

    fn zone_at(&self, point: Point) -> Option<ZoneId> {
        let (x, z) = self.layout.to_world(point);
        self.layout
            .zones
            .iter()
            .find(|zone| zone.id.kind.is_droppable() && zone.rect.contains(x, z))
            .map(|zone| zone.id)
    }
}
