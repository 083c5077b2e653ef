//! Layout profiles: card size, zone rectangles and affordances per device.
//!
//! A profile declares each zone kind once, for the seat at the bottom of
//! the screen. The opponent's zones are the same rectangles reflected
//! through the board center. Shared zones are never mirrored.

use serde::{Deserialize, Serialize};

use super::classify::DeviceInfo;
use crate::core::error::ConfigError;
use crate::core::{GameVariant, PlayerId};
use crate::layout::{DeclaredZone, Size, ZoneParams, ZoneRect};
use crate::zones::{ZoneId, ZoneKind};

/// Input affordances a host should enable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Affordances {
    /// A tap selects instead of starting a drag.
    pub tap_to_select: bool,
    /// Hovering a card shows an enlarged preview.
    pub hover_preview: bool,
    /// A long press acts as a secondary click.
    pub long_press_menu: bool,
}

/// One zone kind's declared rectangle and arrangement parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLayoutDecl {
    pub kind: ZoneKind,
    pub rect: ZoneRect,
    #[serde(default)]
    pub params: ZoneParams,
}

impl ZoneLayoutDecl {
    #[must_use]
    pub const fn new(kind: ZoneKind, rect: ZoneRect, params: ZoneParams) -> Self {
        Self { kind, rect, params }
    }
}

/// A complete layout profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProfile {
    pub name: String,
    /// Card size in pixels.
    pub card_size: Size,
    pub zones: Vec<ZoneLayoutDecl>,
    #[serde(default)]
    pub affordances: Affordances,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

impl LayoutProfile {
    /// Pointer-driven layout for large landscape screens.
    #[must_use]
    pub fn desktop() -> Self {
        let stack = ZoneParams::new(8.0, 1, 0.0);
        let row = ZoneParams::new(8.0, 1, 0.3);
        Self {
            name: "desktop".to_string(),
            card_size: Size::new(80.0, 112.0),
            zones: vec![
                decl(ZoneKind::Hand, 20.0, 86.0, 60.0, 14.0, ZoneParams::new(8.0, 1, 0.35)),
                decl(ZoneKind::Field, 14.0, 58.0, 72.0, 14.0, ZoneParams::new(8.0, 2, 0.3)),
                decl(ZoneKind::CombatRow, 14.0, 51.0, 72.0, 7.0, row),
                decl(ZoneKind::AzothRow, 14.0, 73.0, 72.0, 12.0, ZoneParams::new(4.0, 1, 0.3)),
                decl(ZoneKind::Deck, 88.0, 72.0, 10.0, 13.0, stack),
                decl(ZoneKind::Graveyard, 88.0, 86.0, 10.0, 13.0, stack),
                decl(ZoneKind::Removed, 2.0, 86.0, 10.0, 13.0, stack),
                decl(ZoneKind::LifeCards, 2.0, 72.0, 10.0, 13.0, stack),
                decl(ZoneKind::Flag, 2.0, 58.0, 10.0, 13.0, stack),
                decl(ZoneKind::Stack, 88.0, 43.5, 10.0, 13.0, stack),
            ],
            affordances: Affordances {
                tap_to_select: false,
                hover_preview: true,
                long_press_menu: false,
            },
        }
    }

    /// Touch layout: smaller cards, tighter fan, single-row field.
    #[must_use]
    pub fn mobile() -> Self {
        let stack = ZoneParams::new(4.0, 1, 0.0);
        let row = ZoneParams::new(4.0, 1, 0.3);
        Self {
            name: "mobile".to_string(),
            card_size: Size::new(50.0, 70.0),
            zones: vec![
                decl(ZoneKind::Hand, 15.0, 84.0, 70.0, 16.0, ZoneParams::new(4.0, 1, 0.5)),
                decl(ZoneKind::Field, 12.0, 58.0, 76.0, 14.0, row),
                decl(ZoneKind::CombatRow, 12.0, 51.0, 76.0, 7.0, row),
                decl(ZoneKind::AzothRow, 12.0, 73.0, 76.0, 10.0, row),
                decl(ZoneKind::Deck, 90.0, 70.0, 9.0, 13.0, stack),
                decl(ZoneKind::Graveyard, 90.0, 85.0, 9.0, 13.0, stack),
                decl(ZoneKind::Removed, 1.0, 85.0, 9.0, 13.0, stack),
                decl(ZoneKind::LifeCards, 1.0, 70.0, 9.0, 13.0, stack),
                decl(ZoneKind::Flag, 1.0, 56.0, 9.0, 13.0, stack),
                decl(ZoneKind::Stack, 90.0, 45.0, 9.0, 10.0, stack),
            ],
            affordances: Affordances {
                tap_to_select: true,
                hover_preview: false,
                long_press_menu: true,
            },
        }
    }

    /// Tablets and phones get the mobile profile.
    #[must_use]
    pub fn for_device(device: &DeviceInfo) -> Self {
        if device.is_mobile() {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    /// Parse and validate a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.card_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::CardSize);
        }
        for zone in &self.zones {
            zone.rect.validate(zone.kind)?;
            zone.params.validate(zone.kind)?;
        }
        Ok(())
    }

    /// Declaration for a zone kind.
    #[must_use]
    pub fn decl(&self, kind: ZoneKind) -> Option<&ZoneLayoutDecl> {
        self.zones.iter().find(|zone| zone.kind == kind)
    }

    /// Arrangement parameters for a zone kind, default when undeclared.
    #[must_use]
    pub fn params(&self, kind: ZoneKind) -> ZoneParams {
        self.decl(kind).map(|zone| zone.params).unwrap_or_default()
    }

    /// Every zone of a variant's table, seen from `local`'s seat.
    ///
    /// The local player's zones are unmirrored, the opponent's mirrored,
    /// shared zones unmirrored. Fails if the profile lacks a rectangle for
    /// any zone the variant uses.
    pub fn declared_zones(
        &self,
        variant: GameVariant,
        local: PlayerId,
    ) -> Result<Vec<DeclaredZone>, ConfigError> {
        let mut zones = Vec::new();

        for player in PlayerId::all() {
            for &kind in variant.zone_kinds() {
                zones.push(DeclaredZone {
                    id: ZoneId::of(player, kind),
                    rect: self.rect(kind)?,
                    mirrored: player != local,
                });
            }
        }
        for &kind in variant.shared_zone_kinds() {
            zones.push(DeclaredZone {
                id: ZoneId::shared(kind),
                rect: self.rect(kind)?,
                mirrored: false,
            });
        }

        Ok(zones)
    }

    fn rect(&self, kind: ZoneKind) -> Result<ZoneRect, ConfigError> {
        self.decl(kind)
            .map(|zone| zone.rect)
            .ok_or_else(|| ConfigError::MissingZone {
                profile: self.name.clone(),
                kind,
            })
    }
}

const fn decl(kind: ZoneKind, x: f32, y: f32, width: f32, height: f32, params: ZoneParams) -> ZoneLayoutDecl {
    ZoneLayoutDecl::new(kind, ZoneRect::percent(x, y, width, height), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{classify, DeviceHints};

    #[test]
    fn test_builtin_profiles_cover_every_kind() {
        for profile in [LayoutProfile::desktop(), LayoutProfile::mobile()] {
            assert!(profile.validate().is_ok());
            for kind in ZoneKind::ALL {
                assert!(profile.decl(kind).is_some(), "{} lacks {kind}", profile.name);
            }
        }
    }

    #[test]
    fn test_for_device() {
        let phone = classify(
            &DeviceHints::new(Size::new(844.0, 390.0))
                .with_platform("iPhone")
                .with_touch(true),
        );
        let desktop = classify(&DeviceHints::new(Size::new(1920.0, 1080.0)));

        assert_eq!(LayoutProfile::for_device(&phone).name, "mobile");
        assert!(LayoutProfile::for_device(&phone).affordances.tap_to_select);
        assert_eq!(LayoutProfile::for_device(&desktop).name, "desktop");
        assert!(LayoutProfile::for_device(&desktop).affordances.hover_preview);
    }

    #[test]
    fn test_mobile_cards_smaller() {
        let desktop = LayoutProfile::desktop();
        let mobile = LayoutProfile::mobile();

        assert!(mobile.card_size.width < desktop.card_size.width);
        assert_eq!(mobile.params(ZoneKind::Field).max_rows, 1);
        assert_eq!(desktop.params(ZoneKind::Field).max_rows, 2);
    }

    #[test]
    fn test_declared_zones_mirror_opponent() {
        let profile = LayoutProfile::desktop();
        let local = PlayerId::new(1);

        let zones = profile.declared_zones(GameVariant::Classic, local).expect("complete profile");

        // 5 zones per player plus the shared stack
        assert_eq!(zones.len(), 11);
        let mine = zones.iter().find(|z| z.id == ZoneId::of(local, ZoneKind::Hand)).expect("hand");
        let theirs = zones
            .iter()
            .find(|z| z.id == ZoneId::of(local.opponent(), ZoneKind::Hand))
            .expect("hand");
        assert!(!mine.mirrored);
        assert!(theirs.mirrored);

        let stack = zones.iter().find(|z| z.id == ZoneId::shared(ZoneKind::Stack)).expect("stack");
        assert!(!stack.mirrored);
    }

    #[test]
    fn test_declared_zones_missing_kind() {
        let mut profile = LayoutProfile::mobile();
        profile.zones.retain(|zone| zone.kind != ZoneKind::Flag);

        assert!(profile.declared_zones(GameVariant::Classic, PlayerId::new(0)).is_ok());
        assert!(matches!(
            profile.declared_zones(GameVariant::Konivrer, PlayerId::new(0)),
            Err(ConfigError::MissingZone { kind: ZoneKind::Flag, .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "tiny",
            "cardSize": { "width": 40, "height": 56 },
            "zones": [
                { "kind": "hand", "rect": { "x": 0, "y": 80, "width": 100, "height": 20 } },
                { "kind": "battlefield", "rect": { "x": 0, "y": 50, "width": 100, "height": 30 },
                  "params": { "maxRows": 3 } }
            ]
        }"#;

        let profile = LayoutProfile::from_json(json).expect("valid profile");

        assert_eq!(profile.name, "tiny");
        assert_eq!(profile.params(ZoneKind::Field).max_rows, 3);
        assert_eq!(profile.params(ZoneKind::Field).card_spacing, 8.0);
        assert!(!profile.affordances.hover_preview);
    }

    #[test]
    fn test_from_json_rejects_bad_card_size() {
        let json = r#"{ "name": "bad", "cardSize": { "width": 0, "height": 56 }, "zones": [] }"#;
        assert!(matches!(LayoutProfile::from_json(json), Err(ConfigError::CardSize)));
    }
}
