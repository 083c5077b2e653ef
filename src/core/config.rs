//! Table configuration types.
//!
//! The host configures the table at session start by providing:
//! - `GameVariant`: which zone set, phase list and resource pool to use
//! - `DropPolicy`: whether drops are re-validated against the drag's targets
//! - `TableConfig`: variant, drop policy and rules, seat names, mapper constants
//!
//! One generic core serves every variant. Adding a variant means adding its
//! zone list, phases and resources here; nothing else changes.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::interaction::DropRules;
use crate::layout::ArrangeConfig;
use crate::zones::ZoneKind;

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

/// Default world width used by the 3D mapper.
pub const DEFAULT_WORLD_WIDTH: f32 = 20.0;

/// Game variant: decides zone set, phases and resources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameVariant {
    /// Hand, battlefield, library, graveyard, exile.
    #[default]
    Classic,
    /// Hand, field, deck, life cards, flag, azoth row, combat row, removed.
    Konivrer,
}

impl GameVariant {
    /// Per-player zone kinds, in board order. The shared stack is not listed.
    #[must_use]
    pub const fn zone_kinds(self) -> &'static [ZoneKind] {
        match self {
            GameVariant::Classic => &[
                ZoneKind::Hand,
                ZoneKind::Field,
                ZoneKind::Deck,
                ZoneKind::Graveyard,
                ZoneKind::Removed,
            ],
            GameVariant::Konivrer => &[
                ZoneKind::Hand,
                ZoneKind::Field,
                ZoneKind::Deck,
                ZoneKind::LifeCards,
                ZoneKind::Flag,
                ZoneKind::AzothRow,
                ZoneKind::CombatRow,
                ZoneKind::Removed,
            ],
        }
    }

    /// Zones shared by both players.
    #[must_use]
    pub const fn shared_zone_kinds(self) -> &'static [ZoneKind] {
        &[ZoneKind::Stack]
    }

    /// Ordered phase list. Index 0 is the phase a turn starts in.
    #[must_use]
    pub const fn phases(self) -> &'static [Phase] {
        match self {
            GameVariant::Classic => &[
                Phase::Untap,
                Phase::Upkeep,
                Phase::Draw,
                Phase::Main,
                Phase::Combat,
                Phase::SecondMain,
                Phase::End,
            ],
            GameVariant::Konivrer => &[
                Phase::Start,
                Phase::Main,
                Phase::Combat,
                Phase::PostCombat,
                Phase::Refresh,
            ],
        }
    }

    /// Names seeded into each player's resource pool.
    #[must_use]
    pub const fn resource_names(self) -> &'static [&'static str] {
        match self {
            GameVariant::Classic => &["white", "blue", "black", "red", "green", "colorless"],
            GameVariant::Konivrer => &["fire", "water", "earth", "air", "light", "dark", "void"],
        }
    }

    /// Legacy life total.
    #[must_use]
    pub const fn starting_life(self) -> i64 {
        20
    }
}

/// Turn phases across all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Untap,
    Upkeep,
    Draw,
    Main,
    Combat,
    SecondMain,
    End,
    Start,
    PostCombat,
    Refresh,
}

impl Phase {
    /// Stable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Untap => "untap",
            Phase::Upkeep => "upkeep",
            Phase::Draw => "draw",
            Phase::Main => "main",
            Phase::Combat => "combat",
            Phase::SecondMain => "main2",
            Phase::End => "end",
            Phase::Start => "start",
            Phase::PostCombat => "post-combat",
            Phase::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a drop re-checks the targets computed at drag start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropPolicy {
    /// Any drop moves the card. Valid targets are only a highlight hint.
    #[default]
    Permissive,
    /// Drops outside the valid set, or onto a non-droppable zone, are declined.
    Strict,
}

/// Complete table configuration.
///
/// ```
/// use ccg_table::core::{DropPolicy, GameVariant, TableConfig};
///
/// let config = TableConfig::new(GameVariant::Konivrer)
///     .with_drop_policy(DropPolicy::Strict)
///     .with_world_width(30.0);
///
/// assert_eq!(config.variant, GameVariant::Konivrer);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub variant: GameVariant,
    pub drop_policy: DropPolicy,
    /// Which zone kinds a drag offers as targets.
    pub drop_rules: DropRules,
    /// Seat names, index 0 first.
    pub player_names: [String; PLAYER_COUNT],
    /// Width of the board in 3D world units.
    pub world_width: f32,
    /// Per-layout arrangement constants.
    pub arrange: ArrangeConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::default(),
            drop_policy: DropPolicy::default(),
            drop_rules: DropRules::default(),
            player_names: ["Player".to_string(), "Opponent".to_string()],
            world_width: DEFAULT_WORLD_WIDTH,
            arrange: ArrangeConfig::default(),
        }
    }
}

impl TableConfig {
    /// Create a configuration for a variant with default constants.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Set the drop policy.
    #[must_use]
    pub fn with_drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Replace the drop-target rules.
    #[must_use]
    pub fn with_drop_rules(mut self, rules: DropRules) -> Self {
        self.drop_rules = rules;
        self
    }

    /// Set both seat names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Set the 3D world width.
    #[must_use]
    pub fn with_world_width(mut self, width: f32) -> Self {
        self.world_width = width;
        self
    }

    /// Replace the arrangement constants.
    #[must_use]
    pub fn with_arrange(mut self, arrange: ArrangeConfig) -> Self {
        self.arrange = arrange;
        self
    }

    /// Check numeric constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width.is_finite() && self.world_width > 0.0) {
            return Err(ConfigError::WorldWidth(self.world_width));
        }
        self.arrange.validate()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_zone_sets() {
        assert_eq!(GameVariant::Classic.zone_kinds().len(), 5);
        assert_eq!(GameVariant::Konivrer.zone_kinds().len(), 8);

        for variant in [GameVariant::Classic, GameVariant::Konivrer] {
            assert!(variant.zone_kinds().contains(&ZoneKind::Hand));
            assert!(variant.zone_kinds().contains(&ZoneKind::Field));
            assert!(variant.zone_kinds().contains(&ZoneKind::Removed));
            assert!(!variant.zone_kinds().contains(&ZoneKind::Stack));
            assert_eq!(variant.shared_zone_kinds(), &[ZoneKind::Stack]);
        }
    }

    #[test]
    fn test_variant_phases() {
        assert_eq!(GameVariant::Classic.phases()[0], Phase::Untap);
        assert_eq!(GameVariant::Classic.phases().len(), 7);
        assert_eq!(GameVariant::Konivrer.phases()[0], Phase::Start);
        assert_eq!(GameVariant::Konivrer.phases().last(), Some(&Phase::Refresh));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::PostCombat.to_string(), "post-combat");
        assert_eq!(Phase::SecondMain.to_string(), "main2");
    }

    #[test]
    fn test_config_builder() {
        let config = TableConfig::new(GameVariant::Konivrer)
            .with_drop_policy(DropPolicy::Strict)
            .with_player_names("Ann", "Bo")
            .with_world_width(12.0);

        assert_eq!(config.variant, GameVariant::Konivrer);
        assert_eq!(config.drop_policy, DropPolicy::Strict);
        assert_eq!(config.player_names[1], "Bo");
        assert_eq!(config.world_width, 12.0);
    }

    #[test]
    fn test_config_validate_world_width() {
        let config = TableConfig::default().with_world_width(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::WorldWidth(_))));

        let config = TableConfig::default().with_world_width(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = TableConfig::from_json(r#"{ "variant": "konivrer", "dropPolicy": "strict" }"#)
            .expect("valid config");

        assert_eq!(config.variant, GameVariant::Konivrer);
        assert_eq!(config.drop_policy, DropPolicy::Strict);
        assert_eq!(config.world_width, DEFAULT_WORLD_WIDTH);
    }

    #[test]
    fn test_config_from_json_errors() {
        assert!(matches!(
            TableConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TableConfig::from_json(r#"{ "worldWidth": -4.0 }"#),
            Err(ConfigError::WorldWidth(_))
        ));
    }
}
