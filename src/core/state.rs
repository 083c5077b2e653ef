//! Game state: players, zones, cards, turn progression.
//!
//! ## GameState
//!
//! - Two seated players (name, life, resource pool)
//! - Zone manager holding every zone's ordered card ids
//! - Card table: `CardId -> Card`, the single owner of card payloads
//! - Current player, turn counter, phase index
//!
//! Uses `im` persistent collections so a snapshot clone for the render
//! adapter is O(1).
//!
//! ## Card uniqueness
//!
//! A card id sits in exactly one zone. Zones only ever gain an id through
//! `spawn_card` (fresh id) or `move_card` (removed from its old zone first),
//! and `check_invariants` verifies this mechanically.

use im::HashMap as ImHashMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{GameVariant, Phase, TableConfig, PLAYER_COUNT};
use super::entity::CardId;
use super::error::{InvariantViolation, MoveError};
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{Card, CardData};
use crate::zones::{Zone, ZoneId, ZoneKind, ZoneManager};

/// Where a successful move took a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub card: CardId,
    pub from: ZoneId,
    pub to: ZoneId,
}

/// Full table state.
///
/// Deserialization validates the snapshot: the phase index, seats and
/// card counter must be in range and `check_invariants` must pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameStateRepr")]
pub struct GameState {
    variant: GameVariant,

    /// Seated players.
    pub players: PlayerMap<Player>,

    /// Zone manager for card locations.
    zones: ZoneManager,

    /// Card payloads by id.
    cards: ImHashMap<CardId, Card>,

    /// Whose turn it is.
    current_player: PlayerId,

    /// Turn number (starts at 1).
    turn: u32,

    /// Index into `variant.phases()`.
    phase_index: usize,

    /// Next card id to allocate.
    next_card_id: u32,
}

impl GameState {
    /// Create an empty table for a variant with default seat names.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        Self::from_config(&TableConfig::new(variant))
    }

    /// Create an empty table from a configuration.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        let variant = config.variant;
        Self {
            variant,
            players: PlayerMap::new(|id| {
                Player::new(id, config.player_names[id.index()].clone(), variant)
            }),
            zones: ZoneManager::new(variant),
            cards: ImHashMap::new(),
            current_player: PlayerId::new(0),
            turn: 1,
            phase_index: 0,
            next_card_id: 1,
        }
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    // === Turn Progression ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.variant.phases()[self.phase_index]
    }

    /// Hand the turn to the other player and restart the phase list.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn += 1;
        self.phase_index = 0;
    }

    /// Step to the next phase. Past the last phase the turn advances.
    ///
    /// Returns `true` if the turn changed.
    pub fn advance_phase(&mut self) -> bool {
        if self.phase_index + 1 < self.variant.phases().len() {
            self.phase_index += 1;
            false
        } else {
            self.advance_turn();
            true
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    // === Zones ===

    /// Read-only zone manager.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.zone(id)
    }

    /// Cards of a zone in visual order. Empty for unknown zones.
    pub fn cards_in(&self, id: ZoneId) -> impl Iterator<Item = &Card> + '_ {
        self.zones
            .zone(id)
            .into_iter()
            .flat_map(|zone| zone.cards().iter())
            .filter_map(move |card| self.cards.get(card))
    }

    /// The zone holding a card, or `None` if it is not on the table.
    #[must_use]
    pub fn find_zone_of_card(&self, card: CardId) -> Option<ZoneId> {
        self.zones.find(card)
    }

    // === Cards ===

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Place a new card on top of a zone.
    ///
    /// Card data comes from outside (deck lists, card lookup); the table
    /// only allocates the id.
    pub fn spawn_card(
        &mut self,
        player: PlayerId,
        kind: ZoneKind,
        data: CardData,
    ) -> Result<CardId, MoveError> {
        let target = ZoneId::of(player, kind);
        let id = CardId::new(self.next_card_id);

        self.zones.insert(id, target)?;
        self.next_card_id += 1;
        self.cards.insert(id, Card::new(id, data));

        debug!(card = %id, zone = %target, "spawned card");
        Ok(id)
    }

    /// Move a card to the end of `kind` for `player`.
    ///
    /// Clears `is_selected` always, and `is_tapped` unless the target is the
    /// field. Shared kinds resolve to the shared zone regardless of
    /// `player`. On error nothing changes.
    pub fn move_card(
        &mut self,
        card: CardId,
        kind: ZoneKind,
        player: PlayerId,
    ) -> Result<MoveOutcome, MoveError> {
        let target = ZoneId::of(player, kind);
        if !self.cards.contains_key(&card) {
            return Err(MoveError::CardNotFound(card));
        }

        let from = self.zones.relocate(card, target)?;
        if let Some(moved) = self.cards.get_mut(&card) {
            moved.is_selected = false;
            if kind != ZoneKind::Field {
                moved.is_tapped = false;
            }
        }

        debug!(card = %card, from = %from, to = %target, "moved card");
        Ok(MoveOutcome {
            card,
            from,
            to: target,
        })
    }

    /// Verify every card sits in exactly one zone and every zone entry
    /// refers to a known card.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashMap<CardId, usize> = FxHashMap::default();

        for (zone_id, zone) in self.zones.iter() {
            for &card in zone.cards() {
                if !self.cards.contains_key(&card) {
                    return Err(InvariantViolation::Dangling {
                        zone: zone_id,
                        card,
                    });
                }
                *seen.entry(card).or_insert(0) += 1;
            }
        }

        for &card in self.cards.keys() {
            match seen.get(&card).copied().unwrap_or(0) {
                0 => return Err(InvariantViolation::Orphaned(card)),
                1 => {}
                count => return Err(InvariantViolation::Duplicated { card, count }),
            }
        }
        Ok(())
    }
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRepr {
    variant: GameVariant,
    players: PlayerMap<Player>,
    zones: ZoneManager,
    cards: ImHashMap<CardId, Card>,
    current_player: PlayerId,
    turn: u32,
    phase_index: usize,
    next_card_id: u32,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = InvariantViolation;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let phases = repr.variant.phases().len();
        if repr.phase_index >= phases {
            return Err(InvariantViolation::PhaseOutOfRange {
                index: repr.phase_index,
                phases,
            });
        }
        if repr.zones.variant() != repr.variant {
            return Err(InvariantViolation::ZoneSet(repr.variant));
        }
        let seats = repr.players.iter().count();
        if seats != PLAYER_COUNT {
            return Err(InvariantViolation::SeatCount(seats));
        }
        if repr.current_player.index() >= PLAYER_COUNT {
            return Err(InvariantViolation::UnknownSeat(repr.current_player));
        }
        for (&key, card) in repr.cards.iter() {
            if card.id != key {
                return Err(InvariantViolation::Mislabeled { key, card: card.id });
            }
            if key.raw() >= repr.next_card_id {
                return Err(InvariantViolation::StaleCounter {
                    next: repr.next_card_id,
                    card: key,
                });
            }
        }

        let state = Self {
            variant: repr.variant,
            players: repr.players,
            zones: repr.zones,
            cards: repr.cards,
            current_player: repr.current_player,
            turn: repr.turn,
            phase_index: repr.phase_index,
            next_card_id: repr.next_card_id,
        };
        state.check_invariants()?;
        Ok(state)
    }
}
