//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` holds every zone on the table: one instance of each of
//! the variant's zone kinds per player, plus the shared zones. Zones store
//! ordered `CardId` lists; the cards themselves live in the game state's
//! card table. It supports:
//! - Card lookup by id (linear scan, never panics)
//! - Append-to-end movement, including re-appending into the same zone
//! - Zone iteration in board order

use im::Vector;
use serde::{Deserialize, Serialize};

use super::kind::ZoneKind;
use crate::core::config::{GameVariant, PLAYER_COUNT};
use crate::core::entity::CardId;
use crate::core::error::{InvariantViolation, MoveError};
use crate::core::player::{PlayerId, PlayerMap};

/// Address of one zone on the table.
///
/// `owner` is `None` only for shared zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId {
    pub owner: Option<PlayerId>,
    pub kind: ZoneKind,
}

impl ZoneId {
    /// The zone of `kind` as seen from `player`.
    ///
    /// Shared kinds resolve to the single shared instance.
    ///
    /// ```
    /// use ccg_table::core::PlayerId;
    /// use ccg_table::zones::{ZoneId, ZoneKind};
    ///
    /// let hand = ZoneId::of(PlayerId::new(1), ZoneKind::Hand);
    /// assert_eq!(hand.owner, Some(PlayerId::new(1)));
    ///
    /// let stack = ZoneId::of(PlayerId::new(1), ZoneKind::Stack);
    /// assert_eq!(stack, ZoneId::shared(ZoneKind::Stack));
    /// ```
    #[must_use]
    pub const fn of(player: PlayerId, kind: ZoneKind) -> Self {
        if kind.is_shared() {
            Self::shared(kind)
        } else {
            Self {
                owner: Some(player),
                kind,
            }
        }
    }

    /// A shared zone.
    #[must_use]
    pub const fn shared(kind: ZoneKind) -> Self {
        Self { owner: None, kind }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.owner {
            Some(player) => write!(f, "{} ({})", self.kind, player),
            None => write!(f, "{} (shared)", self.kind),
        }
    }
}

/// One zone: an ordered card list.
///
/// Insertion order is visual order; the last card is on top. Layout,
/// visibility and droppability come from the kind's capability table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    cards: Vector<CardId>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(kind: ZoneKind) -> Self {
        Self {
            kind,
            cards: Vector::new(),
        }
    }

    /// Cards in visual order.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardId> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Index of a card within this zone.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    /// The top (last appended) card.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    fn push(&mut self, card: CardId) {
        self.cards.push_back(card);
    }

    fn take(&mut self, card: CardId) -> bool {
        match self.position(card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Manages card locations across every zone on the table.
///
/// ## Usage
///
/// ```
/// use ccg_table::core::{CardId, GameVariant, PlayerId};
/// use ccg_table::zones::{ZoneId, ZoneKind, ZoneManager};
///
/// let mut zones = ZoneManager::new(GameVariant::Classic);
/// let hand = ZoneId::of(PlayerId::new(0), ZoneKind::Hand);
/// let field = ZoneId::of(PlayerId::new(0), ZoneKind::Field);
///
/// zones.insert(CardId(1), hand).unwrap();
/// zones.relocate(CardId(1), field).unwrap();
///
/// assert_eq!(zones.find(CardId(1)), Some(field));
/// ```
///
/// Deserialization rejects zone lists that do not match the variant's
/// zone set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ZoneManagerRepr")]
pub struct ZoneManager {
    variant: GameVariant,
    /// Per-player zones in the variant's board order.
    players: PlayerMap<Vec<Zone>>,
    shared: Vec<Zone>,
}

impl ZoneManager {
    /// Create empty zones for a variant.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        let players = PlayerMap::new(|_| {
            variant.zone_kinds().iter().copied().map(Zone::new).collect()
        });
        let shared = variant
            .shared_zone_kinds()
            .iter()
            .copied()
            .map(Zone::new)
            .collect();

        Self {
            variant,
            players,
            shared,
        }
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// Look up a zone. `None` if the address is not part of this table.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        let zones = match id.owner {
            Some(player) => self.players.get(player)?,
            None => &self.shared,
        };
        zones.iter().find(|zone| zone.kind == id.kind)
    }

    fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        let zones = match id.owner {
            Some(player) => self.players.get_mut(player)?,
            None => &mut self.shared,
        };
        zones.iter_mut().find(|zone| zone.kind == id.kind)
    }

    /// Whether the address names a zone on this table.
    #[must_use]
    pub fn has_zone(&self, id: ZoneId) -> bool {
        self.zone(id).is_some()
    }

    /// All zones with their addresses, players first, then shared zones.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &Zone)> + '_ {
        let owned = self.players.iter().flat_map(|(player, zones)| {
            zones.iter().map(move |zone| (ZoneId::of(player, zone.kind), zone))
        });
        let shared = self
            .shared
            .iter()
            .map(|zone| (ZoneId::shared(zone.kind), zone));
        owned.chain(shared)
    }

    /// Find the zone currently holding a card.
    #[must_use]
    pub fn find(&self, card: CardId) -> Option<ZoneId> {
        self.iter()
            .find(|(_, zone)| zone.contains(card))
            .map(|(id, _)| id)
    }

    /// Append a card that is not on the table yet.
    ///
    /// Fails without changing anything if the zone does not exist or the
    /// card is already placed somewhere.
    pub fn insert(&mut self, card: CardId, target: ZoneId) -> Result<(), MoveError> {
        if self.find(card).is_some() {
            return Err(MoveError::AlreadyPlaced(card));
        }
        let zone = self.zone_mut(target).ok_or_else(|| unknown_zone(target))?;
        zone.push(card);
        Ok(())
    }

    /// Move a card to the end of `target`, returning the zone it left.
    ///
    /// Moving into the card's own zone re-appends it on top.
    pub fn relocate(&mut self, card: CardId, target: ZoneId) -> Result<ZoneId, MoveError> {
        if !self.has_zone(target) {
            return Err(unknown_zone(target));
        }
        let source = self.find(card).ok_or(MoveError::CardNotFound(card))?;

        if let Some(zone) = self.zone_mut(source) {
            zone.take(card);
        }
        if let Some(zone) = self.zone_mut(target) {
            zone.push(card);
        }
        Ok(source)
    }

    /// Remove a card from the table entirely.
    pub fn remove(&mut self, card: CardId) -> Option<ZoneId> {
        let source = self.find(card)?;
        self.zone_mut(source)?.take(card);
        Some(source)
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.iter().map(|(_, zone)| zone.len()).sum()
    }
}

/// Unchecked wire form of `ZoneManager`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoneManagerRepr {
    variant: GameVariant,
    players: PlayerMap<Vec<Zone>>,
    shared: Vec<Zone>,
}

impl TryFrom<ZoneManagerRepr> for ZoneManager {
    type Error = InvariantViolation;

    fn try_from(repr: ZoneManagerRepr) -> Result<Self, Self::Error> {
        let variant = repr.variant;
        let same_kinds = |zones: &[Zone], kinds: &[ZoneKind]| {
            zones.len() == kinds.len() && zones.iter().zip(kinds).all(|(zone, kind)| zone.kind == *kind)
        };

        let seats = repr.players.iter().count();
        if seats != PLAYER_COUNT {
            return Err(InvariantViolation::SeatCount(seats));
        }
        let owned_ok = repr
            .players
            .iter()
            .all(|(_, zones)| same_kinds(zones, variant.zone_kinds()));
        if !owned_ok || !same_kinds(&repr.shared, variant.shared_zone_kinds()) {
            return Err(InvariantViolation::ZoneSet(variant));
        }

        Ok(Self {
            variant,
            players: repr.players,
            shared: repr.shared,
        })
    }
}

fn unknown_zone(target: ZoneId) -> MoveError {
    MoveError::UnknownZone { zone: target }
}
