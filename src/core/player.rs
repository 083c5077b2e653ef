//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. A match always has exactly two players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Name, legacy life total and the named resource pool. The player's
//! zones are held by the `ZoneManager`, keyed by the same `PlayerId`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{GameVariant, PLAYER_COUNT};

/// Player identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a two-player match.
    ///
    /// ```
    /// use ccg_table::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(((self.0 as usize + 1) % PLAYER_COUNT) as u8)
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use ccg_table::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::new(|_| 20);
/// life[PlayerId::new(1)] -= 3;
/// assert_eq!(life[PlayerId::new(0)], 20);
/// assert_eq!(life[PlayerId::new(1)], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    ///
    /// Returns `None` for a seat index outside the match.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player: display name, legacy life and resource pool.
///
/// Resource counters are opaque to the table core. Variants seed the pool
/// with their element names at zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Legacy life scalar kept alongside life cards.
    pub life: i64,
    /// Named counters (mana colours, azoth elements).
    pub resources: FxHashMap<String, i64>,
}

impl Player {
    /// Create a player seeded for the given variant.
    pub fn new(id: PlayerId, name: impl Into<String>, variant: GameVariant) -> Self {
        let resources = variant
            .resource_names()
            .iter()
            .map(|name| ((*name).to_string(), 0))
            .collect();

        Self {
            id,
            name: name.into(),
            life: variant.starting_life(),
            resources,
        }
    }

    /// Get a resource counter, 0 if absent.
    #[must_use]
    pub fn resource(&self, key: &str) -> i64 {
        self.resources.get(key).copied().unwrap_or(0)
    }

    /// Set a resource counter.
    pub fn set_resource(&mut self, key: impl Into<String>, value: i64) {
        self.resources.insert(key.into(), value);
    }

    /// Modify a resource counter by delta.
    pub fn modify_resource(&mut self, key: &str, delta: i64) {
        *self.resources.entry(key.to_string()).or_insert(0) += delta;
    }
}
