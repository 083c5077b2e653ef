//! Card identification.
//!
//! Every card placed on the table gets a `CardId` from the game state's
//! allocator. Ids are stable for the whole session and never reused, so a
//! stale id handed back by a render adapter resolves to "not found" rather
//! than to a different card.
//!
//! ```
//! use ccg_table::core::CardId;
//!
//! let id = CardId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(format!("{}", id), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in the session's card arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
