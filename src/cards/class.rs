//! Card type classes.
//!
//! The table only cares about a card's broad class: whether double-click
//! sends it to the field or the stack, and whether dragging it may target
//! the stack. The class is computed once from the type line when the card
//! is created.

use serde::{Deserialize, Serialize};

/// Broad card class derived from the type line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardClass {
    /// Lands and azoth: resource permanents.
    Land,
    /// Creatures and familiars.
    Creature,
    /// Instants, sorceries, spells.
    Instant,
    #[default]
    Other,
}

impl CardClass {
    /// Classify a free-text type line such as `"Legendary Creature - Elf"`.
    ///
    /// Matching is by whole word, case-insensitive. Land beats creature
    /// beats instant when a line carries more than one.
    ///
    /// ```
    /// use ccg_table::cards::CardClass;
    ///
    /// assert_eq!(CardClass::from_type_line("Basic Land - Forest"), CardClass::Land);
    /// assert_eq!(CardClass::from_type_line("Artifact Creature"), CardClass::Creature);
    /// assert_eq!(CardClass::from_type_line("Sorcery"), CardClass::Instant);
    /// assert_eq!(CardClass::from_type_line("Enchantment"), CardClass::Other);
    /// ```
    #[must_use]
    pub fn from_type_line(type_line: &str) -> Self {
        let lower = type_line.to_ascii_lowercase();
        let has = |words: &[&str]| {
            lower
                .split(|c: char| !c.is_ascii_alphabetic())
                .any(|token| words.contains(&token))
        };

        if has(&["land", "azoth"]) {
            CardClass::Land
        } else if has(&["creature", "familiar"]) {
            CardClass::Creature
        } else if has(&["instant", "sorcery", "spell"]) {
            CardClass::Instant
        } else {
            CardClass::Other
        }
    }

    /// Lands and creatures go to the field on auto-play.
    #[must_use]
    pub const fn is_permanent_like(self) -> bool {
        matches!(self, CardClass::Land | CardClass::Creature)
    }

    #[must_use]
    pub const fn is_instant_like(self) -> bool {
        matches!(self, CardClass::Instant)
    }
}
