//! Cards on the table.
//!
//! `CardData` is the display payload handed in by the host, already resolved
//! from whatever card database it uses. The table never interprets it beyond
//! deriving a `CardClass` from the type line. `Card` adds the session id and
//! the two flags the table mutates: `is_selected` and `is_tapped`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::class::CardClass;
use crate::core::entity::CardId;

/// Opaque display attributes of a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardData {
    pub name: String,
    /// Free-text type line, e.g. `"Creature - Elf"`.
    pub type_line: String,
    pub cost: Option<i64>,
    pub power: Option<i64>,
    pub toughness: Option<i64>,
    /// Elemental / colour tags.
    pub elements: SmallVec<[String; 2]>,
    pub text: String,
}

impl CardData {
    /// Create card data with a name and type line.
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, power: i64, toughness: i64) -> Self {
        self.power = Some(power);
        self.toughness = Some(toughness);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.elements.push(element.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// A card in the session's card table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub data: CardData,
    /// Computed from `data.type_line` at creation.
    pub class: CardClass,
    pub is_selected: bool,
    pub is_tapped: bool,
}

impl Card {
    /// Create an untapped, unselected card.
    #[must_use]
    pub fn new(id: CardId, data: CardData) -> Self {
        let class = CardClass::from_type_line(&data.type_line);
        Self {
            id,
            data,
            class,
            is_selected: false,
            is_tapped: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }
}
