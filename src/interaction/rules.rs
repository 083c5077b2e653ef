//! Declarative drop-target rules.
//!
//! Valid targets for a drag are the `always` kinds plus every conditional
//! rule matching the dragged card's class. Rules are data so variants and
//! hosts can extend them without touching the session.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::CardClass;
use crate::zones::ZoneKind;

/// Zone kinds a drag highlights. Rarely more than four.
pub type TargetSet = SmallVec<[ZoneKind; 4]>;

/// Cards of `class` may also be dropped on `zone`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropRule {
    pub class: CardClass,
    pub zone: ZoneKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropRules {
    /// Targets offered for every card.
    pub always: TargetSet,
    pub conditional: Vec<DropRule>,
}

impl Default for DropRules {
    fn default() -> Self {
        Self {
            always: smallvec![ZoneKind::Field, ZoneKind::Removed, ZoneKind::Hand],
            conditional: vec![DropRule {
                class: CardClass::Instant,
                zone: ZoneKind::Stack,
            }],
        }
    }
}

impl DropRules {
    /// Rules with no targets at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            always: SmallVec::new(),
            conditional: Vec::new(),
        }
    }

    /// Offer `kind` for every card.
    #[must_use]
    pub fn with_always(mut self, kind: ZoneKind) -> Self {
        if !self.always.contains(&kind) {
            self.always.push(kind);
        }
        self
    }

    /// Offer `kind` for cards of `class`.
    #[must_use]
    pub fn with_rule(mut self, class: CardClass, kind: ZoneKind) -> Self {
        self.conditional.push(DropRule { class, zone: kind });
        self
    }

    /// Valid targets for a card class, without duplicates, in rule order.
    #[must_use]
    pub fn targets_for(&self, class: CardClass) -> TargetSet {
        let mut targets = self.always.clone();
        for rule in self.conditional.iter().filter(|rule| rule.class == class) {
            if !targets.contains(&rule.zone) {
                targets.push(rule.zone);
            }
        }
        targets
    }
}
