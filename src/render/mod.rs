//! Render adapters over one game state.
//!
//! ## Key Types
//!
//! - `RenderAdapter`: Card placement and drop hit-testing for one surface
//! - `DomAdapter`: 2D absolutely positioned boxes (pixels, degrees)
//! - `WorldAdapter`: 3D world transforms (world units, radians)
//! - `InputEvent`: Host input routed into a `TableSession`
//!
//! Both adapters read the same `GameState` and `LayoutProfile`; switching
//! between them never changes game semantics.

pub mod dom;
pub mod input;
pub mod world;

use serde::{Deserialize, Serialize};

pub use dom::DomAdapter;
pub use input::{apply_input, InputEvent};
pub use world::WorldAdapter;

use crate::core::{CardId, GameState, PlayerId};
use crate::layout::Point;
use crate::zones::{ZoneId, ZoneVisibility};

/// Placement and hit-testing for one rendering surface.
pub trait RenderAdapter {
    /// A card's on-surface transform.
    type Position: Clone;

    /// Seat shown at the bottom of the screen.
    fn local_player(&self) -> PlayerId;

    /// Position of card `index` of `count` in a zone. `None` if the zone is
    /// not laid out or `index >= count`.
    fn position_card(&self, zone: ZoneId, index: usize, count: usize) -> Option<Self::Position>;

    /// The droppable zone under a viewport point. Non-droppable zones are
    /// transparent to drops.
    fn zone_at(&self, point: Point) -> Option<ZoneId>;
}

/// Cards of one zone as the renderer should draw them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardsView<P> {
    /// One entry per card, bottom first.
    Cards(Vec<(CardId, P)>),
    /// Hidden zone: a single face-down pile, `None` when empty.
    Pile(Option<P>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView<P> {
    pub zone: ZoneId,
    pub count: usize,
    /// Whether card faces are shown to the local player.
    pub face_up: bool,
    pub cards: CardsView<P>,
}

/// Lay out every zone of the table.
#[must_use]
pub fn build_scene<A: RenderAdapter>(adapter: &A, state: &GameState) -> Vec<ZoneView<A::Position>> {
    let local = adapter.local_player();

    state
        .zones()
        .iter()
        .map(|(id, zone)| {
            let count = zone.len();
            let visibility = zone.kind.visibility();
            let face_up = match visibility {
                ZoneVisibility::Public => true,
                ZoneVisibility::OwnerOnly => id.owner == Some(local),
                ZoneVisibility::Hidden => false,
            };
            let cards = match visibility {
                ZoneVisibility::Hidden => {
                    CardsView::Pile((count > 0).then(|| adapter.position_card(id, 0, 1)).flatten())
                }
                _ => CardsView::Cards(
                    zone.cards()
                        .iter()
                        .enumerate()
                        .filter_map(|(index, &card)| {
                            adapter.position_card(id, index, count).map(|pos| (card, pos))
                        })
                        .collect(),
                ),
            };
            ZoneView {
                zone: id,
                count,
                face_up,
                cards,
            }
        })
        .collect()
}
