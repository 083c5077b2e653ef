//! Host input routed into a session.
//!
//! The host translates raw pointer and touch events into `InputEvent`s
//! (long-press detection included) and calls `apply_input` with the
//! adapter that drew the frame, so drops are hit-tested against what the
//! player actually saw.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::RenderAdapter;
use crate::core::CardId;
use crate::interaction::TableSession;
use crate::layout::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    /// Primary click or tap.
    CardPress { card: CardId },
    CardDoubleClick { card: CardId },
    /// Secondary click or long press.
    CardSecondary { card: CardId },
    /// `grab` is the pointer's offset from the card's top-left corner.
    DragStart { card: CardId, grab: Point },
    /// Pointer released at a viewport point while dragging.
    DropAt { point: Point },
    DragCancel,
    NextPhase,
    NextTurn,
}

/// Apply one input event to the session.
///
/// A drop over no droppable zone cancels the drag.
pub fn apply_input<A: RenderAdapter>(session: &mut TableSession, adapter: &A, event: InputEvent) {
    trace!(?event, "input");
    match event {
        InputEvent::CardPress { card } => session.select_card(card),
        InputEvent::CardDoubleClick { card } => session.double_click_card(card),
        InputEvent::CardSecondary { card } => session.toggle_tap(card),
        InputEvent::DragStart { card, grab } => session.start_drag(card, grab),
        InputEvent::DropAt { point } => match adapter.zone_at(point) {
            Some(zone) => session.handle_zone_drop(zone),
            None => session.end_drag(),
        },
        InputEvent::DragCancel => session.end_drag(),
        InputEvent::NextPhase => session.next_phase(),
        InputEvent::NextTurn => session.next_turn(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;
    use crate::core::PlayerId;
    use crate::device::LayoutProfile;
    use crate::layout::Size;
    use crate::render::DomAdapter;
    use crate::zones::{ZoneId, ZoneKind};

    const P0: PlayerId = PlayerId(0);

    fn setup() -> (TableSession, DomAdapter, CardId) {
        let mut session = TableSession::default();
        let card = session
            .spawn_card(P0, ZoneKind::Hand, CardData::new("Bears", "Creature"))
            .unwrap();
        let dom = DomAdapter::new(
            &LayoutProfile::desktop(),
            session.config(),
            P0,
            Size::new(1000.0, 800.0),
        )
        .unwrap();
        (session, dom, card)
    }

    #[test]
    fn test_drag_and_drop_onto_field() {
        let (mut session, dom, card) = setup();
        let field = ZoneId::of(P0, ZoneKind::Field);
        let target = dom.zone(field).unwrap().rect.center();

        apply_input(&mut session, &dom, InputEvent::DragStart { card, grab: Point::new(10.0, 10.0) });
        apply_input(&mut session, &dom, InputEvent::DropAt { point: target });

        assert_eq!(session.state().find_zone_of_card(card), Some(field));
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_drop_on_empty_space_cancels() {
        let (mut session, dom, card) = setup();

        apply_input(&mut session, &dom, InputEvent::DragStart { card, grab: Point::default() });
        apply_input(&mut session, &dom, InputEvent::DropAt { point: Point::new(5.0, 400.0) });

        assert_eq!(session.state().find_zone_of_card(card), Some(ZoneId::of(P0, ZoneKind::Hand)));
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_secondary_taps() {
        let (mut session, dom, card) = setup();

        apply_input(&mut session, &dom, InputEvent::CardSecondary { card });

        assert!(session.state().card(card).unwrap().is_tapped);
    }

    #[test]
    fn test_turn_inputs() {
        let (mut session, dom, _) = setup();

        apply_input(&mut session, &dom, InputEvent::NextTurn);

        assert_eq!(session.state().turn(), 2);
    }
}
