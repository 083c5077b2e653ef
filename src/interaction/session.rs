//! The table session: selection, tapping, drag-and-drop, turn flow.
//!
//! ## Transitions
//!
//! - `Idle --start_drag(card)--> Dragging(card)`
//! - `Dragging --handle_zone_drop(zone)--> Idle` (card moved, or declined
//!   under `DropPolicy::Strict`)
//! - `Dragging --end_drag--> Idle` (no move)
//! - `Dragging --start_drag(other)--> Dragging(other)` (replaced wholesale)
//!
//! Operations never fail from the caller's point of view: a declined
//! mutation is logged at `debug` and leaves the session untouched. Every
//! effective change bumps `revision` and records a `TableEvent`.

use tracing::debug;

use super::drag::{ActiveDrag, DragState};
use super::event::TableEvent;
use crate::cards::CardData;
use crate::core::{CardId, ConfigError, DropPolicy, GameState, MoveError, PlayerId, TableConfig};
use crate::layout::Point;
use crate::zones::{ZoneId, ZoneKind};

#[derive(Clone, Debug)]
pub struct TableSession {
    config: TableConfig,
    state: GameState,
    drag: DragState,
    /// Selected card ids, in selection order.
    selected: Vec<CardId>,
    revision: u64,
    events: Vec<TableEvent>,
}

impl Default for TableSession {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl TableSession {
    /// Create a session with an empty table.
    ///
    /// The session never reads the numeric layout constants, so nothing is
    /// checked here. Render adapters validate on construction; `try_new`
    /// validates up front.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let state = GameState::from_config(&config);
        Self {
            config,
            state,
            drag: DragState::Idle,
            selected: Vec::new(),
            revision: 0,
            events: Vec::new(),
        }
    }

    /// Create a session after validating the configuration.
    pub fn try_new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    /// Incremented on every effective change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    // === Cards ===

    /// Place a new card in a zone. Returns `None` if the zone is not on
    /// this table.
    pub fn spawn_card(&mut self, player: PlayerId, kind: ZoneKind, data: CardData) -> Option<CardId> {
        match self.state.spawn_card(player, kind, data) {
            Ok(card) => {
                let zone = ZoneId::of(player, kind);
                self.emit(TableEvent::CardSpawned { card, zone });
                Some(card)
            }
            Err(err) => {
                debug!(error = %err, "spawn declined");
                None
            }
        }
    }

    /// Move a card to the end of a zone. Silent no-op on failure.
    pub fn move_card(&mut self, card: CardId, kind: ZoneKind, player: PlayerId) {
        if let Err(err) = self.apply_move(card, kind, player) {
            debug!(error = %err, "move declined");
        }
    }

    /// Toggle a card's selection.
    pub fn select_card(&mut self, card: CardId) {
        let Some(entry) = self.state.card_mut(card) else {
            debug!(card = %card, "select on unknown card");
            return;
        };
        entry.is_selected = !entry.is_selected;
        let selected = entry.is_selected;

        if selected {
            self.selected.push(card);
        } else {
            self.selected.retain(|&id| id != card);
        }
        self.emit(TableEvent::CardSelected { card, selected });
    }

    /// Flip a card's tapped flag. Secondary click and long press both land
    /// here.
    pub fn toggle_tap(&mut self, card: CardId) {
        let Some(entry) = self.state.card_mut(card) else {
            debug!(card = %card, "tap on unknown card");
            return;
        };
        entry.is_tapped = !entry.is_tapped;
        let tapped = entry.is_tapped;

        self.emit(TableEvent::CardTapped { card, tapped });
    }

    /// Auto-play: lands and creatures go to the field, everything else to
    /// the stack. Does not touch the drag state.
    pub fn double_click_card(&mut self, card: CardId) {
        let Some(class) = self.state.card(card).map(|c| c.class) else {
            debug!(card = %card, "double click on unknown card");
            return;
        };
        let kind = if class.is_permanent_like() {
            ZoneKind::Field
        } else {
            ZoneKind::Stack
        };
        let player = self
            .state
            .find_zone_of_card(card)
            .and_then(|zone| zone.owner)
            .unwrap_or_else(|| self.state.current_player());

        self.move_card(card, kind, player);
    }

    // === Drag and Drop ===

    /// Pick up a card. Any drag in progress is replaced.
    pub fn start_drag(&mut self, card: CardId, grab_offset: Point) {
        let (Some(snapshot), Some(source)) = (self.state.card(card), self.state.find_zone_of_card(card))
        else {
            debug!(card = %card, "drag on unknown card");
            return;
        };
        let valid_targets = self.config.drop_rules.targets_for(snapshot.class);

        self.drag = DragState::Dragging(ActiveDrag {
            card: snapshot.clone(),
            grab_offset,
            source,
            valid_targets: valid_targets.clone(),
        });
        self.emit(TableEvent::DragStarted {
            card,
            source,
            valid_targets,
        });
    }

    /// Drop the held card without moving it.
    pub fn end_drag(&mut self) {
        if let DragState::Dragging(drag) = std::mem::take(&mut self.drag) {
            self.emit(TableEvent::DragEnded { card: drag.card.id });
        }
    }

    /// Drop the held card on a zone. Always returns to `Idle`.
    pub fn handle_zone_drop(&mut self, target: ZoneId) {
        let DragState::Dragging(drag) = std::mem::take(&mut self.drag) else {
            return;
        };
        let card = drag.card.id;
        let player = target.owner.unwrap_or_else(|| self.state.current_player());

        let result = if !self.state.zones().has_zone(target) {
            Err(MoveError::UnknownZone { zone: target })
        } else if self.config.drop_policy == DropPolicy::Strict
            && !(drag.valid_targets.contains(&target.kind) && target.kind.is_droppable())
        {
            Err(MoveError::DropRejected { target })
        } else {
            self.apply_move(card, target.kind, player)
        };

        if let Err(err) = result {
            debug!(error = %err, "drop declined");
            self.emit(TableEvent::DragEnded { card });
        }
    }

    // === Turn Flow ===

    /// Pass the turn; the phase restarts at the variant's first phase.
    pub fn next_turn(&mut self) {
        self.state.advance_turn();
        self.emit_turn();
    }

    /// Step to the next phase, passing the turn after the last one.
    pub fn next_phase(&mut self) {
        if self.state.advance_phase() {
            self.emit_turn();
        } else {
            let phase = self.state.phase();
            self.emit(TableEvent::PhaseChanged { phase });
        }
    }

    /// Fresh table with the same configuration.
    pub fn reset(&mut self) {
        self.state = GameState::from_config(&self.config);
        self.drag = DragState::Idle;
        self.selected.clear();
        self.emit(TableEvent::Reset);
    }

    // === Internals ===

    fn apply_move(&mut self, card: CardId, kind: ZoneKind, player: PlayerId) -> Result<(), MoveError> {
        let outcome = self.state.move_card(card, kind, player)?;
        self.selected.retain(|&id| id != card);
        self.emit(TableEvent::CardMoved(outcome));
        Ok(())
    }

    fn emit_turn(&mut self) {
        let turn = self.state.turn();
        let player = self.state.current_player();
        debug!(turn, player = %player, "turn passed");
        self.emit(TableEvent::TurnChanged { turn, player });
        let phase = self.state.phase();
        self.emit(TableEvent::PhaseChanged { phase });
    }

    fn emit(&mut self, event: TableEvent) {
        self.revision += 1;
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameVariant, Phase};

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn hand(player: PlayerId) -> ZoneId {
        ZoneId::of(player, ZoneKind::Hand)
    }

    fn ids(session: &TableSession, zone: ZoneId) -> Vec<CardId> {
        session.state().cards_in(zone).map(|card| card.id).collect()
    }

    fn session_with_hand() -> (TableSession, CardId, CardId, CardId) {
        let mut session = TableSession::default();
        let a = session
            .spawn_card(P0, ZoneKind::Hand, CardData::new("Bears", "Creature - Bear"))
            .unwrap();
        let b = session
            .spawn_card(P0, ZoneKind::Hand, CardData::new("Growth", "Enchantment"))
            .unwrap();
        let c = session
            .spawn_card(P0, ZoneKind::Hand, CardData::new("Shock", "Instant"))
            .unwrap();
        (session, a, b, c)
    }

    #[test]
    fn test_select_toggles_and_tracks_list() {
        let (mut session, a, b, _) = session_with_hand();

        session.select_card(a);
        session.select_card(b);
        assert_eq!(session.selected(), &[a, b]);
        assert!(session.state().card(a).unwrap().is_selected);

        session.select_card(a);
        assert_eq!(session.selected(), &[b]);
        assert!(!session.state().card(a).unwrap().is_selected);
    }

    #[test]
    fn test_unknown_card_is_noop() {
        let (mut session, ..) = session_with_hand();
        let before = session.revision();

        session.select_card(CardId::new(99));
        session.toggle_tap(CardId::new(99));
        session.start_drag(CardId::new(99), Point::default());
        session.double_click_card(CardId::new(99));
        session.move_card(CardId::new(99), ZoneKind::Field, P0);

        assert_eq!(session.revision(), before);
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_toggle_tap() {
        let (mut session, a, ..) = session_with_hand();

        session.toggle_tap(a);
        assert!(session.state().card(a).unwrap().is_tapped);
        session.toggle_tap(a);
        assert!(!session.state().card(a).unwrap().is_tapped);
    }

    #[test]
    fn test_double_click_routes_by_class() {
        let (mut session, a, b, c) = session_with_hand();
        session.select_card(a);

        session.double_click_card(a);
        session.double_click_card(c);

        assert_eq!(ids(&session, ZoneId::of(P0, ZoneKind::Field)), vec![a]);
        assert_eq!(ids(&session, ZoneId::shared(ZoneKind::Stack)), vec![c]);
        assert_eq!(ids(&session, hand(P0)), vec![b]);
        assert!(session.selected().is_empty());
    }

    #[test]
    fn test_double_click_uses_owner_not_current_player() {
        let mut session = TableSession::default();
        let card = session
            .spawn_card(P1, ZoneKind::Hand, CardData::new("Forest", "Basic Land"))
            .unwrap();

        session.double_click_card(card);

        assert_eq!(ids(&session, ZoneId::of(P1, ZoneKind::Field)), vec![card]);
    }

    #[test]
    fn test_start_drag_computes_targets() {
        let (mut session, a, _, c) = session_with_hand();

        session.start_drag(a, Point::new(5.0, 5.0));
        assert!(!session.drag().is_valid_target(ZoneKind::Stack));
        assert_eq!(session.drag().source(), Some(hand(P0)));

        session.start_drag(c, Point::new(1.0, 2.0));
        assert_eq!(session.drag().dragged_id(), Some(c));
        assert!(session.drag().is_valid_target(ZoneKind::Stack));
        assert_eq!(session.drag().grab_offset(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let (mut session, a, ..) = session_with_hand();
        session.start_drag(a, Point::default());

        session.end_drag();
        let after_first = session.revision();
        session.end_drag();

        assert!(!session.drag().is_dragging());
        assert_eq!(session.revision(), after_first);
        assert_eq!(ids(&session, hand(P0)).len(), 3);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let (mut session, ..) = session_with_hand();
        let before = session.revision();

        session.handle_zone_drop(ZoneId::of(P0, ZoneKind::Field));

        assert_eq!(session.revision(), before);
    }

    #[test]
    fn test_permissive_drop_ignores_targets() {
        let (mut session, _, b, _) = session_with_hand();

        session.start_drag(b, Point::default());
        session.handle_zone_drop(ZoneId::shared(ZoneKind::Stack));

        assert_eq!(ids(&session, ZoneId::shared(ZoneKind::Stack)), vec![b]);
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_strict_drop_declines_but_resets() {
        let config = TableConfig::default().with_drop_policy(DropPolicy::Strict);
        let mut session = TableSession::new(config);
        let b = session
            .spawn_card(P0, ZoneKind::Hand, CardData::new("Growth", "Enchantment"))
            .unwrap();

        session.start_drag(b, Point::default());
        session.handle_zone_drop(ZoneId::shared(ZoneKind::Stack));

        assert_eq!(ids(&session, hand(P0)), vec![b]);
        assert!(!session.drag().is_dragging());

        session.start_drag(b, Point::default());
        session.handle_zone_drop(ZoneId::of(P0, ZoneKind::Field));
        assert_eq!(ids(&session, ZoneId::of(P0, ZoneKind::Field)), vec![b]);
    }

    #[test]
    fn test_drop_on_opponent_zone_moves_to_owner() {
        let (mut session, a, ..) = session_with_hand();

        session.start_drag(a, Point::default());
        session.handle_zone_drop(ZoneId::of(P1, ZoneKind::Field));

        assert_eq!(ids(&session, ZoneId::of(P1, ZoneKind::Field)), vec![a]);
    }

    #[test]
    fn test_drop_on_foreign_zone_declined() {
        let (mut session, a, ..) = session_with_hand();

        session.start_drag(a, Point::default());
        // Flag exists only in the Konivrer variant.
        session.handle_zone_drop(ZoneId::of(P0, ZoneKind::Flag));

        assert!(!session.drag().is_dragging());
        assert_eq!(ids(&session, hand(P0)).len(), 3);
    }

    #[test]
    fn test_next_phase_wraps_into_next_turn() {
        let mut session = TableSession::new(TableConfig::new(GameVariant::Konivrer));
        let phases = GameVariant::Konivrer.phases().len();

        for _ in 0..phases - 1 {
            session.next_phase();
        }
        assert_eq!(session.state().phase(), Phase::Refresh);
        assert_eq!(session.state().turn(), 1);

        session.next_phase();
        assert_eq!(session.state().phase(), Phase::Start);
        assert_eq!(session.state().turn(), 2);
        assert_eq!(session.state().current_player(), P1);
    }

    #[test]
    fn test_next_turn_resets_phase() {
        let mut session = TableSession::default();
        session.next_phase();
        session.next_phase();

        session.next_turn();

        assert_eq!(session.state().phase(), Phase::Untap);
        assert_eq!(session.state().current_player(), P1);
        assert_eq!(session.state().turn(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut session, a, ..) = session_with_hand();
        session.select_card(a);
        session.start_drag(a, Point::default());
        session.next_turn();

        session.reset();

        assert_eq!(session.state().card_count(), 0);
        assert_eq!(session.state().turn(), 1);
        assert!(session.selected().is_empty());
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_events_and_revision() {
        let (mut session, a, ..) = session_with_hand();
        session.take_events();
        let before = session.revision();

        session.toggle_tap(a);
        session.double_click_card(a);

        let events = session.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], TableEvent::CardTapped { tapped: true, .. }));
        assert!(matches!(events[1], TableEvent::CardMoved(_)));
        assert_eq!(session.revision(), before + 2);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_try_new_validates() {
        let bad = TableConfig::default().with_world_width(-1.0);
        assert!(TableSession::try_new(bad).is_err());
        assert!(TableSession::try_new(TableConfig::default()).is_ok());
    }
}
