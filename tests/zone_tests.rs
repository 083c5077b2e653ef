//! Card location invariants under arbitrary move sequences.

use ccg_table::cards::CardData;
use ccg_table::core::{CardId, GameState, GameVariant, MoveError, PlayerId};
use ccg_table::zones::{ZoneId, ZoneKind};
use proptest::prelude::*;

const CARDS: usize = 6;

fn populated(variant: GameVariant) -> (GameState, Vec<CardId>) {
    let mut state = GameState::new(variant);
    let ids = (0..CARDS)
        .map(|i| {
            let player = PlayerId::new((i % 2) as u8);
            state
                .spawn_card(player, ZoneKind::Hand, CardData::new(format!("Card {i}"), "Creature"))
                .unwrap()
        })
        .collect();
    (state, ids)
}

fn variant_strategy() -> impl Strategy<Value = GameVariant> {
    prop_oneof![Just(GameVariant::Classic), Just(GameVariant::Konivrer)]
}

fn move_strategy() -> impl Strategy<Value = (usize, usize, u8)> {
    (0..CARDS + 1, 0..ZoneKind::ALL.len(), 0u8..2)
}

proptest! {
    /// Every card stays in exactly one zone whatever is moved where.
    #[test]
    fn prop_card_in_exactly_one_zone(
        variant in variant_strategy(),
        moves in prop::collection::vec(move_strategy(), 0..64),
    ) {
        let (mut state, ids) = populated(variant);

        for (card, kind, player) in moves {
            // Index CARDS stands in for an unknown id.
            let card = ids.get(card).copied().unwrap_or(CardId::new(999));
            let _ = state.move_card(card, ZoneKind::ALL[kind], PlayerId::new(player));

            prop_assert!(state.check_invariants().is_ok());
            prop_assert_eq!(state.zones().total_cards(), CARDS);
        }

        for id in ids {
            let zone = state.find_zone_of_card(id);
            prop_assert!(zone.is_some());
            let count = state
                .zones()
                .iter()
                .filter(|(_, z)| z.contains(id))
                .count();
            prop_assert_eq!(count, 1);
        }
    }

    /// A declined move leaves the state exactly as it was.
    #[test]
    fn prop_declined_move_changes_nothing(
        moves in prop::collection::vec(move_strategy(), 0..32),
    ) {
        let (mut state, ids) = populated(GameVariant::Classic);

        for (card, kind, player) in moves {
            let card = ids.get(card).copied().unwrap_or(CardId::new(999));
            let before = state.clone();
            if state.move_card(card, ZoneKind::ALL[kind], PlayerId::new(player)).is_err() {
                prop_assert_eq!(&state, &before);
            }
        }
    }
}

#[test]
fn test_tapped_survives_only_field_moves() {
    let p0 = PlayerId::new(0);
    let mut session = ccg_table::TableSession::default();
    let card = session
        .spawn_card(p0, ZoneKind::Hand, CardData::new("Bears", "Creature"))
        .unwrap();
    session.move_card(card, ZoneKind::Field, p0);
    session.toggle_tap(card);

    session.move_card(card, ZoneKind::Field, p0);
    assert!(session.state().card(card).unwrap().is_tapped);

    session.move_card(card, ZoneKind::Graveyard, p0);
    assert!(!session.state().card(card).unwrap().is_tapped);
}

#[test]
fn test_move_into_own_zone_reappends() {
    let (mut state, _) = populated(GameVariant::Classic);
    let hand = ZoneId::of(PlayerId::new(0), ZoneKind::Hand);
    let before: Vec<_> = state.cards_in(hand).map(|c| c.id).collect();

    state.move_card(before[0], ZoneKind::Hand, PlayerId::new(0)).unwrap();

    let after: Vec<_> = state.cards_in(hand).map(|c| c.id).collect();
    assert_eq!(after.len(), before.len());
    assert_eq!(after.last(), Some(&before[0]));
    assert_eq!(after[0], before[1]);
}

#[test]
fn test_state_serialization_round_trip() {
    let (mut state, ids) = populated(GameVariant::Konivrer);
    state.move_card(ids[2], ZoneKind::AzothRow, PlayerId::new(0)).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert!(restored.check_invariants().is_ok());
}

#[test]
fn test_shared_stack_ignores_player() {
    let (mut state, ids) = populated(GameVariant::Konivrer);

    state.move_card(ids[0], ZoneKind::Stack, PlayerId::new(0)).unwrap();
    state.move_card(ids[1], ZoneKind::Stack, PlayerId::new(1)).unwrap();

    let stack: Vec<_> = state.cards_in(ZoneId::shared(ZoneKind::Stack)).map(|c| c.id).collect();
    assert_eq!(stack, vec![ids[0], ids[1]]);
}

#[test]
fn test_unknown_zone_for_variant() {
    let (mut state, ids) = populated(GameVariant::Classic);

    let err = state
        .move_card(ids[0], ZoneKind::AzothRow, PlayerId::new(0))
        .unwrap_err();

    assert!(matches!(err, MoveError::UnknownZone { .. }));
    assert!(state.check_invariants().is_ok());
}
