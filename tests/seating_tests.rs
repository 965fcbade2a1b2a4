mod common;

use common::{options, seeded_table, stacks, ScriptedDealer, FixedRanker};
use poker_table::domain::chips::Chips;
use poker_table::domain::player::Player;
use poker_table::domain::table::{OptionsError, Status, Variant};
use poker_table::engine::{EngineError, Table};

fn empty_table(seats: usize) -> common::ScriptedTable {
    Table::new(
        ScriptedDealer::default(),
        FixedRanker::default(),
        options(),
        seats,
        &[] as &[&str],
    )
    .unwrap()
}

#[test]
fn table_waits_until_two_players_sit() {
    let mut table = empty_table(4);
    assert_eq!(table.status(), Status::Waiting);

    table.sit(Player::new("a", Chips(100)), 0).unwrap();
    assert_eq!(table.status(), Status::Waiting);
    assert!(table.active().is_none());

    table.sit(Player::new("b", Chips(100)), 2).unwrap();
    assert_eq!(table.status(), Status::Dealing);
    assert_eq!(table.hand_number(), 1);
    assert!(table.active().is_some());
}

#[test]
fn sit_rejects_bad_or_taken_seat() {
    let mut table = seeded_table(1);

    assert_eq!(
        table.sit(Player::new("x", Chips(100)), 3),
        Err(EngineError::InvalidSeat(3))
    );
    assert_eq!(
        table.sit(Player::new("x", Chips(100)), 1),
        Err(EngineError::SeatTaken(1))
    );
}

/// Севший посреди раздачи пропускает её и играет со следующей.
#[test]
fn player_seated_mid_hand_sits_out_until_next_hand() {
    let mut table = Table::new(
        ScriptedDealer::default(),
        FixedRanker::default(),
        options(),
        3,
        &["a", "b"],
    )
    .unwrap();

    table.sit(Player::new("c", Chips(100)), 2).unwrap();
    let c = table.seats()[2].as_ref().unwrap();
    assert!(c.sitting_out);
    assert!(c.cards.is_empty());
    assert_eq!(c.chips, Chips(100));

    // хедз-ап: кнопка 1 (SB) сбрасывает, раздача окончена
    table.fold().unwrap();

    let c = table.seats()[2].as_ref().unwrap();
    assert!(!c.sitting_out);
    assert_eq!(c.cards.len(), 2);
    assert_eq!(table.hand_number(), 2);
}

#[test]
fn player_in_hand_cannot_stand_or_top_up() {
    let mut table = seeded_table(42);

    assert_eq!(table.stand(1), Err(EngineError::PlayerInHand(1)));
    assert_eq!(table.top_up(1, Chips(50)), Err(EngineError::PlayerInHand(1)));
    assert_eq!(table.stand(5), Err(EngineError::InvalidSeat(5)));
}

#[test]
fn stand_from_waiting_table_returns_whole_stack() {
    let mut table = empty_table(2);
    table.sit(Player::new("a", Chips(70)), 1).unwrap();

    let a = table.stand(1).unwrap();
    assert_eq!(a.chips, Chips(70));
    assert_eq!(table.stand(1), Err(EngineError::SeatEmpty(1)));
    assert_eq!(stacks(&table), vec![None, None]);
}

#[test]
fn busted_player_is_skipped_for_blinds() {
    let mut table = Table::with_players(
        ScriptedDealer::default(),
        FixedRanker::default(),
        options(),
        3,
        vec![
            (0, Player::new("a", Chips(100))),
            (1, Player::new("b", Chips::ZERO)),
            (2, Player::new("c", Chips(100))),
        ],
    )
    .unwrap();

    let b = table.seats()[1].as_ref().unwrap();
    assert!(b.sitting_out);
    assert_eq!(table.button(), 2);
    // хедз-ап между 0 и 2: SB на кнопке
    assert_eq!(stacks(&table), vec![Some(98), Some(0), Some(99)]);

    table.fold().unwrap();
    assert_eq!(table.top_up(1, Chips(100)), Ok(()));
}

#[test]
fn table_creation_is_validated() {
    let new = |seats: usize, ids: &[&str], opts| {
        Table::new(ScriptedDealer::default(), FixedRanker::default(), opts, seats, ids).err()
    };

    assert_eq!(new(0, &[], options()), Some(EngineError::InvalidSeatCount(0)));
    assert_eq!(new(24, &[], options()), Some(EngineError::InvalidSeatCount(24)));
    assert_eq!(new(2, &["a", "b", "c"], options()), Some(EngineError::TooManyPlayers));

    let mut zero_bb = options();
    zero_bb.stakes.big_blind = Chips::ZERO;
    zero_bb.stakes.small_blind = Chips::ZERO;
    assert_eq!(
        new(2, &["a"], zero_bb),
        Some(EngineError::InvalidOptions(OptionsError::ZeroBigBlind))
    );

    let mut omaha = options();
    omaha.variant = Variant::OmahaHi;
    assert_eq!(
        new(2, &["a"], omaha),
        Some(EngineError::InvalidOptions(OptionsError::UnsupportedVariant(Variant::OmahaHi)))
    );

    assert_eq!(new(23, &["a", "b"], options()), None);
}
