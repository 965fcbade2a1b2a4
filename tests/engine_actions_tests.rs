mod common;

use common::{options_with, scripted_table, seeded_table, stacks, FixedRanker};
use poker_table::domain::chips::Chips;
use poker_table::domain::table::LimitType;
use poker_table::engine::{Action, ActionKind, EngineError};

/// Недопустимое действие отклоняется, стол не меняется.
#[test]
fn check_facing_big_blind_is_rejected_without_side_effects() {
    let mut table = seeded_table(42);
    let before = table.state();

    let err = table.check().unwrap_err();

    assert_eq!(err, EngineError::IllegalAction(ActionKind::Check));
    assert_eq!(table.state(), before);
}

#[test]
fn bet_is_illegal_when_there_is_something_to_call() {
    let mut table = seeded_table(42);
    assert_eq!(
        table.bet(Chips(10)),
        Err(EngineError::IllegalAction(ActionKind::Bet))
    );
}

#[test]
fn legal_actions_follow_owed_amount() {
    let mut table = seeded_table(42);

    assert_eq!(table.owed(), Chips(2));
    assert_eq!(
        table.legal_actions(),
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
    );

    table.call().unwrap();
    table.call().unwrap();

    // BB доплачивать нечего
    assert_eq!(table.owed(), Chips::ZERO);
    assert_eq!(
        table.legal_actions(),
        vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet, ActionKind::AllIn]
    );
}

#[test]
fn act_as_rejects_player_out_of_turn() {
    let mut table = seeded_table(42);
    let before = table.state();

    let err = table.act_as("a", Action::Call).unwrap_err();
    assert_eq!(err, EngineError::NotPlayersTurn("a".to_string()));
    assert_eq!(table.state(), before);

    table.act_as("b", Action::Call).unwrap();
    assert_eq!(table.active().map(|p| p.id.as_str()), Some("c"));
}

/// Бет меньше BB поднимается до BB.
#[test]
fn small_bet_is_raised_to_big_blind() {
    let mut table = seeded_table(42);
    table.call().unwrap();
    table.call().unwrap();
    table.check().unwrap();

    // флоп, первым ходит c (место 2)
    table.bet(Chips(1)).unwrap();
    assert_eq!(table.cost(), Chips(4));
    assert_eq!(stacks(&table)[2], Some(96));
}

/// All-in ставит весь стек и переоткрывает торги.
#[test]
fn all_in_reopens_betting_for_everyone() {
    let mut table = seeded_table(42);
    table.call().unwrap(); // b
    table.all_in().unwrap(); // c

    assert_eq!(table.cost(), Chips(100));
    let c = table.seats()[2].as_ref().unwrap();
    assert!(c.all_in);
    assert_eq!(c.chips, Chips::ZERO);

    // a и b снова должны ответить
    assert_eq!(table.active_seat(), Some(0));
    table.fold().unwrap();
    assert_eq!(table.active_seat(), Some(1));
}

/// Колл без достаточного стека: all-in на остаток.
#[test]
fn short_call_goes_all_in_for_the_rest() {
    let opts = options_with(LimitType::NoLimit, 1, 2, 0, 100);
    let mut table = scripted_table(
        opts,
        3,
        &[("a", 10), ("b", 100), ("c", 100)],
        vec![],
        FixedRanker::default(),
    );
    // кнопка 1, SB 2, BB 0, ходит b
    table.raise(Chips(30)).unwrap();
    table.fold().unwrap();

    assert_eq!(table.legal_actions(), vec![ActionKind::Fold, ActionKind::Call]);
    table.call().unwrap();

    // a в all-in на 10, у b некому отвечать: борд докручен, раздача рассчитана
    let s = table.last_settlement().expect("раздача рассчитана");
    assert_eq!(s.board.len(), 5);
    assert_eq!(s.pots.len(), 2);
    assert_eq!(s.pots[0].amount, Chips(21));
    assert_eq!(s.pots[0].eligible_seats, vec![0, 1]);
    assert_eq!(s.pots[1].amount, Chips(22));
    assert_eq!(s.pots[1].eligible_seats, vec![1]);

    // ничья в основном поте: лишняя фишка ближайшему к кнопке (место 0)
    assert_eq!(s.won_by(0), Chips(11));
    assert_eq!(s.won_by(1), Chips(32));
}

#[test]
fn fixed_limit_ignores_requested_size() {
    let opts = options_with(LimitType::Limit, 1, 2, 0, 100);
    let mut table = scripted_table(
        opts,
        3,
        &[("a", 100), ("b", 100), ("c", 100)],
        vec![],
        FixedRanker::default(),
    );

    table.raise(Chips(50)).unwrap();
    assert_eq!(table.cost(), Chips(4), "лимитный рейз = BB сверх колла");
}

#[test]
fn pot_limit_caps_raise_at_pot() {
    let opts = options_with(LimitType::PotLimit, 1, 2, 0, 100);
    let mut table = scripted_table(
        opts,
        3,
        &[("a", 100), ("b", 100), ("c", 100)],
        vec![],
        FixedRanker::default(),
    );

    assert_eq!(table.pot_total(), Chips(3));
    table.raise(Chips(50)).unwrap();
    // колл 2 + рейз не больше банка (3)
    assert_eq!(table.cost(), Chips(5));
}

#[test]
fn ante_is_collected_from_everyone_in_the_hand() {
    let opts = options_with(LimitType::NoLimit, 1, 2, 1, 100);
    let table = scripted_table(
        opts,
        3,
        &[("a", 100), ("b", 100), ("c", 100)],
        vec![],
        FixedRanker::default(),
    );

    assert_eq!(stacks(&table), vec![Some(97), Some(99), Some(98)]);
    assert_eq!(table.cost(), Chips(3));
    assert_eq!(table.owed(), Chips(2));
    assert_eq!(table.pot_total(), Chips(6));
}
