use poker_table::domain::card::parse_cards;
use poker_table::eval::{evaluate_best_hand, HandCategory};

fn best(hole: &str, board: &str) -> poker_table::eval::HandRank {
    evaluate_best_hand(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap())
}

#[test]
fn categories_on_seven_cards() {
    assert_eq!(best("As Ks", "Qs Js Ts 2d 3c").category(), HandCategory::StraightFlush);
    assert_eq!(best("9h 9d", "9s 9c 2d 3c 4h").category(), HandCategory::FourOfAKind);
    assert_eq!(best("9h 9d", "9s 2c 2d 3c 4h").category(), HandCategory::FullHouse);
    assert_eq!(best("Ah 2h", "7h 9h Kh 3c 4d").category(), HandCategory::Flush);
    assert_eq!(best("Ah 2d", "3h 4c 5s Kc Qd").category(), HandCategory::Straight);
    assert_eq!(best("7h 7d", "7s Kc 2d 3c 9h").category(), HandCategory::ThreeOfAKind);
    assert_eq!(best("7h 7d", "Ks Kc 2d 3c 9h").category(), HandCategory::TwoPair);
    assert_eq!(best("7h 7d", "As Kc 2d 3c 9h").category(), HandCategory::OnePair);
    assert_eq!(best("7h 8d", "As Kc 2d 3c Jh").category(), HandCategory::HighCard);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = best("Ah 2d", "3h 4c 5s Kc Qd");
    let six_high = best("6h 2d", "3h 4c 5s Kc Qd");
    assert!(six_high > wheel);
}

#[test]
fn kicker_decides_between_equal_pairs() {
    let board = "Ks 9d 7c 4h 2s";
    let ace_kicker = best("Kh Ad", board);
    let queen_kicker = best("Kd Qc", board);
    assert!(ace_kicker > queen_kicker);
}

#[test]
fn board_plays_for_both_is_a_tie() {
    let board = "As Ks Qs Js Ts";
    assert_eq!(best("2c 3d", board), best("4h 5h", board));
}
