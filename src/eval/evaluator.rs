use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandRank};
use super::lookup_tables::{detect_straight, mask_from_ranks, straight_ranks};

/// Лучшая 5-карточная рука из карманных карт и борда.
///
/// Всего карт должно быть от 5 до 7. На шоудауне холдема их всегда 7.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate_cards(&cards)
}

/// Лучшая 5-карточная рука из 5–7 карт (перебор всех сочетаний по 5).
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    assert!(
        (5..=7).contains(&cards.len()),
        "evaluate_cards ожидает от 5 до 7 карт, получено {}",
        cards.len()
    );

    let n = cards.len();
    let mut best = HandRank(0);
    // Каждое сочетание по 5 задаётся пропуском (n - 5) карт.
    for skip_mask in 0u32..(1 << n) {
        if skip_mask.count_ones() as usize != n - 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, card) in cards.iter().enumerate() {
            if skip_mask & (1 << i) == 0 {
                five[k] = *card;
                k += 1;
            }
        }
        best = best.max(evaluate_five(&five));
    }
    best
}

/// Оценка строго пяти карт.
fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        suit_counts[card.suit.index()] += 1;
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    let straight_high = detect_straight(mask_from_ranks(&ranks));

    // Группы (количество, ранг), сначала по количеству, потом по рангу: по убыванию.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|&r| (rank_counts[r.value() as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let pattern: Vec<u8> = groups.iter().map(|(count, _)| *count).collect();
    let by_group: Vec<Rank> = groups.iter().map(|(_, rank)| *rank).collect();

    if let (true, Some(high)) = (is_flush, straight_high) {
        return HandRank::new(HandCategory::StraightFlush, &straight_ranks(high));
    }

    let category = match pattern.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::Straight, Some(high)) => HandRank::new(category, &straight_ranks(high)),
        _ => HandRank::new(category, &by_group),
    }
}
