//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Основная функция: `evaluate_best_hand(hole, board) -> HandRank`.
//! Для стола она подключается через `BestHandRanker`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, evaluate_cards};
pub use hand_rank::{describe_hand, HandCategory, HandRank};

use crate::domain::card::Card;
use crate::engine::HandRanker;

/// Ранжировщик по умолчанию: лучшая пятёрка из 5–7 карт.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestHandRanker;

impl HandRanker for BestHandRanker {
    type Strength = HandRank;

    fn strength(&self, cards: &[Card]) -> HandRank {
        evaluate_cards(cards)
    }
}
