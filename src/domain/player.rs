use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Игрок, сидящий за столом.
///
/// `chips + chips_in_pot`: всё, что у игрока есть за этим столом:
/// бай-ин минус проигрыши прошлых раздач плюс выигрыши.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Место за столом (0..seat_count-1). Выставляется при посадке.
    pub seat: SeatIndex,
    /// Стек, ещё не поставленный в банк.
    pub chips: Chips,
    /// Сколько внесено в банк в текущей раздаче (все улицы вместе).
    pub chips_in_pot: Chips,
    /// Сделал ли действие в текущем раунде ставок.
    pub acted: bool,
    pub folded: bool,
    pub all_in: bool,
    /// Не участвует в текущей раздаче (сел посреди руки или пустой стек).
    pub sitting_out: bool,
    /// Карманные карты (2 для холдема, пусто если не в раздаче).
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, chips: Chips) -> Self {
        Self {
            id: id.into(),
            seat: 0,
            chips,
            chips_in_pot: Chips::ZERO,
            acted: false,
            folded: false,
            all_in: false,
            sitting_out: false,
            cards: Vec::new(),
        }
    }

    /// Внести фишки в банк.
    ///
    /// Переносит `min(amount, chips)` из стека в `chips_in_pot`.
    /// Если запрошено не меньше остатка стека: игрок в all-in.
    /// Возвращает реально внесённую сумму.
    pub fn contribute(&mut self, amount: Chips) -> Chips {
        let paid = if self.chips <= amount {
            self.all_in = true;
            self.chips
        } else {
            amount
        };
        self.chips -= paid;
        self.chips_in_pot += paid;
        paid
    }

    /// Ещё претендует на банк.
    pub fn is_contesting(&self) -> bool {
        !self.folded
    }

    /// Может ли ещё принимать решения в этой раздаче.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub fn total_chips(&self) -> Chips {
        self.chips + self.chips_in_pot
    }

    /// Сброс перед новой раздачей. Карты раздаёт стол.
    pub(crate) fn reset_for_hand(&mut self) {
        self.chips_in_pot = Chips::ZERO;
        self.acted = false;
        self.folded = false;
        self.all_in = false;
        self.sitting_out = false;
        self.cards.clear();
    }

    /// Пропустить раздачу: игрок сидит, но в руке не участвует.
    pub(crate) fn sit_out(&mut self) {
        self.sitting_out = true;
        self.folded = true;
        self.acted = false;
        self.all_in = false;
        self.cards.clear();
    }
}
