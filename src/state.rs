use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::{Round, Status, TableOptions};
use crate::domain::SeatIndex;

/// Снимок стола, который можно отдать клиенту (JSON через serde).
///
/// Это копия: изменения снимка на стол не влияют.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub options: TableOptions,
    pub seats: Vec<Option<Player>>,
    /// Открытые карты борда.
    pub cards: Vec<Card>,
    /// Место игрока, чей сейчас ход.
    pub active: Option<SeatIndex>,
    pub status: Status,
    pub round: Round,
    pub button: SeatIndex,
    pub cost: Chips,
    /// Все фишки, внесённые в текущей раздаче.
    pub pot: Chips,
    pub hand_number: u64,
}

impl TableState {
    /// Игрок за местом `seat`, если оно занято.
    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat as usize).and_then(|s| s.as_ref())
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active.and_then(|s| self.player(s))
    }

    /// Версия снимка для конкретного игрока: чужие карманные карты скрыты.
    /// `None`: наблюдатель, не видит ничьих карт.
    pub fn for_viewer(mut self, viewer: Option<SeatIndex>) -> Self {
        for p in self.seats.iter_mut().flatten() {
            if Some(p.seat) != viewer {
                p.cards.clear();
            }
        }
        self
    }

    /// Сумма стеков и вкладов всех сидящих игроков.
    pub fn chips_on_table(&self) -> Chips {
        self.seats.iter().flatten().map(Player::total_chips).sum()
    }
}
