//! Движок стола: очерёдность хода, валидация действий, смена улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `Table`
//! Основные операции:
//!   - `Table::new` – создать стол и (если игроков >= 2) сразу раздать первую руку
//!   - `Table::act` – применить действие активного игрока
//!   - `Table::state` – снимок состояния для сессионного слоя

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod positions;
pub mod showdown;
pub mod side_pots;
pub mod table_manager;
pub mod validation;

use core::fmt::Debug;

use crate::domain::card::Card;

pub use actions::{Action, ActionKind};
pub use errors::EngineError;
pub use game_loop::Table;
pub use showdown::{PotAward, Settlement};
pub use side_pots::SidePot;
pub use table_manager::{ManagerError, TableHandle, TableManager};

/// RNG интерфейс для дилера.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Источник карт на одну раздачу: выдаёт карты без возврата.
pub trait CardSource {
    fn pop(&mut self) -> Option<Card>;

    /// Взять `n` карт подряд. Если карт не хватает: вернёт сколько есть.
    fn pop_multi(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.pop()).collect()
    }
}

/// Дилер: выдаёт свежую перемешанную колоду на каждую раздачу.
pub trait Dealer {
    type Deck: CardSource;

    fn deck(&mut self) -> Self::Deck;
}

/// Оракул силы рук: полный порядок на руках из карманных карт + борда.
pub trait HandRanker {
    type Strength: Ord + Clone + Debug;

    fn strength(&self, cards: &[Card]) -> Self::Strength;
}
