use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Индекс места за столом (0..seat_count-1).
pub type SeatIndex = u8;

/// Максимум мест за одним столом: 23 * 2 карманные + 5 борда = 51 карта из 52.
pub const MAX_SEATS: usize = 23;

/// Разновидность игры.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Variant {
    #[default]
    TexasHoldem,
    /// Зарезервировано: валидация опций пока отклоняет Омаху.
    OmahaHi,
}

/// Политика размера ставок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LimitType {
    /// Фиксированный лимит: ставка = BB (на тёрне и ривере 2 BB).
    Limit,
    #[default]
    NoLimit,
    /// Ставка не больше текущего банка.
    PotLimit,
}

/// Стейки стола (SB/BB/анте).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Анте с каждого игрока в раздаче (0: без анте).
    #[serde(default)]
    pub ante: Chips,
}

impl Stakes {
    pub fn new(small_blind: Chips, big_blind: Chips, ante: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ante,
        }
    }
}

/// Неизменяемая конфигурация стола. Задаётся при создании.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOptions {
    pub buy_in: Chips,
    #[serde(default)]
    pub variant: Variant,
    pub stakes: Stakes,
    #[serde(default)]
    pub limit: LimitType,
}

impl Default for TableOptions {
    /// 1/2 безлимитный холдем, бай-ин 100, без анте.
    fn default() -> Self {
        Self {
            buy_in: Chips(100),
            variant: Variant::TexasHoldem,
            stakes: Stakes::new(Chips(1), Chips(2), Chips::ZERO),
            limit: LimitType::NoLimit,
        }
    }
}

/// Ошибки валидации опций стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("big blind не может быть 0")]
    ZeroBigBlind,

    #[error("small blind ({small}) больше big blind ({big})")]
    SmallAboveBig { small: Chips, big: Chips },

    #[error("бай-ин не может быть 0")]
    ZeroBuyIn,

    #[error("вариант {0:?} не поддерживается")]
    UnsupportedVariant(Variant),
}

impl TableOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.stakes.big_blind.is_zero() {
            return Err(OptionsError::ZeroBigBlind);
        }
        if self.stakes.small_blind > self.stakes.big_blind {
            return Err(OptionsError::SmallAboveBig {
                small: self.stakes.small_blind,
                big: self.stakes.big_blind,
            });
        }
        if self.buy_in.is_zero() {
            return Err(OptionsError::ZeroBuyIn);
        }
        if self.variant != Variant::TexasHoldem {
            return Err(OptionsError::UnsupportedVariant(self.variant));
        }
        Ok(())
    }
}

/// Статус стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    /// Меньше двух игроков, готовых играть.
    Waiting,
    /// Идёт раздача.
    Dealing,
}

/// Раунд ставок (улица).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Round {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Round {
    /// Следующая улица по кругу: после River снова PreFlop.
    pub fn next(self) -> Round {
        match self {
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River => Round::PreFlop,
        }
    }

    /// Сколько карт борда открывается при входе в улицу.
    pub fn board_cards_dealt(self) -> usize {
        match self {
            Round::PreFlop => 0,
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
        }
    }
}
