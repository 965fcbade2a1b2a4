use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока. Сумма есть только у Bet/Raise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Ставка, когда доплачивать нечего. Сумма: сверх уравнивания.
    Bet(Chips),
    /// Повышение: сначала уравнять, потом добавить указанную сумму.
    Raise(Chips),
    /// Весь стек.
    AllIn,
}

/// Тип действия без суммы: для множества допустимых действий.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
            Action::AllIn => ActionKind::AllIn,
        }
    }

    /// Открывает ли действие раунд ставок заново для остальных.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_) | Action::AllIn)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bet(chips) => write!(f, "bet {chips}"),
            Action::Raise(chips) => write!(f, "raise {chips}"),
            other => write!(f, "{:?}", other.kind()),
        }
    }
}
