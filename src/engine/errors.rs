use crate::domain::{OptionsError, PlayerId, SeatIndex};
use crate::engine::actions::ActionKind;

use thiserror::Error;

/// Ошибки движка стола. Все синхронные: при ошибке стол не меняется.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Место {0} уже занято")]
    SeatTaken(SeatIndex),

    #[error("Место {0} пустое")]
    SeatEmpty(SeatIndex),

    #[error("Нет активного игрока – раздача не идёт")]
    NoActivePlayer,

    #[error("Недопустимое действие {0:?} в текущем состоянии раздачи")]
    IllegalAction(ActionKind),

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Игрок на месте {0} ещё участвует в раздаче")]
    PlayerInHand(SeatIndex),

    #[error("Недопустимое число мест: {0}")]
    InvalidSeatCount(usize),

    #[error("Игроков больше, чем мест за столом")]
    TooManyPlayers,

    #[error("Некорректные опции стола: {0}")]
    InvalidOptions(#[from] OptionsError),
}
