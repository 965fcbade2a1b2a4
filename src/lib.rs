//! Покерный стол: рассадка, очередь хода, автомат улиц, сайд-поты и шоудаун.
//!
//! Слои:
//!   - `domain`: карты, фишки, игроки, опции стола;
//!   - `eval`: оценка силы рук;
//!   - `engine`: `Table` и всё, что двигает раздачу;
//!   - `infra`: RNG, дилер, ID, загрузка опций;
//!   - `state`: сериализуемый снимок стола.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use domain::{Card, Chips, LimitType, Player, PlayerId, Round, SeatIndex, Stakes, Status, TableOptions};
pub use engine::{Action, ActionKind, EngineError, ManagerError, Settlement, Table, TableManager};
pub use eval::BestHandRanker;
pub use infra::{DeterministicRng, ShuffledDealer, SystemRng};
pub use state::TableState;

/// Стол со стандартной колодой и оценщиком рук.
pub type StandardTable<R> = Table<ShuffledDealer<R>, BestHandRanker>;
