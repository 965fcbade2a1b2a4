//! Доменная модель стола: карты, фишки, игроки, опции стола, улицы.

pub mod card;
pub mod chips;
pub mod deck;
pub mod player;
pub mod table;

/// Идентификатор игрока: строка, которую выдаёт сессионный слой.
pub type PlayerId = String;
pub type TableId = u64;
pub type SessionId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use player::*;
pub use table::*;
