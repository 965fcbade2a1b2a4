//! Инфраструктурный слой вокруг движка стола:
//! - RNG-реализации и дилер по умолчанию;
//! - генерация ID столов и сессий;
//! - загрузка опций стола из JSON.

pub mod config;
pub mod dealer;
pub mod ids;
pub mod rng;

pub use config::{load_options, parse_options, ConfigError};
pub use dealer::ShuffledDealer;
pub use ids::IdGenerator;
pub use rng::{DeterministicRng, SystemRng};
