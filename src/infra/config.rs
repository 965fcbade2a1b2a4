use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::table::{OptionsError, TableOptions};

/// Ошибки загрузки опций стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать файл опций: {0}")]
    Io(#[from] std::io::Error),

    #[error("некорректный JSON опций: {0}")]
    Json(#[from] serde_json::Error),

    #[error("недопустимые опции стола: {0}")]
    Invalid(#[from] OptionsError),
}

/// Разобрать опции стола из JSON и проверить их.
///
/// Пропущенные `variant`, `limit` и `stakes.ante` берутся по умолчанию.
pub fn parse_options(json: &str) -> Result<TableOptions, ConfigError> {
    let options: TableOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}

pub fn load_options(path: impl AsRef<Path>) -> Result<TableOptions, ConfigError> {
    let raw = fs::read_to_string(path)?;
    parse_options(&raw)
}
