use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{SessionId, TableId};

/// Генерация ID на основе монотонных счётчиков.
/// Первые выданные значения: 1.
#[derive(Debug)]
pub struct IdGenerator {
    table_counter: AtomicU64,
    session_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            table_counter: AtomicU64::new(1),
            session_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_table_id(&self) -> TableId {
        self.table_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_session_id(&self) -> SessionId {
        self.session_counter.fetch_add(1, Ordering::Relaxed)
    }
}
