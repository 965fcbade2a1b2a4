use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

use crate::domain::{PlayerId, SessionId, TableId};
use crate::engine::{Action, Dealer, EngineError, HandRanker, Table};
use crate::infra::ids::IdGenerator;
use crate::state::TableState;

/// Ошибки уровня менеджера столов (над движком одного стола).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("стол {0} не найден")]
    TableNotFound(TableId),

    #[error("сессия {0} не найдена")]
    UnknownSession(SessionId),

    /// Поток, державший стол, упал посреди изменения.
    #[error("стол {0} недоступен: мьютекс отравлен")]
    Poisoned(TableId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Общий доступ к столу: каждый стол под своим мьютексом,
/// так что разные столы друг друга не блокируют.
pub type TableHandle<D, H> = Arc<Mutex<Table<D, H>>>;

/// Менеджер столов и сессий:
/// - хранит столы по TableId;
/// - помнит, какой игрок стоит за какой сессией;
/// - маршрутизирует действие сессии на нужный стол.
pub struct TableManager<D: Dealer, H: HandRanker> {
    tables: HashMap<TableId, TableHandle<D, H>>,
    sessions: HashMap<SessionId, PlayerId>,
    ids: IdGenerator,
}

impl<D: Dealer, H: HandRanker> Default for TableManager<D, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dealer, H: HandRanker> TableManager<D, H> {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            sessions: HashMap::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Зарегистрировать стол и выдать ему новый id.
    pub fn add_table(&mut self, table: Table<D, H>) -> TableId {
        let id = self.ids.next_table_id();
        self.tables.insert(id, Arc::new(Mutex::new(table)));
        info!(table = id, "стол зарегистрирован");
        id
    }

    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables.contains_key(&table_id)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Клон хэндла стола, чтобы работать с ним из другого потока.
    pub fn table(&self, table_id: TableId) -> Result<TableHandle<D, H>, ManagerError> {
        self.tables
            .get(&table_id)
            .cloned()
            .ok_or(ManagerError::TableNotFound(table_id))
    }

    pub fn remove_table(&mut self, table_id: TableId) -> Result<TableHandle<D, H>, ManagerError> {
        let handle = self
            .tables
            .remove(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;
        info!(table = table_id, "стол удалён");
        Ok(handle)
    }

    /// Выполнить `f` под замком стола.
    pub fn with_table<T, F>(&self, table_id: TableId, f: F) -> Result<T, ManagerError>
    where
        F: FnOnce(&mut Table<D, H>) -> T,
    {
        let handle = self
            .tables
            .get(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;
        let mut table = handle.lock().map_err(|_| ManagerError::Poisoned(table_id))?;
        Ok(f(&mut *table))
    }

    /// Снимок стола глазами игрока сессии.
    pub fn state_for_session(
        &self,
        session: SessionId,
        table_id: TableId,
    ) -> Result<TableState, ManagerError> {
        let player = self.player_for(session)?.to_string();
        self.with_table(table_id, |table| {
            let viewer = table
                .seats()
                .iter()
                .flatten()
                .find(|p| p.id == player)
                .map(|p| p.seat);
            table.state().for_viewer(viewer)
        })
    }

    /// Действие от имени игрока сессии на указанном столе.
    pub fn act_for_session(
        &self,
        session: SessionId,
        table_id: TableId,
        action: Action,
    ) -> Result<(), ManagerError> {
        let player = self.player_for(session)?;
        self.with_table(table_id, |table| table.act_as(player, action))??;
        Ok(())
    }

    //
    // ====================== СЕССИИ ======================
    //

    /// Привязать игрока к новой сессии.
    pub fn join(&mut self, player_id: impl Into<PlayerId>) -> SessionId {
        let session = self.ids.next_session_id();
        let player_id = player_id.into();
        info!(session, player = %player_id, "сессия открыта");
        self.sessions.insert(session, player_id);
        session
    }

    /// Закрыть сессию. Возвращает игрока, который за ней стоял.
    pub fn leave(&mut self, session: SessionId) -> Result<PlayerId, ManagerError> {
        let player = self
            .sessions
            .remove(&session)
            .ok_or(ManagerError::UnknownSession(session))?;
        info!(session, player = %player, "сессия закрыта");
        Ok(player)
    }

    pub fn is_joined(&self, session: SessionId) -> bool {
        self.sessions.contains_key(&session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn player_for(&self, session: SessionId) -> Result<&str, ManagerError> {
        self.sessions
            .get(&session)
            .map(String::as_str)
            .ok_or(ManagerError::UnknownSession(session))
    }
}
