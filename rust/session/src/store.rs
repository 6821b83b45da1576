use crate::session::{GameSession, SessionError, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Where live sessions are kept, keyed by session (user) id.
pub trait SessionStore: Send + Sync {
    /// Stores `session`, returning the one it replaced.
    fn insert(&self, session: Arc<GameSession>) -> Result<Option<Arc<GameSession>>, SessionError>;

    fn get(&self, id: &SessionId) -> Result<Option<Arc<GameSession>>, SessionError>;

    fn remove(&self, id: &SessionId) -> Result<Option<Arc<GameSession>>, SessionError>;

    fn ids(&self) -> Result<Vec<SessionId>, SessionError>;

    fn len(&self) -> Result<usize, SessionError> {
        Ok(self.ids()?.len())
    }

    fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<GameSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Arc<GameSession>) -> Result<Option<Arc<GameSession>>, SessionError> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoragePoisoned)?;
        Ok(guard.insert(session.id().clone(), session))
    }

    fn get(&self, id: &SessionId) -> Result<Option<Arc<GameSession>>, SessionError> {
        let guard = self
            .sessions
            .read()
            .map_err(|_| SessionError::StoragePoisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<Option<Arc<GameSession>>, SessionError> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoragePoisoned)?;
        Ok(guard.remove(id))
    }

    fn ids(&self) -> Result<Vec<SessionId>, SessionError> {
        let guard = self
            .sessions
            .read()
            .map_err(|_| SessionError::StoragePoisoned)?;
        Ok(guard.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize, SessionError> {
        let guard = self
            .sessions
            .read()
            .map_err(|_| SessionError::StoragePoisoned)?;
        Ok(guard.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holobac_engine::game::{GameConfig, GameState};

    fn session(id: &str, seed: u64) -> Arc<GameSession> {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        let game = GameState::new(config, 0).expect("deal");
        Arc::new(GameSession::new(id.to_string(), game))
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let store = InMemorySessionStore::new();
        assert!(store.insert(session("u1", 1)).expect("insert").is_none());
        let replaced = store.insert(session("u1", 2)).expect("insert");
        assert!(replaced.is_some());
        assert_eq!(store.len().expect("len"), 1);
    }

    #[test]
    fn remove_and_list() {
        let store = InMemorySessionStore::new();
        store.insert(session("a", 1)).expect("insert");
        store.insert(session("b", 2)).expect("insert");
        let mut ids = store.ids().expect("ids");
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);

        assert!(store.remove(&"a".to_string()).expect("remove").is_some());
        assert!(store.remove(&"a".to_string()).expect("remove").is_none());
        assert!(store.get(&"a".to_string()).expect("get").is_none());
        assert!(!store.is_empty().expect("is_empty"));
    }
}
