use crate::events::{EventBus, GameEvent};
use crate::settings::{AppSettings, SettingsError, SettingsStore};
use crate::store::{InMemorySessionStore, SessionStore};
use holobac_engine::errors::GameError;
use holobac_engine::game::GameState;
use holobac_engine::logger::{GameLogger, GameRecord};
use holobac_engine::player::PlayerAction;
use holobac_engine::rules::Outcome;
use holobac_engine::snapshot::{GameStateSnapshot, RoundResult};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

/// Key of a live game, one per user.
pub type SessionId = String;

/// Owns the live games and is the only way a presentation layer drives them.
pub struct SessionManager<S: SessionStore = InMemorySessionStore> {
    store: S,
    event_bus: Arc<EventBus>,
    settings: SettingsStore,
    game_log: Option<Mutex<GameLogger>>,
}

impl SessionManager<InMemorySessionStore> {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            store: InMemorySessionStore::new(),
            event_bus,
            settings: SettingsStore::new(),
            game_log: None,
        }
    }

    pub fn with_settings(
        event_bus: Arc<EventBus>,
        settings: AppSettings,
    ) -> Result<Self, SessionError> {
        Self::with_store(InMemorySessionStore::new(), event_bus, settings)
    }
}

impl<S: SessionStore> SessionManager<S> {
    pub fn with_store(
        store: S,
        event_bus: Arc<EventBus>,
        settings: AppSettings,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            store,
            event_bus,
            settings: SettingsStore::with_settings(settings)?,
            game_log: None,
        })
    }

    /// Appends a [`GameRecord`] to `logger` for every game that ends.
    pub fn with_game_log(mut self, logger: GameLogger) -> Self {
        self.game_log = Some(Mutex::new(logger));
        self
    }

    /// Deals a fresh game for `session_id`, replacing any game it had.
    /// `stake` falls back to the configured default.
    pub fn start_session(
        &self,
        session_id: &SessionId,
        stake: Option<u32>,
    ) -> Result<GameStateSnapshot, SessionError> {
        let settings = self.settings.get()?;
        let stake = stake.unwrap_or(settings.default_stake);
        let game = GameState::new(settings.to_game_config(), stake)?;
        let session = Arc::new(GameSession::new(session_id.clone(), game));
        let snapshot = session.snapshot()?;
        let seed = session.seed()?;

        if self.store.insert(Arc::clone(&session))?.is_some() {
            tracing::debug!(session_id = %session_id, "replaced running game");
        }

        tracing::info!(
            session_id = %session_id,
            game_id = %session.game_id(),
            stake,
            seed = ?seed,
            "game session started"
        );

        self.event_bus.broadcast(
            session_id,
            GameEvent::GameStarted {
                session_id: session_id.clone(),
                game_id: session.game_id().to_string(),
                snapshot: Box::new(snapshot.clone()),
            },
        );
        Ok(snapshot)
    }

    /// Applies one player action to the session's game.
    ///
    /// When the action finishes round 3 the final snapshot is returned and
    /// the session is removed; the next `start_session` begins a new game.
    pub fn apply_action(
        &self,
        session_id: &SessionId,
        action: PlayerAction,
        joker_value: Option<u8>,
    ) -> Result<GameStateSnapshot, SessionError> {
        let session = self.live_session(session_id)?;

        tracing::debug!(
            session_id = %session_id,
            action = action.as_str(),
            joker_value = ?joker_value,
            "processing player action"
        );

        let (snapshot, settled) = session.apply(action, joker_value)?;

        for result in settled {
            tracing::debug!(
                session_id = %session_id,
                round = result.round,
                player = result.player_recorded,
                dealer = result.dealer_recorded,
                "round settled"
            );
            self.event_bus.broadcast(
                session_id,
                GameEvent::RoundSettled {
                    session_id: session_id.clone(),
                    result,
                },
            );
        }
        self.event_bus.broadcast(
            session_id,
            GameEvent::StateChanged {
                session_id: session_id.clone(),
                snapshot: Box::new(snapshot.clone()),
            },
        );

        if snapshot.is_over() {
            self.finish_session(session_id, &session, &snapshot);
        }
        Ok(snapshot)
    }

    /// Like [`SessionManager::apply_action`], but a missing or expired
    /// session first gets a fresh game.
    pub fn apply_action_or_restart(
        &self,
        session_id: &SessionId,
        action: PlayerAction,
        joker_value: Option<u8>,
        stake: Option<u32>,
    ) -> Result<GameStateSnapshot, SessionError> {
        match self.apply_action(session_id, action, joker_value) {
            Err(SessionError::NotFound(_)) | Err(SessionError::Expired(_)) => {
                tracing::info!(session_id = %session_id, "no live game, starting a new one");
                self.start_session(session_id, stake)?;
                self.apply_action(session_id, action, joker_value)
            }
            other => other,
        }
    }

    pub fn state(&self, session_id: &SessionId) -> Result<GameStateSnapshot, SessionError> {
        self.live_session(session_id)?.snapshot()
    }

    pub fn get_session(&self, id: &SessionId) -> Result<Arc<GameSession>, SessionError> {
        self.store
            .get(id)?
            .ok_or_else(|| SessionError::NotFound(id.clone()))
    }

    /// Abandons a running game. The partial game is still logged when a
    /// game log is configured, and its record is returned.
    pub fn end_session(&self, session_id: &SessionId) -> Result<GameRecord, SessionError> {
        let session = self
            .remove_session(session_id)?
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))?;
        let record = self.write_record(&session)?;

        tracing::info!(
            session_id = %session_id,
            game_id = %session.game_id(),
            rounds_played = record.rounds.len(),
            "game session ended by request"
        );
        self.broadcast_end(session_id, record.outcome, "terminated_by_request");
        Ok(record)
    }

    /// Drops every session idle for longer than the configured timeout and
    /// returns how many went.
    pub fn cleanup_expired_sessions(&self) -> Result<usize, SessionError> {
        let ttl = self.settings.get()?.session_ttl();
        let mut expired = 0;
        for id in self.store.ids()? {
            let Some(session) = self.store.get(&id)? else {
                continue;
            };
            if session.is_expired(ttl) {
                self.expire_session(&id)?;
                expired += 1;
            }
        }
        Ok(expired)
    }

    pub fn active_sessions(&self) -> Vec<SessionId> {
        self.store.ids().unwrap_or_default()
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }

    fn live_session(&self, session_id: &SessionId) -> Result<Arc<GameSession>, SessionError> {
        let session = self.get_session(session_id)?;
        let ttl = self.settings.get()?.session_ttl();
        if session.is_expired(ttl) {
            self.expire_session(session_id)?;
            return Err(SessionError::Expired(session_id.clone()));
        }
        session.touch();
        Ok(session)
    }

    /// Retires a game that just ended. Never fails: the caller already holds
    /// the final snapshot.
    fn finish_session(
        &self,
        session_id: &SessionId,
        session: &Arc<GameSession>,
        snapshot: &GameStateSnapshot,
    ) {
        let current = self.store.get(session_id).ok().flatten();
        if current.is_some_and(|current| Arc::ptr_eq(&current, session)) {
            if let Err(err) = self.remove_session(session_id) {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "could not remove finished game"
                );
            }
        }

        tracing::info!(
            session_id = %session_id,
            game_id = %session.game_id(),
            outcome = ?snapshot.outcome,
            player_total = snapshot.player_total,
            dealer_total = snapshot.dealer_total,
            "game finished"
        );

        if let Err(err) = self.write_record(session) {
            tracing::warn!(
                session_id = %session_id,
                error = %err,
                "finished game not recorded"
            );
        }
        self.broadcast_end(session_id, snapshot.outcome, "completed");
    }

    fn expire_session(&self, session_id: &SessionId) -> Result<(), SessionError> {
        if let Some(session) = self.remove_session(session_id)? {
            tracing::info!(
                session_id = %session_id,
                game_id = %session.game_id(),
                idle_secs = session.idle().as_secs(),
                "session expired"
            );
            let outcome = match self.write_record(&session) {
                Ok(record) => record.outcome,
                Err(err) => {
                    tracing::warn!(
                        session_id = %session_id,
                        error = %err,
                        "expired game not recorded"
                    );
                    None
                }
            };
            self.broadcast_end(session_id, outcome, "expired");
        }
        Ok(())
    }

    fn remove_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Arc<GameSession>>, SessionError> {
        self.store.remove(session_id)
    }

    /// Builds the game's record and appends it to the game log, if any.
    /// A failed append is reported, not returned: the game is over either way.
    fn write_record(&self, session: &GameSession) -> Result<GameRecord, SessionError> {
        let Some(log) = &self.game_log else {
            return session.record(session.game_id().to_string());
        };
        let mut logger = log.lock().unwrap_or_else(PoisonError::into_inner);
        let record = session.record(logger.next_id())?;
        if let Err(err) = logger.write(&record) {
            tracing::error!(
                game_id = %record.game_id,
                error = %err,
                "failed to write game record"
            );
        }
        Ok(record)
    }

    fn broadcast_end(&self, session_id: &SessionId, outcome: Option<Outcome>, reason: &str) {
        self.event_bus.broadcast(
            session_id,
            GameEvent::GameEnded {
                session_id: session_id.clone(),
                outcome,
                reason: reason.to_string(),
            },
        );
        self.event_bus.drop_session(session_id);
    }
}

/// One user's live game.
pub struct GameSession {
    id: SessionId,
    game_id: String,
    game: Mutex<GameState>,
    created_at: Instant,
    last_active: Mutex<Instant>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("game_id", &self.game_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl GameSession {
    pub fn new(id: SessionId, game: GameState) -> Self {
        let now = Instant::now();
        Self {
            id,
            game_id: Uuid::new_v4().to_string(),
            game: Mutex::new(game),
            created_at: now,
            last_active: Mutex::new(now),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn snapshot(&self) -> Result<GameStateSnapshot, SessionError> {
        let game = self.game.lock().map_err(|_| SessionError::StoragePoisoned)?;
        Ok(game.snapshot())
    }

    pub fn seed(&self) -> Result<Option<u64>, SessionError> {
        let game = self.game.lock().map_err(|_| SessionError::StoragePoisoned)?;
        Ok(game.seed())
    }

    pub fn record(&self, record_id: String) -> Result<GameRecord, SessionError> {
        let game = self.game.lock().map_err(|_| SessionError::StoragePoisoned)?;
        let mut record = GameRecord::from_game(record_id, &game);
        record.meta = Some(serde_json::json!({
            "session_id": self.id,
            "game_id": self.game_id,
        }));
        Ok(record)
    }

    /// Runs the action under the session lock and returns the new snapshot
    /// with any rounds the action settled.
    fn apply(
        &self,
        action: PlayerAction,
        joker_value: Option<u8>,
    ) -> Result<(GameStateSnapshot, Vec<RoundResult>), SessionError> {
        let mut game = self.game.lock().map_err(|_| SessionError::StoragePoisoned)?;
        let before = game.history().len();
        game.apply_action(action, joker_value)?;
        let settled = game.history()[before..].to_vec();
        Ok((game.snapshot(), settled))
    }

    fn touch(&self) {
        if let Ok(mut guard) = self.last_active.lock() {
            *guard = Instant::now();
        }
    }

    fn idle(&self) -> Duration {
        match self.last_active.lock() {
            Ok(last) => last.elapsed(),
            Err(_) => Duration::ZERO,
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.idle() >= ttl
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
    #[error("Session expired: {0}")]
    Expired(SessionId),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Session storage poisoned")]
    StoragePoisoned,
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
}

impl SessionError {
    /// True for errors the player can fix by choosing a different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SessionError::Game(
                GameError::JokerValueRequired | GameError::InvalidJokerValue { .. }
            )
        )
    }
}
