use crate::session::SessionId;
use holobac_engine::rules::Outcome;
use holobac_engine::snapshot::{GameStateSnapshot, RoundResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::mpsc;

// A subscriber whose queue fills up is dropped, not waited on
const EVENT_CHANNEL_BUFFER: usize = 256;

pub type EventSender = mpsc::Sender<GameEvent>;
pub type EventReceiver = mpsc::Receiver<GameEvent>;

/// Receiving end for one session's events. Dropping it unregisters it.
pub struct EventSubscription {
    bus: EventBus,
    session_id: SessionId,
    subscriber_id: usize,
    pub receiver: EventReceiver,
}

impl EventSubscription {
    pub fn receiver(&mut self) -> &mut EventReceiver {
        &mut self.receiver
    }

    /// Next queued event without waiting; `None` when the queue is empty
    /// or the session's feed has been closed.
    pub fn try_next(&mut self) -> Option<GameEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(&self.session_id, self.subscriber_id);
    }
}

/// Fan-out of game snapshots to presentation layers, per session.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    inner: Arc<Registry>,
}

#[derive(Debug, Clone)]
struct Subscriber {
    id: usize,
    sender: EventSender,
}

#[derive(Debug, Default)]
struct Registry {
    by_session: RwLock<HashMap<SessionId, Vec<Subscriber>>>,
    next_id: AtomicUsize,
}

impl Registry {
    // Subscriber lists stay consistent even if a holder panicked
    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, Vec<Subscriber>>> {
        self.by_session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, Vec<Subscriber>>> {
        self.by_session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, session_id: SessionId) -> EventSubscription {
        let (subscriber_id, receiver) = self.register(&session_id);
        EventSubscription {
            bus: self.clone(),
            session_id,
            subscriber_id,
            receiver,
        }
    }

    fn register(&self, session_id: &SessionId) -> (usize, EventReceiver) {
        let (sender, receiver) = mpsc::channel(EVENT_CHANNEL_BUFFER);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .write()
            .entry(session_id.clone())
            .or_default()
            .push(Subscriber { id, sender });

        tracing::debug!(session_id = %session_id, subscriber_id = id, "subscribed to game events");
        (id, receiver)
    }

    /// Queues `event` for every subscriber of `session_id`. Subscribers whose
    /// queue is full or closed are removed.
    pub fn broadcast(&self, session_id: &SessionId, event: GameEvent) {
        let targets = match self.inner.read().get(session_id) {
            Some(list) => list.clone(),
            None => return,
        };
        tracing::trace!(
            session_id = %session_id,
            event_type = event.kind(),
            subscribers = targets.len(),
            "broadcasting game event"
        );

        let stale: Vec<usize> = targets
            .into_iter()
            .filter_map(|sub| match sub.sender.try_send(event.clone()) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(
                        session_id = %session_id,
                        subscriber_id = sub.id,
                        error = %e,
                        "dropping subscriber that cannot take events"
                    );
                    Some(sub.id)
                }
            })
            .collect();
        self.prune(session_id, &stale);
    }

    pub fn unsubscribe(&self, session_id: &SessionId, subscriber_id: usize) {
        self.prune(session_id, &[subscriber_id]);
    }

    /// Forgets every subscriber of a finished session. Events already queued
    /// can still be read; afterwards the receivers report closed.
    pub fn drop_session(&self, session_id: &SessionId) {
        self.inner.write().remove(session_id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.read().values().map(Vec::len).sum()
    }

    fn prune(&self, session_id: &SessionId, ids: &[usize]) {
        if ids.is_empty() {
            return;
        }
        let mut map = self.inner.write();
        let now_empty = match map.get_mut(session_id) {
            Some(list) => {
                list.retain(|sub| !ids.contains(&sub.id));
                list.is_empty()
            }
            None => false,
        };
        if now_empty {
            map.remove(session_id);
        }
    }
}

/// What a session tells its subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        game_id: String,
        snapshot: Box<GameStateSnapshot>,
    },
    /// Sent after every accepted action
    StateChanged {
        session_id: SessionId,
        snapshot: Box<GameStateSnapshot>,
    },
    RoundSettled {
        session_id: SessionId,
        result: RoundResult,
    },
    /// `reason` is one of `completed`, `terminated_by_request`, `expired`
    GameEnded {
        session_id: SessionId,
        outcome: Option<Outcome>,
        reason: String,
    },
}

impl GameEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::StateChanged { .. } => "state_changed",
            GameEvent::RoundSettled { .. } => "round_settled",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }

    pub fn session_id(&self) -> &SessionId {
        match self {
            GameEvent::GameStarted { session_id, .. }
            | GameEvent::StateChanged { session_id, .. }
            | GameEvent::RoundSettled { session_id, .. }
            | GameEvent::GameEnded { session_id, .. } => session_id,
        }
    }
}
