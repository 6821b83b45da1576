//! # holobac-session
//!
//! Session layer over the Holobac engine: keeps one live game per user id,
//! expires idle games, pushes snapshots to subscribers and logs finished
//! games.

pub mod events;
pub mod logging;
pub mod session;
pub mod settings;
pub mod store;

pub use events::{EventBus, EventSubscription, GameEvent};
pub use logging::{init_logging, init_logging_with, LogEntry, LogFormat, TestLogSubscriber};
pub use session::{GameSession, SessionError, SessionId, SessionManager};
pub use settings::{AppSettings, SettingsError, SettingsStore};
pub use store::{InMemorySessionStore, SessionStore};
