use holobac_engine::cards::DEFAULT_DECK_COPIES;
use holobac_engine::game::{GameConfig, JokerDealMode, DEFAULT_JOKER_VALUE};
use holobac_engine::rules::validate_joker_value;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Duration;
use thiserror::Error;

/// Largest shoe a table accepts.
pub const MAX_DECK_COPIES: usize = 8;

/// Table settings applied to every new session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    /// Stake used when a session is started without one
    pub default_stake: u32,
    pub joker_mode: JokerDealMode,
    /// Value for player jokers in auto mode (1-7, 10, 11, 12)
    pub joker_value: u8,
    /// Spanish deck copies per shoe (1-8)
    pub num_decks: usize,
    pub hide_dealer_card: bool,
    /// Inactivity before a session is dropped
    pub session_timeout_secs: u64,
    /// Fixed shuffle seed; every session gets a random one when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_stake: 0,
            joker_mode: JokerDealMode::Auto,
            joker_value: DEFAULT_JOKER_VALUE,
            num_decks: DEFAULT_DECK_COPIES,
            hide_dealer_card: true,
            session_timeout_secs: 120,
            seed: None,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if validate_joker_value(self.joker_value).is_err() {
            return Err(SettingsError::InvalidValue(format!(
                "joker_value must be one of 1-7, 10, 11, 12 (got {})",
                self.joker_value
            )));
        }

        if self.num_decks == 0 || self.num_decks > MAX_DECK_COPIES {
            return Err(SettingsError::InvalidValue(format!(
                "num_decks must be between 1 and {MAX_DECK_COPIES}"
            )));
        }

        if self.session_timeout_secs == 0 {
            return Err(SettingsError::InvalidValue(
                "session_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }

    pub fn to_game_config(&self) -> GameConfig {
        GameConfig {
            num_copies: self.num_decks,
            seed: self.seed,
            joker_mode: self.joker_mode,
            joker_value: self.joker_value,
            hide_dealer_card: self.hide_dealer_card,
        }
    }
}

/// In-memory settings store with validation
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: RwLock<AppSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AppSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings: RwLock::new(settings),
        })
    }

    pub fn get(&self) -> Result<AppSettings, SettingsError> {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SettingsError::StoragePoisoned)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
    #[error("Settings storage poisoned")]
    StoragePoisoned,
}
