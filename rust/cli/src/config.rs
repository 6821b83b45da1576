use holobac_engine::cards::DEFAULT_DECK_COPIES;
use holobac_engine::game::{DEFAULT_JOKER_VALUE, JokerDealMode};
use holobac_engine::rules::validate_joker_value;
use holobac_session::AppSettings;
use holobac_session::settings::MAX_DECK_COPIES;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HOLOBAC_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub stake: u32,
    pub joker_mode: JokerDealMode,
    pub joker_value: u8,
    pub decks: usize,
    pub hide_dealer_card: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub stake: ValueSource,
    pub joker_mode: ValueSource,
    pub joker_value: ValueSource,
    pub decks: ValueSource,
    pub hide_dealer_card: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            stake: ValueSource::Default,
            joker_mode: ValueSource::Default,
            joker_value: ValueSource::Default,
            decks: ValueSource::Default,
            hide_dealer_card: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            stake: 0,
            joker_mode: JokerDealMode::Auto,
            joker_value: DEFAULT_JOKER_VALUE,
            decks: DEFAULT_DECK_COPIES,
            hide_dealer_card: true,
        }
    }
}

impl Config {
    /// Table settings for a session manager; timeout stays at its default.
    pub fn to_settings(&self) -> AppSettings {
        AppSettings {
            default_stake: self.stake,
            joker_mode: self.joker_mode,
            joker_value: self.joker_value,
            num_decks: self.decks,
            hide_dealer_card: self.hide_dealer_card,
            seed: self.seed,
            ..AppSettings::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `HOLOBAC_CONFIG`, then `HOLOBAC_*`
/// environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let file = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => Some(fs::read_to_string(path)?),
        _ => None,
    };
    resolve(file.as_deref(), |key| std::env::var(key).ok())
}

/// Layers `file` (TOML text) and whatever `env` returns over the defaults.
/// Empty environment values are ignored.
pub fn resolve<F>(file: Option<&str>, env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(s) = file {
        let f: FileConfig = toml::from_str(s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.stake {
            cfg.stake = v;
            sources.stake = ValueSource::File;
        }
        if let Some(v) = f.joker_mode {
            cfg.joker_mode = v;
            sources.joker_mode = ValueSource::File;
        }
        if let Some(v) = f.joker_value {
            cfg.joker_value = v;
            sources.joker_value = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.hide_dealer_card {
            cfg.hide_dealer_card = v;
            sources.hide_dealer_card = ValueSource::File;
        }
    }

    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(seed) = var("HOLOBAC_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stake) = var("HOLOBAC_STAKE") {
        cfg.stake = stake
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid stake".into()))?;
        sources.stake = ValueSource::Env;
    }
    if let Some(mode) = var("HOLOBAC_JOKER_MODE") {
        cfg.joker_mode = mode.parse().map_err(ConfigError::Invalid)?;
        sources.joker_mode = ValueSource::Env;
    }
    if let Some(value) = var("HOLOBAC_JOKER_VALUE") {
        cfg.joker_value = value
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid joker value".into()))?;
        sources.joker_value = ValueSource::Env;
    }
    if let Some(decks) = var("HOLOBAC_DECKS") {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(hide) = var("HOLOBAC_HIDE_DEALER") {
        cfg.hide_dealer_card =
            parse_bool(&hide).ok_or_else(|| ConfigError::Invalid("Invalid hide_dealer".into()))?;
        sources.hide_dealer_card = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    stake: Option<u32>,
    #[serde(default)]
    joker_mode: Option<JokerDealMode>,
    #[serde(default)]
    joker_value: Option<u8>,
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    hide_dealer_card: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if validate_joker_value(cfg.joker_value).is_err() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: joker_value must be one of 1-7, 10, 11, 12 (got {})",
            cfg.joker_value
        )));
    }
    if cfg.decks == 0 || cfg.decks > MAX_DECK_COPIES {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: decks must be between 1 and {}",
            MAX_DECK_COPIES
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_house_table() {
        let resolved = resolve(None, env_of(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.decks, 3);
        assert_eq!(resolved.config.joker_value, 10);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let file = "seed = 5\nstake = 100\njoker_mode = \"prompt\"\n";
        let resolved = resolve(Some(file), env_of(&[("HOLOBAC_SEED", "9")])).unwrap();
        assert_eq!(resolved.config.seed, Some(9));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.stake, 100);
        assert_eq!(resolved.sources.stake, ValueSource::File);
        assert_eq!(resolved.config.joker_mode, JokerDealMode::Prompt);
        assert_eq!(resolved.sources.joker_mode, ValueSource::File);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let resolved = resolve(None, env_of(&[("HOLOBAC_STAKE", "")])).unwrap();
        assert_eq!(resolved.config.stake, 0);
        assert_eq!(resolved.sources.stake, ValueSource::Default);
    }

    #[test]
    fn rejects_joker_value_outside_wild_set() {
        let err = resolve(None, env_of(&[("HOLOBAC_JOKER_VALUE", "8")])).unwrap_err();
        assert!(err.to_string().contains("joker_value"));
    }

    #[test]
    fn rejects_oversized_shoe() {
        let err = resolve(Some("decks = 9"), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_joker_mode() {
        let err = resolve(None, env_of(&[("HOLOBAC_JOKER_MODE", "ask")])).unwrap_err();
        assert!(err.to_string().contains("unknown joker mode"));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = resolve(Some("decks = ["), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn hide_dealer_accepts_common_booleans() {
        for (raw, expected) in [("off", false), ("yes", true), ("0", false)] {
            let resolved = resolve(None, env_of(&[("HOLOBAC_HIDE_DEALER", raw)])).unwrap();
            assert_eq!(resolved.config.hide_dealer_card, expected);
        }
        assert!(resolve(None, env_of(&[("HOLOBAC_HIDE_DEALER", "maybe")])).is_err());
    }

    #[test]
    fn settings_carry_table_values() {
        let cfg = Config {
            seed: Some(3),
            stake: 50,
            joker_mode: JokerDealMode::Prompt,
            joker_value: 7,
            decks: 2,
            hide_dealer_card: false,
        };
        let settings = cfg.to_settings();
        assert_eq!(settings.default_stake, 50);
        assert_eq!(settings.num_decks, 2);
        assert_eq!(settings.seed, Some(3));
        assert!(settings.validate().is_ok());
    }
}
