//! Input parsing and validation for interactive commands and flags.
//!
//! Player input is parsed here into [`ParseResult`]; whether a joker value is
//! actually allowed at this point of the round is left to the engine.

use holobac_engine::cards::WILD_VALUES;
use holobac_engine::game::JokerDealMode;
use holobac_engine::player::PlayerAction;
use holobac_engine::rules::validate_joker_value;
use holobac_session::settings::MAX_DECK_COPIES;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Draw or stand, optionally naming the value of a pending or drawn joker
    Action {
        action: PlayerAction,
        joker_value: Option<u8>,
    },
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the table.
///
/// Accepts (case-insensitive):
/// - "d" or "draw", optionally followed by a joker value
/// - "s" or "stand", optionally followed by a joker value
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use holobac_cli::validation::{parse_player_input, ParseResult};
/// use holobac_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_input("draw"),
///     ParseResult::Action { action: PlayerAction::Draw, joker_value: None }
/// );
/// assert_eq!(
///     parse_player_input("S 11"),
///     ParseResult::Action { action: PlayerAction::Stand, joker_value: Some(11) }
/// );
/// assert_eq!(parse_player_input("q"), ParseResult::Quit);
/// ```
pub fn parse_player_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    let action = match parts[0] {
        "d" | "draw" | "hit" => PlayerAction::Draw,
        "s" | "stand" => PlayerAction::Stand,
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: draw [value], stand [value], q",
                other
            ));
        }
    };

    if parts.len() > 2 {
        return ParseResult::Invalid(format!(
            "Too many arguments for {}; expected at most a joker value",
            action.as_str()
        ));
    }

    let joker_value = match parts.get(1) {
        None => None,
        Some(raw) => match raw.parse::<u8>() {
            Ok(v) => Some(v),
            Err(_) => {
                return ParseResult::Invalid(format!("Invalid joker value '{}'", raw));
            }
        },
    };

    ParseResult::Action {
        action,
        joker_value,
    }
}

/// Answer to a yes/no prompt; anything unrecognised counts as no.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Value parser for `--joker-value`.
pub fn parse_joker_value(s: &str) -> Result<u8, String> {
    let v: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    validate_joker_value(v).map_err(|_| {
        let allowed: Vec<String> = WILD_VALUES.iter().map(|v| v.to_string()).collect();
        format!("{} is not a joker value (allowed: {})", v, allowed.join(", "))
    })
}

/// Value parser for `--joker-mode`.
pub fn parse_joker_mode(s: &str) -> Result<JokerDealMode, String> {
    s.trim().parse()
}

/// Value parser for `--decks`.
pub fn parse_decks(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if n == 0 || n > MAX_DECK_COPIES {
        return Err(format!("decks must be between 1 and {}", MAX_DECK_COPIES));
    }
    Ok(n)
}
