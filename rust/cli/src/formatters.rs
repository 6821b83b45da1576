//! Card, hand and scoreboard formatters for terminal display.
//!
//! Hands are joined with a bullet (`•`) where the terminal can show it and
//! with `|` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holobac_engine::cards::{Card, Rank, Suit};
//! use holobac_engine::snapshot::CardView;
//! use holobac_cli::formatters::{format_card_view, format_scoreboard};
//!
//! let six = CardView::Visible { card: Card::ranked(Suit::Copa, Rank::Six), value: Some(6) };
//! assert_eq!(format_card_view(&six), "6 of copa");
//! assert_eq!(format_card_view(&CardView::Hidden), "[hidden]");
//!
//! assert_eq!(format_scoreboard(&[Some(20), None, None]), "[ 20 ] [ 0 ] [ 0 ] (Total: 20)");
//! ```

use holobac_engine::cards::Card;
use holobac_engine::hand::ScoredCard;
use holobac_engine::rules::{Outcome, ROUNDS_PER_GAME, RoundScores, total};
use holobac_engine::snapshot::{CardView, GameStateSnapshot, RoundResult};

/// Check if the terminal can render the bullet separator.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes it can.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn separator() -> &'static str {
    if supports_unicode() { " • " } else { " | " }
}

/// `"6 of copa"`, `"Joker(as 10)"`, or `"Joker(?)"` while its value is open.
pub fn format_card(card: &Card, value: Option<u8>) -> String {
    match (card, value) {
        (Card::Joker, Some(v)) => format!("Joker(as {})", v),
        (Card::Joker, None) => "Joker(?)".to_string(),
        (ranked, _) => ranked.to_string(),
    }
}

pub fn format_card_view(view: &CardView) -> String {
    match view {
        CardView::Visible { card, value } => format_card(card, *value),
        CardView::Hidden => "[hidden]".to_string(),
    }
}

pub fn format_hand(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "No cards.".to_string();
    }
    cards
        .iter()
        .map(format_card_view)
        .collect::<Vec<_>>()
        .join(separator())
}

/// Same as [`format_hand`] for a settled hand, every card face up.
pub fn format_scored_hand(cards: &[ScoredCard]) -> String {
    let views: Vec<CardView> = cards.iter().map(CardView::scored).collect();
    format_hand(&views)
}

/// `"[ a ] [ b ] [ c ] (Total: t)"`, unplayed rounds shown as 0.
pub fn format_scoreboard(scores: &RoundScores) -> String {
    let slots: Vec<String> = scores
        .iter()
        .map(|s| format!("[ {} ]", s.unwrap_or(0)))
        .collect();
    format!("{} (Total: {})", slots.join(" "), total(scores))
}

pub fn format_round_label(round: usize) -> String {
    format!("(Round {} of {})", round, ROUNDS_PER_GAME)
}

pub fn format_outcome_title(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Well Played!",
        Outcome::Loss => "Better Luck Next Time!",
        Outcome::Tie => "It's a Tie!",
    }
}

/// Two-line summary of a settled round with both hands face up.
pub fn format_round_result(result: &RoundResult) -> String {
    let side = |score: u32, busted: bool| {
        if busted {
            format!("{} (bust)", score)
        } else {
            score.to_string()
        }
    };
    let mut s = format!(
        "Round {} settled: You {} vs Dealer {}",
        result.round,
        side(result.player_score, result.player_busted),
        side(result.dealer_score, result.dealer_busted),
    );
    if result.holobac {
        s.push_str(" (HOLOBAC)");
    }
    s.push_str(&format!(
        "\n  Dealer's hand: {}",
        format_scored_hand(&result.dealer_cards)
    ));
    s
}

/// Full table: round and bet, both scoreboards, hands and commentary.
pub fn format_table(snapshot: &GameStateSnapshot) -> String {
    let mut lines = Vec::new();
    if let Some(outcome) = snapshot.outcome {
        lines.push(format!("== {} ==", format_outcome_title(outcome)));
    } else {
        lines.push(format!(
            "{} Bet: {} Credits",
            format_round_label(snapshot.round),
            snapshot.stake
        ));
    }
    lines.push(format!(
        "Dealer: {}",
        format_scoreboard(&snapshot.dealer_round_scores)
    ));
    lines.push(format!(
        "Player: {}",
        format_scoreboard(&snapshot.player_round_scores)
    ));
    if !snapshot.is_over() {
        let dealer_score = match snapshot.dealer_score {
            Some(score) => score.to_string(),
            None => "?".to_string(),
        };
        lines.push(format!(
            "Dealer's hand: {} (score {})",
            format_hand(&snapshot.dealer_hand),
            dealer_score
        ));
        lines.push(format!(
            "Your hand: {} (score {})",
            format_hand(&snapshot.player_hand),
            snapshot.player_score
        ));
    }
    lines.push(format!("> {}", snapshot.commentary));
    lines.join("\n")
}
