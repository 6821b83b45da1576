use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, DEFAULT_DECK_COPIES};
use crate::dealer::{self, DEALER_OPENING_JOKER_VALUE};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::BUST_LIMIT;
use crate::player::{Participant, PlayerAction};
use crate::rules::{determine_outcome, total, validate_joker_value, Outcome, RoundScores, ROUNDS_PER_GAME};
use crate::snapshot::{CardView, GameStateSnapshot, RoundResult};

/// Value a player joker receives when it is assigned automatically.
pub const DEFAULT_JOKER_VALUE: u8 = 10;

/// How jokers reaching the player are valued.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokerDealMode {
    /// Assign [`GameConfig::joker_value`] straight away
    #[default]
    Auto,
    /// Hold the joker until the player names a value
    Prompt,
}

impl JokerDealMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JokerDealMode::Auto => "auto",
            JokerDealMode::Prompt => "prompt",
        }
    }
}

impl fmt::Display for JokerDealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JokerDealMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(JokerDealMode::Auto),
            "prompt" => Ok(JokerDealMode::Prompt),
            other => Err(format!("unknown joker mode: {other} (expected auto or prompt)")),
        }
    }
}

/// Table rules for one game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Spanish deck copies in the shoe
    pub num_copies: usize,
    /// Shuffle seed; a random one is picked when absent
    pub seed: Option<u64>,
    pub joker_mode: JokerDealMode,
    /// Value used for player jokers in [`JokerDealMode::Auto`]
    pub joker_value: u8,
    /// Show the dealer's first card face down until the dealer plays
    pub hide_dealer_card: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_copies: DEFAULT_DECK_COPIES,
            seed: None,
            joker_mode: JokerDealMode::Auto,
            joker_value: DEFAULT_JOKER_VALUE,
            hide_dealer_card: true,
        }
    }
}

/// Where a game currently stands. Between actions a game rests in
/// `AwaitingJokerValue`, `PlayerActing` or `GameOver`; the other phases are
/// passed through while an action is processed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Dealt,
    AwaitingJokerValue,
    PlayerActing,
    DealerResolving,
    RoundSettled,
    GameOver,
}

/// A three-round game of Holobac between one player and the dealer.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    seed: Option<u64>,
    deck: Deck,
    player: Participant,
    dealer: Participant,
    /// 1-based; moves past [`ROUNDS_PER_GAME`] when the last round settles
    round: usize,
    player_round_scores: RoundScores,
    dealer_round_scores: RoundScores,
    /// The player's turn ended without input (two-joker opening)
    player_done: bool,
    /// Hand position of a player joker still waiting for its value
    pending_joker: Option<usize>,
    commentary: String,
    stake: u32,
    phase: Phase,
    history: Vec<RoundResult>,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Shuffles a fresh shoe and deals the first round.
    pub fn new(config: GameConfig, stake: u32) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut deck = Deck::new_with_seed(config.num_copies, seed);
        deck.shuffle();
        let mut game = Self::build(config, stake, deck)?;
        game.seed = Some(seed);
        game.start_round()?;
        Ok(game)
    }

    /// Deals the first round from `deck` as given, without shuffling.
    pub fn with_deck(config: GameConfig, stake: u32, deck: Deck) -> Result<Self, GameError> {
        let mut game = Self::build(config, stake, deck)?;
        game.start_round()?;
        Ok(game)
    }

    fn build(config: GameConfig, stake: u32, deck: Deck) -> Result<Self, GameError> {
        validate_joker_value(config.joker_value)?;
        Ok(Self {
            seed: config.seed,
            config,
            deck,
            player: Participant::player(),
            dealer: Participant::dealer(),
            round: 1,
            player_round_scores: [None; ROUNDS_PER_GAME],
            dealer_round_scores: [None; ROUNDS_PER_GAME],
            player_done: false,
            pending_joker: None,
            commentary: String::new(),
            stake,
            phase: Phase::Dealt,
            history: Vec::with_capacity(ROUNDS_PER_GAME),
            outcome: None,
        })
    }

    /// Applies one player action and runs the game forward until it needs
    /// the player again or is over.
    ///
    /// `joker_value` answers a pending joker, or pre-assigns the value of a
    /// joker drawn by this action. While a joker is pending, `Draw` only
    /// answers it and `Stand` answers it and then stands.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once round 3 has settled
    /// - [`GameError::InvalidJokerValue`] for a value outside the wild set
    /// - [`GameError::JokerValueRequired`] when a joker is pending and no value came
    pub fn apply_action(
        &mut self,
        action: PlayerAction,
        joker_value: Option<u8>,
    ) -> Result<(), GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        let joker_value = joker_value.map(validate_joker_value).transpose()?;

        tracing::debug!(
            round = self.round,
            action = action.as_str(),
            joker_value = ?joker_value,
            phase = ?self.phase,
            "applying player action"
        );

        if self.phase == Phase::AwaitingJokerValue {
            let value = joker_value.ok_or(GameError::JokerValueRequired)?;
            self.resolve_pending_joker(value)?;
            return match action {
                PlayerAction::Stand => self.stand(),
                PlayerAction::Draw => self.after_player_card(),
            };
        }

        if self.player_done {
            return match action {
                PlayerAction::Draw => self.auto_stand(),
                PlayerAction::Stand => self.stand(),
            };
        }
        match action {
            PlayerAction::Draw => self.draw(joker_value),
            PlayerAction::Stand => self.stand(),
        }
    }

    fn start_round(&mut self) -> Result<(), GameError> {
        self.player.reset_round();
        self.dealer.reset_round();
        self.player_done = false;
        self.pending_joker = None;
        self.phase = Phase::Dealt;

        // player first, always
        let opening: Vec<Card> = (0..2).filter_map(|_| self.deck.draw()).collect();
        let dealer_opening: Vec<Card> = (0..2).filter_map(|_| self.deck.draw()).collect();

        let two_jokers = opening.len() == 2 && opening.iter().all(Card::is_joker);
        for card in opening {
            if card.is_joker() && !two_jokers && self.config.joker_mode == JokerDealMode::Prompt {
                self.pending_joker = Some(self.player.hand().len());
                continue;
            }
            let value = card.is_joker().then_some(self.config.joker_value);
            self.player.hand_mut().add_card(card, value)?;
        }
        for card in dealer_opening {
            let value = card.is_joker().then_some(DEALER_OPENING_JOKER_VALUE);
            self.dealer.hand_mut().add_card(card, value)?;
        }

        let score = self.player.hand().round_score();
        if two_jokers {
            self.player.hand_mut().force_score(BUST_LIMIT);
            self.player_done = true;
            self.commentary = "Two jokers! HOLOBAC! Your score is automatically 30.".to_string();
            self.phase = Phase::PlayerActing;
        } else if self.pending_joker.is_some() {
            self.commentary =
                format!("You were dealt a Joker. Choose its value. Your score is {score}.");
            self.phase = Phase::AwaitingJokerValue;
        } else {
            self.commentary = format!("Your score is {score}.");
            self.phase = Phase::PlayerActing;
        }

        tracing::debug!(
            round = self.round,
            player_score = self.player.hand().round_score(),
            holobac = two_jokers,
            pending_joker = self.pending_joker.is_some(),
            deck_remaining = self.deck.remaining(),
            "round dealt"
        );
        Ok(())
    }

    fn resolve_pending_joker(&mut self, value: u8) -> Result<(), GameError> {
        let position = self.pending_joker.take().ok_or(GameError::JokerValueRequired)?;
        let score = self
            .player
            .hand_mut()
            .insert_card(position, Card::Joker, Some(value))?;
        self.commentary = format!("Your Joker counts as {value}. Your score is {score}.");
        Ok(())
    }

    fn draw(&mut self, joker_value: Option<u8>) -> Result<(), GameError> {
        let Some(card) = self.deck.draw() else {
            self.commentary = "No more cards in the deck!".to_string();
            self.phase = Phase::PlayerActing;
            return Ok(());
        };

        if card.is_joker() {
            let value = match (joker_value, self.config.joker_mode) {
                (Some(v), _) => v,
                (None, JokerDealMode::Auto) => self.config.joker_value,
                (None, JokerDealMode::Prompt) => {
                    self.pending_joker = Some(self.player.hand().len());
                    self.commentary = "You drew a Joker. Choose its value.".to_string();
                    self.phase = Phase::AwaitingJokerValue;
                    return Ok(());
                }
            };
            let score = self.player.hand_mut().add_card(card, Some(value))?;
            self.commentary = format!("You drew a Joker (as {value}). Your score is {score}.");
        } else {
            let score = self.player.hand_mut().add_card(card, None)?;
            self.commentary = format!("You drew a {card}. Your score is {score}.");
        }
        self.after_player_card()
    }

    fn after_player_card(&mut self) -> Result<(), GameError> {
        let score = self.player.hand().round_score();
        if score > BUST_LIMIT {
            self.commentary = format!("Your score is {score}. You busted!");
            self.auto_stand()
        } else if score == BUST_LIMIT {
            self.commentary = "HOLOBAC! You have 30 exactly!".to_string();
            self.auto_stand()
        } else {
            self.phase = Phase::PlayerActing;
            Ok(())
        }
    }

    fn stand(&mut self) -> Result<(), GameError> {
        self.resolve_dealer()?;
        let dealer_score = self.dealer.hand().settled_score();
        let hand = self.player.hand();
        self.commentary = if hand.is_busted() {
            format!("You busted! Dealer ends with {dealer_score}.")
        } else {
            format!(
                "You stand at {}. Dealer ends with {dealer_score}.",
                hand.round_score()
            )
        };
        self.settle_round()
    }

    /// Ends the player's turn without input: bust, exact 30 or two jokers.
    fn auto_stand(&mut self) -> Result<(), GameError> {
        self.resolve_dealer()?;
        let dealer_score = self.dealer.hand().settled_score();
        self.commentary
            .push_str(&format!(" Dealer ends with {dealer_score}."));
        self.settle_round()
    }

    fn resolve_dealer(&mut self) -> Result<(), GameError> {
        self.phase = Phase::DealerResolving;
        let play = dealer::play(self.dealer.hand_mut(), &mut self.deck)?;
        tracing::debug!(
            round = self.round,
            drawn = play.drawn.len(),
            dealer_score = self.dealer.hand().round_score(),
            dealer_busted = self.dealer.hand().is_busted(),
            deck_exhausted = play.deck_exhausted,
            "dealer resolved"
        );
        Ok(())
    }

    fn settle_round(&mut self) -> Result<(), GameError> {
        self.phase = Phase::RoundSettled;
        let idx = self.round - 1;
        let player_hand = self.player.hand();
        let dealer_hand = self.dealer.hand();
        let player_recorded = player_hand.settled_score();
        let dealer_recorded = dealer_hand.settled_score();

        self.player_round_scores[idx] = Some(player_recorded);
        self.dealer_round_scores[idx] = Some(dealer_recorded);
        self.history.push(RoundResult {
            round: self.round,
            player_cards: player_hand.cards().to_vec(),
            dealer_cards: dealer_hand.cards().to_vec(),
            player_score: player_hand.round_score(),
            dealer_score: dealer_hand.round_score(),
            player_busted: player_hand.is_busted(),
            dealer_busted: dealer_hand.is_busted(),
            player_recorded,
            dealer_recorded,
            holobac: player_hand.is_forced(),
            commentary: self.commentary.clone(),
        });
        self.player.bank(player_recorded);
        self.dealer.bank(dealer_recorded);

        tracing::debug!(
            round = self.round,
            player_recorded,
            dealer_recorded,
            "round settled"
        );

        self.round += 1;
        if self.round > ROUNDS_PER_GAME {
            self.finish();
            Ok(())
        } else {
            self.start_round()
        }
    }

    fn finish(&mut self) {
        let outcome = determine_outcome(&self.player_round_scores, &self.dealer_round_scores);
        let p = total(&self.player_round_scores);
        let d = total(&self.dealer_round_scores);
        let verdict = match outcome {
            Outcome::Win => "You won!",
            Outcome::Loss => "You lost.",
            Outcome::Tie => "It's a tie!",
        };
        self.commentary
            .push_str(&format!(" {verdict} Final: Dealer {d}, Player {p}"));
        self.outcome = Some(outcome);
        self.phase = Phase::GameOver;
        tracing::debug!(outcome = outcome.as_str(), player_total = p, dealer_total = d, "game over");
    }

    /// Read-only picture of the table for the presentation layer.
    pub fn snapshot(&self) -> GameStateSnapshot {
        let mut player_hand: Vec<CardView> =
            self.player.hand().cards().iter().map(CardView::scored).collect();
        if let Some(position) = self.pending_joker {
            let position = position.min(player_hand.len());
            player_hand.insert(
                position,
                CardView::Visible {
                    card: Card::Joker,
                    value: None,
                },
            );
        }

        let hide_dealer = self.config.hide_dealer_card
            && matches!(
                self.phase,
                Phase::PlayerActing | Phase::AwaitingJokerValue | Phase::Dealt
            );
        let dealer_hand: Vec<CardView> = self
            .dealer
            .hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if hide_dealer && i == 0 {
                    CardView::Hidden
                } else {
                    CardView::scored(c)
                }
            })
            .collect();

        GameStateSnapshot {
            round: self.round(),
            phase: self.phase,
            stake: self.stake,
            player_round_scores: self.player_round_scores,
            dealer_round_scores: self.dealer_round_scores,
            player_total: total(&self.player_round_scores),
            dealer_total: total(&self.dealer_round_scores),
            player_hand,
            dealer_hand,
            player_score: self.player.hand().round_score(),
            dealer_score: (!hide_dealer).then(|| self.dealer.hand().round_score()),
            player_busted: self.player.hand().is_busted(),
            dealer_busted: !hide_dealer && self.dealer.hand().is_busted(),
            pending_joker: self.pending_joker.is_some(),
            auto_concluded: self.player_done,
            commentary: self.commentary.clone(),
            last_round: self.history.last().cloned(),
            outcome: self.outcome,
            deck_remaining: self.deck.remaining(),
        }
    }

    /// Round shown to the player, capped at the last round.
    pub fn round(&self) -> usize {
        self.round.min(ROUNDS_PER_GAME)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn stake(&self) -> u32 {
        self.stake
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn player_round_scores(&self) -> &RoundScores {
        &self.player_round_scores
    }

    pub fn dealer_round_scores(&self) -> &RoundScores {
        &self.dealer_round_scores
    }

    pub fn commentary(&self) -> &str {
        &self.commentary
    }

    pub fn is_auto_concluded(&self) -> bool {
        self.player_done
    }

    pub fn has_pending_joker(&self) -> bool {
        self.pending_joker.is_some()
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(rank: Rank) -> Card {
        Card::ranked(Suit::Copa, rank)
    }

    fn game(cards: Vec<Card>) -> GameState {
        GameState::with_deck(GameConfig::default(), 0, Deck::from_cards(cards)).unwrap()
    }

    fn prompt_game(cards: Vec<Card>) -> GameState {
        let config = GameConfig {
            joker_mode: JokerDealMode::Prompt,
            ..GameConfig::default()
        };
        GameState::with_deck(config, 0, Deck::from_cards(cards)).unwrap()
    }

    #[test]
    fn deals_player_first_then_dealer() {
        let g = game(vec![c(Rank::One), c(Rank::Two), c(Rank::Three), c(Rank::Four)]);
        let p: Vec<Card> = g.player().hand().cards().iter().map(|s| s.card).collect();
        let d: Vec<Card> = g.dealer().hand().cards().iter().map(|s| s.card).collect();
        assert_eq!(p, vec![c(Rank::One), c(Rank::Two)]);
        assert_eq!(d, vec![c(Rank::Three), c(Rank::Four)]);
        assert_eq!(g.phase(), Phase::PlayerActing);
        assert_eq!(g.commentary(), "Your score is 3.");
    }

    #[test]
    fn player_jokers_auto_assigned_on_deal() {
        let g = game(vec![Card::Joker, c(Rank::Two), Card::Joker, Card::Joker]);
        assert_eq!(g.player().hand().round_score(), 12);
        // dealer two jokers are never the auto-30 shortcut
        assert_eq!(g.dealer().hand().round_score(), 20);
        assert!(!g.is_auto_concluded());
    }

    #[test]
    fn two_joker_opening_forces_thirty() {
        let g = game(vec![Card::Joker, Card::Joker, c(Rank::Rey), c(Rank::Rey)]);
        assert_eq!(g.player().hand().round_score(), 30);
        assert!(g.is_auto_concluded());
        assert!(g.commentary().contains("HOLOBAC"));
    }

    #[test]
    fn draw_after_two_jokers_stands_automatically() {
        let mut g = game(vec![
            Card::Joker,
            Card::Joker,
            c(Rank::Rey),
            c(Rank::Rey),
            c(Rank::One),
        ]);
        g.apply_action(PlayerAction::Draw, None).unwrap();
        assert_eq!(g.player_round_scores()[0], Some(30));
        assert_eq!(g.dealer_round_scores()[0], Some(24));
        // the unused card went to the next round's deal
        assert_eq!(g.round(), 2);
        let last = g.history().last().unwrap();
        assert!(last.holobac);
        assert!(last.commentary.ends_with("Dealer ends with 24."));
    }

    #[test]
    fn stand_after_two_jokers_reads_as_a_stand() {
        let mut g = game(vec![Card::Joker, Card::Joker, c(Rank::Rey), c(Rank::Rey)]);
        g.apply_action(PlayerAction::Stand, None).unwrap();
        assert_eq!(g.player_round_scores()[0], Some(30));
        let last = g.history().last().unwrap();
        assert!(last.holobac);
        assert_eq!(last.commentary, "You stand at 30. Dealer ends with 24.");
    }

    #[test]
    fn exact_thirty_on_draw_settles_round() {
        let mut g = game(vec![
            c(Rank::Rey),
            c(Rank::Rey),
            c(Rank::Rey),
            c(Rank::Rey),
            c(Rank::Six),
        ]);
        g.apply_action(PlayerAction::Draw, None).unwrap();
        let r = &g.history()[0];
        assert_eq!(r.player_recorded, 30);
        assert_eq!(r.dealer_recorded, 24);
        assert!(r.commentary.starts_with("HOLOBAC! You have 30 exactly!"));
    }

    #[test]
    fn empty_deck_draw_is_not_an_error() {
        let mut g = game(vec![c(Rank::Two), c(Rank::Three), c(Rank::Rey), c(Rank::Rey)]);
        g.apply_action(PlayerAction::Draw, None).unwrap();
        assert_eq!(g.commentary(), "No more cards in the deck!");
        assert_eq!(g.phase(), Phase::PlayerActing);
        g.apply_action(PlayerAction::Stand, None).unwrap();
        assert_eq!(g.player_round_scores()[0], Some(5));
        assert_eq!(g.dealer_round_scores()[0], Some(24));
    }

    #[test]
    fn prompt_mode_waits_for_joker_value_on_deal() {
        let mut g = prompt_game(vec![
            Card::Joker,
            c(Rank::Five),
            c(Rank::Rey),
            c(Rank::Rey),
        ]);
        assert_eq!(g.phase(), Phase::AwaitingJokerValue);
        let snap = g.snapshot();
        assert!(snap.pending_joker);
        assert_eq!(
            snap.player_hand[0],
            CardView::Visible {
                card: Card::Joker,
                value: None
            }
        );
        assert_eq!(
            g.apply_action(PlayerAction::Draw, None),
            Err(GameError::JokerValueRequired)
        );
        g.apply_action(PlayerAction::Draw, Some(12)).unwrap();
        assert_eq!(g.phase(), Phase::PlayerActing);
        assert!(g.player().hand().cards()[0].card.is_joker());
        assert_eq!(g.player().hand().round_score(), 17);
    }

    #[test]
    fn prompt_mode_stand_with_value_settles() {
        let mut g = prompt_game(vec![
            c(Rank::Five),
            Card::Joker,
            c(Rank::Rey),
            c(Rank::Rey),
        ]);
        g.apply_action(PlayerAction::Stand, Some(7)).unwrap();
        assert_eq!(g.player_round_scores()[0], Some(12));
    }

    #[test]
    fn prompt_mode_drawn_joker_is_held() {
        let mut g = prompt_game(vec![
            c(Rank::Rey),
            c(Rank::Sota),
            c(Rank::Rey),
            c(Rank::Rey),
            Card::Joker,
        ]);
        g.apply_action(PlayerAction::Draw, None).unwrap();
        assert!(g.has_pending_joker());
        g.apply_action(PlayerAction::Draw, Some(8))
            .expect_err("8 is not a wild value");
        g.apply_action(PlayerAction::Draw, Some(12)).unwrap();
        // 22 + 12 busts and the round settles
        assert_eq!(g.player_round_scores()[0], Some(0));
    }

    #[test]
    fn declared_joker_value_overrides_auto() {
        let mut g = game(vec![
            c(Rank::Rey),
            c(Rank::Sota),
            c(Rank::Rey),
            c(Rank::Rey),
            Card::Joker,
        ]);
        g.apply_action(PlayerAction::Draw, Some(4)).unwrap();
        assert_eq!(g.player().hand().round_score(), 26);
        assert!(g.commentary().contains("Joker (as 4)"));
    }

    #[test]
    fn dealer_card_hidden_until_dealer_plays() {
        let g = game(vec![c(Rank::One), c(Rank::Two), c(Rank::Three), c(Rank::Four)]);
        let snap = g.snapshot();
        assert!(snap.dealer_hand[0].is_hidden());
        assert!(!snap.dealer_hand[1].is_hidden());
        assert_eq!(snap.dealer_score, None);

        let config = GameConfig {
            hide_dealer_card: false,
            ..GameConfig::default()
        };
        let open = GameState::with_deck(
            config,
            0,
            Deck::from_cards(vec![c(Rank::One), c(Rank::Two), c(Rank::Three), c(Rank::Four)]),
        )
        .unwrap();
        assert_eq!(open.snapshot().dealer_score, Some(7));
    }

    #[test]
    fn action_after_game_over_is_rejected() {
        let mut g = game(Vec::new());
        for _ in 0..3 {
            g.apply_action(PlayerAction::Stand, None).unwrap();
        }
        assert!(g.is_over());
        assert_eq!(g.outcome(), Some(Outcome::Tie));
        assert_eq!(
            g.apply_action(PlayerAction::Stand, None),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn invalid_auto_joker_value_is_rejected_up_front() {
        let config = GameConfig {
            joker_value: 9,
            ..GameConfig::default()
        };
        let err = GameState::with_deck(config, 0, Deck::from_cards(Vec::new())).unwrap_err();
        assert_eq!(err, GameError::InvalidJokerValue { value: 9 });
    }
}
