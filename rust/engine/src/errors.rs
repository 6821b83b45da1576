use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    /// A joker reached the scoring step without a wild value. Callers must
    /// resolve the value first; seeing this means the caller is broken.
    #[error("Joker drawn but no value assigned")]
    InvalidJokerAssignment,
    #[error("Invalid joker value: {value} (allowed: 1-7, 10, 11, 12)")]
    InvalidJokerValue { value: u8 },
    #[error("A joker is waiting for its value")]
    JokerValueRequired,
    #[error("Game already over")]
    GameOver,
}
