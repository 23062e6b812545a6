use thiserror::Error;

use crate::game::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid wager {amount}: {reason}")]
    InvalidWager { amount: u32, reason: &'static str },
    #[error("Invalid decision: {0}")]
    InvalidDecision(String),
    #[error("Invalid hand: {0}")]
    InvalidHand(String),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Round is in phase {actual:?} (expected {expected:?})")]
    InvalidTransition { expected: Phase, actual: Phase },
}
