//! Error types for trainer operations.

use thiserror::Error;

/// Errors that can occur while valuing a hand or judging a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A card carries a rank outside 1..=13.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
    /// Strategy evaluation needs exactly two player cards.
    #[error("expected exactly 2 player cards, got {0}")]
    InvalidHandSize(usize),
    /// The dealer has no up card to play against.
    #[error("dealer has no up card")]
    MissingUpCard,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the shoe, even after a refill.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors raised while validating trainer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Deck count outside 1..=8.
    #[error("invalid number of decks {0}, expected 1-8")]
    InvalidDecks(u8),
}

/// Errors surfaced by the interactive session.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A decision could not be judged.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// A round could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The options were rejected.
    #[error(transparent)]
    Options(#[from] OptionsError),
}
