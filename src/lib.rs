//! A blackjack basic-strategy trainer.
//!
//! The crate deals two-card hands against a dealer up card and judges the
//! player's first decision (hit, stand or double down) against a simplified
//! basic-strategy table. The core is two pure functions, [`valuate`] and
//! [`evaluate`]; [`Session`] and the [`cli`] module build the training loop
//! around them.
//!
//! # Example
//!
//! ```
//! use bjtrainer::{Action, Card, Suit, evaluate};
//!
//! let player = [Card::new(Suit::Hearts, 8), Card::new(Suit::Clubs, 6)];
//! let up = Card::new(Suit::Spades, 5);
//! assert_eq!(evaluate(&player, &up, Action::Stand), Ok(true));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod cli;
pub mod error;
pub mod hand;
pub mod options;
pub mod session;
pub mod shoe;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{DealError, EvaluationError, OptionsError, TrainerError};
pub use hand::{DealerHand, Hand, HandValue, card_value, valuate};
pub use options::{TrainerOptions, parse_decks};
pub use session::{Judgement, Round, Session};
pub use shoe::Shoe;
pub use stats::{DealerConfig, PlayerStats};
pub use strategy::{Action, advise, evaluate, prescribed_action};
