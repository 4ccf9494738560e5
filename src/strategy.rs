//! Simplified basic strategy for the first decision on a two-card hand.
//!
//! The table covers hit, stand and double down only. There is no split or
//! surrender column, and the dealer's hole card never takes part.

use core::fmt;

use crate::card::Card;
use crate::error::EvaluationError;
use crate::hand::{HandValue, card_value, valuate};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the bet and take exactly one card.
    DoubleDown,
}

impl Action {
    /// Returns the single-letter key the player types for this action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Stand => 'S',
            Self::DoubleDown => 'D',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DoubleDown => "double down",
        })
    }
}

/// Looks up the prescribed action for a player hand against a dealer value.
///
/// `dealer_value` is the base value of the dealer's up card (2..=11).
#[must_use]
pub const fn prescribed_action(hand: HandValue, dealer_value: u8) -> Action {
    if hand.is_soft {
        return match hand.total {
            0..=17 => Action::Hit,
            18 => match dealer_value {
                2 | 7 | 8 => Action::Stand,
                _ => Action::Hit,
            },
            _ => Action::Stand,
        };
    }

    match hand.total {
        0..=8 => Action::Hit,
        9 => match dealer_value {
            3..=6 => Action::DoubleDown,
            _ => Action::Hit,
        },
        10 => {
            if dealer_value <= 9 {
                Action::DoubleDown
            } else {
                Action::Hit
            }
        }
        11 => Action::DoubleDown,
        12 => match dealer_value {
            2 | 3 | 7 | 8 | 9 | 10 | 11 => Action::Hit,
            _ => Action::Stand,
        },
        13..=16 => match dealer_value {
            2..=6 => Action::Stand,
            _ => Action::Hit,
        },
        _ => Action::Stand,
    }
}

/// Returns the prescribed action for a two-card hand against an up card.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidHandSize`] unless exactly two player
/// cards are given, and [`EvaluationError::InvalidRank`] for a bad rank.
///
/// # Example
///
/// ```
/// use bjtrainer::{Action, Card, Suit, advise};
///
/// let player = [Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 6)];
/// let up = Card::new(Suit::Spades, 5);
/// assert_eq!(advise(&player, &up), Ok(Action::DoubleDown));
/// ```
pub fn advise(player_cards: &[Card], dealer_upcard: &Card) -> Result<Action, EvaluationError> {
    if player_cards.len() != 2 {
        return Err(EvaluationError::InvalidHandSize(player_cards.len()));
    }

    let hand = valuate(player_cards)?;
    let dealer_value = card_value(dealer_upcard)?;
    Ok(prescribed_action(hand, dealer_value))
}

/// Judges a declared action against the prescribed one.
///
/// Returns `true` when the declared action is what basic strategy calls for.
///
/// # Errors
///
/// Same as [`advise`].
///
/// # Example
///
/// ```
/// use bjtrainer::{Action, Card, Suit, evaluate};
///
/// let player = [Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 10)];
/// let up = Card::new(Suit::Spades, 9);
/// assert_eq!(evaluate(&player, &up, Action::Stand), Ok(true));
/// assert_eq!(evaluate(&player, &up, Action::Hit), Ok(false));
/// ```
pub fn evaluate(
    player_cards: &[Card],
    dealer_upcard: &Card,
    declared: Action,
) -> Result<bool, EvaluationError> {
    advise(player_cards, dealer_upcard).map(|prescribed| prescribed == declared)
}
