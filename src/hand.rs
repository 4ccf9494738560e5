//! Hand valuation and the player and dealer hand representations.

use core::fmt;

use crate::card::{ACE, Card, KING};
use crate::error::EvaluationError;

/// Total and softness of a hand.
///
/// Derived on demand from a card sequence, never stored on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandValue {
    /// Hand total with aces reduced as needed to stay at or below 21.
    pub total: u32,
    /// Whether the hand holds an ace and the total is at most 21.
    pub is_soft: bool,
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_soft { "soft" } else { "hard" };
        write!(f, "{kind} {}", self.total)
    }
}

/// Returns the base value of a card: aces count 11, faces count 10.
///
/// The visibility flag is ignored.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidRank`] when the rank is outside 1..=13.
///
/// # Example
///
/// ```
/// use bjtrainer::{Card, Suit, card_value};
///
/// assert_eq!(card_value(&Card::new(Suit::Clubs, 1)), Ok(11));
/// assert_eq!(card_value(&Card::new(Suit::Clubs, 12)), Ok(10));
/// ```
pub const fn card_value(card: &Card) -> Result<u8, EvaluationError> {
    match card.rank {
        ACE => Ok(11),
        2..=10 => Ok(card.rank),
        11..=KING => Ok(10),
        rank => Err(EvaluationError::InvalidRank(rank)),
    }
}

/// Values a sequence of cards.
///
/// Every ace starts at 11. While the total is over 21 and an ace is still
/// counted as 11, that ace drops to 1. The hand is soft when it holds any
/// ace and the final total is at most 21, whether or not an ace is still
/// counted high.
///
/// # Errors
///
/// Returns [`EvaluationError::InvalidRank`] for the first card with a rank
/// outside 1..=13.
///
/// # Example
///
/// ```
/// use bjtrainer::{Card, Suit, valuate};
///
/// let hand = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 6)];
/// let value = valuate(&hand).unwrap();
/// assert_eq!(value.total, 17);
/// assert!(value.is_soft);
/// ```
pub fn valuate(cards: &[Card]) -> Result<HandValue, EvaluationError> {
    let mut total: u32 = 0;
    let mut elastic_aces: usize = 0;
    let mut has_ace = false;

    for card in cards {
        if card.is_ace() {
            elastic_aces += 1;
            has_ace = true;
        }
        total += u32::from(card_value(card)?);
    }

    while total > 21 && elastic_aces > 0 {
        total -= 10;
        elastic_aces -= 1;
    }

    Ok(HandValue {
        total,
        is_soft: has_ace && total <= 21,
    })
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Values the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has an invalid rank.
    pub fn value(&self) -> Result<HandValue, EvaluationError> {
        valuate(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// The dealer's hand: an up card followed by a face-down hole card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the hole card (second card), if dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
