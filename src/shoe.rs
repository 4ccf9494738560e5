//! The dealing shoe.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};

/// Cards dealt in one round: two to the player, two to the dealer.
pub const CARDS_PER_ROUND: usize = 4;

/// A shoe of one or more shuffled decks.
///
/// The shoe owns its random number generator, so a seeded generator gives a
/// reproducible dealing order across refills.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    cards: Vec<Card>,
    decks: u8,
    rng: R,
}

impl Shoe<ChaCha8Rng> {
    /// Creates a shoe shuffled with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::seeded(2, 42);
    /// assert_eq!(shoe.remaining(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn seeded(decks: u8, seed: u64) -> Self {
        Self::new(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shoe<R> {
    /// Creates and shuffles a shoe with the specified number of decks.
    #[must_use]
    pub fn new(decks: u8, mut rng: R) -> Self {
        let cards = Self::create_cards(decks, &mut rng);
        Self { cards, decks, rng }
    }

    fn create_cards(decks: u8, rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 2..=13 {
                    cards.push(Card::new(suit, rank));
                }
                cards.push(Card::new(suit, 1));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the shoe with freshly shuffled decks.
    pub fn refill(&mut self) {
        self.cards = Self::create_cards(self.decks, &mut self.rng);
        debug!(decks = self.decks, cards = self.cards.len(), "shoe refilled");
    }

    /// Returns whether the shoe can no longer supply a full round.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.cards.len() < CARDS_PER_ROUND
    }

    /// Deals the top card with the given visibility.
    ///
    /// Returns `None` when the shoe is empty.
    pub fn deal_card(&mut self, face_down: bool) -> Option<Card> {
        self.cards.pop().map(|card| card.with_face_down(face_down))
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Replaces the remaining cards, dealing from the end of `cards` first.
    ///
    /// Intended for scripted rounds in tests and demos.
    pub fn stack(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
