//! Trainer configuration options.

use crate::error::OptionsError;

/// Smallest accepted deck count.
pub const MIN_DECKS: u8 = 1;
/// Largest accepted deck count.
pub const MAX_DECKS: u8 = 8;
/// Deck count used when none or an invalid one is given.
pub const DEFAULT_DECKS: u8 = 4;

/// Configuration options for a training session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtrainer::TrainerOptions;
///
/// let options = TrainerOptions::default()
///     .with_decks(6)
///     .with_seed(Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Seed for the shoe's random number generator. `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            seed: None,
        }
    }
}

impl TrainerOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the deck count is within 1..=8.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidDecks`] otherwise.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(OptionsError::InvalidDecks(self.decks));
        }
        Ok(())
    }
}

/// Parses a deck count typed by the player.
///
/// Only plain digits in 1..=8 are accepted; surrounding whitespace is
/// ignored.
///
/// # Example
///
/// ```
/// use bjtrainer::parse_decks;
///
/// assert_eq!(parse_decks(" 6 "), Some(6));
/// assert_eq!(parse_decks("9"), None);
/// assert_eq!(parse_decks("+2"), None);
/// ```
#[must_use]
pub fn parse_decks(input: &str) -> Option<u8> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input
        .parse::<u8>()
        .ok()
        .filter(|decks| (MIN_DECKS..=MAX_DECKS).contains(decks))
}
