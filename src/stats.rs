//! Session records for the player and the dealer.

use crate::options::DEFAULT_DECKS;

/// Running accuracy of the player's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    /// Hands judged so far.
    pub played: u32,
    /// Hands where the declared action matched basic strategy.
    pub correct: u32,
}

impl PlayerStats {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            played: 0,
            correct: 0,
        }
    }

    /// Records one judged hand.
    pub const fn record(&mut self, accurate: bool) {
        self.played += 1;
        if accurate {
            self.correct += 1;
        }
    }

    /// Returns the share of correct decisions as a percentage.
    ///
    /// Returns `0.0` before any hand has been played.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::PlayerStats;
    ///
    /// let mut stats = PlayerStats::new();
    /// assert_eq!(stats.percentage(), 0.0);
    /// stats.record(true);
    /// stats.record(false);
    /// assert_eq!(stats.percentage(), 50.0);
    /// ```
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.played) * 100.0
    }
}

/// Table settings chosen by the dealer at the start of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerConfig {
    /// Number of decks the shoe is built from.
    pub decks: u8,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
        }
    }
}
