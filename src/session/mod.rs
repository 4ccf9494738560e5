//! Training session state.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::error::{DealError, EvaluationError, OptionsError};
use crate::hand::{DealerHand, Hand};
use crate::options::TrainerOptions;
use crate::shoe::Shoe;
use crate::stats::{DealerConfig, PlayerStats};
use crate::strategy::{Action, advise};

pub mod round;

pub use round::{Judgement, Round};

/// A training session: one shoe, one player, one dealer.
///
/// The session deals rounds from its shoe and keeps the player's accuracy.
/// Only the first decision on each two-card hand is judged.
#[derive(Debug, Clone)]
pub struct Session {
    shoe: Shoe<ChaCha8Rng>,
    dealer: DealerConfig,
    stats: PlayerStats,
}

impl Session {
    /// Creates a session from validated options.
    ///
    /// Without a seed in the options a random one is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is outside 1..=8.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{Session, TrainerOptions};
    ///
    /// let session = Session::new(TrainerOptions::default().with_seed(Some(1))).unwrap();
    /// assert_eq!(session.dealer().decks, 4);
    /// ```
    pub fn new(options: TrainerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let seed = options.seed.unwrap_or_else(rand::random);
        info!(decks = options.decks, seed, "starting session");

        Ok(Self {
            shoe: Shoe::seeded(options.decks, seed),
            dealer: DealerConfig {
                decks: options.decks,
            },
            stats: PlayerStats::new(),
        })
    }

    /// Deals a new round: player, dealer up, player, dealer hole.
    ///
    /// The shoe is refilled first when it cannot supply four cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the shoe runs dry mid-round.
    pub fn deal_round(&mut self) -> Result<Round, DealError> {
        let refilled = self.shoe.needs_refill();
        if refilled {
            self.shoe.refill();
        }

        let mut player = Hand::new();
        let mut dealer = DealerHand::new();

        player.add_card(self.draw(false)?);
        dealer.add_card(self.draw(false)?);
        player.add_card(self.draw(false)?);
        dealer.add_card(self.draw(true)?);

        debug!(
            player = %player,
            up_card = ?dealer.up_card(),
            remaining = self.shoe.remaining(),
            "round dealt"
        );

        Ok(Round {
            player,
            dealer,
            refilled,
        })
    }

    fn draw(&mut self, face_down: bool) -> Result<Card, DealError> {
        self.shoe
            .deal_card(face_down)
            .ok_or(DealError::NotEnoughCards)
    }

    /// Judges the declared action for a round and records the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round does not hold two player cards and a
    /// dealer up card with valid ranks. Stats are left untouched then.
    pub fn judge(&mut self, round: &Round, declared: Action) -> Result<Judgement, EvaluationError> {
        let up_card = round
            .dealer
            .up_card()
            .ok_or(EvaluationError::MissingUpCard)?;
        let prescribed = advise(round.player.cards(), up_card)?;
        let hand = round.player.value()?;
        let accurate = prescribed == declared;

        self.stats.record(accurate);
        debug!(
            %hand,
            %declared,
            %prescribed,
            accurate,
            played = self.stats.played,
            "decision judged"
        );

        Ok(Judgement {
            declared,
            prescribed,
            accurate,
        })
    }

    /// Returns the player's running stats.
    #[must_use]
    pub const fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// Returns the dealer's table settings.
    #[must_use]
    pub const fn dealer(&self) -> DealerConfig {
        self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe<ChaCha8Rng> {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack it for a scripted round.
    pub const fn shoe_mut(&mut self) -> &mut Shoe<ChaCha8Rng> {
        &mut self.shoe
    }
}
