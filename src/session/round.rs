//! Round types.

use crate::hand::{DealerHand, Hand};
use crate::strategy::Action;

/// The cards dealt for one training hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The player's two face-up cards.
    pub player: Hand,
    /// The dealer's up card and face-down hole card.
    pub dealer: DealerHand,
    /// Whether the shoe was refilled before this round was dealt.
    pub refilled: bool,
}

/// Outcome of judging one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    /// The action the player declared.
    pub declared: Action,
    /// The action basic strategy calls for.
    pub prescribed: Action,
    /// Whether the two match.
    pub accurate: bool,
}
