//! Reference strategies.
//!
//! [`QueenSixFour`] is the standard threshold for this game: play any pair or
//! better, play a high-card hand of Q-6-4 or stronger, fold the rest.

use crate::Strategy;
use anteplay_engine::hand::{Category, ClassifiedHand};
use anteplay_engine::rules::Decision;

/// Weakest high-card key that is still worth a play wager.
const MIN_HIGH_CARD: [u8; 3] = [12, 6, 4];

/// Plays pairs or better and high-card hands from Q-6-4 up.
///
/// # Example
///
/// ```rust
/// use anteplay_ai::baseline::QueenSixFour;
/// use anteplay_ai::Strategy;
/// use anteplay_engine::hand::{Category, ClassifiedHand};
/// use anteplay_engine::rules::Decision;
///
/// let s = QueenSixFour::new();
/// let q64 = ClassifiedHand { category: Category::HighCard, kickers: [12, 6, 4] };
/// let q63 = ClassifiedHand { category: Category::HighCard, kickers: [12, 6, 3] };
/// assert_eq!(s.decide(&q64), Decision::Play);
/// assert_eq!(s.decide(&q63), Decision::Fold);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueenSixFour;

impl QueenSixFour {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for QueenSixFour {
    fn decide(&self, hand: &ClassifiedHand) -> Decision {
        if hand.category > Category::HighCard || hand.kickers >= MIN_HIGH_CARD {
            Decision::Play
        } else {
            Decision::Fold
        }
    }

    fn name(&self) -> &str {
        "Q-6-4"
    }
}

/// Matches every ante.
#[derive(Debug, Clone, Default)]
pub struct AlwaysPlay;

impl Strategy for AlwaysPlay {
    fn decide(&self, _hand: &ClassifiedHand) -> Decision {
        Decision::Play
    }

    fn name(&self) -> &str {
        "AlwaysPlay"
    }
}
