use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::errors::GameError;
use crate::hand::{compare_hands, Category, ClassifiedHand};

/// Lowest high card that lets a dealer's high-card hand qualify.
pub const QUALIFYING_HIGH_CARD: Rank = Rank::Queen;

/// The player's choice after seeing their own hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Match the ante with an equal play wager
    Play,
    /// Give up the ante
    Fold,
}

impl Decision {
    pub fn is_play(self) -> bool {
        matches!(self, Decision::Play)
    }
}

/// `Y` plays, `N` folds, case-insensitive.
impl FromStr for Decision {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_yes_no(s).map(|yes| if yes { Decision::Play } else { Decision::Fold })
    }
}

/// Parses a `Y`/`N` answer, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// [`GameError::InvalidDecision`] for anything else.
pub fn parse_yes_no(input: &str) -> Result<bool, GameError> {
    match input.trim() {
        s if s.eq_ignore_ascii_case("y") => Ok(true),
        s if s.eq_ignore_ascii_case("n") => Ok(false),
        other => Err(GameError::InvalidDecision(format!(
            "expected 'Y' or 'N', got '{}'",
            other
        ))),
    }
}

/// How a completed round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerFoldsAnteLost,
    /// Ante returned, play wager paid even money
    DealerDoesNotQualify,
    DealerQualifiesPlayerWins,
    DealerQualifiesDealerWins,
    DealerQualifiesPush,
}

impl RoundOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RoundOutcome::PlayerFoldsAnteLost => "Player folds, ante lost",
            RoundOutcome::DealerDoesNotQualify => "Dealer does not qualify, player wins play bet",
            RoundOutcome::DealerQualifiesPlayerWins => "Dealer qualifies, player wins",
            RoundOutcome::DealerQualifiesDealerWins => "Dealer qualifies, dealer wins",
            RoundOutcome::DealerQualifiesPush => "Dealer qualifies, push",
        }
    }

    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            RoundOutcome::DealerDoesNotQualify | RoundOutcome::DealerQualifiesPlayerWins
        )
    }

    // (units credited back, units staked), one unit being the ante
    fn units(self) -> (u64, u64) {
        match self {
            RoundOutcome::PlayerFoldsAnteLost => (0, 1),
            RoundOutcome::DealerDoesNotQualify => (3, 2),
            RoundOutcome::DealerQualifiesPlayerWins => (4, 2),
            RoundOutcome::DealerQualifiesDealerWins => (0, 2),
            RoundOutcome::DealerQualifiesPush => (2, 2),
        }
    }
}

/// Money movement for a resolved round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: RoundOutcome,
    pub ante: u32,
    /// Zero when the player folded
    pub play: u32,
    /// Amount credited back to the bankroll after the round
    pub returned: u64,
    /// Bankroll delta versus the bankroll before the ante was placed
    pub net: i64,
}

/// Checks an ante against the bankroll at staking time.
///
/// # Errors
///
/// [`GameError::InvalidWager`] when the amount is zero or above the bankroll.
///
/// # Examples
///
/// ```
/// use anteplay_engine::rules::validate_ante;
///
/// assert_eq!(validate_ante(10, 100), Ok(10));
/// assert!(validate_ante(0, 100).is_err());
/// assert!(validate_ante(101, 100).is_err());
/// ```
pub fn validate_ante(amount: u32, bankroll: u64) -> Result<u32, GameError> {
    if amount == 0 {
        return Err(GameError::InvalidWager {
            amount,
            reason: "wager must be greater than zero",
        });
    }
    if u64::from(amount) > bankroll {
        return Err(GameError::InvalidWager {
            amount,
            reason: "wager must not exceed the bankroll",
        });
    }
    Ok(amount)
}

/// One Pair or better always qualifies; a high-card hand needs a Queen or
/// better on top.
pub fn dealer_qualifies(hand: &ClassifiedHand) -> bool {
    hand.category > Category::HighCard || hand.top_value() >= QUALIFYING_HIGH_CARD.value()
}

/// Resolves a round into its outcome.
///
/// A fold ends the round without looking at the dealer, so `dealer` may be
/// `None` in that case. A played round requires the dealer's hand.
///
/// # Errors
///
/// - [`GameError::InvalidWager`] when `ante` is zero
/// - [`GameError::InvalidHand`] when the round was played without a dealer hand
///
/// # Examples
///
/// ```
/// use anteplay_engine::cards::{Card, Rank, Suit};
/// use anteplay_engine::hand::evaluate_cards;
/// use anteplay_engine::rules::{resolve, RoundOutcome};
///
/// let player = evaluate_cards(&[
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Four, Suit::Clubs),
/// ])
/// .unwrap();
/// let dealer = evaluate_cards(&[
///     Card::new(Rank::Seven, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Two, Suit::Spades),
/// ])
/// .unwrap();
///
/// let outcome = resolve(&player, Some(&dealer), 10, true).unwrap();
/// assert_eq!(outcome, RoundOutcome::DealerDoesNotQualify);
/// ```
pub fn resolve(
    player: &ClassifiedHand,
    dealer: Option<&ClassifiedHand>,
    ante: u32,
    played: bool,
) -> Result<RoundOutcome, GameError> {
    if ante == 0 {
        return Err(GameError::InvalidWager {
            amount: ante,
            reason: "wager must be greater than zero",
        });
    }
    if !played {
        return Ok(RoundOutcome::PlayerFoldsAnteLost);
    }
    let dealer = dealer
        .ok_or_else(|| GameError::InvalidHand("dealer hand missing for a played round".into()))?;
    if !dealer_qualifies(dealer) {
        return Ok(RoundOutcome::DealerDoesNotQualify);
    }
    Ok(match compare_hands(player, dealer) {
        Ordering::Greater => RoundOutcome::DealerQualifiesPlayerWins,
        Ordering::Less => RoundOutcome::DealerQualifiesDealerWins,
        Ordering::Equal => RoundOutcome::DealerQualifiesPush,
    })
}

/// Computes the bankroll movement for an outcome at the given ante.
pub fn settle(outcome: RoundOutcome, ante: u32) -> Settlement {
    let (returned_units, staked_units) = outcome.units();
    let unit = u64::from(ante);
    let play = if outcome == RoundOutcome::PlayerFoldsAnteLost {
        0
    } else {
        ante
    };
    Settlement {
        outcome,
        ante,
        play,
        returned: returned_units * unit,
        net: (returned_units as i64 - staked_units as i64) * i64::from(ante),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_nets_match_payout_table() {
        let nets: Vec<i64> = [
            RoundOutcome::PlayerFoldsAnteLost,
            RoundOutcome::DealerDoesNotQualify,
            RoundOutcome::DealerQualifiesPlayerWins,
            RoundOutcome::DealerQualifiesDealerWins,
            RoundOutcome::DealerQualifiesPush,
        ]
        .into_iter()
        .map(|o| settle(o, 10).net)
        .collect();
        assert_eq!(nets, vec![-10, 10, 20, -20, 0]);
    }

    #[test]
    fn player_wins_are_the_positive_nets() {
        assert!(RoundOutcome::DealerDoesNotQualify.is_player_win());
        assert!(RoundOutcome::DealerQualifiesPlayerWins.is_player_win());
        assert!(!RoundOutcome::DealerQualifiesPush.is_player_win());
        assert!(!RoundOutcome::PlayerFoldsAnteLost.is_player_win());
    }

    #[test]
    fn fold_settlement_has_no_play_wager() {
        let s = settle(RoundOutcome::PlayerFoldsAnteLost, 25);
        assert_eq!(s.play, 0);
        assert_eq!(s.returned, 0);
    }

    #[test]
    fn decisions_parse_case_insensitively() {
        assert_eq!("y".parse::<Decision>(), Ok(Decision::Play));
        assert_eq!(" N ".parse::<Decision>(), Ok(Decision::Fold));
        assert!(matches!(
            "yes".parse::<Decision>(),
            Err(GameError::InvalidDecision(_))
        ));
        assert!(parse_yes_no("").is_err());
    }

    #[test]
    fn zero_ante_is_rejected() {
        assert!(matches!(
            validate_ante(0, 50),
            Err(GameError::InvalidWager { amount: 0, .. })
        ));
    }
}
