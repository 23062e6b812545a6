use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{classify, ClassifiedHand, Hand};
use crate::rules::{dealer_qualifies, resolve, settle, validate_ante, Decision, Settlement};

/// Default bankroll a session starts with
pub const STARTING_BANKROLL: u32 = 100;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Stable points of the round cycle.
///
/// Placing the ante deals the player's cards and moves straight to the play
/// decision. Deciding either folds or reveals the dealer, and both paths end
/// in `Resolved`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingAnte,
    AwaitingPlayDecision,
    Resolved,
}

#[derive(Debug, Clone)]
struct OpenRound {
    ante: u32,
    hand: Hand,
    classified: ClassifiedHand,
}

/// Everything a presentation layer needs to render a finished round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number within the session
    pub round: u32,
    pub decision: Decision,
    pub player_hand: Hand,
    pub player: ClassifiedHand,
    /// Absent when the player folded
    pub dealer_hand: Option<Hand>,
    pub dealer: Option<ClassifiedHand>,
    pub dealer_qualifies: Option<bool>,
    pub settlement: Settlement,
    /// Bankroll after the settlement was applied
    pub bankroll: u64,
}

/// A single-player session against the dealer.
///
/// Owns the deck and the bankroll. Exactly one round is in flight at a time.
///
/// # Examples
///
/// ```
/// use anteplay_engine::game::{Phase, Session};
/// use anteplay_engine::rules::Decision;
///
/// let mut session = Session::new(100, Some(7));
/// let hand = session.place_ante(10).unwrap();
/// assert_eq!(hand.cards().len(), 3);
/// assert_eq!(session.bankroll(), 90);
///
/// let report = session.decide(Decision::Fold).unwrap();
/// assert_eq!(report.settlement.net, -10);
/// assert_eq!(session.phase(), Phase::Resolved);
///
/// session.next_round().unwrap();
/// assert_eq!(session.phase(), Phase::AwaitingAnte);
/// ```
#[derive(Debug)]
pub struct Session {
    deck: Deck,
    seed: u64,
    bankroll: u64,
    stop_at_zero: bool,
    phase: Phase,
    open: Option<OpenRound>,
    rounds_played: u32,
}

impl Session {
    /// The bankroll is `u64`; wagers are `u32`, so a round's credit always fits.
    pub fn new(bankroll: u64, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            deck: Deck::new_with_seed(seed),
            seed,
            bankroll,
            stop_at_zero: true,
            phase: Phase::AwaitingAnte,
            open: None,
            rounds_played: 0,
        }
    }

    pub fn with_stop_at_zero(mut self, stop: bool) -> Self {
        self.stop_at_zero = stop;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The ante staked on the round in flight.
    pub fn current_ante(&self) -> Option<u32> {
        self.open.as_ref().map(|r| r.ante)
    }

    pub fn current_hand(&self) -> Option<&Hand> {
        self.open.as_ref().map(|r| &r.hand)
    }

    /// False once the bankroll is empty, unless the session was told to keep
    /// going at zero.
    pub fn can_continue(&self) -> bool {
        !(self.stop_at_zero && self.bankroll == 0)
    }

    /// Stakes the ante, then deals the player three cards from a freshly
    /// shuffled 52-card set.
    ///
    /// An invalid wager leaves the session in `AwaitingAnte`.
    pub fn place_ante(&mut self, amount: u32) -> Result<Hand, GameError> {
        self.expect_phase(Phase::AwaitingAnte)?;
        let ante = validate_ante(amount, self.bankroll)?;

        self.deck.shuffle();
        let hand = self.deal()?;
        self.bankroll -= u64::from(ante);

        let classified = classify(&hand);
        debug!(
            round = self.rounds_played + 1,
            ante,
            category = classified.category.label(),
            "player dealt"
        );
        self.open = Some(OpenRound {
            ante,
            hand,
            classified,
        });
        self.phase = Phase::AwaitingPlayDecision;
        Ok(hand)
    }

    /// Applies the player's decision and resolves the round.
    ///
    /// Playing stakes a second wager equal to the ante and deals the dealer
    /// three cards from the remaining 49. If the bankroll cannot cover the
    /// play wager the call is rejected and the decision is still pending.
    pub fn decide(&mut self, decision: Decision) -> Result<RoundReport, GameError> {
        self.expect_phase(Phase::AwaitingPlayDecision)?;
        let ante = self.current_ante().ok_or(GameError::InvalidTransition {
            expected: Phase::AwaitingPlayDecision,
            actual: self.phase,
        })?;
        debug!(round = self.rounds_played + 1, ?decision, "decision received");
        if decision.is_play() && u64::from(ante) > self.bankroll {
            return Err(GameError::InvalidWager {
                amount: ante,
                reason: "bankroll cannot cover the play wager",
            });
        }
        let round = self.open.take().ok_or(GameError::InvalidTransition {
            expected: Phase::AwaitingPlayDecision,
            actual: self.phase,
        })?;

        let (dealer_hand, dealer) = if decision.is_play() {
            self.bankroll -= u64::from(ante);
            let dealer_hand = self.deal()?;
            debug_assert!(
                !dealer_hand.cards().iter().any(|c| round.hand.contains(c)),
                "dealer shares a card with the player"
            );
            (Some(dealer_hand), Some(classify(&dealer_hand)))
        } else {
            (None, None)
        };

        let outcome = resolve(&round.classified, dealer.as_ref(), ante, decision.is_play())?;
        let settlement = settle(outcome, ante);
        self.bankroll += settlement.returned;
        self.rounds_played += 1;
        self.phase = Phase::Resolved;

        info!(
            round = self.rounds_played,
            outcome = outcome.label(),
            net = settlement.net,
            bankroll = self.bankroll,
            "round resolved"
        );

        Ok(RoundReport {
            round: self.rounds_played,
            decision,
            player_hand: round.hand,
            player: round.classified,
            dealer_hand,
            dealer_qualifies: dealer.as_ref().map(dealer_qualifies),
            dealer,
            settlement,
            bankroll: self.bankroll,
        })
    }

    /// Returns every card to the deck and waits for the next ante.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Resolved)?;
        self.deck.reset();
        self.phase = Phase::AwaitingAnte;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                expected,
                actual: self.phase,
            })
        }
    }

    fn deal(&mut self) -> Result<Hand, GameError> {
        let dealt = self.deck.deal_hand();
        debug_assert!(
            !matches!(dealt, Err(GameError::InvalidHand(_))),
            "deck dealt an invalid hand: {:?}",
            dealt
        );
        dealt
    }
}
