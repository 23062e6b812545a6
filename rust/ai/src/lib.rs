//! # anteplay-ai: Automated Play/Fold Strategies
//!
//! Decides whether to match the ante after seeing the player's three cards.
//! Used by the simulation command to run sessions without console input.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the interface for automated decisions
//! - [`baseline`] - Strategy implementations
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use anteplay_ai::create_strategy;
//! use anteplay_engine::game::Session;
//! use anteplay_engine::hand::classify;
//!
//! let strategy = create_strategy("baseline").expect("known strategy");
//!
//! let mut session = Session::new(100, Some(42));
//! let hand = session.place_ante(10).expect("ante accepted");
//! let decision = strategy.decide(&classify(&hand));
//! let report = session.decide(decision).expect("round resolves");
//! println!("{} chose {:?}: net {}", strategy.name(), decision, report.settlement.net);
//! ```

use anteplay_engine::hand::ClassifiedHand;
use anteplay_engine::rules::Decision;

pub mod baseline;

/// Names accepted by [`create_strategy`].
pub const STRATEGIES: &[&str] = &["baseline", "always"];

/// Interface for automated players.
///
/// # Example Implementation
///
/// ```rust
/// use anteplay_ai::Strategy;
/// use anteplay_engine::hand::{Category, ClassifiedHand};
/// use anteplay_engine::rules::Decision;
///
/// struct PairsOnly;
///
/// impl Strategy for PairsOnly {
///     fn decide(&self, hand: &ClassifiedHand) -> Decision {
///         if hand.category > Category::HighCard {
///             Decision::Play
///         } else {
///             Decision::Fold
///         }
///     }
///
///     fn name(&self) -> &str {
///         "PairsOnly"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Choose to play or fold given the player's classified hand.
    fn decide(&self, hand: &ClassifiedHand) -> Decision;

    /// Return the strategy's identifier.
    fn name(&self) -> &str;
}

/// Factory function to create strategies by name.
///
/// # Example
///
/// ```rust
/// use anteplay_ai::create_strategy;
///
/// let strategy = create_strategy("baseline").unwrap();
/// assert_eq!(strategy.name(), "Q-6-4");
/// assert!(create_strategy("oracle").is_none());
/// ```
pub fn create_strategy(name: &str) -> Option<Box<dyn Strategy>> {
    match name {
        "baseline" => Some(Box::new(baseline::QueenSixFour::new())),
        "always" => Some(Box::new(baseline::AlwaysPlay)),
        _ => None,
    }
}
