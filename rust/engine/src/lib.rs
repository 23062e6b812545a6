//! # anteplay-engine: Three-Card Ante/Play Rules Engine
//!
//! Classifies three-card hands, ranks them against each other, applies the
//! dealer's Queen-high qualification rule and settles the two-stage
//! ante/play wager. A [`game::Session`] sequences rounds over a seeded deck
//! so every session is reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand classification and comparison
//! - [`rules`] - Dealer qualification, wager validation and settlement
//! - [`game`] - Session state machine
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use anteplay_engine::cards::{Card, Rank, Suit};
//! use anteplay_engine::hand::{evaluate_cards, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Spades, rank: Rank::King },
//!     Card { suit: Suit::Spades, rank: Rank::Queen },
//! ];
//!
//! let classified = evaluate_cards(&cards).unwrap();
//! assert_eq!(classified.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use anteplay_engine::game::Session;
//! use anteplay_engine::rules::Decision;
//!
//! let mut session = Session::new(100, Some(42));
//! session.place_ante(10).unwrap();
//! let report = session.decide(Decision::Play).unwrap();
//! println!("{}: net {}", report.settlement.outcome.label(), report.settlement.net);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod rules;
