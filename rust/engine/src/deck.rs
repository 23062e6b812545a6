use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};

/// The 52-card set for one session. Cards are dealt from a cursor so a card
/// leaves the available set exactly once between resets.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Replenishes all 52 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.reset();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Draws the next three cards as a hand.
    pub fn deal_hand(&mut self) -> Result<Hand, GameError> {
        if self.remaining() < HAND_SIZE {
            return Err(GameError::DeckExhausted);
        }
        let mut cards = [self.cards[self.position]; HAND_SIZE];
        for slot in cards.iter_mut() {
            *slot = self.deal_card().ok_or(GameError::DeckExhausted)?;
        }
        Hand::new(cards)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
