use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

pub const HAND_SIZE: usize = 3;

/// Ace-3-2 sorted high to low, and the same ranks with the Ace played low.
const WHEEL: [u8; HAND_SIZE] = [14, 3, 2];
const WHEEL_LOW: [u8; HAND_SIZE] = [3, 2, 1];
const ROYAL: [u8; HAND_SIZE] = [14, 13, 12];

/// Hand categories reachable with exactly three cards, weakest first.
/// The discriminant is the category ordinal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    StraightFlush = 6,
    RoyalFlush = 7,
}

const CATEGORY_LABELS: [&str; 7] = [
    "High Card",
    "One Pair",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Straight Flush",
    "Royal Flush",
];

impl Category {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        CATEGORY_LABELS[self as usize - 1]
    }

    /// Number of meaningful tie-break values for this category.
    pub fn key_len(self) -> usize {
        match self {
            Category::OnePair => 2,
            _ => HAND_SIZE,
        }
    }
}

/// Exactly three distinct cards held by one side for a round.
///
/// Deserialization goes through [`Hand::new`], so a payload with repeated
/// cards is rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

#[derive(Deserialize)]
struct HandRepr {
    cards: [Card; HAND_SIZE],
}

impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = HandRepr::deserialize(deserializer)?;
        Hand::new(repr.cards).map_err(serde::de::Error::custom)
    }
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, GameError> {
        for i in 0..HAND_SIZE {
            for j in (i + 1)..HAND_SIZE {
                if cards[i] == cards[j] {
                    return Err(GameError::InvalidHand(format!(
                        "duplicate card {:?} of {:?}",
                        cards[i].rank, cards[i].suit
                    )));
                }
            }
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, GameError> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
            GameError::InvalidHand(format!("expected {} cards, got {}", HAND_SIZE, cards.len()))
        })?;
        Self::new(cards)
    }

    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

/// A category together with its tie-break key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClassifiedHand {
    pub category: Category,
    // ordered for tiebreaks; One Pair is [pair, kicker, 0]
    pub kickers: [u8; HAND_SIZE],
}

impl ClassifiedHand {
    /// The tie-break key without padding.
    pub fn key(&self) -> &[u8] {
        &self.kickers[..self.category.key_len()]
    }

    pub fn top_value(&self) -> u8 {
        self.kickers[0]
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classifies a three-card hand.
///
/// Checks run in priority order: straight flush (royal when A-K-Q), three of
/// a kind, one pair, flush, straight, high card. The wheel (A-3-2) is a
/// straight keyed as `[3, 2, 1]`.
///
/// # Examples
///
/// ```
/// use anteplay_engine::cards::{Card, Rank, Suit};
/// use anteplay_engine::hand::{classify, Category, Hand};
///
/// let hand = Hand::new([
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Diamonds),
/// ])
/// .unwrap();
/// let classified = classify(&hand);
/// assert_eq!(classified.category, Category::Straight);
/// assert_eq!(classified.key(), &[3, 2, 1]);
/// ```
pub fn classify(hand: &Hand) -> ClassifiedHand {
    let cards = hand.cards();
    let mut values = cards.map(|c| c.rank.value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let is_straight = if values == WHEEL {
        values = WHEEL_LOW;
        true
    } else {
        let distinct = values[0] != values[1] && values[1] != values[2];
        distinct && values[0] - values[2] == 2
    };

    if is_straight && is_flush {
        let category = if values == ROYAL {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return ClassifiedHand {
            category,
            kickers: values,
        };
    }

    if values[0] == values[2] {
        return ClassifiedHand {
            category: Category::ThreeOfAKind,
            kickers: values,
        };
    }

    let pair = if values[0] == values[1] {
        Some((values[0], values[2]))
    } else if values[1] == values[2] {
        Some((values[1], values[0]))
    } else {
        None
    };
    if let Some((paired, kicker)) = pair {
        return ClassifiedHand {
            category: Category::OnePair,
            kickers: [paired, kicker, 0],
        };
    }

    let category = if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else {
        Category::HighCard
    };
    ClassifiedHand {
        category,
        kickers: values,
    }
}

/// Validates and classifies a loose list of cards.
pub fn evaluate_cards(cards: &[Card]) -> Result<ClassifiedHand, GameError> {
    Hand::from_slice(cards).map(|h| classify(&h))
}

/// Category ordinal first, then tie-break values element by element.
/// Equal keys are a push; suits never break ties.
pub fn compare_hands(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}
