//! Card, hand and outcome formatters for terminal display.
//!
//! Pure functions that turn engine values into text. Suits render as Unicode
//! symbols with an ASCII fallback for terminals that can't show them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use anteplay_engine::cards::{Card, Rank, Suit};
//! use anteplay_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("A"));
//! ```

use anteplay_engine::cards::{Card, Rank, Suit};
use anteplay_engine::hand::ClassifiedHand;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-10, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    format_value(rank.value())
}

/// Format a tie-break value. The low Ace of a wheel (1) prints as `A`.
pub fn format_value(value: u8) -> String {
    match value {
        1 | 14 => "A".to_string(),
        13 => "K".to_string(),
        12 => "Q".to_string(),
        11 => "J".to_string(),
        v => v.to_string(),
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards joined with ", " in dealt order.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    formatted.join(", ")
}

/// Category label followed by the tie-break key, e.g. "One Pair (9, 2)".
///
/// # Example
///
/// ```rust
/// use anteplay_engine::hand::{Category, ClassifiedHand};
/// # use anteplay_cli::formatters::format_classified;
///
/// let h = ClassifiedHand { category: Category::Straight, kickers: [3, 2, 1] };
/// assert_eq!(format_classified(&h), "Straight (3, 2, A)");
/// ```
pub fn format_classified(hand: &ClassifiedHand) -> String {
    format!("{} ({})", hand.category.label(), format_key(hand))
}

/// Tie-break values highest first, e.g. "9, 2" for a pair of nines.
pub fn format_key(hand: &ClassifiedHand) -> String {
    let key: Vec<String> = hand.key().iter().map(|&v| format_value(v)).collect();
    key.join(", ")
}

/// Signed amount with an explicit `+` for gains.
pub fn format_net(net: i64) -> String {
    if net > 0 {
        format!("+{}", net)
    } else {
        net.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anteplay_engine::hand::Category;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "10");
        assert_eq!(format_rank(&Rank::Jack), "J");
        assert_eq!(format_rank(&Rank::Queen), "Q");
        assert_eq!(format_rank(&Rank::King), "K");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_cards_joins_with_commas() {
        let cards = [
            Card {
                rank: Rank::Ten,
                suit: Suit::Spades,
            },
            Card {
                rank: Rank::King,
                suit: Suit::Hearts,
            },
        ];
        let formatted = format_cards(&cards);
        assert!(formatted.starts_with("10"));
        assert!(formatted.contains(", K"));
    }

    #[test]
    fn test_format_classified_pair_shows_two_values() {
        let h = ClassifiedHand {
            category: Category::OnePair,
            kickers: [9, 2, 0],
        };
        assert_eq!(format_classified(&h), "One Pair (9, 2)");
    }

    #[test]
    fn test_format_net_sign() {
        assert_eq!(format_net(20), "+20");
        assert_eq!(format_net(-10), "-10");
        assert_eq!(format_net(0), "0");
    }
}
