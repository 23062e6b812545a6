//! Input parsing and validation for interactive commands.
//!
//! Turns raw console text into engine values:
//! - Wager amounts (whole chips)
//! - `Y`/`N` answers for the play decision and the continue prompt
//! - Card tokens for the `eval` command
//!
//! ## Error Handling
//!
//! Prompt parsers return [`ParseResult`] so the session loop can re-prompt on
//! `Invalid` and stop on `Quit` without treating either as a failure.

use std::str::FromStr;

use anteplay_engine::cards::{Card, Rank, Suit};
use anteplay_engine::rules::{parse_yes_no, Decision};

/// Result type for parsing one line of prompt input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Valid value parsed from input
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "q" | "quit")
}

/// Parse a wager amount in whole chips.
///
/// Range checks against the bankroll happen when the ante is placed; this
/// only rejects text that is not a positive whole number.
///
/// # Example
///
/// ```rust
/// # use anteplay_cli::validation::{parse_wager, ParseResult};
/// assert_eq!(parse_wager("25"), ParseResult::Value(25));
/// assert_eq!(parse_wager("q"), ParseResult::Quit);
/// assert!(matches!(parse_wager("ten"), ParseResult::Invalid(_)));
/// ```
pub fn parse_wager(input: &str) -> ParseResult<u32> {
    let input = input.trim();
    if is_quit(input) {
        return ParseResult::Quit;
    }
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.parse::<i64>() {
        Ok(v) if v <= 0 => ParseResult::Invalid(
            "Wager must be greater than zero and less than or equal to your bankroll.".to_string(),
        ),
        Ok(v) => match u32::try_from(v) {
            Ok(amount) => ParseResult::Value(amount),
            Err(_) => ParseResult::Invalid("Wager is too large".to_string()),
        },
        Err(_) => ParseResult::Invalid(
            "Invalid input. Please enter a whole number for your wager.".to_string(),
        ),
    }
}

/// Parse the play decision: `Y` plays, `N` folds.
pub fn parse_decision(input: &str) -> ParseResult<Decision> {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match Decision::from_str(input) {
        Ok(d) => ParseResult::Value(d),
        Err(e) => ParseResult::Invalid(format!("{}. Please enter 'Y' or 'N'.", e)),
    }
}

/// Parse the continue prompt: `Y` continues, `N` stops.
pub fn parse_continue(input: &str) -> ParseResult<bool> {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match parse_yes_no(input) {
        Ok(v) => ParseResult::Value(v),
        Err(e) => ParseResult::Invalid(format!("{}. Please enter 'Y' or 'N'.", e)),
    }
}

/// Parse a card token such as `As`, `10h`, `Td` or `Q♠` (case-insensitive).
///
/// # Example
///
/// ```rust
/// use anteplay_engine::cards::{Card, Rank, Suit};
/// # use anteplay_cli::validation::parse_card;
///
/// assert_eq!(parse_card("10h"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(parse_card("q♠"), Ok(Card::new(Rank::Queen, Suit::Spades)));
/// assert!(parse_card("1x").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, String> {
    let token = token.trim();
    let mut chars = token.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "Empty card".to_string())?;
    let rank_text = chars.as_str();

    let suit = match suit_char.to_ascii_lowercase() {
        's' | '♠' => Suit::Spades,
        'h' | '♥' => Suit::Hearts,
        'd' | '♦' => Suit::Diamonds,
        'c' | '♣' => Suit::Clubs,
        _ => return Err(format!("Unrecognized suit in card '{}'", token)),
    };
    let rank = match rank_text.to_ascii_uppercase().as_str() {
        "A" => Rank::Ace,
        "K" => Rank::King,
        "Q" => Rank::Queen,
        "J" => Rank::Jack,
        "T" => Rank::Ten,
        digits => digits
            .parse::<u8>()
            .ok()
            .filter(|v| (2..=10).contains(v))
            .and_then(Rank::from_u8)
            .ok_or_else(|| format!("Unrecognized rank in card '{}'", token))?,
    };
    Ok(Card::new(rank, suit))
}

/// Parse card tokens separated by whitespace or commas, across any number
/// of arguments.
pub fn parse_cards<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, String> {
    args.iter()
        .flat_map(|a| {
            a.as_ref()
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|t| parse_card(&t))
        .collect()
}
