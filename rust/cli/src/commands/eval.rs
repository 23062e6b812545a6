//! Eval command handler: classifies three cards given on the command line.

use crate::error::CliError;
use crate::formatters::{format_cards, format_key};
use crate::validation::parse_cards;
use anteplay_engine::hand::evaluate_cards;
use anteplay_engine::rules::dealer_qualifies;
use std::io::Write;

/// Handle the eval command.
///
/// # Errors
///
/// - `CliError::InvalidInput` when a token is not a card
/// - `CliError::Engine` when the cards are not three distinct cards
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(cards).map_err(CliError::InvalidInput)?;
    let classified = evaluate_cards(&parsed)?;

    writeln!(out, "Cards: {}", format_cards(&parsed))?;
    writeln!(out, "Category: {}", classified.category.label())?;
    writeln!(out, "Key: {}", format_key(&classified))?;
    writeln!(
        out,
        "Dealer qualifies: {}",
        if dealer_qualifies(&classified) { "yes" } else { "no" }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anteplay_engine::errors::GameError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wheel_reports_low_ace_key() {
        let mut out = Vec::new();
        handle_eval_command(&args(&["As", "2h", "3d"]), &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Category: Straight\n"));
        assert!(s.contains("Key: 3, 2, A\n"));
        assert!(s.contains("Dealer qualifies: yes"));
    }

    #[test]
    fn duplicate_cards_are_an_engine_error() {
        let mut out = Vec::new();
        let res = handle_eval_command(&args(&["As", "As", "3d"]), &mut out);
        assert!(matches!(
            res,
            Err(CliError::Engine(GameError::InvalidHand(_)))
        ));
    }

    #[test]
    fn unknown_token_is_invalid_input() {
        let mut out = Vec::new();
        let res = handle_eval_command(&args(&["As", "Zz", "3d"]), &mut out);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }
}
