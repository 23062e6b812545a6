//! Deal command handler.
//!
//! Deals one player hand and one dealer hand from a freshly shuffled deck
//! and shows how the round would resolve if the player matched the ante.

use crate::error::CliError;
use crate::formatters::{format_cards, format_classified};
use anteplay_engine::deck::Deck;
use anteplay_engine::hand::classify;
use anteplay_engine::rules::{dealer_qualifies, resolve};
use std::io::Write;

/// Handle the deal command.
///
/// Without a seed a random one is drawn and printed so the deal can be
/// reproduced.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let player_hand = deck.deal_hand()?;
    let dealer_hand = deck.deal_hand()?;
    let player = classify(&player_hand);
    let dealer = classify(&dealer_hand);
    let outcome = resolve(&player, Some(&dealer), 1, true)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_cards(&player_hand.cards()))?;
    writeln!(out, "Player hand: {}", format_classified(&player))?;
    writeln!(out, "Dealer: {}", format_cards(&dealer_hand.cards()))?;
    writeln!(out, "Dealer hand: {}", format_classified(&dealer))?;
    writeln!(
        out,
        "Dealer qualifies: {}",
        if dealer_qualifies(&dealer) { "yes" } else { "no" }
    )?;
    writeln!(out, "If played: {}", outcome.label())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_deals_same_output() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(9), &mut a).unwrap();
        handle_deal_command(Some(9), &mut b).unwrap();
        assert_eq!(a, b);
        let s = String::from_utf8(a).unwrap();
        assert!(s.starts_with("Seed: 9\n"));
        assert!(s.contains("If played: "));
    }
}
