//! Interactive session command handler.
//!
//! Drives a [`Session`] from console input: ante amount, the `Y`/`N` play
//! decision and the `Y`/`N` continue answer. Invalid input is reported on
//! the error stream and the same prompt is shown again.
//!
//! End of input (or `q`) at the ante prompt ends the session. At the play
//! decision it folds the round so that every dealt round is resolved, then
//! ends the session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_classified, format_net};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_continue, parse_decision, parse_wager, ParseResult};
use anteplay_engine::errors::GameError;
use anteplay_engine::game::{RoundReport, Session};
use anteplay_engine::hand::{classify, Hand};
use anteplay_engine::logger::RoundLogger;
use anteplay_engine::rules::Decision;
use std::io::{BufRead, Write};
use tracing::debug;

/// Handle the play command.
///
/// # Arguments
///
/// * `bankroll` - Starting bankroll, overriding the configured value
/// * `seed` - Deck seed; a random seed is drawn when neither the flag nor
///   the configuration provides one
/// * `history` - Optional JSONL file receiving one record per round
/// * `out` - Output stream for prompts and round results
/// * `err` - Output stream for input errors
/// * `stdin` - Input stream for player answers
///
/// # Errors
///
/// `CliError::InvalidInput` for a zero bankroll, `CliError::Config` when the
/// configuration cannot be loaded, `CliError::Io` on stream or history file
/// failures.
pub fn handle_play_command(
    bankroll: Option<u32>,
    seed: Option<u64>,
    history: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let bankroll = bankroll.unwrap_or(cfg.starting_bankroll);
    if bankroll == 0 {
        return Err(CliError::InvalidInput(
            "bankroll must be greater than zero".into(),
        ));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = history.map(RoundLogger::create).transpose()?;
    let mut session =
        Session::new(u64::from(bankroll), Some(seed)).with_stop_at_zero(cfg.stop_at_zero);

    writeln!(out, "Welcome to Three-Card Poker!")?;
    writeln!(out, "Seed: {}", seed)?;

    loop {
        let Some(hand) = prompt_ante(&mut session, out, err, stdin)? else {
            break;
        };
        writeln!(out, "You have been dealt: {}", format_cards(&hand.cards()))?;
        writeln!(out, "Your hand: {}", format_classified(&classify(&hand)))?;

        let (report, input_closed) = prompt_decision(&mut session, out, err, stdin)?;
        render_report(&report, out)?;
        if let Some(l) = logger.as_mut() {
            let id = l.log_round(Some(seed), &report)?;
            debug!(round_id = %id, "round written to history");
        }

        if input_closed {
            break;
        }
        if !session.can_continue() {
            writeln!(out, "You are out of money.")?;
            break;
        }
        if !prompt_continue(out, err, stdin)? {
            break;
        }
        session.next_round()?;
    }

    writeln!(
        out,
        "Thank you for playing! You're leaving with ${}!",
        session.bankroll()
    )?;
    writeln!(out, "Rounds played: {}", session.rounds_played())?;
    Ok(())
}

/// Loops until an ante is accepted. `None` means the player left.
fn prompt_ante(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Hand>, CliError> {
    loop {
        ui::prompt(
            out,
            &format!(
                "You have ${} available\nHow much would you like to bet? ",
                session.bankroll()
            ),
        )?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(None);
        };
        match parse_wager(&line) {
            ParseResult::Value(amount) => match session.place_ante(amount) {
                Ok(hand) => return Ok(Some(hand)),
                Err(GameError::InvalidWager { reason, .. }) => {
                    ui::write_error(err, &format!("Invalid wager: {}.", reason))?;
                }
                Err(e) => return Err(e.into()),
            },
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

/// Loops until the round resolves. The flag is set when input ended or the
/// player quit, which forces a fold.
fn prompt_decision(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(RoundReport, bool), CliError> {
    loop {
        ui::prompt(out, "Enter 'Y' to match your bet or 'N' to fold: ")?;
        let (decision, closed) = match read_stdin_line(stdin) {
            None => {
                writeln!(out)?;
                (Decision::Fold, true)
            }
            Some(line) => match parse_decision(&line) {
                ParseResult::Value(d) => (d, false),
                ParseResult::Quit => (Decision::Fold, true),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            },
        };
        match session.decide(decision) {
            Ok(report) => return Ok((report, closed)),
            Err(GameError::InvalidWager { .. }) => {
                ui::write_error(
                    err,
                    "Your bankroll cannot cover the play wager. You must fold.",
                )?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_continue(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        ui::prompt(out, "Do you want to play another hand? (Y/N): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_continue(&line) {
            ParseResult::Value(v) => return Ok(v),
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn render_report(report: &RoundReport, out: &mut dyn Write) -> Result<(), CliError> {
    if let (Some(hand), Some(dealer)) = (report.dealer_hand, report.dealer) {
        writeln!(out, "Dealer's cards: {}", format_cards(&hand.cards()))?;
        writeln!(out, "Dealer's hand: {}", format_classified(&dealer))?;
        let qualifies = report.dealer_qualifies.unwrap_or(false);
        writeln!(
            out,
            "The dealer {}.",
            if qualifies { "qualifies" } else { "does not qualify" }
        )?;
    }
    writeln!(out, "Result: {}", report.settlement.outcome.label())?;
    if report.settlement.outcome.is_player_win() {
        writeln!(out, "You win!")?;
    }
    writeln!(out, "Net: {}", format_net(report.settlement.net))?;
    writeln!(out, "Your current bankroll: ${}", report.bankroll)?;
    Ok(())
}
