//! Simulation command handler.
//!
//! Plays a fixed number of rounds with an automated strategy at a constant
//! ante and reports how the rounds resolved.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_net;
use crate::ui;
use anteplay_ai::{create_strategy, STRATEGIES};
use anteplay_engine::game::Session;
use anteplay_engine::hand::classify;
use anteplay_engine::logger::RoundLogger;
use anteplay_engine::rules::{Decision, RoundOutcome};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Tally {
    folded: u32,
    not_qualified: u32,
    player_wins: u32,
    dealer_wins: u32,
    pushes: u32,
}

impl Tally {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerFoldsAnteLost => self.folded += 1,
            RoundOutcome::DealerDoesNotQualify => self.not_qualified += 1,
            RoundOutcome::DealerQualifiesPlayerWins => self.player_wins += 1,
            RoundOutcome::DealerQualifiesDealerWins => self.dealer_wins += 1,
            RoundOutcome::DealerQualifiesPush => self.pushes += 1,
        }
    }

    fn played(&self) -> u32 {
        self.not_qualified + self.player_wins + self.dealer_wins + self.pushes
    }
}

/// Handle the sim command.
///
/// A play decision the bankroll cannot cover is turned into a fold. The run
/// stops early with a warning once the bankroll cannot cover the ante.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero rounds, a zero ante or bankroll, or an
/// unknown strategy name.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    rounds: u32,
    ante: u32,
    bankroll: Option<u32>,
    seed: Option<u64>,
    strategy: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput(
            "rounds must be greater than zero".into(),
        ));
    }
    if ante == 0 {
        return Err(CliError::InvalidInput("ante must be greater than zero".into()));
    }
    let cfg = config::load()?;
    let name = strategy.unwrap_or(cfg.strategy);
    let strategy = create_strategy(&name).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown strategy '{}' (expected one of: {})",
            name,
            STRATEGIES.join(", ")
        ))
    })?;
    let starting = bankroll.unwrap_or(cfg.starting_bankroll);
    if starting == 0 {
        return Err(CliError::InvalidInput(
            "bankroll must be greater than zero".into(),
        ));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = output.map(RoundLogger::create).transpose()?;
    let mut session =
        Session::new(u64::from(starting), Some(seed)).with_stop_at_zero(cfg.stop_at_zero);
    let mut tally = Tally::default();
    let mut net: i64 = 0;

    for _ in 0..rounds {
        if !session.can_continue() || session.bankroll() < u64::from(ante) {
            ui::display_warning(
                err,
                &format!(
                    "Bankroll {} cannot cover the ante {}; stopping after {} rounds",
                    session.bankroll(),
                    ante,
                    session.rounds_played()
                ),
            )?;
            break;
        }
        let hand = session.place_ante(ante)?;
        let mut decision = strategy.decide(&classify(&hand));
        if decision.is_play() && session.bankroll() < u64::from(ante) {
            debug!(round = session.rounds_played() + 1, "play wager not covered, folding");
            decision = Decision::Fold;
        }
        let report = session.decide(decision)?;
        tally.record(report.settlement.outcome);
        net += report.settlement.net;
        if let Some(l) = logger.as_mut() {
            l.log_round(Some(seed), &report)?;
        }
        session.next_round()?;
    }

    info!(
        rounds = session.rounds_played(),
        strategy = strategy.name(),
        net,
        "simulation complete"
    );

    writeln!(out, "Strategy: {}", strategy.name())?;
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Rounds played: {}", session.rounds_played())?;
    writeln!(out, "Played: {}  Folded: {}", tally.played(), tally.folded)?;
    writeln!(out, "Dealer did not qualify: {}", tally.not_qualified)?;
    writeln!(out, "Player wins: {}", tally.player_wins)?;
    writeln!(out, "Dealer wins: {}", tally.dealer_wins)?;
    writeln!(out, "Pushes: {}", tally.pushes)?;
    writeln!(out, "Starting bankroll: {}", starting)?;
    writeln!(out, "Final bankroll: {}", session.bankroll())?;
    writeln!(out, "Net: {}", format_net(net))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_every_outcome_once() {
        let mut t = Tally::default();
        t.record(RoundOutcome::PlayerFoldsAnteLost);
        t.record(RoundOutcome::DealerDoesNotQualify);
        t.record(RoundOutcome::DealerQualifiesPush);
        assert_eq!(t.folded, 1);
        assert_eq!(t.played(), 2);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(0, 1, Some(10), Some(1), None, None, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(
            5,
            1,
            Some(10),
            Some(1),
            Some("martingale".into()),
            None,
            &mut out,
            &mut err,
        );
        match res {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("baseline, always")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn small_bankroll_stops_early_with_warning() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(1000, 5, Some(5), Some(3), Some("always".into()), None, &mut out, &mut err)
            .unwrap();
        let s = String::from_utf8(out).unwrap();
        let e = String::from_utf8(err).unwrap();
        // 5 of 5 staked as ante leaves nothing for the play wager, so round one folds
        assert!(s.contains("Rounds played: 1\n"));
        assert!(s.contains("Final bankroll: 0"));
        assert!(e.contains("WARNING: Bankroll 0 cannot cover the ante 5"));
    }
}
