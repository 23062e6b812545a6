use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundReport;
use crate::hand::Category;
use crate::rules::{Decision, RoundOutcome};

/// One resolved round as written to the JSONL history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Session seed (enables deterministic replay)
    pub seed: Option<u64>,
    pub decision: Decision,
    pub player_cards: Vec<Card>,
    pub player_category: Category,
    #[serde(default)]
    pub dealer_cards: Vec<Card>,
    #[serde(default)]
    pub dealer_category: Option<Category>,
    #[serde(default)]
    pub dealer_qualifies: Option<bool>,
    pub outcome: RoundOutcome,
    pub ante: u32,
    pub play: u32,
    pub net: i64,
    pub bankroll: u64,
    /// Timestamp when the round was resolved (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_report(round_id: String, seed: Option<u64>, report: &RoundReport) -> Self {
        Self {
            round_id,
            seed,
            decision: report.decision,
            player_cards: report.player_hand.cards().to_vec(),
            player_category: report.player.category,
            dealer_cards: report
                .dealer_hand
                .map(|h| h.cards().to_vec())
                .unwrap_or_default(),
            dealer_category: report.dealer.map(|d| d.category),
            dealer_qualifies: report.dealer_qualifies,
            outcome: report.settlement.outcome,
            ante: report.settlement.ante,
            play: report.settlement.play,
            net: report.settlement.net,
            bankroll: report.bankroll,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id and writes the round.
    pub fn log_round(&mut self, seed: Option<u64>, report: &RoundReport) -> std::io::Result<String> {
        let id = self.next_id();
        self.write(&RoundRecord::from_report(id.clone(), seed, report))?;
        Ok(id)
    }
}
