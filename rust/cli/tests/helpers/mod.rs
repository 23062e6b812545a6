//! Shared helpers for CLI integration tests.
//!
//! `run_cli` calls `anteplay_cli::run` with in-memory writers and returns
//! the exit code with both streams decoded.

#![allow(dead_code)]

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("anteplay").chain(args.iter().copied());
    let code = anteplay_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Value following `label` on its own output line, e.g. `"Final bankroll: "`.
pub fn line_value<'a>(output: &'a str, label: &str) -> Option<&'a str> {
    output
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .map(str::trim)
}
