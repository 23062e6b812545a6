//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the resolved configuration
//! with the source of every value (default, file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_bankroll": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_bankroll": {
            "value": config.starting_bankroll,
            "source": sources.starting_bankroll,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "stop_at_zero": {
            "value": config.stop_at_zero,
            "source": sources.stop_at_zero,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
