//! Command handler modules for the anteplay CLI.
//!
//! Each subcommand lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and, for
//!   `play`, the input stream (`&mut dyn BufRead`) are passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
