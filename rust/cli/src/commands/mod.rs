//! Command handler modules for the Holobac CLI.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, taking its output
//! streams (`&mut dyn Write`) and, when interactive, its input
//! (`&mut dyn BufRead`) as parameters.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
