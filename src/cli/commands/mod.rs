//! One file per subcommand keeps the match in main thin.

mod info;
mod log;

pub use info::{cmd_backends, cmd_levels, cmd_version};
pub use log::cmd_log;
