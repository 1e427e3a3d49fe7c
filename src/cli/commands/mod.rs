//! One file per subcommand keeps the match in main thin; each handler owns
//! its own error reporting.

mod announce;
mod hash;
mod log;
mod palette;

pub use announce::cmd_announce;
pub use hash::cmd_hash;
pub use log::cmd_log;
pub use palette::cmd_palette;
