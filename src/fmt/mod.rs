//! Line rendering: host color tokens, the level palette, and the line shape itself.

mod line;
mod palette;
mod token;

pub use line::{DEFAULT_TAG, format_line, render_ansi, strip_tokens};
pub use palette::Palette;
pub use token::ColorToken;
