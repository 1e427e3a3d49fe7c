//! The host console colors text with two-character caret tokens (`^0` … `^9`)
//! instead of ANSI escapes. A token switches the color of everything after it
//! until the next token.

use std::fmt;
use std::str::FromStr;

const CARETS: [&str; 10] = ["^0", "^1", "^2", "^3", "^4", "^5", "^6", "^7", "^8", "^9"];

const ANSI: [&str; 10] = [
    "\x1b[0m",
    "\x1b[31m",
    "\x1b[32m",
    "\x1b[33m",
    "\x1b[34m",
    "\x1b[36m",
    "\x1b[35m",
    "\x1b[37m",
    "\x1b[38;5;88m",
    "\x1b[90m",
];

/// One caret token. The digit is always `0..=9`, so the token is always exactly two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(u8);

impl ColorToken {
    /// `^0` — back to the console's default color. Terminates every formatted line.
    pub const RESET: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const CYAN: Self = Self(5);
    pub const PURPLE: Self = Self(6);
    pub const WHITE: Self = Self(7);
    pub const DARK_RED: Self = Self(8);
    pub const GREY: Self = Self(9);

    /// `None` for anything outside `0..=9`.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit <= 9 { Some(Self(digit)) } else { None }
    }

    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    /// The exact bytes the host renderer looks for.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        CARETS[self.0 as usize]
    }

    /// SGR equivalent for terminals that print carets literally.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        ANSI[self.0 as usize]
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidArgument(format!("not a color token: '{s}'"));
        match s.as_bytes() {
            [b'^', d] if d.is_ascii_digit() => Self::from_digit(d - b'0').ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
