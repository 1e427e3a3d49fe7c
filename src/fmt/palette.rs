//! Level → token lookup, kept as data so another host's color scheme can be
//! swapped in without touching any call site.

use super::ColorToken;
use crate::level::Level;

/// Closed lookup table with a fallback for names that aren't levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    levels: [ColorToken; 6],
    fallback: ColorToken,
    reset: ColorToken,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// The stock MDT scheme.
    #[must_use]
    pub const fn new() -> Self {
        // Indexed by `Level::index`: info, warn, error, trace, event, nui.
        Self {
            levels: [
                ColorToken::GREEN,
                ColorToken::YELLOW,
                ColorToken::RED,
                ColorToken::CYAN,
                ColorToken::PURPLE,
                ColorToken::BLUE,
            ],
            fallback: ColorToken::WHITE,
            reset: ColorToken::RESET,
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: Level, token: ColorToken) -> Self {
        self.levels[level.index()] = token;
        self
    }

    #[must_use]
    pub const fn with_fallback(mut self, token: ColorToken) -> Self {
        self.fallback = token;
        self
    }

    #[must_use]
    pub const fn with_reset(mut self, token: ColorToken) -> Self {
        self.reset = token;
        self
    }

    #[must_use]
    pub const fn token(&self, level: Level) -> ColorToken {
        self.levels[level.index()]
    }

    /// Looks a level up by its exact table key. Anything that isn't a key gets
    /// the fallback token; this never fails.
    #[must_use]
    pub fn token_for_name(&self, name: &str) -> ColorToken {
        Level::from_key(name).map_or(self.fallback, |level| self.token(level))
    }

    #[must_use]
    pub const fn fallback(&self) -> ColorToken {
        self.fallback
    }

    #[must_use]
    pub const fn reset(&self) -> ColorToken {
        self.reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_slots_follow_level_index() {
        let palette = Palette::new();
        for level in Level::all() {
            assert_eq!(palette.token(level), palette.levels[level as usize]);
        }
    }

    #[test]
    fn with_level_only_touches_one_slot() {
        let palette = Palette::new().with_level(Level::Nui, ColorToken::GREY);
        assert_eq!(palette.token(Level::Nui), ColorToken::GREY);
        assert_eq!(palette.token(Level::Info), ColorToken::GREEN);
        assert_eq!(palette.fallback(), ColorToken::WHITE);
    }
}
