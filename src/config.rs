use ratatui::style::Color;

use crate::error::AppError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid of `side` cells per edge.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Per-session settings, fixed at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_interval_ms: u64,
    pub start_length: u16,
}

impl GameConfig {
    /// Checks that a starting snake fits on the grid.
    ///
    /// The snake starts at the grid center and trails left, so the starting
    /// length may not exceed `width / 2 + 1`.
    pub fn validate(self) -> Result<(), AppError> {
        let fits = self.grid.width > 0
            && self.grid.height > 0
            && self.start_length > 0
            && u32::from(self.start_length) <= u32::from(self.grid.width / 2) + 1;

        if fits {
            Ok(())
        } else {
            Err(AppError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
                start_length: self.start_length,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::square(DEFAULT_GRID_SIZE),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            start_length: DEFAULT_START_LENGTH,
        }
    }
}

/// Default cells per grid edge.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default interval between simulation ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Default starting snake length in cells.
pub const DEFAULT_START_LENGTH: u16 = 3;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head cell.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for food.
    pub food: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_status: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_status: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Glyph for the snake head cell.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph for snake body cells.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use super::{GameConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn grid_too_small_for_starting_snake_is_rejected() {
        let config = GameConfig {
            grid: GridSize::square(3),
            ..GameConfig::default()
        };
        // Center x is 1, so only a length-2 snake fits to the left.
        assert!(config.validate().is_err());

        let config = GameConfig {
            grid: GridSize::square(4),
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 0,
                height: 20,
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            grid: GridSize {
                width: 20,
                height: 0,
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
