use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Catppuccin Mocha by default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub blue: Color,
    pub magenta: Color,
    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            tooltip_bg: Color::Rgb(102, 102, 102),
            tooltip_fg: Color::Rgb(240, 240, 240),
        }
    }
}
