use serde::{Deserialize, Serialize};

use crate::app::keys::KeyConfig;
use crate::app::Args;
use crate::ui::Theme;

pub const MIN_WIDTH_PERCENT: u16 = 20;
pub const MAX_WIDTH_PERCENT: u16 = 100;

/// User-editable configuration (read-only after load), stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Cells kept free after the names; four fits the `,...` marker
    #[serde(default = "default_reserve")]
    pub reserve: u16,
    #[serde(default = "default_width_percent")]
    pub width_percent: u16,
    #[serde(default = "default_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub theme: Theme,
}

fn default_reserve() -> u16 {
    4
}

fn default_width_percent() -> u16 {
    MAX_WIDTH_PERCENT
}

fn default_debounce_ms() -> u64 {
    50
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            reserve: default_reserve(),
            width_percent: default_width_percent(),
            resize_debounce_ms: default_debounce_ms(),
            keys: KeyConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl UserConfig {
    /// Command-line flags win over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(reserve) = args.reserve {
            self.reserve = reserve;
        }
        if let Some(percent) = args.width_percent {
            self.width_percent = percent;
        }
        if let Some(ms) = args.debounce_ms {
            self.resize_debounce_ms = ms;
        }
        self.width_percent = self
            .width_percent
            .clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT);
    }
}
