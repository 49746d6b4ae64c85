//! Options accepted by `PixelPad` at construction.
//!
//! Every field has a default, so JavaScript may pass `undefined`, `{}` or
//! any subset of the camelCase keys.

use serde::Deserialize;

use crate::error::{PixelpadError, Result};
use crate::grid::{DEFAULT_SQUARES_PER_SIDE, DEFAULT_SQUARE_COLOR, MAX_SQUARES_PER_SIDE};

/// Element selectors for the host page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    /// Container the squares are appended to.
    pub canvas: String,
    /// Text input holding squares per side.
    pub size_input: String,
    pub create_button: String,
    pub random_button: String,
    /// Optional; pages without it simply have no way back to Default mode.
    pub default_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            canvas: ".js-canvas".to_string(),
            size_input: ".js-sq-per-side".to_string(),
            create_button: ".js-create-btn".to_string(),
            random_button: ".js-random-btn".to_string(),
            default_button: ".js-default-btn".to_string(),
        }
    }
}

/// Runtime options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PadOptions {
    pub selectors: Selectors,
    /// Fixed canvas width. When absent the window width minus `canvas_margin_px` is used.
    pub canvas_width: Option<f64>,
    pub canvas_margin_px: f64,
    pub default_size: u32,
    pub max_size: u32,
    /// Paint color for Default mode, written to `--square-color`.
    pub color: String,
    /// `KeyboardEvent.key` value that flips drawing on and off (case-insensitive).
    pub toggle_key: String,
    /// `log` level filter: off, error, warn, info, debug or trace.
    pub log_level: String,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            canvas_width: None,
            canvas_margin_px: 100.0,
            default_size: DEFAULT_SQUARES_PER_SIDE,
            max_size: MAX_SQUARES_PER_SIDE,
            color: DEFAULT_SQUARE_COLOR.to_string(),
            toggle_key: "d".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PadOptions {
    /// Canvas width for a window of the given inner width.
    pub fn canvas_width_for(&self, inner_width: f64) -> f64 {
        self.canvas_width
            .unwrap_or(inner_width - self.canvas_margin_px)
    }

    /// Check the size limits: `maxSize` within `1..=100`, `defaultSize` within `1..=maxSize`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SQUARES_PER_SIDE).contains(&self.max_size) {
            return Err(PixelpadError::Config(format!(
                "maxSize must be between 1 and {MAX_SQUARES_PER_SIDE} (got {})",
                self.max_size
            )));
        }
        if !(1..=self.max_size).contains(&self.default_size) {
            return Err(PixelpadError::Config(format!(
                "defaultSize must be between 1 and {} (got {})",
                self.max_size, self.default_size
            )));
        }
        Ok(())
    }

    /// Largest accepted squares per side, never above 100.
    pub fn size_limit(&self) -> u32 {
        self.max_size.clamp(1, MAX_SQUARES_PER_SIDE)
    }

    /// Squares per side for the first grid, pulled into `1..=size_limit()`.
    pub fn startup_size(&self) -> u32 {
        self.default_size.clamp(1, self.size_limit())
    }

    /// Whether `key` is the draw-toggle key.
    pub fn is_toggle_key(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(&self.toggle_key)
    }

    /// Parsed log level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
