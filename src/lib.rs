//! pixelpad - pixel-art sketchpad for the web
//!
//! An N×N grid of squares in the browser, painted by hovering:
//! - Grid size from 1 to 100 squares per side, validated on entry
//! - Default mode marks squares with a stylesheet color
//! - Random mode fills squares with a fresh random color on every hover
//! - A toggle key turns drawing on and off
//!
//! Geometry reaches the page through three CSS custom properties
//! (`--canvas-width`, `--square-width`, `--square-color`).
//!
//! The coordinator ([`app`]) is a pure state machine over user events; the
//! DOM side lives behind the [`render::Surface`] and [`controls::Controls`]
//! traits, so everything but the wasm glue runs and tests natively.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PixelPad } from 'pixelpad';
//! await init();
//! const pad = new PixelPad();
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod grid;
pub mod logging;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod pad;

use wasm_bindgen::prelude::*;

pub use app::{AppState, Effect, Event, Session};
pub use config::PadOptions;
pub use error::{InputError, PixelpadError};
pub use grid::{GridConfig, PaintMode};
#[cfg(target_arch = "wasm32")]
pub use pad::PixelPad;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
