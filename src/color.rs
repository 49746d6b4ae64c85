//! Square colors and where random ones come from.

use serde::Serialize;
use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(12,200,7)`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Supplies colors for Random mode.
pub trait ColorSource {
    /// The next color. Every channel is uniform over `0..=255` for real sources.
    fn next_rgb(&mut self) -> Rgb;
}

/// Colors drawn from the platform entropy source (`crypto.getRandomValues` in the browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl ColorSource for OsRandom {
    fn next_rgb(&mut self) -> Rgb {
        let mut channels = [0u8; 3];
        if let Err(e) = getrandom::getrandom(&mut channels) {
            log::warn!("entropy source unavailable, painting black: {e}");
        }
        Rgb::from(channels)
    }
}

/// Replays a fixed list of colors in a loop. Useful for tests and scripted runs.
#[derive(Debug, Clone)]
pub struct ColorSequence {
    colors: Vec<Rgb>,
    next: usize,
}

impl ColorSequence {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors, next: 0 }
    }
}

impl ColorSource for ColorSequence {
    fn next_rgb(&mut self) -> Rgb {
        let Some(color) = self.colors.get(self.next).copied() else {
            return Rgb::new(0, 0, 0);
        };
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}
