//! Grid state: canvas size, squares per side, and the derived geometry.

use serde::Serialize;

/// Squares per side used when none is given.
pub const DEFAULT_SQUARES_PER_SIDE: u32 = 16;

/// Largest accepted squares per side.
pub const MAX_SQUARES_PER_SIDE: u32 = 100;

/// Color written to `--square-color` until one is chosen.
pub const DEFAULT_SQUARE_COLOR: &str = "blue";

/// CSS custom property holding the canvas width.
pub const CANVAS_WIDTH_PROPERTY: &str = "--canvas-width";
/// CSS custom property holding the width of one square.
pub const SQUARE_WIDTH_PROPERTY: &str = "--square-width";
/// CSS custom property holding the paint color for Default mode.
pub const SQUARE_COLOR_PROPERTY: &str = "--square-color";

/// How a hovered square gets colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// Mark the square with the `draw` class; the stylesheet colors it.
    #[default]
    Default,
    /// Give the square a fresh random color on every hover.
    Random,
}

impl PaintMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Random => "random",
        }
    }
}

/// Grid configuration with geometry derived from `squares_per_side`.
///
/// `square_width_px` and `total_squares` are only ever written by
/// [`GridConfig::configure`], so they always agree with `squares_per_side`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    canvas_width_px: f64,
    squares_per_side: u32,
    square_width_px: f64,
    total_squares: u32,
    mode: PaintMode,
    color: String,
}

/// The three custom-property values the stylesheet consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub canvas_width: String,
    pub square_width: String,
    pub square_color: String,
}

impl Geometry {
    /// `(property, value)` pairs in the order they are written.
    pub fn properties(&self) -> [(&'static str, &str); 3] {
        [
            (CANVAS_WIDTH_PROPERTY, self.canvas_width.as_str()),
            (SQUARE_WIDTH_PROPERTY, self.square_width.as_str()),
            (SQUARE_COLOR_PROPERTY, self.square_color.as_str()),
        ]
    }
}

impl GridConfig {
    /// Create an unconfigured grid; call [`configure`](Self::configure) before use.
    pub fn new(canvas_width_px: f64, color: impl Into<String>) -> Self {
        Self {
            canvas_width_px,
            squares_per_side: 0,
            square_width_px: 0.0,
            total_squares: 0,
            mode: PaintMode::Default,
            color: color.into(),
        }
    }

    /// Set squares per side (16 when `None`) and recompute the geometry.
    ///
    /// Range checks belong to the caller. Zero is tolerated and yields an
    /// empty grid with an infinite square width, which is passed on unclamped.
    pub fn configure(&mut self, squares_per_side: Option<u32>) {
        let side = squares_per_side.unwrap_or(DEFAULT_SQUARES_PER_SIDE);
        self.squares_per_side = side;
        self.square_width_px = self.canvas_width_px / f64::from(side);
        self.total_squares = side.saturating_mul(side);
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn canvas_width_px(&self) -> f64 {
        self.canvas_width_px
    }

    pub fn squares_per_side(&self) -> u32 {
        self.squares_per_side
    }

    pub fn square_width_px(&self) -> f64 {
        self.square_width_px
    }

    pub fn total_squares(&self) -> u32 {
        self.total_squares
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Custom-property values for the current configuration.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            canvas_width: format!("{}px", self.canvas_width_px),
            square_width: format!("{}px", self.square_width_px),
            square_color: self.color.clone(),
        }
    }
}
