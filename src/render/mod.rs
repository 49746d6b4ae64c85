//! Render surfaces: where squares live and where custom properties are written.
//!
//! Two implementations share the [`Surface`] trait:
//! - [`MemorySurface`]: a headless scene for tests, benchmarks and the CLI
//! - `DomSurface` (wasm32 only): real `div.square` elements in the page
//!
//! A rebuild always replaces the whole scene. Squares have no identity across
//! rebuilds; a paint addressed to an index past the current grid is ignored.

#[cfg(target_arch = "wasm32")]
mod dom;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomSurface, HoverHandler};
pub use memory::{MemorySurface, SceneSnapshot, SquareNode};

use crate::color::Rgb;
use crate::error::Result;
use crate::grid::{Geometry, PaintMode};

/// Class carried by every square.
pub const SQUARE_CLASS: &str = "square";

/// Class marking a square painted in Default mode.
pub const PAINTED_CLASS: &str = "draw";

/// A visual change to one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Add [`PAINTED_CLASS`]. Repeating it changes nothing.
    Mark,
    /// Set an inline background color, replacing any previous one.
    Fill(Rgb),
}

/// Trait for render surfaces.
pub trait Surface {
    /// Remove every square, then create `total_squares` new ones whose hover
    /// handlers are bound to `mode`.
    fn rebuild(&mut self, total_squares: u32, mode: PaintMode) -> Result<()>;

    /// Apply `paint` to the square at `square` (row-major index).
    fn paint(&mut self, square: u32, paint: Paint) -> Result<()>;

    /// Write one CSS custom property on the document root.
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;

    /// Number of squares currently attached.
    fn square_count(&self) -> u32;

    /// Write the canvas width, square width and square color properties.
    fn apply_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        for (name, value) in geometry.properties() {
            self.set_property(name, value)?;
        }
        Ok(())
    }
}
