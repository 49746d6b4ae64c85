//! Headless surface that keeps the scene as plain data.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Paint, Surface, PAINTED_CLASS, SQUARE_CLASS};
use crate::color::Rgb;
use crate::error::Result;
use crate::grid::PaintMode;

/// One square as the stylesheet would see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquareNode {
    /// Rebuild that created this square.
    pub generation: u64,
    pub painted: bool,
    pub background: Option<Rgb>,
}

impl SquareNode {
    /// Class list in DOM order.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![SQUARE_CLASS];
        if self.painted {
            classes.push(PAINTED_CLASS);
        }
        classes
    }

    /// True when the square still looks freshly created.
    pub fn is_blank(&self) -> bool {
        !self.painted && self.background.is_none()
    }
}

/// In-memory scene.
#[derive(Debug, Default)]
pub struct MemorySurface {
    squares: Vec<SquareNode>,
    properties: BTreeMap<String, String>,
    generation: u64,
    bound_mode: PaintMode,
}

/// Serializable copy of a [`MemorySurface`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub generation: u64,
    pub bound_mode: PaintMode,
    pub properties: BTreeMap<String, String>,
    pub squares: Vec<SquareNode>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn squares(&self) -> &[SquareNode] {
        &self.squares
    }

    pub fn square(&self, index: u32) -> Option<&SquareNode> {
        self.squares.get(usize::try_from(index).ok()?)
    }

    pub fn painted_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_blank()).count()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Number of rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mode the current squares' handlers were bound with.
    pub fn bound_mode(&self) -> PaintMode {
        self.bound_mode
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            generation: self.generation,
            bound_mode: self.bound_mode,
            properties: self.properties.clone(),
            squares: self.squares.clone(),
        }
    }
}

impl Surface for MemorySurface {
    fn rebuild(&mut self, total_squares: u32, mode: PaintMode) -> Result<()> {
        self.generation += 1;
        let generation = self.generation;
        let fresh = SquareNode {
            generation,
            painted: false,
            background: None,
        };
        self.squares.clear();
        self.squares
            .resize(usize::try_from(total_squares).unwrap_or(0), fresh);
        self.bound_mode = mode;
        log::debug!("rebuilt {total_squares} squares (generation {generation})");
        Ok(())
    }

    fn paint(&mut self, square: u32, paint: Paint) -> Result<()> {
        let node = usize::try_from(square)
            .ok()
            .and_then(|index| self.squares.get_mut(index));
        let Some(node) = node else {
            log::debug!("ignoring paint for missing square {square}");
            return Ok(());
        };
        match paint {
            Paint::Mark => node.painted = true,
            Paint::Fill(color) => node.background = Some(color),
        }
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn square_count(&self) -> u32 {
        u32::try_from(self.squares.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_replaces_every_square() {
        let mut surface = MemorySurface::new();
        surface.rebuild(9, PaintMode::Default).unwrap();
        surface.paint(4, Paint::Mark).unwrap();
        surface.rebuild(4, PaintMode::Random).unwrap();

        assert_eq!(surface.square_count(), 4);
        assert!(surface.squares().iter().all(|s| s.generation == 2));
        assert!(surface.squares().iter().all(SquareNode::is_blank));
        assert_eq!(surface.bound_mode(), PaintMode::Random);
    }

    #[test]
    fn out_of_range_paint_is_ignored() {
        let mut surface = MemorySurface::new();
        surface.rebuild(1, PaintMode::Default).unwrap();
        surface.paint(7, Paint::Mark).unwrap();
        assert_eq!(surface.painted_count(), 0);
    }

    #[test]
    fn marked_square_lists_painted_class() {
        let mut surface = MemorySurface::new();
        surface.rebuild(2, PaintMode::Default).unwrap();
        surface.paint(1, Paint::Mark).unwrap();
        assert_eq!(surface.square(1).unwrap().classes(), vec!["square", "draw"]);
        assert_eq!(surface.square(0).unwrap().classes(), vec!["square"]);
    }
}
