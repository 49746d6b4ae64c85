//! Inputs to and outputs from the coordinator's transition function.

use serde::Serialize;

use crate::error::InputError;
use crate::grid::{Geometry, PaintMode};

/// Something the user did, already reduced to plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page load: configure the default grid and draw it.
    Startup,
    /// The size input fired `change` with this text.
    SizeChanged(String),
    /// The create button was clicked; `input` is the size input's text at that moment.
    Create { input: String },
    /// The random-mode button was clicked.
    RandomMode,
    /// The default-mode button was clicked.
    DefaultMode,
    /// A new paint color for Default mode.
    SetColor(String),
    /// A global `keydown` with this `KeyboardEvent.key`.
    KeyPressed(String),
    /// The pointer entered a square. `bound_mode` is the mode the square's
    /// handler was attached with.
    Hover { square: u32, bound_mode: PaintMode },
}

/// A button whose focus is released after it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Create,
    Random,
    Default,
}

/// How a hovered square should change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Add the persistent painted mark.
    Mark,
    /// Fill with a color freshly drawn from the color source.
    RandomFill,
}

/// Work for the surface or the controls, produced by [`AppState::handle`](super::AppState::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking message to the user.
    Notify(InputError),
    /// Empty the size input.
    ClearInput,
    /// Write the canvas, square and color custom properties.
    ApplyGeometry(Geometry),
    /// Replace every square with `total_squares` new ones bound to `mode`.
    Rebuild { total_squares: u32, mode: PaintMode },
    Paint { square: u32, style: PaintStyle },
    ReleaseFocus(Control),
}
