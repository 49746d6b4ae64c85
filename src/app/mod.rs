//! The coordinator: validates user actions, updates grid state, and decides
//! what the surface and the controls must do.
//!
//! [`AppState::handle`] is a plain transition function. It mutates the state
//! it owns and returns [`Effect`]s; it never touches the DOM. The
//! [`Session`] pairs a state with a surface and controls and carries the
//! effects out.
//!
//! Binding rules for hover handling:
//! - the paint mode is fixed when a square's handler is attached (at
//!   rebuild) and arrives with the [`Event::Hover`];
//! - the draw toggle is read when the hover is dispatched.
//!
//! Every mode change rebuilds, so a bound mode never disagrees with the grid
//! state for squares that are still attached.

mod event;
mod runtime;
mod validate;

pub use event::{Control, Effect, Event, PaintStyle};
pub use runtime::Session;
pub use validate::parse_size;

use crate::config::PadOptions;
use crate::error::InputError;
use crate::grid::{GridConfig, PaintMode};

/// Everything the coordinator knows.
#[derive(Debug, Clone)]
pub struct AppState {
    pub grid: GridConfig,
    pub draw_enabled: bool,
    options: PadOptions,
}

impl AppState {
    pub fn new(options: PadOptions, canvas_width_px: f64) -> Self {
        Self {
            grid: GridConfig::new(canvas_width_px, options.color.clone()),
            draw_enabled: false,
            options,
        }
    }

    pub fn options(&self) -> &PadOptions {
        &self.options
    }

    /// Apply one event and return the effects it calls for.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Startup => self.on_startup(),
            Event::SizeChanged(text) => self.on_size_changed(&text),
            Event::Create { input } => self.on_create(&input),
            Event::RandomMode => self.on_mode(PaintMode::Random, Control::Random),
            Event::DefaultMode => self.on_mode(PaintMode::Default, Control::Default),
            Event::SetColor(color) => {
                self.grid.set_color(color);
                vec![Effect::ApplyGeometry(self.grid.geometry())]
            }
            Event::KeyPressed(key) => {
                if self.options.is_toggle_key(&key) {
                    self.draw_enabled = !self.draw_enabled;
                    log::debug!("drawing {}", if self.draw_enabled { "on" } else { "off" });
                }
                Vec::new()
            }
            Event::Hover { square, bound_mode } => self.on_hover(square, bound_mode),
        }
    }

    fn on_startup(&mut self) -> Vec<Effect> {
        self.grid.configure(Some(self.options.startup_size()));
        vec![
            Effect::ApplyGeometry(self.grid.geometry()),
            self.rebuild(),
        ]
    }

    fn on_size_changed(&mut self, text: &str) -> Vec<Effect> {
        match parse_size(text, self.options.size_limit()) {
            Ok(side) => {
                self.grid.configure(Some(side));
                log::debug!("squares per side set to {side}");
                Vec::new()
            }
            Err(e) => reject(e),
        }
    }

    fn on_create(&mut self, input: &str) -> Vec<Effect> {
        if input.trim().is_empty() {
            let mut effects = reject_without_clear(InputError::EmptySizeOnCreate);
            effects.push(Effect::ReleaseFocus(Control::Create));
            return effects;
        }
        vec![
            Effect::ClearInput,
            Effect::ApplyGeometry(self.grid.geometry()),
            self.rebuild(),
            Effect::ReleaseFocus(Control::Create),
        ]
    }

    fn on_mode(&mut self, mode: PaintMode, control: Control) -> Vec<Effect> {
        self.grid.set_mode(mode);
        log::info!("paint mode: {}", mode.as_str());
        vec![
            Effect::ApplyGeometry(self.grid.geometry()),
            self.rebuild(),
            Effect::ReleaseFocus(control),
        ]
    }

    fn on_hover(&self, square: u32, bound_mode: PaintMode) -> Vec<Effect> {
        if !self.draw_enabled {
            return Vec::new();
        }
        let style = match bound_mode {
            PaintMode::Default => PaintStyle::Mark,
            PaintMode::Random => PaintStyle::RandomFill,
        };
        vec![Effect::Paint { square, style }]
    }

    fn rebuild(&self) -> Effect {
        Effect::Rebuild {
            total_squares: self.grid.total_squares(),
            mode: self.grid.mode(),
        }
    }
}

fn reject(error: InputError) -> Vec<Effect> {
    let mut effects = reject_without_clear(error);
    effects.push(Effect::ClearInput);
    effects
}

fn reject_without_clear(error: InputError) -> Vec<Effect> {
    log::warn!("rejected input: {error}");
    vec![Effect::Notify(error)]
}
