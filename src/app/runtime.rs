//! Carries coordinator effects out against a surface and the controls.

use super::{AppState, Effect, Event, PaintStyle};
use crate::color::{ColorSource, OsRandom};
use crate::controls::Controls;
use crate::error::Result;
use crate::render::{Paint, Surface};

/// One page's worth of state, surface, controls and color source.
///
/// Events run to completion one at a time: [`dispatch`](Self::dispatch)
/// handles the event and applies all of its effects before returning.
pub struct Session<S, C, R = OsRandom> {
    state: AppState,
    surface: S,
    controls: C,
    colors: R,
}

impl<S: Surface, C: Controls, R: ColorSource> Session<S, C, R> {
    pub fn new(state: AppState, surface: S, controls: C, colors: R) -> Self {
        Self {
            state,
            surface,
            controls,
            colors,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    /// Handle `event` and apply its effects in order.
    ///
    /// Stops at the first failing effect; input rejections are not failures.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        for effect in self.state.handle(event) {
            self.apply(effect)?;
        }
        Ok(())
    }

    /// Dispatch a create click using whatever the size input holds right now.
    pub fn create(&mut self) -> Result<()> {
        let input = self.controls.size_input();
        self.dispatch(Event::Create { input })
    }

    /// Dispatch a size change using the size input's current text.
    pub fn size_changed(&mut self) -> Result<()> {
        let text = self.controls.size_input();
        self.dispatch(Event::SizeChanged(text))
    }

    fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Notify(error) => self.controls.notify(&error.to_string()),
            Effect::ClearInput => {
                self.controls.clear_input();
                Ok(())
            }
            Effect::ApplyGeometry(geometry) => self.surface.apply_geometry(&geometry),
            Effect::Rebuild {
                total_squares,
                mode,
            } => self.surface.rebuild(total_squares, mode),
            Effect::Paint { square, style } => {
                let paint = match style {
                    PaintStyle::Mark => Paint::Mark,
                    PaintStyle::RandomFill => Paint::Fill(self.colors.next_rgb()),
                };
                self.surface.paint(square, paint)
            }
            Effect::ReleaseFocus(control) => self.controls.release_focus(control),
        }
    }
}
