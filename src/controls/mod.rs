//! The page controls the coordinator talks back to: the size input, the
//! user notification, and button focus.

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomControls;

use crate::app::Control;
use crate::error::Result;

pub trait Controls {
    /// Current text of the size input.
    fn size_input(&self) -> String;

    fn clear_input(&mut self);

    /// Show a blocking message.
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Drop keyboard focus from a clicked button.
    fn release_focus(&mut self, control: Control) -> Result<()>;
}

/// Controls backed by plain fields.
#[derive(Debug, Default, Clone)]
pub struct MemoryControls {
    pub input: String,
    pub notifications: Vec<String>,
    pub released: Vec<Control>,
}

impl MemoryControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate typing into the size input.
    pub fn type_size(&mut self, text: &str) {
        self.input = text.to_string();
    }
}

impl Controls for MemoryControls {
    fn size_input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.notifications.push(message.to_string());
        Ok(())
    }

    fn release_focus(&mut self, control: Control) -> Result<()> {
        self.released.push(control);
        Ok(())
    }
}
