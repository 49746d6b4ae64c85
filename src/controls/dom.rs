//! Controls bound to the page's input and buttons.

use web_sys::{HtmlElement, HtmlInputElement, Window};

use super::Controls;
use crate::app::Control;
use crate::error::Result;

pub struct DomControls {
    window: Window,
    size_input: HtmlInputElement,
    create_button: HtmlElement,
    random_button: HtmlElement,
    default_button: Option<HtmlElement>,
}

impl DomControls {
    pub fn new(
        window: Window,
        size_input: HtmlInputElement,
        create_button: HtmlElement,
        random_button: HtmlElement,
        default_button: Option<HtmlElement>,
    ) -> Self {
        Self {
            window,
            size_input,
            create_button,
            random_button,
            default_button,
        }
    }

    pub(crate) fn size_input_element(&self) -> &HtmlInputElement {
        &self.size_input
    }

    pub(crate) fn button(&self, control: Control) -> Option<&HtmlElement> {
        match control {
            Control::Create => Some(&self.create_button),
            Control::Random => Some(&self.random_button),
            Control::Default => self.default_button.as_ref(),
        }
    }
}

impl Controls for DomControls {
    fn size_input(&self) -> String {
        self.size_input.value()
    }

    fn clear_input(&mut self) {
        self.size_input.set_value("");
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.window.alert_with_message(message)?;
        Ok(())
    }

    fn release_focus(&mut self, control: Control) -> Result<()> {
        if let Some(button) = self.button(control) {
            button.blur()?;
        }
        Ok(())
    }
}
