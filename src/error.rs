//! Structured error types for pixelpad.
//!
//! User input rejections are kept apart from surface failures so the
//! coordinator can report the former to the user and log the latter.

/// Rejections of the grid-size text typed into the size input.
///
/// Each variant is reported through a blocking notification and leaves
/// all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The text is empty, not a number, or has a fractional part.
    #[error("Please enter a whole number of squares per side (got \"{0}\")")]
    NonIntegerSize(String),

    /// The number exceeds the maximum squares per side.
    #[error("Please enter a number no greater than {max} (got {value})")]
    SizeTooLarge { value: i64, max: u32 },

    /// Zero or a negative number.
    #[error("Please enter a number greater than zero (got {0})")]
    SizeNotPositive(i64),

    /// "Create" was pressed while the size input was empty.
    #[error("Please enter the number of squares per side before creating a grid")]
    EmptySizeOnCreate,
}

/// All errors that can occur in pixelpad.
#[derive(Debug, thiserror::Error)]
pub enum PixelpadError {
    /// Rejected user input.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A DOM lookup or mutation failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Options passed from JavaScript could not be read.
    #[error("Invalid options: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PixelpadError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PixelpadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PixelpadError> for wasm_bindgen::JsValue {
    fn from(e: PixelpadError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
