//! Terminal capability detection, theme tokens and output helpers

pub mod json;
pub mod terminal;
pub mod theme;
pub mod width;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Icons;
