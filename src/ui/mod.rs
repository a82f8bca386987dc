//! Terminal interface: state, rendering and the event loop.

pub mod app;
pub mod input;
pub mod output;
pub mod pager;
pub mod prompt;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::{Action, App, Mode, Settings, StatusKind, StatusMessage};
pub use input::run;
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Glyphs;
