//! Interactive terminal front-end for the palette.
//!
//! The crate owns the event loop, the input state, the keyboard controller and
//! the rendering of grouped results. Data loading and aggregation live in
//! `palette-core`; this crate only drives them from user input.

mod app;
pub mod components;
mod config;
pub mod input;
pub mod keyboard;
mod outcome;
mod runtime;
pub mod state;
pub mod style;


pub use app::App;
pub use config::PaletteOptions;
pub use input::QueryInput;
pub use keyboard::{KeyBinding, KeyBindingError, KeyboardController, PaletteCommand};
pub use outcome::PaletteOutcome;
pub use runtime::run;
pub use state::{Focus, InputState};
pub use style::{Theme, default_theme};
