//! Palette state and behavior.
//!
//! [`App`] ties the input state, the collection cache and the derived result
//! groups together. Input handling lives in `actions`, drawing in `render` and
//! the flattened row model in `results`.

mod actions;
mod render;
mod results;
mod state;

pub use state::App;
