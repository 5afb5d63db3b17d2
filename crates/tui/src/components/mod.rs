//! Widgets shared by the palette renderer.

mod backdrop;
mod prompt;
pub mod rows;
mod scrollbar;
mod status;

pub use backdrop::{EMPTY_MESSAGE, render_backdrop, render_empty_message, render_hint};
pub use prompt::{CLEAR_BUTTON, PROMPT_SYMBOL, PromptContext, render_prompt, render_separator};
pub use rows::outline;
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use status::{StatusContext, render_status};
