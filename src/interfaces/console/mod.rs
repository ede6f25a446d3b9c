//! Terminal front-end: validated prompts and table rendering.

pub mod prompt;
pub mod render;
