//! In-process model of the typing display.
//!
//! [`TypingDisplay`] stands in for the editor page: it holds the current text
//! and typing speed and keeps one rendered element per character, rebuilt on
//! every change.

#[allow(clippy::module_inception)]
mod display;
mod words;

pub use display::TypingDisplay;
pub use words::{word_count, word_count_label};
