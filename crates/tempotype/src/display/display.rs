//! The typing display: editor text in, styled characters out.

use std::time::Duration;
use tracing::debug;

use super::words::{word_count, word_count_label};
use crate::meter::TypingMeter;
use crate::style::CharacterRenderSpec;
use crate::tier::StyleResolver;

/// Editor state plus the styled characters rendered from it.
///
/// Mirrors the page contract: `set_text` and `set_speed` update state
/// without re-rendering, [`apply_styles`](Self::apply_styles) rebuilds the
/// rendered characters, and [`handle_input`](Self::handle_input) does both.
///
/// # Example
///
/// ```rust
/// use tempotype::TypingDisplay;
///
/// let mut display = TypingDisplay::default();
/// display.set_speed(20.0);
/// display.handle_input("Hi there");
///
/// assert_eq!(display.len(), 8);
/// assert_eq!(display.word_count_label(), "02");
/// assert_eq!(display.nth(0).unwrap().style("fontStyle").as_deref(), Some("italic"));
/// assert_eq!(display.nth(2).unwrap().style("fontStyle").as_deref(), Some("normal"));
/// ```
#[derive(Debug, Clone)]
pub struct TypingDisplay {
    resolver: StyleResolver,
    meter: TypingMeter,
    text: String,
    speed: f64,
    rendered: Vec<CharacterRenderSpec>,
}

impl TypingDisplay {
    pub fn new(resolver: StyleResolver) -> Self {
        Self {
            resolver,
            meter: TypingMeter::default(),
            text: String::new(),
            speed: 0.0,
            rendered: Vec::new(),
        }
    }

    /// Replaces the meter used by [`handle_keystroke`](Self::handle_keystroke).
    pub fn with_meter(mut self, meter: TypingMeter) -> Self {
        self.meter = meter;
        self
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Sets the editor text. Call [`apply_styles`](Self::apply_styles) to re-render.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Sets the typing speed. Call [`apply_styles`](Self::apply_styles) to re-render.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Rebuilds the rendered characters from the current text and speed.
    ///
    /// Empty text clears the display.
    pub fn apply_styles(&mut self) {
        self.rendered = self.resolver.resolve_text(&self.text, self.speed);
        debug!(
            chars = self.rendered.len(),
            speed = self.speed,
            "applied styles"
        );
    }

    /// Replaces the text and re-renders, as the editor's input handler does.
    pub fn handle_input(&mut self, text: impl Into<String>) {
        self.set_text(text);
        self.apply_styles();
    }

    /// Records a keystroke at `at`, updates the speed from the meter, and
    /// re-renders with the new text.
    pub fn handle_keystroke(&mut self, text: impl Into<String>, at: Duration) {
        self.meter.record(at);
        self.speed = self.meter.speed();
        self.handle_input(text);
    }

    /// The rendered characters in display order.
    pub fn chars(&self) -> &[CharacterRenderSpec] {
        &self.rendered
    }

    pub fn nth(&self, index: usize) -> Option<&CharacterRenderSpec> {
        self.rendered.get(index)
    }

    /// Number of rendered characters.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// The word count as shown in the status line, e.g. `"02"`.
    pub fn word_count_label(&self) -> String {
        word_count_label(self.word_count())
    }
}

impl Default for TypingDisplay {
    fn default() -> Self {
        Self::new(StyleResolver::default())
    }
}
