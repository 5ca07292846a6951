//! Output rendering for resolved characters.
//!
//! - [`HtmlRenderer`]: `span.char` markup through a MiniJinja template
//! - [`render_term`] / [`render_plain`]: terminal output via `console`
//! - [`render`]: dispatches on [`OutputMode`]

mod html;
mod term;

pub use html::{HtmlRenderer, DEFAULT_DISPLAY_TEMPLATE};
pub use term::{render_plain, render_term, term_style};

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::output::OutputMode;
use crate::style::CharacterRenderSpec;

/// Error returned when rendering fails.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders characters in the given output mode.
///
/// # Example
///
/// ```rust
/// use tempotype::{render, resolve_text, OutputMode};
///
/// let chars = resolve_text("ok", 5.0);
/// assert_eq!(render(&chars, OutputMode::Text).unwrap(), "ok");
/// ```
pub fn render(chars: &[CharacterRenderSpec], mode: OutputMode) -> Result<String, RenderError> {
    match mode {
        OutputMode::Auto | OutputMode::Term | OutputMode::Text => {
            if mode.should_use_color() {
                Ok(render_term(chars, true))
            } else {
                Ok(render_plain(chars))
            }
        }
        OutputMode::Html => Ok(default_html_renderer()?.render(chars)?),
        OutputMode::Json => Ok(serde_json::to_string_pretty(chars)?),
    }
}

static DEFAULT_HTML_RENDERER: OnceCell<HtmlRenderer> = OnceCell::new();

/// The shared renderer for the default display template, compiled once.
fn default_html_renderer() -> Result<&'static HtmlRenderer, minijinja::Error> {
    DEFAULT_HTML_RENDERER.get_or_try_init(HtmlRenderer::new)
}
