//! HTML rendering of styled characters.

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::style::CharacterRenderSpec;

/// Template name; the `.html` suffix turns on HTML auto-escaping.
const DISPLAY_TEMPLATE_NAME: &str = "display.html";

/// Default display markup: one `span.char` per character inside `#display`.
pub const DEFAULT_DISPLAY_TEMPLATE: &str = concat!(
    r#"<div id="display">"#,
    r#"{% for span in spans %}<span class="char" style="{{ span.style }}">{{ span.text }}</span>{% endfor %}"#,
    "</div>",
);

#[derive(Serialize)]
struct SpanView {
    text: String,
    style: String,
}

#[derive(Serialize)]
struct DisplayView {
    spans: Vec<SpanView>,
    words: usize,
}

/// A renderer holding a compiled display template.
///
/// The template receives `spans` (each with `text` and `style`) and `words`,
/// the number of whitespace-separated words in the rendered text.
///
/// # Example
///
/// ```rust
/// use tempotype::render::HtmlRenderer;
///
/// let renderer = HtmlRenderer::new().unwrap();
/// let html = renderer.render(&tempotype::resolve_text("<a", 2.0)).unwrap();
/// assert!(html.contains(r#"<span class="char""#));
/// assert!(html.contains("&lt;"));
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with the default display template.
    pub fn new() -> Result<Self, Error> {
        Self::with_template(DEFAULT_DISPLAY_TEMPLATE)
    }

    /// Creates a renderer with a custom display template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has invalid syntax.
    pub fn with_template(source: &str) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template_owned(DISPLAY_TEMPLATE_NAME.to_string(), source.to_string())?;
        Ok(Self { env })
    }

    /// Renders characters in display order.
    pub fn render(&self, chars: &[CharacterRenderSpec]) -> Result<String, Error> {
        let text: String = chars.iter().map(|c| c.character).collect();
        let view = DisplayView {
            spans: chars
                .iter()
                .map(|c| SpanView {
                    text: c.inner_text(),
                    style: c.css_text(),
                })
                .collect(),
            words: crate::display::word_count(&text),
        };
        let tmpl = self.env.get_template(DISPLAY_TEMPLATE_NAME)?;
        tmpl.render(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::resolve_text;

    #[test]
    fn test_render_single_char() {
        let renderer = HtmlRenderer::new().unwrap();
        let html = renderer.render(&resolve_text("a", 2.0)).unwrap();
        assert_eq!(
            html,
            "<div id=\"display\"><span class=\"char\" style=\"font-weight: 300; \
             color: rgb(203, 213, 225); font-style: normal; letter-spacing: normal; \
             transform: none\">a</span></div>"
        );
    }

    #[test]
    fn test_render_empty_clears_display() {
        let renderer = HtmlRenderer::new().unwrap();
        let html = renderer.render(&[]).unwrap();
        assert_eq!(html, r#"<div id="display"></div>"#);
    }

    #[test]
    fn test_render_escapes_markup() {
        let renderer = HtmlRenderer::new().unwrap();
        let html = renderer.render(&resolve_text("<&>", 2.0)).unwrap();
        assert!(html.contains(">&lt;</span>"));
        assert!(html.contains(">&amp;</span>"));
        assert!(html.contains(">&gt;</span>"));
    }

    #[test]
    fn test_render_count_spans() {
        let renderer = HtmlRenderer::new().unwrap();
        let html = renderer.render(&resolve_text("Test", 5.0)).unwrap();
        assert_eq!(html.matches(r#"class="char""#).count(), 4);
    }

    #[test]
    fn test_custom_template() {
        let renderer =
            HtmlRenderer::with_template("{{ words }}:{% for s in spans %}{{ s.text }}{% endfor %}")
                .unwrap();
        let html = renderer.render(&resolve_text("Hello World", 20.0)).unwrap();
        assert_eq!(html, "2:Hello World");
    }

    #[test]
    fn test_invalid_template() {
        assert!(HtmlRenderer::with_template("{% for %}").is_err());
    }
}
