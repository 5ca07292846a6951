//! Terminal rendering through `console` styles.

use console::Style;

use crate::style::{CharacterRenderSpec, FontStyle, FontWeight};
use crate::util::rgb_to_ansi256;

/// Builds the terminal approximation of a render spec.
///
/// Weight maps to intensity (300 dim, 600 and 700 bold), color to the
/// nearest ANSI-256 entry. Letter spacing and transforms have no terminal
/// equivalent and are dropped.
pub fn term_style(spec: &CharacterRenderSpec) -> Style {
    let mut style = Style::new().color256(rgb_to_ansi256(spec.color));
    style = match spec.font_weight {
        FontWeight::Light => style.dim(),
        FontWeight::Regular => style,
        FontWeight::SemiBold | FontWeight::Bold => style.bold(),
    };
    if spec.font_style == FontStyle::Italic {
        style = style.italic();
    }
    style
}

/// Renders characters as styled terminal text.
///
/// With `force` set, styling is emitted even when stdout isn't a color
/// terminal; otherwise `console`'s color detection decides.
pub fn render_term(chars: &[CharacterRenderSpec], force: bool) -> String {
    chars
        .iter()
        .map(|spec| {
            let mut style = term_style(spec);
            if force {
                style = style.force_styling(true);
            }
            style.apply_to(spec.character).to_string()
        })
        .collect()
}

/// Renders characters without styling.
pub fn render_plain(chars: &[CharacterRenderSpec]) -> String {
    chars.iter().map(|spec| spec.character).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::resolve_text;

    #[test]
    fn test_render_term_forced() {
        let output = render_term(&resolve_text("d", 20.0), true);
        assert!(output.contains("\x1b["));
        assert!(output.contains("\x1b[1m"));
        assert!(output.contains("\x1b[3m"));
        assert!(output.contains("38;5;32"));
        assert!(output.contains('d'));
    }

    #[test]
    fn test_render_term_slow_is_dim() {
        let output = render_term(&resolve_text("a", 1.0), true);
        assert!(output.contains("\x1b[2m"));
    }

    #[test]
    fn test_space_is_not_italic() {
        let spec = crate::tier::resolve(' ', 20.0);
        let output = term_style(&spec).force_styling(true).apply_to(' ').to_string();
        assert!(!output.contains("\x1b[3m"));
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(&resolve_text("Hello World", 12.0)), "Hello World");
        assert_eq!(render_plain(&[]), "");
    }
}
