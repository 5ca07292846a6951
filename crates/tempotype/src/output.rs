//! Output mode selection.

use std::fmt;
use std::str::FromStr;

use crate::style::ParseValueError;

/// How rendered characters are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Styled terminal output when stdout supports color, plain otherwise.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Plain characters, no styling.
    Text,
    /// `<span class="char">` markup with inline styles.
    Html,
    /// Render specs as JSON.
    Json,
}

impl OutputMode {
    /// All mode names, in the order shown in help output.
    pub const NAMES: [&'static str; 5] = ["auto", "term", "text", "html", "json"];

    /// Returns `true` if terminal styling should be emitted.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Html | OutputMode::Json => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Html => "html",
            OutputMode::Json => "json",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "html" => Ok(OutputMode::Html),
            "json" => Ok(OutputMode::Json),
            _ => Err(ParseValueError::new("output mode", s)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
