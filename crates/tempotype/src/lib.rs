//! # Tempotype - styled typing output driven by typing speed
//!
//! Tempotype maps each typed character and the current typing speed to a
//! visual style: slow typing renders light and pale, fast typing bold,
//! spaced-out and blue, with blank characters always kept upright and
//! unscaled.
//!
//! ## Core Concepts
//!
//! - [`resolve`]: the stock `(character, speed) -> CharacterRenderSpec` mapping
//! - [`TierTable`] / [`StyleResolver`]: custom speed tiers, optionally loaded
//!   from YAML stylesheets
//! - [`TypingDisplay`]: editor text and speed in, one styled element per
//!   character out, plus the word counter
//! - [`TypingMeter`]: typing speed derived from keystroke timing
//! - [`render()`]: HTML, terminal, plain text or JSON output
//!
//! ## Speed Tiers
//!
//! | Speed | Weight | Color | Style | Spacing | Transform |
//! |---|---|---|---|---|---|
//! | `<= 3` | 300 | `rgb(203, 213, 225)` | normal | normal | none |
//! | `<= 8` | 400 | `rgb(226, 232, 240)` | normal | normal | none |
//! | `<= 15` | 600 | `rgb(148, 163, 184)` | normal | 0.02em | none |
//! | `> 15` | 700 | `rgb(43, 140, 238)` | italic | 0.05em | scale(1.05) |
//!
//! Bounds are inclusive: a speed of exactly 3 is in the first tier.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempotype::{render, OutputMode, TypingDisplay};
//!
//! let mut display = TypingDisplay::default();
//! display.set_speed(10.0);
//! display.handle_input("fast fingers");
//!
//! let first = display.nth(0).unwrap();
//! assert_eq!(first.style("fontWeight").as_deref(), Some("600"));
//! assert_eq!(first.style("letterSpacing").as_deref(), Some("0.02em"));
//!
//! let html = render(display.chars(), OutputMode::Html).unwrap();
//! assert_eq!(html.matches("class=\"char\"").count(), 12);
//! ```

pub mod display;
mod meter;
mod output;
pub mod render;
pub mod style;
pub mod tier;
mod util;

pub use display::TypingDisplay;
pub use meter::{TypingMeter, DEFAULT_WINDOW};
pub use output::OutputMode;
pub use render::{render, RenderError};
pub use style::CharacterRenderSpec;
pub use tier::{
    is_blank, resolve, resolve_text, StyleResolver, StylesheetError, TierTable,
    TierValidationError,
};
pub use util::rgb_to_ansi256;
