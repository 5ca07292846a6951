//! Style primitives for rendered characters.
//!
//! This module provides the value types a resolved character carries:
//!
//! - [`FontWeight`], [`Rgb`], [`FontStyle`], [`LetterSpacing`], [`Transform`]:
//!   individual properties, each displaying as the string a browser reports
//!   for the matching inline style
//! - [`TierStyle`]: the style bundle attached to one speed tier
//! - [`CharacterRenderSpec`]: a character paired with its resolved style
//! - [`ParseValueError`]: errors from parsing property values

mod error;
mod spec;
mod value;

pub use error::ParseValueError;
pub use spec::{CharacterRenderSpec, TierStyle};
pub use value::{FontStyle, FontWeight, LetterSpacing, Rgb, Transform};
