//! Color conversion helpers.

use crate::style::Rgb;

/// Converts a color to the nearest ANSI 256-color palette index.
///
/// Greys map onto the 24-step grayscale ramp, everything else onto the
/// 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use tempotype::style::Rgb;
/// use tempotype::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256(Rgb(0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256(color: Rgb) -> u8 {
    let (r, g, b) = color.triple();
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::{BLAZING_COLOR, SLOW_COLOR};

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb(255, 255, 255)), 231);
        let mid = rgb_to_ansi256(Rgb(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 255)), 21);
    }

    #[test]
    fn test_tier_colors_land_in_cube() {
        // 43*5/255=0, 140*5/255=2, 238*5/255=4
        assert_eq!(rgb_to_ansi256(BLAZING_COLOR), 16 + 12 + 4);
        // 203->3, 213->4, 225->4
        assert_eq!(rgb_to_ansi256(SLOW_COLOR), 16 + 108 + 24 + 4);
    }
}
