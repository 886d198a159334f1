//! Mood colours for the terminal

use crate::model::MoodKind;
use ratatui::style::Color;

/// Parse a `#RRGGBB` token into an RGB terminal colour
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn mood_color(mood: MoodKind) -> Color {
    hex_to_color(mood.color()).unwrap_or(Color::Gray)
}

/// Readable text colour on top of a mood-coloured background
pub fn mood_text_color(mood: MoodKind) -> Color {
    match mood {
        MoodKind::Energetic | MoodKind::Neutral => Color::Black,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#4CAF50"), Some(Color::Rgb(0x4C, 0xAF, 0x50)));
        assert_eq!(hex_to_color("4CAF50"), None);
        assert_eq!(hex_to_color("#4CAF5"), None);
        assert_eq!(hex_to_color("#GGGGGG"), None);
    }

    #[test]
    fn test_every_catalog_color_parses() {
        for mood in MoodKind::ALL {
            assert!(hex_to_color(mood.color()).is_some(), "{}", mood);
        }
    }
}
