use ratatui::style::Color;

use crate::color::hex_to_rgb;

pub fn hex_to_color(value: &str) -> Option<Color> {
    let (r, g, b) = hex_to_rgb(value)?;
    Some(Color::Rgb(r, g, b))
}

/// Fit a label into `width` cells, marking truncation with "..".
pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return value.to_string();
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_name_truncates_long_labels() {
        assert_eq!(clamp_name("short", 10), "short");
        assert_eq!(clamp_name("a very long label", 8), "a very..");
    }

    #[test]
    fn hex_to_color_parses_normalized_hex() {
        assert_eq!(hex_to_color("#663399"), Some(Color::Rgb(0x66, 0x33, 0x99)));
        assert_eq!(hex_to_color("#63"), None);
    }
}
