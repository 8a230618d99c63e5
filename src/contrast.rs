/// Contrast classification for choosing readable foreground styling.
use crate::color::hex_to_rgb;

/// Whether a background color reads as bright or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    Bright,
    Dark,
}

/// Classify a background hex color as bright or dark.
///
/// Uses the perceived-luminance weighting (299/587/114). Unparseable
/// input counts as dark, which keeps the default light foreground.
pub fn classify(hex: &str) -> Contrast {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => {
            let luma = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            if luma >= 128 {
                Contrast::Bright
            } else {
                Contrast::Dark
            }
        }
        None => Contrast::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_extremes() {
        assert_eq!(classify("#FFFFFF"), Contrast::Bright);
        assert_eq!(classify("#000000"), Contrast::Dark);
    }

    #[test]
    fn classifies_mid_tones() {
        assert_eq!(classify("#663399"), Contrast::Dark);
        assert_eq!(classify("#DDDDDD"), Contrast::Bright);
        assert_eq!(classify("#00FFFF"), Contrast::Bright);
    }

    #[test]
    fn unparseable_input_is_dark() {
        assert_eq!(classify("not-a-color"), Contrast::Dark);
    }
}
