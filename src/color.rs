/// Hex color parsing and normalization.

/// Errors from hex color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color.
    InvalidFormat(String),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(input) => write!(f, "invalid hex color: {input:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Normalize a hex color string to the `#RRGGBB` form.
///
/// Accepts 3- or 6-digit hex, with or without a leading `#`.
/// Shorthand digits are doubled (`#0DF` becomes `#00DDFF`) and the
/// result is uppercased. Idempotent over its own output.
pub fn normalize_hex(raw: &str) -> Result<String, ColorError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ColorError::InvalidFormat(raw.to_string()));
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

/// Parse a normalized `#RRGGBB` string into rgb components.
pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
