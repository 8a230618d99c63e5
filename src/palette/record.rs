use rand::RngExt;

use crate::color::{ColorError, normalize_hex};

const ID_SUFFIX_LEN: usize = 8;

/// A single palette entry.
///
/// `id` and `hex` are fixed at creation; only `name` changes afterwards.
/// A name of `Some("")` means the user cleared a previously set name,
/// which is distinct from the never-named `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRecord {
    pub id: String,
    pub hex: String,
    pub name: Option<String>,
}

impl ColorRecord {
    /// Build a record from a raw hex string.
    ///
    /// The id is the normalized hex plus a random base-36 suffix.
    /// Uniqueness within a store is probabilistic, not enforced.
    pub fn create(raw_hex: &str) -> Result<Self, ColorError> {
        let hex = normalize_hex(raw_hex)?;
        let id = format!("{hex}-{}", random_suffix());
        Ok(Self {
            id,
            hex,
            name: None,
        })
    }
}

fn random_suffix() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..ID_SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_normalizes_and_tags_id() {
        let record = ColorRecord::create("0df").unwrap();
        assert_eq!(record.hex, "#00DDFF");
        assert!(record.id.starts_with("#00DDFF-"));
        assert_eq!(record.id.len(), "#00DDFF-".len() + ID_SUFFIX_LEN);
        assert_eq!(record.name, None);
    }

    #[test]
    fn create_propagates_invalid_format() {
        assert!(matches!(
            ColorRecord::create("zzz"),
            Err(ColorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn ids_differ_across_creations() {
        // Probabilistic, but 36^8 makes a collision in two draws
        // effectively impossible.
        let a = ColorRecord::create("#639").unwrap();
        let b = ColorRecord::create("#639").unwrap();
        assert_ne!(a.id, b.id);
    }
}
