//! Skin-tone modifiers.

/// One of the five Fitzpatrick skin-tone modifiers.
///
/// Short names run from `skin-tone-2` to `skin-tone-6`; there is no tone 1
/// or 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkinTone {
    /// U+1F3FB, `skin-tone-2`.
    Tone2,
    /// U+1F3FC, `skin-tone-3`.
    Tone3,
    /// U+1F3FD, `skin-tone-4`.
    Tone4,
    /// U+1F3FE, `skin-tone-5`.
    Tone5,
    /// U+1F3FF, `skin-tone-6`.
    Tone6,
}

impl SkinTone {
    /// All tones in codepoint order.
    pub const ALL: [Self; 5] = [
        Self::Tone2,
        Self::Tone3,
        Self::Tone4,
        Self::Tone5,
        Self::Tone6,
    ];

    /// Tone for the digit in `skin-tone-N`.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            2 => Some(Self::Tone2),
            3 => Some(Self::Tone3),
            4 => Some(Self::Tone4),
            5 => Some(Self::Tone5),
            6 => Some(Self::Tone6),
            _ => None,
        }
    }

    /// Tone for a modifier codepoint.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{1F3FB}' => Some(Self::Tone2),
            '\u{1F3FC}' => Some(Self::Tone3),
            '\u{1F3FD}' => Some(Self::Tone4),
            '\u{1F3FE}' => Some(Self::Tone5),
            '\u{1F3FF}' => Some(Self::Tone6),
            _ => None,
        }
    }

    /// Tone for a catalog identifier such as `1f3fb`.
    #[must_use]
    pub fn from_idx(idx: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.idx() == idx)
    }

    /// Tone for a short name such as `skin-tone-2`.
    #[must_use]
    pub fn from_short_name(name: &str) -> Option<Self> {
        let digit = name.strip_prefix("skin-tone-")?;
        match digit.as_bytes() {
            [d] if d.is_ascii_digit() => Self::from_digit(d - b'0'),
            _ => None,
        }
    }

    /// The catalog identifier of the standalone modifier glyph.
    #[must_use]
    pub const fn idx(self) -> &'static str {
        match self {
            Self::Tone2 => "1f3fb",
            Self::Tone3 => "1f3fc",
            Self::Tone4 => "1f3fd",
            Self::Tone5 => "1f3fe",
            Self::Tone6 => "1f3ff",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_outside_range_are_invalid() {
        assert_eq!(SkinTone::from_digit(1), None);
        assert_eq!(SkinTone::from_digit(7), None);
        assert_eq!(SkinTone::from_digit(2), Some(SkinTone::Tone2));
        assert_eq!(SkinTone::from_digit(6), Some(SkinTone::Tone6));
    }

    #[test]
    fn test_short_names() {
        assert_eq!(SkinTone::from_short_name("skin-tone-4"), Some(SkinTone::Tone4));
        assert_eq!(SkinTone::from_short_name("skin-tone-1"), None);
        assert_eq!(SkinTone::from_short_name("skin-tone-44"), None);
        assert_eq!(SkinTone::from_short_name("tone-4"), None);
        assert_eq!(SkinTone::from_short_name("skin-tone-6"), Some(SkinTone::Tone6));
    }

    #[test]
    fn test_codepoints_and_idx_agree() {
        for tone in SkinTone::ALL {
            assert_eq!(SkinTone::from_idx(tone.idx()), Some(tone));
            let codepoint = u32::from_str_radix(tone.idx(), 16).unwrap();
            assert_eq!(char::from_u32(codepoint).and_then(SkinTone::from_char), Some(tone));
        }
        assert_eq!(SkinTone::from_char('\u{1F3FB}'), Some(SkinTone::Tone2));
        assert_eq!(SkinTone::from_char('a'), None);
    }
}
