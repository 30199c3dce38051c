//! Image-set membership masks.

use bitflags::bitflags;

bitflags! {
    /// Image sets that carry a glyph.
    ///
    /// Bits beyond the four standard sets are retained so custom image sets
    /// can claim their own bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ImageSetMask: u32 {
        /// Apple artwork.
        const APPLE = 1;
        /// Google artwork.
        const GOOGLE = 1 << 1;
        /// Twitter artwork.
        const TWITTER = 1 << 2;
        /// Facebook artwork.
        const FACEBOOK = 1 << 3;
    }
}

impl ImageSetMask {
    /// Mask from its serialized integer form, keeping unknown bits.
    #[must_use]
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether a glyph with this mask exists in `set`.
    #[must_use]
    pub const fn has_set(self, set: Self) -> bool {
        self.intersects(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let mask = ImageSetMask::from_raw(12);
        assert!(mask.has_set(ImageSetMask::TWITTER));
        assert!(mask.has_set(ImageSetMask::FACEBOOK));
        assert!(!mask.has_set(ImageSetMask::APPLE));
        assert!(!mask.has_set(ImageSetMask::empty()));
    }

    #[test]
    fn test_custom_bits_survive() {
        let mask = ImageSetMask::from_raw((1 << 6) | 1);
        assert!(mask.has_set(ImageSetMask::from_raw(1 << 6)));
        assert_eq!(mask.bits(), 65);
    }
}
