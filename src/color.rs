//! Packed RGBA colors

use serde::{Deserialize, Serialize};

/// A packed 32-bit color laid out as `0xRRGGBBAA`.
///
/// The value `0` (transparent black) doubles as the "no color" sentinel for
/// border and fill colors, see [`Color::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// The "no color" sentinel.
    pub const NONE: Self = Self(0);
    pub const BLACK: Self = Self(0x000000FF);
    pub const WHITE: Self = Self(0xFFFFFFFF);
    pub const RED: Self = Self(0xFF0000FF);
    pub const GREEN: Self = Self(0x00FF00FF);
    pub const BLUE: Self = Self(0x0000FFFF);

    const RGB_MASK: u32 = 0xFFFFFF00;

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The color channels with alpha masked to zero
    #[inline]
    pub const fn rgb(self) -> u32 {
        self.0 & Self::RGB_MASK
    }

    /// Same color channels, different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.rgb() | a as u32)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        let c = Color(0x11223344);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x11, 0x22, 0x33, 0x44));
        assert_eq!(Color::from_rgba(0x11, 0x22, 0x33, 0x44), c);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color(0xAABBCCFF).with_alpha(0x10);
        assert_eq!(c, Color(0xAABBCC10));
        assert_eq!(c.rgb(), 0xAABBCC00);
    }

    #[test]
    fn test_none_sentinel() {
        assert!(Color::NONE.is_none());
        assert!(!Color::BLACK.is_none());
        assert!(!Color(0xFFFFFF00).is_none());
    }

    #[test]
    fn test_serde_is_packed_u32() {
        let json = serde_json::to_string(&Color(0xFF0000FF)).unwrap();
        assert_eq!(json, "4278190335");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::RED);
    }
}
