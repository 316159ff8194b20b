//! Color: RGBA representation used by every drawable widget.

/// Four independent 8-bit channels, no implied premultiplication.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
    /// Alpha channel (0 = fully transparent)
    pub alpha: u8,
}

impl Color {
    /// Create a new color from all four channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create from a 32-bit `0xRRGGBBAA` value.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Whether drawing with this color would leave the target untouched.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.alpha == 0
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_u32() {
        let c = Color::from_u32(0x1122_33ff);
        assert_eq!(c, Color::new(0x11, 0x22, 0x33, 0xff));
        assert!(!c.is_transparent());
    }

    #[test]
    fn test_color_debug() {
        assert_eq!(format!("{:?}", Color::rgb(255, 0, 16)), "#ff0010ff");
    }

    #[test]
    fn test_transparent() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }
}
