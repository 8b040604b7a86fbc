/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BACKGROUND: Self = Self { r: 0.067, g: 0.094, b: 0.153, a: 1.0 }; // #111827
    pub const TEXT:       Self = Self { r: 0.953, g: 0.957, b: 0.965, a: 1.0 }; // #f3f4f6
    pub const GRID:       Self = Self { r: 0.216, g: 0.255, b: 0.318, a: 1.0 }; // #374151
    pub const LABEL:      Self = Self { r: 0.612, g: 0.639, b: 0.686, a: 1.0 }; // #9ca3af
    pub const GREEN:      Self = Self { r: 0.082, g: 0.502, b: 0.239, a: 1.0 }; // #15803d
    pub const RED:        Self = Self { r: 0.725, g: 0.110, b: 0.110, a: 1.0 }; // #b91c1c
    pub const TRANSPARENT: Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 0.0 };

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a CSS-style hex colour string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let byte = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };

        match hex.len() {
            6 => Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets and canvases.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        let c = Color::from_hex("#4f46e5").unwrap();
        assert_eq!(c, Color::from_rgb8(0x4f, 0x46, 0xe5));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parses_translucent_fill() {
        let c = Color::from_hex("#10b9811a").unwrap();
        assert_eq!(c, Color::from_rgba8(0x10, 0xb9, 0x81, 0x1a));
        assert!((c.a - 0.1).abs() < 0.01);
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(Color::from_hex("374151"), Some(Color::from_rgb8(0x37, 0x41, 0x51)));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "#", "#12345", "#gggggg", "#1234567", "#éé1234"] {
            assert_eq!(Color::from_hex(bad), None, "{bad}");
        }
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::GRID.with_alpha(3.0).a, 1.0);
        assert_eq!(Color::GRID.with_alpha(-1.0).a, 0.0);
    }
}
