use core::fmt;
use core::str::FromStr;

/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Invariant:
/// - RGB channels are stored straight (not multiplied by `a`). The circle
///   rasterizer hands colors to the GPU unmodified and scales the whole RGBA
///   value by edge coverage, so premultiplication has no place here.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    ///
    /// This is the constructor for colors coming from hex literals or CLI
    /// arguments, which produce straight-alpha RGBA bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Returns the channels as an array in RGBA order, the layout uniform
    /// buffers expect.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Error produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hex color {:?}, expected #rrggbb or #rrggbbaa",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses an HTML-style hex color: `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError { input: s.to_string() };

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(err());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());

        let r = byte(0)?;
        let g = byte(2)?;
        let b = byte(4)?;
        let a = if hex.len() == 8 { byte(6)? } else { 0xff };

        Ok(Color::from_srgb_u8(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex parsing ───────────────────────────────────────────────────────

    #[test]
    fn parses_rrggbb() {
        let c: Color = "#ff8000".parse().unwrap();
        assert_eq!(c, Color::from_srgb_u8(0xff, 0x80, 0x00, 0xff));
    }

    #[test]
    fn parses_rrggbbaa() {
        let c: Color = "#00ff0080".parse().unwrap();
        assert_eq!(c, Color::from_srgb_u8(0x00, 0xff, 0x00, 0x80));
    }

    #[test]
    fn rejects_missing_hash() {
        assert!("ff8000".parse::<Color>().is_err());
    }

    #[test]
    fn rejects_bad_length() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("#ff80001".parse::<Color>().is_err());
        assert!("#".parse::<Color>().is_err());
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!("#gggggg".parse::<Color>().is_err());
        // Multi-byte input must be rejected, not panic on byte slicing.
        assert!("#ееееее".parse::<Color>().is_err());
    }

    // ── channels ──────────────────────────────────────────────────────────

    #[test]
    fn srgb_u8_maps_full_range() {
        let c = Color::from_srgb_u8(255, 0, 255, 255);
        assert_eq!(c.to_array(), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn to_array_is_rgba_order() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}
