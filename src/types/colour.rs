//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{RgbError, Result};

/// An 8-bit-per-channel RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Replace every channel `c` with `255 - c`.
    pub fn invert(&mut self) {
        self.r = 255 - self.r;
        self.g = 255 - self.g;
        self.b = 255 - self.b;
    }

    /// Replace every channel with the truncated average of the three.
    pub fn to_gray_scale(&mut self) {
        let v = ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8;
        self.r = v;
        self.g = v;
        self.b = v;
    }

    /// Blend this colour toward `other`.
    ///
    /// `factor` is the percentage weight given to `other` and is clamped to
    /// `0..=100`. Each channel becomes `(c * (100 - f) + o * f) / 100`
    /// using truncating integer division, so a factor of 0 (or less) keeps
    /// this colour and 100 (or more) yields `other`.
    pub fn mix(&mut self, other: &Colour, factor: i32) {
        let f = factor.clamp(0, 100) as u32;
        let blend = |c: u8, o: u8| ((c as u32 * (100 - f) + o as u32 * f) / 100) as u8;
        self.r = blend(self.r, other.r);
        self.g = blend(self.g, other.g);
        self.b = blend(self.b, other.b);
    }

    /// Look up a colour in the named palette.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            _ => None,
        }
    }

    /// Parse a `#RRGGBB` hex colour.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let unknown = || RgbError::UnknownColor {
            name: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(unknown)?;
        // from_str_radix alone would accept a sign, as in "#+F+F+F".
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(unknown());
        }

        let r = parse_hex_byte(&hex[0..2]).ok_or_else(unknown)?;
        let g = parse_hex_byte(&hex[2..4]).ok_or_else(unknown)?;
        let b = parse_hex_byte(&hex[4..6]).ok_or_else(unknown)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Parse either a palette name or a `#RRGGBB` literal.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::named(s).ok_or_else(|| RgbError::UnknownColor {
            name: s.to_string(),
        })
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = RgbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Colour::default(), Colour::BLACK);
    }

    #[test]
    fn test_invert() {
        let mut c = Colour::rgb(10, 200, 255);
        c.invert();
        assert_eq!(c, Colour::rgb(245, 55, 0));
    }

    #[test]
    fn test_invert_twice_is_identity() {
        for c in [Colour::RED, Colour::rgb(1, 2, 3), Colour::rgb(128, 127, 0)] {
            let mut d = c;
            d.invert();
            d.invert();
            assert_eq!(d, c);
        }
    }

    #[test]
    fn test_to_gray_scale_truncates() {
        let mut c = Colour::rgb(10, 20, 31);
        c.to_gray_scale();
        assert_eq!(c, Colour::rgb(20, 20, 20));

        let mut c = Colour::WHITE;
        c.to_gray_scale();
        assert_eq!(c, Colour::WHITE);

        let mut c = Colour::RED;
        c.to_gray_scale();
        assert_eq!(c, Colour::rgb(85, 85, 85));
    }

    #[test]
    fn test_mix_zero_and_negative_keep_colour() {
        let mut c = Colour::rgb(100, 50, 0);
        c.mix(&Colour::WHITE, 0);
        assert_eq!(c, Colour::rgb(100, 50, 0));

        c.mix(&Colour::WHITE, -40);
        assert_eq!(c, Colour::rgb(100, 50, 0));
    }

    #[test]
    fn test_mix_full_and_above_yield_other() {
        let mut c = Colour::rgb(100, 50, 0);
        c.mix(&Colour::BLUE, 100);
        assert_eq!(c, Colour::BLUE);

        let mut c = Colour::rgb(100, 50, 0);
        c.mix(&Colour::GREEN, 250);
        assert_eq!(c, Colour::GREEN);
    }

    #[test]
    fn test_mix_half_truncates() {
        let mut c = Colour::rgb(0, 255, 1);
        c.mix(&Colour::rgb(255, 0, 0), 50);
        assert_eq!(c, Colour::rgb(127, 127, 0));
    }

    #[test]
    fn test_mix_with_self_is_identity() {
        for f in [-5, 0, 1, 33, 50, 99, 100, 1000] {
            let c = Colour::rgb(17, 200, 93);
            let mut d = c;
            d.mix(&c, f);
            assert_eq!(d, c, "factor {}", f);
        }
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#FF0000").unwrap(), Colour::RED);
        assert_eq!(
            Colour::from_hex("#1a1a2e").unwrap(),
            Colour::rgb(0x1a, 0x1a, 0x2e)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGGGGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("FF0000").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#+F+F+F").is_err());
        assert!(Colour::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Colour::parse("yellow").unwrap(), Colour::YELLOW);
        assert_eq!("blue".parse::<Colour>().unwrap(), Colour::BLUE);
        assert_eq!(Colour::parse(" #00ff00 ").unwrap(), Colour::GREEN);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = Colour::parse("magenta").unwrap_err();
        assert!(matches!(err, RgbError::UnknownColor { name } if name == "magenta"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 10)), "#FF000A");
    }
}
