//! Core types for ledscroll.
//!
//! Everything the renderer understands boils down to these: a pixel is an
//! `Rgb`, and the CLI feeds colors in as `r,g,b` byte triples.

use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels (0-255).
///
/// LED pixels have no alpha: a pixel is either lit with this color or
/// overwritten by a later draw. Integer channels give exact comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

/// Failure to parse an `r,g,b` color triple from the command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid color spec '{0}' (expected r,g,b with each channel 0-255)")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `"r,g,b"` with each channel in 0-255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut channels = s.split(',').map(|part| part.trim().parse::<u8>());
        let (r, g, b) = match (channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => (r, g, b),
            _ => return Err(ParseColorError(s.to_string())),
        };
        if channels.next().is_some() {
            return Err(ParseColorError(s.to_string()));
        }
        Ok(Self::new(r, g, b))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("255,0,128".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 128));
        assert_eq!("0, 0, 0".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_color_rejects_bad_specs() {
        assert!("255,0".parse::<Rgb>().is_err());
        assert!("255,0,0,0".parse::<Rgb>().is_err());
        assert!("256,0,0".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }
}
