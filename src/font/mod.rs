//! Bitmap fonts: metrics, glyph access, and outline derivation.
//!
//! Fonts are loaded from BDF files (see [`bdf`]) and expose exactly what the
//! layout engine needs: a baseline metric, per-character advance widths, and
//! glyph bitmaps for the draw primitive to blit.

use std::collections::HashMap;
use std::path::Path;

pub mod bdf;

pub use bdf::BdfError;

// =============================================================================
// Glyph
// =============================================================================

/// A single character bitmap with its placement metrics.
///
/// `rows[0]` is the top row of the bounding box. The box's bottom edge sits
/// `y_offset` pixels above the baseline (negative values reach below it, as
/// with descenders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Horizontal advance to the next glyph origin, in pixels.
    pub device_width: i32,
    /// Bounding box width in pixels.
    pub width: i32,
    /// Bounding box height in pixels.
    pub height: i32,
    /// Bounding box left edge relative to the glyph origin.
    pub x_offset: i32,
    /// Bounding box bottom edge relative to the baseline.
    pub y_offset: i32,
    /// Bitmap rows, top to bottom; `rows[y][x]` is a lit pixel.
    pub rows: Vec<Vec<bool>>,
}

impl Glyph {
    /// Derive the outline variant: every lit pixel spreads to its eight
    /// neighbours, then the original pixels are erased, leaving a one-pixel
    /// ring. The bounding box grows by one pixel on every side and the
    /// advance by two, which the layout engine compensates with a reduced
    /// letter spacing.
    fn outline(&self) -> Glyph {
        let width = self.width + 2;
        let height = self.height + 2;
        let mut rows = vec![vec![false; width as usize]; height as usize];

        for (y, row) in self.rows.iter().enumerate() {
            for (x, &lit) in row.iter().enumerate() {
                if !lit {
                    continue;
                }
                for dy in 0..3 {
                    for dx in 0..3 {
                        rows[y + dy][x + dx] = true;
                    }
                }
            }
        }
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &lit) in row.iter().enumerate() {
                if lit {
                    rows[y + 1][x + 1] = false;
                }
            }
        }

        Glyph {
            device_width: self.device_width + 2,
            width,
            height,
            x_offset: self.x_offset - 1,
            y_offset: self.y_offset - 1,
            rows,
        }
    }
}

// =============================================================================
// Font
// =============================================================================

/// A loaded bitmap font.
#[derive(Debug, Clone)]
pub struct Font {
    pub(crate) glyphs: HashMap<char, Glyph>,
    pub(crate) ascent: i32,
    pub(crate) descent: i32,
}

impl Font {
    /// Load a BDF font file.
    pub fn load(path: &Path) -> Result<Self, BdfError> {
        let source = std::fs::read_to_string(path)?;
        bdf::parse(&source)
    }

    /// The Y distance from the top of a line to the baseline glyphs sit on.
    pub fn baseline(&self) -> i32 {
        self.ascent
    }

    /// Total line height (ascent + descent).
    pub fn height(&self) -> i32 {
        self.ascent + self.descent
    }

    /// The bitmap for a character, if the font covers it.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Advance width of a character in pixels (0 when uncovered).
    pub fn char_width(&self, c: char) -> i32 {
        self.glyph(c).map_or(0, |g| g.device_width)
    }

    /// Derive an outline font: same coverage and metrics, with each glyph
    /// replaced by its one-pixel ring (see [`Glyph::outline`]).
    pub fn outline(&self) -> Font {
        Font {
            glyphs: self
                .glyphs
                .iter()
                .map(|(&c, g)| (c, g.outline()))
                .collect(),
            ascent: self.ascent,
            descent: self.descent,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
