//! BDF bitmap font parsing.
//!
//! BDF is the plain-text bitmap format the classic LED-matrix fonts ship in:
//! global metrics up front, then one `STARTCHAR`..`ENDCHAR` record per glyph
//! with a bounding box and hex-encoded bitmap rows. Only the fields the
//! renderer consumes are parsed; everything else is skipped.

use std::collections::HashMap;

use thiserror::Error;

use super::{Font, Glyph};

/// Failure to load or parse a BDF font.
#[derive(Debug, Error)]
pub enum BdfError {
    #[error("not a BDF font (missing STARTFONT header)")]
    NotBdf,

    #[error("malformed {keyword} on line {line}")]
    Malformed { keyword: &'static str, line: usize },

    #[error("font defines no usable glyphs")]
    NoGlyphs,

    #[error("font is missing ascent/descent metrics")]
    NoMetrics,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-glyph fields accumulated while walking a STARTCHAR record.
#[derive(Default)]
struct GlyphBuilder {
    encoding: Option<i64>,
    device_width: Option<i32>,
    bbx: Option<(i32, i32, i32, i32)>,
    rows: Vec<Vec<bool>>,
    in_bitmap: bool,
}

impl GlyphBuilder {
    fn finish(self) -> Option<(char, Glyph)> {
        let encoding = self.encoding?;
        let c = char::from_u32(u32::try_from(encoding).ok()?)?;
        let (width, height, x_offset, y_offset) = self.bbx?;
        Some((
            c,
            Glyph {
                device_width: self.device_width?,
                width,
                height,
                x_offset,
                y_offset,
                rows: self.rows,
            },
        ))
    }
}

/// Parse BDF source text into a [`Font`].
pub fn parse(source: &str) -> Result<Font, BdfError> {
    let mut lines = source.lines().enumerate();

    match lines.next() {
        Some((_, first)) if first.starts_with("STARTFONT") => {}
        _ => return Err(BdfError::NotBdf),
    }

    let mut glyphs = HashMap::new();
    let mut ascent: Option<i32> = None;
    let mut descent: Option<i32> = None;
    let mut bounding_box: Option<(i32, i32, i32, i32)> = None;
    let mut current: Option<GlyphBuilder> = None;

    for (index, raw) in lines {
        let line = index + 1;
        let text = raw.trim_end();

        if let Some(builder) = current.as_mut() {
            if builder.in_bitmap && text != "ENDCHAR" {
                let width = builder.bbx.map_or(0, |(w, _, _, _)| w);
                builder.rows.push(parse_bitmap_row(text, width, line)?);
                continue;
            }
        }

        let mut fields = text.split_whitespace();
        let keyword = fields.next().unwrap_or("");

        match keyword {
            "FONT_ASCENT" => {
                ascent = Some(parse_int(fields.next(), "FONT_ASCENT", line)?);
            }
            "FONT_DESCENT" => {
                descent = Some(parse_int(fields.next(), "FONT_DESCENT", line)?);
            }
            "FONTBOUNDINGBOX" => {
                let w = parse_int(fields.next(), "FONTBOUNDINGBOX", line)?;
                let h = parse_int(fields.next(), "FONTBOUNDINGBOX", line)?;
                let xo = parse_int(fields.next(), "FONTBOUNDINGBOX", line)?;
                let yo = parse_int(fields.next(), "FONTBOUNDINGBOX", line)?;
                bounding_box = Some((w, h, xo, yo));
            }
            "STARTCHAR" => {
                current = Some(GlyphBuilder::default());
            }
            "ENCODING" => {
                if let Some(builder) = current.as_mut() {
                    let value: i64 = fields
                        .next()
                        .and_then(|v| v.parse().ok())
                        .ok_or(BdfError::Malformed {
                            keyword: "ENCODING",
                            line,
                        })?;
                    // Negative encodings are unmapped glyphs; keep the record
                    // so its bitmap lines are consumed, drop it at ENDCHAR.
                    builder.encoding = (value >= 0).then_some(value);
                }
            }
            "DWIDTH" => {
                if let Some(builder) = current.as_mut() {
                    builder.device_width = Some(parse_int(fields.next(), "DWIDTH", line)?);
                }
            }
            "BBX" => {
                if let Some(builder) = current.as_mut() {
                    let w = parse_int(fields.next(), "BBX", line)?;
                    let h = parse_int(fields.next(), "BBX", line)?;
                    let xo = parse_int(fields.next(), "BBX", line)?;
                    let yo = parse_int(fields.next(), "BBX", line)?;
                    builder.bbx = Some((w, h, xo, yo));
                }
            }
            "BITMAP" => {
                if let Some(builder) = current.as_mut() {
                    builder.in_bitmap = true;
                }
            }
            "ENDCHAR" => {
                if let Some(builder) = current.take() {
                    if let Some((c, glyph)) = builder.finish() {
                        glyphs.insert(c, glyph);
                    }
                }
            }
            "ENDFONT" => break,
            _ => {}
        }
    }

    if glyphs.is_empty() {
        return Err(BdfError::NoGlyphs);
    }

    // Fonts without explicit ascent/descent properties fall back to the
    // font bounding box: its top edge is the ascent, the below-baseline
    // overhang the descent.
    let (ascent, descent) = match (ascent, descent) {
        (Some(a), Some(d)) => (a, d),
        _ => {
            let (_, h, _, yo) = bounding_box.ok_or(BdfError::NoMetrics)?;
            (h + yo, -yo)
        }
    };

    Ok(Font {
        glyphs,
        ascent,
        descent,
    })
}

fn parse_int(field: Option<&str>, keyword: &'static str, line: usize) -> Result<i32, BdfError> {
    field
        .and_then(|v| v.parse().ok())
        .ok_or(BdfError::Malformed { keyword, line })
}

/// Decode one hex bitmap row into `width` pixels, most significant bit
/// leftmost.
fn parse_bitmap_row(hex: &str, width: i32, line: usize) -> Result<Vec<bool>, BdfError> {
    if hex.len() % 2 != 0 {
        return Err(BdfError::Malformed {
            keyword: "BITMAP",
            line,
        });
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let byte = u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| BdfError::Malformed {
            keyword: "BITMAP",
            line,
        })?;
        bytes.push(byte);
    }

    let width = width.max(0) as usize;
    let mut row = Vec::with_capacity(width);
    for x in 0..width {
        let lit = bytes
            .get(x / 8)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0);
        row.push(lit);
    }
    Ok(row)
}

// =============================================================================
// Tests
// =============================================================================
