//! The text draw primitive: blit glyph bitmaps onto a canvas.

use crate::font::Font;
use crate::types::Rgb;

use super::Canvas;

/// Draw `text` with its baseline at `(x, y)` and return the pixel width
/// advanced.
///
/// `letter_spacing` is extra pixels inserted after every glyph advance; the
/// outline pass uses a spacing reduced by two to keep the same letter pitch
/// as the fill pass it sits under. Characters the font doesn't cover advance
/// nothing and draw nothing. Pixels falling outside the canvas are clipped
/// by the canvas itself, so partially scrolled-out text just works.
pub fn draw_text<C: Canvas>(
    canvas: &mut C,
    font: &Font,
    x: i32,
    y: i32,
    color: Rgb,
    text: &str,
    letter_spacing: i32,
) -> i32 {
    let mut pen_x = x;

    for c in text.chars() {
        let Some(glyph) = font.glyph(c) else {
            continue;
        };

        // The bounding box top edge sits (height + y_offset) above the
        // baseline.
        let top = y - (glyph.height + glyph.y_offset);
        let left = pen_x + glyph.x_offset;

        for (row_y, row) in glyph.rows.iter().enumerate() {
            for (row_x, &lit) in row.iter().enumerate() {
                if lit {
                    canvas.set_pixel(left + row_x as i32, top + row_y as i32, color);
                }
            }
        }

        pen_x += glyph.device_width + letter_spacing;
    }

    pen_x - x
}

// =============================================================================
// Tests
// =============================================================================
