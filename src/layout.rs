//! Line layout: baseline geometry and the outline/fill draw passes.
//!
//! Geometry is a pure function of the origin, the font baseline, and whether
//! a real second line exists — nothing is cached between frames. Drawing is
//! two passes per line when an outline is configured: the outline variant
//! goes down first, one pixel left and with its spacing pulled in by two so
//! both passes share the same letter pitch, then the fill lands on top.

use crate::font::Font;
use crate::render::{Canvas, draw_text};
use crate::text::DisplayLines;
use crate::types::Rgb;

// =============================================================================
// Style
// =============================================================================

/// How text is colored and spaced.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub color: Rgb,
    /// Presence enables the outline pass.
    pub outline_color: Option<Rgb>,
    /// Extra pixels between letters.
    pub letter_spacing: i32,
}

// =============================================================================
// Geometry
// =============================================================================

/// Baseline Y coordinates for the active lines.
///
/// The inter-line gap is a quarter of the font baseline. A single line sits
/// pulled up from the two-line position by that same gap; with two lines the
/// first takes the top baseline and the second drops below by the gap.
pub fn line_baselines(origin_y: i32, font_baseline: i32, two_lines: bool) -> (i32, Option<i32>) {
    let linespace = font_baseline / 4;
    if two_lines {
        (
            origin_y + font_baseline,
            Some(origin_y + 2 * font_baseline + linespace),
        )
    } else {
        (origin_y + 2 * font_baseline - linespace, None)
    }
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_line<C: Canvas>(
    canvas: &mut C,
    font: &Font,
    outline_font: Option<&Font>,
    text: &str,
    x: i32,
    baseline_y: i32,
    style: &TextStyle,
) -> i32 {
    if let (Some(outline_font), Some(outline_color)) = (outline_font, style.outline_color) {
        draw_text(
            canvas,
            outline_font,
            x - 1,
            baseline_y,
            outline_color,
            text,
            style.letter_spacing - 2,
        );
    }
    draw_text(
        canvas,
        font,
        x,
        baseline_y,
        style.color,
        text,
        style.letter_spacing,
    )
}

/// Lay out and draw the active lines at horizontal origin `x`.
///
/// The second line is skipped entirely when it is empty or all whitespace.
/// Both lines share the same `x`; horizontal centering happened earlier via
/// padding. Returns the pixel width of the first line's fill pass, which is
/// what the scroller measures travel against.
pub fn draw_lines<C: Canvas>(
    canvas: &mut C,
    font: &Font,
    outline_font: Option<&Font>,
    lines: &DisplayLines,
    x: i32,
    origin_y: i32,
    style: &TextStyle,
) -> i32 {
    let (first_y, second_y) = line_baselines(origin_y, font.baseline(), lines.has_second_line());

    let width = draw_line(canvas, font, outline_font, &lines.first, x, first_y, style);
    if let Some(second_y) = second_y {
        draw_line(
            canvas,
            font,
            outline_font,
            &lines.second,
            x,
            second_y,
            style,
        );
    }
    width
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::bdf;
    use crate::render::PixelBuffer;

    const TINY_BDF: &str = "\
STARTFONT 2.1
FONT -test-tiny
FONTBOUNDINGBOX 4 7 0 -1
FONT_ASCENT 6
FONT_DESCENT 1
CHARS 1
STARTCHAR plus
ENCODING 43
DWIDTH 4 0
BBX 3 3 0 1
BITMAP
40
E0
40
ENDCHAR
ENDFONT
";

    #[test]
    fn test_single_line_baseline() {
        // linespace = 8/4 = 2; single line at y + 16 - 2.
        let (first, second) = line_baselines(0, 8, false);
        assert_eq!(first, 14);
        assert_eq!(second, None);

        let (shifted, _) = line_baselines(3, 8, false);
        assert_eq!(shifted, 17);
    }

    #[test]
    fn test_two_line_baselines() {
        let (first, second) = line_baselines(0, 8, true);
        assert_eq!(first, 8);
        assert_eq!(second, Some(18));
        // Second line is strictly below the first.
        assert!(second.unwrap() > first);
    }

    #[test]
    fn test_whitespace_second_line_selects_single_line_mode() {
        let font = bdf::parse(TINY_BDF).unwrap();
        let mut buffer = PixelBuffer::new(32, 32);
        let style = TextStyle {
            color: Rgb::WHITE,
            outline_color: None,
            letter_spacing: 0,
        };

        let lines = DisplayLines {
            first: "+".to_string(),
            second: "   ".to_string(),
        };
        draw_lines(&mut buffer, &font, None, &lines, 0, 0, &style);

        // Single-line baseline: 2*6 - 1 = 11; plus center lands at y 8.
        assert_eq!(buffer.get(1, 8), Some(Rgb::WHITE));
        // Nothing below on the two-line secondary baseline.
        let lit_rows: Vec<i32> = (0..32)
            .filter(|&y| (0..32).any(|x| buffer.get(x, y) == Some(Rgb::WHITE)))
            .collect();
        assert!(lit_rows.iter().all(|&y| y < 12));
    }

    #[test]
    fn test_two_lines_draw_at_both_baselines() {
        let font = bdf::parse(TINY_BDF).unwrap();
        let mut buffer = PixelBuffer::new(32, 32);
        let style = TextStyle {
            color: Rgb::WHITE,
            outline_color: None,
            letter_spacing: 0,
        };

        let lines = DisplayLines {
            first: "+".to_string(),
            second: "+".to_string(),
        };
        draw_lines(&mut buffer, &font, None, &lines, 0, 0, &style);

        // First baseline y=6 (plus center at y 3), second at 2*6+1=13
        // (center at y 10).
        assert_eq!(buffer.get(1, 3), Some(Rgb::WHITE));
        assert_eq!(buffer.get(1, 10), Some(Rgb::WHITE));
    }

    #[test]
    fn test_fill_covers_outline_at_glyph_pixels() {
        let font = bdf::parse(TINY_BDF).unwrap();
        let outline_font = font.outline();
        let mut buffer = PixelBuffer::new(32, 32);
        let red = Rgb::new(255, 0, 0);
        let style = TextStyle {
            color: Rgb::WHITE,
            outline_color: Some(red),
            letter_spacing: 2,
        };

        let lines = DisplayLines {
            first: "+".to_string(),
            second: String::new(),
        };
        draw_lines(&mut buffer, &font, Some(&outline_font), &lines, 4, 0, &style);

        // Fill pixels stay the text color even where the outline pass ran.
        assert_eq!(buffer.get(5, 8), Some(Rgb::WHITE));
        // The halo just left of the glyph is the outline color.
        assert_eq!(buffer.get(2, 8), Some(red));
    }
}
