//! Command-line surface and the values derived from it.
//!
//! Flag names follow the classic LED-matrix text scroller so existing
//! invocations carry over: short flags for the text options, long flags for
//! the matrix geometry.

use std::path::PathBuf;

use clap::Parser;

use crate::types::Rgb;

/// Characters that fit on one matrix module; the normalizer's target width
/// is this times the chain length.
const CHARS_PER_MODULE: i32 = 10;

// =============================================================================
// Blink
// =============================================================================

/// Blink on/off durations, in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    pub on: i32,
    pub off: i32,
}

impl Blink {
    /// Blinking disabled: always on.
    pub const OFF: Self = Self { on: 0, off: 0 };
}

/// Parse `on,off` frame counts; a single value means equal on and off.
fn parse_blink(s: &str) -> Result<Blink, String> {
    let err = || format!("invalid blink spec '{s}' (expected ON or ON,OFF)");
    match s.split_once(',') {
        Some((on, off)) => Ok(Blink {
            on: on.trim().parse().map_err(|_| err())?,
            off: off.trim().parse().map_err(|_| err())?,
        }),
        None => {
            let on = s.trim().parse().map_err(|_| err())?;
            Ok(Blink { on, off: on })
        }
    }
}

// =============================================================================
// Args
// =============================================================================

/// Scrolling/static text display for LED pixel matrices.
#[derive(Debug, Parser)]
#[command(name = "ledscroll", version, about)]
pub struct Args {
    /// Text to display; multiple words are joined with spaces.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read text from this file instead, re-reading it whenever it changes.
    #[arg(short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Path to the *.bdf font to use.
    #[arg(short = 'f', value_name = "FONT")]
    pub font: PathBuf,

    /// Approximate letters per second. Positive scrolls right to left,
    /// negative left to right, zero disables scrolling.
    #[arg(short = 's', default_value_t = 7.0, allow_negative_numbers = true)]
    pub speed: f32,

    /// Number of passes through the text; -1 for endless.
    #[arg(short = 'l', default_value_t = -1, allow_negative_numbers = true)]
    pub loops: i32,

    /// Blink while displaying: on,off frame counts (one value for both).
    #[arg(short = 'b', value_name = "ON[,OFF]", value_parser = parse_blink)]
    pub blink: Option<Blink>,

    /// Shift the X origin of the text.
    #[arg(short = 'x', allow_negative_numbers = true)]
    pub x_origin: Option<i32>,

    /// Shift the Y origin of the text.
    #[arg(short = 'y', default_value_t = 0, allow_negative_numbers = true)]
    pub y_origin: i32,

    /// Spacing pixels between letters.
    #[arg(short = 't', default_value_t = 0, allow_negative_numbers = true)]
    pub letter_spacing: i32,

    /// Text color as r,g,b.
    #[arg(short = 'C', value_name = "R,G,B", default_value = "255,255,255")]
    pub color: Rgb,

    /// Background color as r,g,b.
    #[arg(short = 'B', value_name = "R,G,B", default_value = "0,0,0")]
    pub bg_color: Rgb,

    /// Outline color as r,g,b; enables the outline pass around glyphs.
    #[arg(short = 'O', value_name = "R,G,B")]
    pub outline_color: Option<Rgb>,

    /// Matrix height in pixels.
    #[arg(long, default_value_t = 32)]
    pub rows: i32,

    /// Width of one matrix module in pixels.
    #[arg(long, default_value_t = 64)]
    pub cols: i32,

    /// Number of chained modules.
    #[arg(long, default_value_t = 1)]
    pub chain: i32,
}

impl Args {
    /// Character width each display line is centered within.
    pub fn target_width(&self) -> usize {
        (CHARS_PER_MODULE * self.chain.max(0)) as usize
    }

    /// Full canvas width across the chain, in pixels.
    pub fn canvas_width(&self) -> i32 {
        self.cols * self.chain
    }

    /// Blink settings, defaulting to always-on.
    pub fn blink(&self) -> Blink {
        self.blink.unwrap_or(Blink::OFF)
    }

    /// The starting X origin.
    ///
    /// When `-x` is not given: static text sits at the front (one pixel in
    /// if outlined, so the outline's left edge stays visible); scrolling
    /// text enters from the edge it travels away from.
    pub fn scroll_origin_x(&self, canvas_width: i32, outlined: bool) -> i32 {
        match self.x_origin {
            Some(x) => x,
            None if self.speed == 0.0 => {
                if outlined {
                    1
                } else {
                    0
                }
            }
            None => {
                if self.speed >= 0.0 {
                    canvas_width
                } else {
                    0
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ledscroll").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_minimal_invocation() {
        let args = parse(&["-f", "6x10.bdf", "HELLO", "WORLD"]);
        assert_eq!(args.text, ["HELLO", "WORLD"]);
        assert_eq!(args.speed, 7.0);
        assert_eq!(args.loops, -1);
        assert_eq!(args.color, Rgb::WHITE);
        assert_eq!(args.bg_color, Rgb::BLACK);
        assert_eq!(args.outline_color, None);
    }

    #[test]
    fn test_font_is_required() {
        assert!(Args::try_parse_from(["ledscroll", "HELLO"]).is_err());
    }

    #[test]
    fn test_negative_speed_and_loops() {
        let args = parse(&["-f", "f.bdf", "-s", "-2.5", "-l", "3", "HI"]);
        assert_eq!(args.speed, -2.5);
        assert_eq!(args.loops, 3);
    }

    #[test]
    fn test_blink_spec_single_value_means_equal() {
        let args = parse(&["-f", "f.bdf", "-b", "4", "HI"]);
        assert_eq!(args.blink(), Blink { on: 4, off: 4 });

        let args = parse(&["-f", "f.bdf", "-b", "2,3", "HI"]);
        assert_eq!(args.blink(), Blink { on: 2, off: 3 });

        let args = parse(&["-f", "f.bdf", "HI"]);
        assert_eq!(args.blink(), Blink::OFF);
    }

    #[test]
    fn test_bad_blink_spec_is_rejected() {
        assert!(Args::try_parse_from(["ledscroll", "-f", "f.bdf", "-b", "fast", "HI"]).is_err());
    }

    #[test]
    fn test_color_flags() {
        let args = parse(&["-f", "f.bdf", "-C", "255,0,0", "-B", "0,0,64", "-O", "0,255,0", "HI"]);
        assert_eq!(args.color, Rgb::new(255, 0, 0));
        assert_eq!(args.bg_color, Rgb::new(0, 0, 64));
        assert_eq!(args.outline_color, Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_bad_color_spec_is_rejected() {
        assert!(Args::try_parse_from(["ledscroll", "-f", "f.bdf", "-C", "red", "HI"]).is_err());
    }

    #[test]
    fn test_target_width_scales_with_chain() {
        let args = parse(&["-f", "f.bdf", "HI"]);
        assert_eq!(args.target_width(), 10);
        assert_eq!(args.canvas_width(), 64);

        let args = parse(&["-f", "f.bdf", "--chain", "3", "HI"]);
        assert_eq!(args.target_width(), 30);
        assert_eq!(args.canvas_width(), 192);
    }

    #[test]
    fn test_default_x_origin_policy() {
        // Static text sits at the front, nudged in when outlined.
        let static_args = parse(&["-f", "f.bdf", "-s", "0", "HI"]);
        assert_eq!(static_args.scroll_origin_x(64, false), 0);
        assert_eq!(static_args.scroll_origin_x(64, true), 1);

        // Right-to-left scroll enters from the right edge.
        let rtl = parse(&["-f", "f.bdf", "-s", "5", "HI"]);
        assert_eq!(rtl.scroll_origin_x(64, false), 64);

        // Left-to-right enters from the left.
        let ltr = parse(&["-f", "f.bdf", "-s", "-5", "HI"]);
        assert_eq!(ltr.scroll_origin_x(64, false), 0);

        // An explicit -x always wins.
        let explicit = parse(&["-f", "f.bdf", "-x", "12", "HI"]);
        assert_eq!(explicit.scroll_origin_x(64, true), 12);
    }
}
