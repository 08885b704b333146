//! Text normalization: newline splitting and center padding.
//!
//! Raw source content (a command-line string or the bytes of a watched file)
//! becomes at most two display lines. The split happens at the first newline;
//! every other newline turns into a space. Each line is independently padded
//! with spaces so the text sits centered in the configured character width.

use unicode_width::UnicodeWidthStr;

// =============================================================================
// DisplayLines
// =============================================================================

/// The one or two normalized lines currently on display.
///
/// A `second` line that is empty or all whitespace means single-line mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    pub first: String,
    pub second: String,
}

impl DisplayLines {
    /// Whether a real second line is present (at least one non-whitespace
    /// character).
    pub fn has_second_line(&self) -> bool {
        !self.second.trim().is_empty()
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Center `text` within `target_width` columns by padding with spaces.
///
/// Text already at or beyond the target width is returned unmodified — lines
/// are never truncated. An odd space of padding goes to the right side.
/// Width is measured in display columns, so wide (CJK) characters count as
/// two.
pub fn center_text(text: &str, target_width: usize) -> String {
    let text_width = text.width();
    if text_width >= target_width {
        return text.to_string();
    }

    let padding_total = target_width - text_width;
    let padding_left = padding_total / 2;

    let mut padded = String::with_capacity(text.len() + padding_total);
    padded.extend(std::iter::repeat_n(' ', padding_left));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', padding_total - padding_left));
    padded
}

/// Split raw content into display lines and center each one.
///
/// The first newline is the line boundary: everything up to and including it
/// belongs to the first line, the rest to the second. All newlines (the
/// boundary included) are replaced with single spaces before padding, so a
/// file with more than two lines still renders as exactly two. Without any
/// newline the whole content becomes the first line and the second is
/// cleared.
pub fn normalize(raw: &str, target_width: usize) -> DisplayLines {
    match raw.find('\n') {
        Some(pos) => {
            let first = raw[..=pos].replace('\n', " ");
            let second = raw[pos + 1..].replace('\n', " ");
            DisplayLines {
                first: center_text(&first, target_width),
                second: center_text(&second, target_width),
            }
        }
        None => DisplayLines {
            first: center_text(raw, target_width),
            second: String::new(),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
