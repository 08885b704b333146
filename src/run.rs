//! The render loop: poll, gate, draw, pace, swap.
//!
//! Single-threaded and cooperative. Each iteration polls the text source,
//! clears the offscreen buffer, draws if the blink gate allows it, advances
//! the scroll position, waits for the frame deadline, and swaps buffers.
//! The only cross-thread state in the whole program is the interrupt flag a
//! signal handler sets; the handler does nothing else, so it stays
//! async-signal-safe.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::blink;
use crate::config::Blink;
use crate::font::Font;
use crate::layout::{self, TextStyle};
use crate::render::{Canvas, Display};
use crate::schedule::FrameClock;
use crate::scroll::Scroller;
use crate::source::TextSource;
use crate::text::{self, DisplayLines};
use crate::types::Rgb;

// =============================================================================
// Interrupt flag
// =============================================================================

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install SIGINT/SIGTERM handlers that set the interrupt flag and nothing
/// else.
#[cfg(unix)]
pub fn install_signal_handlers() {
    extern "C" fn set_interrupted(_signo: libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }
    unsafe {
        libc::signal(libc::SIGINT, set_interrupted as libc::sighandler_t);
        libc::signal(libc::SIGTERM, set_interrupted as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
pub fn install_signal_handlers() {}

/// Consume the interrupt flag. True once per delivered signal.
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

// =============================================================================
// RenderLoop
// =============================================================================

/// Everything the frame loop owns.
///
/// `interrupt` is polled once per iteration at the loop boundary; production
/// wiring passes [`take_interrupt`].
pub struct RenderLoop<D: Display> {
    pub display: D,
    pub font: Font,
    pub outline_font: Option<Font>,
    pub source: TextSource,
    pub lines: DisplayLines,
    pub target_width: usize,
    pub style: TextStyle,
    pub bg_color: Rgb,
    pub blink: Blink,
    pub clock: FrameClock,
    pub scroller: Scroller,
    pub scrolling: bool,
    pub y_origin: i32,
    pub interrupt: fn() -> bool,
}

impl<D: Display> RenderLoop<D> {
    /// Run until a termination signal arrives or the loop budget runs out,
    /// then blank the display.
    pub fn run(&mut self) -> io::Result<()> {
        let mut offscreen = self.display.create_offscreen();
        let mut frame_counter: u64 = 0;
        // Last measured text width; carried across dark blink frames so the
        // scroller keeps judging pass completion against real text.
        let mut text_width: i32 = 0;

        while !(self.interrupt)() && !self.scroller.finished() {
            if let Some(raw) = self.source.poll_changed() {
                self.lines = text::normalize(&raw, self.target_width);
                debug!(first = %self.lines.first, second = %self.lines.second, "text changed");
            }

            offscreen.fill(self.bg_color);
            if blink::is_visible(frame_counter, self.blink.on, self.blink.off) {
                text_width = layout::draw_lines(
                    &mut offscreen,
                    &self.font,
                    self.outline_font.as_ref(),
                    &self.lines,
                    self.scroller.x(),
                    self.y_origin,
                    &self.style,
                );
            }
            frame_counter += 1;

            if self.scrolling {
                self.scroller.step(text_width, self.display.width());
            }

            self.clock.tick();
            offscreen = self.display.swap(offscreen)?;
        }

        info!(frames = frame_counter, "shutting down");
        self.display.clear()
    }
}

// =============================================================================
// Tests
// =============================================================================
