//! # ledscroll
//!
//! Scrolling/static text display for LED pixel matrices, simulated on the
//! terminal. Text comes from the command line or from a file that may change
//! at runtime; it is centered over one or two lines, rendered frame by frame
//! at a pace derived from the scroll speed, and optionally blinked, outlined,
//! and scrolled horizontally.
//!
//! ## Architecture
//!
//! One blocking loop drives everything — there is no parallelism between
//! frames:
//!
//! ```text
//! poll source → normalize lines → blink gate → layout/draw → pace → swap
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Command-line surface and derived values
//! - [`source`] - Text sources and stat-fingerprint change detection
//! - [`text`] - Newline splitting and center padding
//! - [`layout`] - Baseline geometry and outline/fill draw passes
//! - [`blink`] - Per-frame visibility gating
//! - [`schedule`] - Drift-free absolute-target frame pacing
//! - [`scroll`] - Horizontal offset and loop counting
//! - [`font`] - BDF fonts, metrics, outline derivation
//! - [`render`] - Canvas/display abstraction and the terminal backend
//! - [`run`] - The render loop itself

pub mod blink;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod run;
pub mod schedule;
pub mod scroll;
pub mod source;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use types::Rgb;

pub use config::{Args, Blink};
pub use error::SetupError;
pub use font::{BdfError, Font, Glyph};
pub use layout::{TextStyle, draw_lines, line_baselines};
pub use render::{Canvas, Display, PixelBuffer, TerminalDisplay, draw_text};
pub use run::{RenderLoop, install_signal_handlers, take_interrupt};
pub use schedule::FrameClock;
pub use scroll::Scroller;
pub use source::{FileWatcher, Fingerprint, TextSource};
pub use text::{DisplayLines, center_text, normalize};
