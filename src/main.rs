//! ledscroll binary: parse flags, set everything up, run the loop.
//!
//! Exit status is 0 on clean shutdown (signal or loop exhaustion) and 1 on
//! any fatal setup error: bad flag or color spec, missing font, missing
//! text, unreadable input file, or a failed canvas. Help and version output
//! exit 0.

use anyhow::Context;
use clap::Parser;
use tracing::info;

use ledscroll::config::Args;
use ledscroll::error::SetupError;
use ledscroll::font::Font;
use ledscroll::layout::TextStyle;
use ledscroll::render::{Display, TerminalDisplay};
use ledscroll::run::{self, RenderLoop};
use ledscroll::schedule::FrameClock;
use ledscroll::scroll::Scroller;
use ledscroll::source::{FileWatcher, TextSource};
use ledscroll::text::{self, DisplayLines};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the matrix display.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ledscroll=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    let font = Font::load(&args.font).map_err(|e| SetupError::FontLoad {
        path: args.font.clone(),
        reason: e.to_string(),
    })?;
    let outline_font = args.outline_color.map(|_| font.outline());
    // One frame per scrolled pixel, calibrated against a wide glyph.
    let reference_width = font.char_width('W');

    let target_width = args.target_width();
    let (source, lines) = load_text(&args, target_width)?;

    info!(
        rows = args.rows,
        cols = args.cols,
        chain = args.chain,
        font = %args.font.display(),
        font_height = font.height(),
        baseline = font.baseline(),
        "matrix configured"
    );
    info!(
        color = ?args.color,
        bg = ?args.bg_color,
        outline = ?args.outline_color,
        letter_spacing = args.letter_spacing,
        speed = args.speed,
        loops = args.loops,
        "text properties"
    );

    let display = TerminalDisplay::new(args.canvas_width(), args.rows)
        .map_err(SetupError::Canvas)
        .context("display setup failed")?;

    run::install_signal_handlers();

    let origin_x = args.scroll_origin_x(display.width(), outline_font.is_some());
    let mut render = RenderLoop {
        font,
        outline_font,
        source,
        lines,
        target_width,
        style: TextStyle {
            color: args.color,
            outline_color: args.outline_color,
            letter_spacing: args.letter_spacing,
        },
        bg_color: args.bg_color,
        blink: args.blink(),
        clock: FrameClock::from_speed(args.speed, reference_width),
        scroller: Scroller::new(args.speed, origin_x, args.loops),
        scrolling: args.speed != 0.0,
        y_origin: args.y_origin,
        interrupt: run::take_interrupt,
        display,
    };

    render.run().context("render loop failed")?;
    Ok(())
}

/// Parse the command line, exiting directly on failure.
///
/// Clap's default exit status for usage errors is 2; every configuration
/// error here is a fatal setup error and exits 1 like the rest of them.
/// Help and version requests are not errors and exit 0.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(parse_exit_code(&err));
    })
}

fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Build the text source and its initial display lines.
fn load_text(args: &Args, target_width: usize) -> anyhow::Result<(TextSource, DisplayLines)> {
    if let Some(path) = &args.input_file {
        let mut watcher = FileWatcher::new(path);
        let raw = watcher
            .poll()
            .map_err(|e| SetupError::UnreadableInput {
                path: path.clone(),
                source: e,
            })?
            .unwrap_or_default();
        let lines = text::normalize(&raw, target_width);
        return Ok((TextSource::File(watcher), lines));
    }

    let joined = args.text.join(" ");
    if joined.trim().is_empty() {
        return Err(SetupError::MissingText.into());
    }
    let lines = text::normalize(&joined, target_width);
    Ok((TextSource::Static(joined), lines))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_exit_one() {
        let bad_color =
            Args::try_parse_from(["ledscroll", "-f", "f.bdf", "-C", "red", "HI"]).unwrap_err();
        assert_eq!(parse_exit_code(&bad_color), 1);

        let bad_blink =
            Args::try_parse_from(["ledscroll", "-f", "f.bdf", "-b", "fast", "HI"]).unwrap_err();
        assert_eq!(parse_exit_code(&bad_blink), 1);

        let missing_font = Args::try_parse_from(["ledscroll", "HI"]).unwrap_err();
        assert_eq!(parse_exit_code(&missing_font), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let help = Args::try_parse_from(["ledscroll", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);

        let version = Args::try_parse_from(["ledscroll", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&version), 0);
    }
}
