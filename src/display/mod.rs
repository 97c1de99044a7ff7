//! Preview display loop.
//!
//! Each iteration:
//! 1. Stops if the window was closed
//! 2. Reads the next frame (blocking)
//! 3. Draws the help overlay when enabled
//! 4. Shows the frame
//! 5. Polls for a key for `KEY_POLL_WAIT` and applies it

pub mod keys;
pub mod overlay;

use anyhow::{Context, Result};
use std::time::Duration;

use crate::capture::{Capture, CaptureDevice};

pub use keys::{KeyCommand, UiState, KEY_ESC};
pub use overlay::{TextPass, HELP_FILL, HELP_OUTLINE, HELP_PASSES, HELP_TEXT};

/// How long each iteration waits for a key press.
pub const KEY_POLL_WAIT: Duration = Duration::from_millis(10);

/// Preview window as exposed by the window toolkit.
pub trait Display {
    type Frame;

    /// False once the user has closed the window.
    fn is_window_open(&self) -> Result<bool>;
    fn draw_text(&mut self, frame: &mut Self::Frame, text: &str, pass: &TextPass) -> Result<()>;
    fn show(&mut self, frame: &Self::Frame) -> Result<()>;
    /// Wait up to `wait` for a key. Returns the raw key code, `-1` for none.
    fn poll_key(&mut self, wait: Duration) -> Result<i32>;
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()>;
}

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    QuitKey,
    WindowClosed,
}

/// Run the preview until the quit key or the window is closed.
///
/// The capture is read, never reconfigured; releasing it is up to the caller.
pub fn run_display_loop<C, D>(
    capture: &mut Capture<C>,
    display: &mut D,
    mut ui: UiState,
) -> Result<StopReason>
where
    C: CaptureDevice,
    C::Frame: Default,
    D: Display<Frame = C::Frame>,
{
    let mut frame = C::Frame::default();
    loop {
        if !display.is_window_open().context("query preview window")? {
            log::info!("preview window closed");
            return Ok(StopReason::WindowClosed);
        }

        if !capture.read(&mut frame).context("read frame")? {
            log::trace!("capture reported a failed read");
        }

        if ui.show_help {
            for pass in &HELP_PASSES {
                display
                    .draw_text(&mut frame, HELP_TEXT, pass)
                    .context("draw help overlay")?;
            }
        }
        display.show(&frame).context("show frame")?;

        let code = display.poll_key(KEY_POLL_WAIT).context("poll key")?;
        match KeyCommand::from_key_code(code) {
            Some(KeyCommand::Quit) => {
                log::info!("quit requested");
                return Ok(StopReason::QuitKey);
            }
            Some(KeyCommand::ToggleHelp) => {
                ui.toggle_help();
                log::debug!("help overlay {}", on_off(ui.show_help));
            }
            Some(KeyCommand::ToggleFullscreen) => {
                let fullscreen = ui.toggle_fullscreen();
                display
                    .set_fullscreen(fullscreen)
                    .context("toggle fullscreen")?;
                log::debug!("fullscreen {}", on_off(fullscreen));
            }
            None => {}
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
