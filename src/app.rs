//! Tester wiring: select the source, open it, open the window, run the loop.

use anyhow::{Context, Result};

use crate::capture::{open_capture, CaptureDevice};
use crate::config::{DisplaySettings, TesterConfig};
use crate::display::{run_display_loop, Display, StopReason, UiState};
use crate::source::{select_source, PluginProbe};

/// Run the tester until the user quits or closes the window.
///
/// Source selection and open failures come back as `OpenError` inside the
/// `anyhow::Error`, so callers can downcast if they care which one it was.
/// The window is only created once the camera is confirmed open.
pub fn run<C, D, F>(
    config: &TesterConfig,
    probe: &dyn PluginProbe,
    open_display: F,
) -> Result<StopReason>
where
    C: CaptureDevice,
    C::Frame: Default,
    D: Display<Frame = C::Frame>,
    F: FnOnce(&DisplaySettings) -> Result<D>,
{
    let request = select_source(config.platform, &config.source, config.resolution, probe)?;
    let mut capture = open_capture::<C>(&request)?;

    let mut display = open_display(&config.display).context("open preview window")?;
    let reason = run_display_loop(&mut capture, &mut display, UiState::default())?;
    log::info!(
        "preview stopped ({:?}) after {} frames",
        reason,
        capture.frames_read()
    );

    capture.release().context("release capture")?;
    drop(display);
    Ok(reason)
}
