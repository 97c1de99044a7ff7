//! camera_tester - live camera preview for Raspberry Pi and Jetson boards
//!
//! Opens a USB webcam, the onboard camera, or an RTSP stream and shows it in
//! a window. Keys: Esc quits, H toggles the help line, F toggles fullscreen.

use anyhow::Result;
use clap::Parser;

use camera_tester::backend::{HighGuiWindow, OpenCvCapture};
use camera_tester::source::PluginProbe;
use camera_tester::{backend_version, Args, TesterConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = TesterConfig::from_args(args);

    log::info!("called with {}", serde_json::to_string(&config)?);
    log::info!("OpenCV version: {}", backend_version());

    let probe = plugin_probe();
    let reason = camera_tester::run::<OpenCvCapture, _, _>(&config, probe.as_ref(), |settings| {
        HighGuiWindow::open(settings)
    })?;
    log::info!("exiting ({:?})", reason);
    Ok(())
}

#[cfg(feature = "gstreamer-probe")]
fn plugin_probe() -> Box<dyn PluginProbe> {
    Box::new(camera_tester::source::GstRegistryProbe)
}

#[cfg(not(feature = "gstreamer-probe"))]
fn plugin_probe() -> Box<dyn PluginProbe> {
    Box::new(camera_tester::GstInspectProbe::new())
}
