//! Video backends.
//!
//! Real capture and display go through OpenCV (feature `opencv`): `videoio`
//! for capture, with GStreamer pipelines opened via `CAP_GSTREAMER`, and
//! `highgui` for the preview window.

#[cfg(feature = "opencv")]
mod cv;

#[cfg(feature = "opencv")]
pub use cv::{HighGuiWindow, OpenCvCapture};

/// Version string of the video backend compiled in.
pub fn backend_version() -> String {
    #[cfg(feature = "opencv")]
    {
        match opencv::core::get_version_string() {
            Ok(version) => version,
            Err(err) => {
                log::warn!("failed to query OpenCV version: {}", err);
                "unknown".to_string()
            }
        }
    }
    #[cfg(not(feature = "opencv"))]
    {
        "unavailable".to_string()
    }
}
