//! Source selection.
//!
//! Turns `(platform, source mode, resolution)` into a `CaptureRequest`
//! describing how the capture backend should open the camera. Selection is
//! pure apart from the plugin probe, which is only consulted for the Jetson
//! onboard camera.

pub mod pipeline;
pub mod probe;

use crate::config::{Platform, Resolution, SourceMode};
use crate::error::OpenError;

pub use probe::{find_onboard_plugin, GstInspectProbe, PluginProbe};
#[cfg(feature = "gstreamer-probe")]
pub use probe::GstRegistryProbe;

/// Device index used for the onboard camera on generic platforms.
pub const GENERIC_ONBOARD_INDEX: i32 = 0;

/// Vendor source elements for the Jetson CSI camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardPlugin {
    /// Legacy L4T camera source (before 28.1).
    NvCameraSrc,
    /// libargus camera source.
    NvArgusCameraSrc,
}

impl OnboardPlugin {
    pub const SEARCH_ORDER: [OnboardPlugin; 2] =
        [OnboardPlugin::NvCameraSrc, OnboardPlugin::NvArgusCameraSrc];

    pub fn element_name(self) -> &'static str {
        match self {
            OnboardPlugin::NvCameraSrc => "nvcamerasrc",
            OnboardPlugin::NvArgusCameraSrc => "nvarguscamerasrc",
        }
    }
}

/// How the capture backend should open the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureRequest {
    /// GStreamer pipeline description ending in `appsink`.
    Pipeline { description: String },
    /// Local device by index; the resolution is applied as capture properties.
    Device { index: i32, resolution: Resolution },
    /// Stream URI opened directly; the resolution is applied as capture properties.
    Uri { uri: String, resolution: Resolution },
}

/// Build the capture request for a platform and source mode.
pub fn select_source(
    platform: Platform,
    source: &SourceMode,
    resolution: Resolution,
    probe: &dyn PluginProbe,
) -> Result<CaptureRequest, OpenError> {
    let request = match (platform, source) {
        (Platform::Embedded, SourceMode::Usb { device_index }) => CaptureRequest::Pipeline {
            description: pipeline::usb_pipeline(*device_index, resolution),
        },
        (Platform::Embedded, SourceMode::Onboard) => {
            let plugin = probe
                .probe()
                .map_err(OpenError::ProbeFailed)?
                .ok_or(OpenError::PluginNotFound)?;
            log::info!("using onboard camera source {}", plugin.element_name());
            CaptureRequest::Pipeline {
                description: pipeline::onboard_pipeline(plugin, resolution),
            }
        }
        (Platform::Embedded, SourceMode::NetworkStream { uri, latency_ms }) => {
            CaptureRequest::Pipeline {
                description: pipeline::rtsp_pipeline(uri, *latency_ms, resolution),
            }
        }
        (Platform::Generic, SourceMode::Usb { device_index }) => CaptureRequest::Device {
            index: *device_index,
            resolution,
        },
        (Platform::Generic, SourceMode::Onboard) => CaptureRequest::Device {
            index: GENERIC_ONBOARD_INDEX,
            resolution,
        },
        (Platform::Generic, SourceMode::NetworkStream { uri, .. }) => CaptureRequest::Uri {
            uri: uri.clone(),
            resolution,
        },
    };
    log::debug!("capture request: {:?}", request);
    Ok(request)
}
