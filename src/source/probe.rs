//! Multimedia plugin discovery for the Jetson onboard camera.
//!
//! Two probes are provided:
//! - `GstInspectProbe` shells out to `gst-inspect-1.0` and scans its listing
//! - `GstRegistryProbe` (feature `gstreamer-probe`) asks the GStreamer registry

use anyhow::{anyhow, Context, Result};
use std::process::Command;

use super::OnboardPlugin;

const GST_INSPECT: &str = "gst-inspect-1.0";

/// Reports which onboard camera source element is installed, if any.
pub trait PluginProbe {
    fn probe(&self) -> Result<Option<OnboardPlugin>>;
}

/// Pick the first known plugin named in a `gst-inspect-1.0` listing.
pub fn find_onboard_plugin(listing: &str) -> Option<OnboardPlugin> {
    OnboardPlugin::SEARCH_ORDER
        .into_iter()
        .find(|plugin| listing.contains(plugin.element_name()))
}

/// Probe backed by the `gst-inspect-1.0` command line tool.
#[derive(Clone, Debug)]
pub struct GstInspectProbe {
    command: String,
}

impl GstInspectProbe {
    pub fn new() -> Self {
        Self::with_command(GST_INSPECT)
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for GstInspectProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginProbe for GstInspectProbe {
    fn probe(&self) -> Result<Option<OnboardPlugin>> {
        let output = Command::new(&self.command)
            .output()
            .with_context(|| format!("run {}", self.command))?;
        if !output.status.success() {
            return Err(anyhow!("{} exited with {}", self.command, output.status));
        }
        let listing = String::from_utf8_lossy(&output.stdout);
        let found = find_onboard_plugin(&listing);
        log::debug!("{} reported onboard plugin {:?}", self.command, found);
        Ok(found)
    }
}

/// Probe backed by the in-process GStreamer element registry.
#[cfg(feature = "gstreamer-probe")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GstRegistryProbe;

#[cfg(feature = "gstreamer-probe")]
impl PluginProbe for GstRegistryProbe {
    fn probe(&self) -> Result<Option<OnboardPlugin>> {
        gstreamer::init().context("initialize gstreamer")?;
        let found = OnboardPlugin::SEARCH_ORDER
            .into_iter()
            .find(|plugin| gstreamer::ElementFactory::find(plugin.element_name()).is_some());
        log::debug!("gstreamer registry reported onboard plugin {:?}", found);
        Ok(found)
    }
}
