//! Camera tester
//!
//! Opens a camera and shows a live preview until the user quits.
//!
//! # Architecture
//!
//! - `config`: command line flags resolved into a typed `TesterConfig`
//! - `source`: picks how to open the camera for a (platform, source) pair,
//!   building GStreamer pipeline descriptions on Jetson boards
//! - `capture`: opened capture handle, read-only and released exactly once
//! - `display`: read-show-poll loop with the help overlay and fullscreen toggles
//! - `backend`: OpenCV implementations of the capture and display seams
//!
//! Sources:
//!
//! | Source  | Jetson                              | Raspberry Pi / generic |
//! |---------|-------------------------------------|------------------------|
//! | USB     | `v4l2src` pipeline                  | device index           |
//! | Onboard | `nvcamerasrc` / `nvarguscamerasrc`  | device 0               |
//! | RTSP    | `rtspsrc` + `omxh264dec` pipeline   | URI                    |

pub mod app;
pub mod backend;
pub mod capture;
pub mod config;
pub mod display;
pub mod error;
pub mod source;

pub use app::run;
pub use backend::backend_version;
pub use capture::{open_capture, Capture, CaptureDevice};
pub use config::{Args, DisplaySettings, Platform, Resolution, SourceMode, TesterConfig};
pub use display::{run_display_loop, Display, KeyCommand, StopReason, UiState};
pub use error::OpenError;
pub use source::{select_source, CaptureRequest, GstInspectProbe, OnboardPlugin, PluginProbe};
