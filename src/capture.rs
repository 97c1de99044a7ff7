//! Capture handle.
//!
//! `CaptureDevice` is the seam to the video backend (OpenCV in the binary,
//! fakes in tests). `open_capture` turns a `CaptureRequest` into an opened
//! `Capture`, which only exposes reading and release: once confirmed open a
//! handle is never reconfigured, and it is released exactly once.

use anyhow::Result;

use crate::config::Resolution;
use crate::error::OpenError;
use crate::source::CaptureRequest;

/// A video source as exposed by the capture backend.
pub trait CaptureDevice: Sized {
    type Frame;

    /// Open a GStreamer pipeline description.
    fn open_pipeline(description: &str) -> Result<Self>;
    /// Open a local device by index.
    fn open_index(index: i32) -> Result<Self>;
    /// Open a stream URI directly.
    fn open_uri(uri: &str) -> Result<Self>;

    /// Request a frame size. Best effort; the device may ignore it.
    fn set_frame_size(&mut self, resolution: Resolution) -> Result<()>;
    fn is_opened(&self) -> Result<bool>;

    /// Read the next frame into `frame`. Blocks per backend semantics.
    fn read(&mut self, frame: &mut Self::Frame) -> Result<bool>;
    fn release(&mut self) -> Result<()>;
}

/// Open the source described by `request`.
///
/// The frame size is applied before the open check for index and URI
/// requests; a backend that rejects it only earns a warning.
pub fn open_capture<C: CaptureDevice>(request: &CaptureRequest) -> Result<Capture<C>, OpenError> {
    let (device, resolution) = match request {
        CaptureRequest::Pipeline { description } => (C::open_pipeline(description)?, None),
        CaptureRequest::Device { index, resolution } => (C::open_index(*index)?, Some(*resolution)),
        CaptureRequest::Uri { uri, resolution } => (C::open_uri(uri)?, Some(*resolution)),
    };

    let mut capture = Capture::new(device);
    if let Some(resolution) = resolution {
        if let Err(err) = capture.device.set_frame_size(resolution) {
            log::warn!("failed to request frame size {}: {:#}", resolution, err);
        }
    }
    if !capture.device.is_opened()? {
        capture.release()?;
        return Err(OpenError::DeviceUnavailable(describe(request)));
    }
    log::info!("camera opened: {}", describe(request));
    Ok(capture)
}

fn describe(request: &CaptureRequest) -> String {
    match request {
        CaptureRequest::Pipeline { description } => format!("pipeline `{}`", description),
        CaptureRequest::Device { index, resolution } => {
            format!("device #{} at {}", index, resolution)
        }
        CaptureRequest::Uri { uri, resolution } => format!("{} at {}", uri, resolution),
    }
}

/// An opened capture handle.
pub struct Capture<C: CaptureDevice> {
    device: C,
    released: bool,
    frames_read: u64,
}

impl<C: CaptureDevice> Capture<C> {
    fn new(device: C) -> Self {
        Self {
            device,
            released: false,
            frames_read: 0,
        }
    }

    /// Read the next frame. The backend's success flag is passed through
    /// unexamined; a failed read still yields whatever `frame` holds.
    pub fn read(&mut self, frame: &mut C::Frame) -> Result<bool> {
        let ok = self.device.read(frame)?;
        self.frames_read += 1;
        Ok(ok)
    }

    /// Release the underlying device. Later calls are no-ops.
    pub fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        log::debug!("releasing capture after {} frames", self.frames_read);
        self.device.release()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Read-only access to the backend device.
    pub fn device(&self) -> &C {
        &self.device
    }
}

impl<C: CaptureDevice> Drop for Capture<C> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            log::warn!("failed to release capture: {}", err);
        }
    }
}
