//! OpenCV capture and preview window.

use anyhow::{Context, Result};
use opencv::core::{Mat, Point, Scalar};
use opencv::prelude::*;
use opencv::{highgui, imgproc, videoio};
use std::time::Duration;

use crate::capture::CaptureDevice;
use crate::config::{DisplaySettings, Resolution};
use crate::display::{Display, TextPass};

/// `videoio::VideoCapture` behind the `CaptureDevice` seam.
pub struct OpenCvCapture {
    inner: videoio::VideoCapture,
}

impl CaptureDevice for OpenCvCapture {
    type Frame = Mat;

    fn open_pipeline(description: &str) -> Result<Self> {
        let inner = videoio::VideoCapture::from_file(description, videoio::CAP_GSTREAMER)
            .context("open gstreamer pipeline")?;
        Ok(Self { inner })
    }

    fn open_index(index: i32) -> Result<Self> {
        let inner = videoio::VideoCapture::new(index, videoio::CAP_ANY)
            .with_context(|| format!("open video device {}", index))?;
        Ok(Self { inner })
    }

    fn open_uri(uri: &str) -> Result<Self> {
        let inner = videoio::VideoCapture::from_file(uri, videoio::CAP_ANY)
            .with_context(|| format!("open stream {}", uri))?;
        Ok(Self { inner })
    }

    fn set_frame_size(&mut self, resolution: Resolution) -> Result<()> {
        let width = self
            .inner
            .set(videoio::CAP_PROP_FRAME_WIDTH, f64::from(resolution.width))
            .context("set capture width")?;
        let height = self
            .inner
            .set(videoio::CAP_PROP_FRAME_HEIGHT, f64::from(resolution.height))
            .context("set capture height")?;
        if !(width && height) {
            log::warn!("capture ignored requested frame size {}", resolution);
        }
        Ok(())
    }

    fn is_opened(&self) -> Result<bool> {
        Ok(self.inner.is_opened()?)
    }

    fn read(&mut self, frame: &mut Mat) -> Result<bool> {
        Ok(self.inner.read(frame)?)
    }

    fn release(&mut self) -> Result<()> {
        Ok(self.inner.release()?)
    }
}

/// Resizable `highgui` window. All windows are destroyed on drop.
pub struct HighGuiWindow {
    name: String,
}

impl HighGuiWindow {
    pub fn open(settings: &DisplaySettings) -> Result<Self> {
        let name = settings.window_name.clone();
        highgui::named_window(&name, highgui::WINDOW_NORMAL).context("create window")?;
        highgui::resize_window(
            &name,
            settings.resolution.width,
            settings.resolution.height,
        )
        .context("resize window")?;
        highgui::move_window(&name, 0, 0).context("move window")?;
        highgui::set_window_title(&name, &settings.window_title).context("set window title")?;
        Ok(Self { name })
    }
}

impl Display for HighGuiWindow {
    type Frame = Mat;

    fn is_window_open(&self) -> Result<bool> {
        let prop = highgui::get_window_property(&self.name, highgui::WND_PROP_FULLSCREEN)?;
        Ok(prop >= 0.0)
    }

    fn draw_text(&mut self, frame: &mut Mat, text: &str, pass: &TextPass) -> Result<()> {
        let [b, g, r] = pass.color;
        imgproc::put_text(
            frame,
            text,
            Point::new(pass.origin.0, pass.origin.1),
            imgproc::FONT_HERSHEY_PLAIN,
            pass.scale,
            Scalar::new(f64::from(b), f64::from(g), f64::from(r), 0.0),
            pass.thickness,
            imgproc::LINE_AA,
            false,
        )?;
        Ok(())
    }

    fn show(&mut self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.name, frame)?;
        Ok(())
    }

    fn poll_key(&mut self, wait: Duration) -> Result<i32> {
        let delay = i32::try_from(wait.as_millis()).unwrap_or(i32::MAX);
        Ok(highgui::wait_key(delay)?)
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()> {
        let mode = if fullscreen {
            highgui::WINDOW_FULLSCREEN
        } else {
            highgui::WINDOW_NORMAL
        };
        highgui::set_window_property(&self.name, highgui::WND_PROP_FULLSCREEN, f64::from(mode))?;
        Ok(())
    }
}

impl Drop for HighGuiWindow {
    fn drop(&mut self) {
        if let Err(err) = highgui::destroy_all_windows() {
            log::warn!("failed to destroy windows: {}", err);
        }
    }
}
