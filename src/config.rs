use clap::Parser;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_WINDOW_NAME: &str = "CameraTester";
pub const DEFAULT_WINDOW_TITLE: &str = "Camera tester for Raspberry Pi or Jetson TX2/TX1";
pub const DEFAULT_RTSP_LATENCY_MS: i32 = 200;
pub const DEFAULT_USB_DEVICE: i32 = 1;
pub const DEFAULT_WIDTH: i32 = 1920;
pub const DEFAULT_HEIGHT: i32 = 1080;

/// Command line for the camera tester.
///
/// Flags mirror the classic Raspberry Pi / Jetson camera test script. Every
/// valued flag can also come from the environment; the command line wins.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Capture and display live camera video on Raspberry Pi or Jetson TX2/TX1"
)]
pub struct Args {
    /// Target a Raspberry Pi (generic capture by device index or URI).
    #[arg(long, conflicts_with = "jetson")]
    pub raspi: bool,

    /// Target a Jetson board (GStreamer pipelines).
    #[arg(long)]
    pub jetson: bool,

    /// Use an IP camera (remember to also set --uri).
    #[arg(long, conflicts_with = "usb", requires = "uri")]
    pub rtsp: bool,

    /// RTSP URI, e.g. rtsp://192.168.1.64:554
    #[arg(long, env = "CAMERA_TESTER_URI")]
    pub uri: Option<String>,

    /// Latency in ms for RTSP.
    #[arg(
        long,
        env = "CAMERA_TESTER_LATENCY",
        default_value_t = DEFAULT_RTSP_LATENCY_MS,
        allow_negative_numbers = true
    )]
    pub latency: i32,

    /// Use a USB webcam (remember to also set --vid).
    #[arg(long)]
    pub usb: bool,

    /// Device # of USB webcam (/dev/video?).
    #[arg(
        long,
        env = "CAMERA_TESTER_VID",
        default_value_t = DEFAULT_USB_DEVICE,
        allow_negative_numbers = true
    )]
    pub vid: i32,

    /// Image width.
    #[arg(
        long,
        env = "CAMERA_TESTER_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        allow_negative_numbers = true
    )]
    pub width: i32,

    /// Image height.
    #[arg(
        long,
        env = "CAMERA_TESTER_HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        allow_negative_numbers = true
    )]
    pub height: i32,
}

impl Args {
    /// Resolve the boolean flag pairs into tagged variants.
    pub fn into_config(self) -> TesterConfig {
        let platform = if self.jetson {
            Platform::Embedded
        } else {
            Platform::Generic
        };
        let source = match (self.rtsp, self.usb, self.uri) {
            (true, _, Some(uri)) => SourceMode::NetworkStream {
                uri,
                latency_ms: self.latency,
            },
            (_, true, _) => SourceMode::Usb {
                device_index: self.vid,
            },
            // `--rtsp` without a URI is rejected by the parser.
            _ => SourceMode::Onboard,
        };
        let resolution = Resolution::new(self.width, self.height);
        TesterConfig {
            platform,
            source,
            resolution,
            display: DisplaySettings::new(resolution),
        }
    }
}

/// Board the tester runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Jetson: sources are opened through GStreamer pipeline descriptions.
    Embedded,
    /// Raspberry Pi and desktops: sources are opened by index or URI.
    Generic,
}

/// Where frames come from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SourceMode {
    Usb { device_index: i32 },
    Onboard,
    NetworkStream { uri: String, latency_ms: i32 },
}

/// Requested frame size. Not validated; the capture backend may ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

impl Resolution {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Preview window identity and geometry, injected into the display at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySettings {
    pub window_name: String,
    pub window_title: String,
    pub resolution: Resolution,
}

impl DisplaySettings {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            resolution,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::new(Resolution::default())
    }
}

/// Fully resolved configuration. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TesterConfig {
    pub platform: Platform,
    pub source: SourceMode,
    pub resolution: Resolution,
    pub display: DisplaySettings,
}

impl TesterConfig {
    pub fn from_args(args: Args) -> Self {
        args.into_config()
    }
}
