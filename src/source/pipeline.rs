//! GStreamer pipeline descriptions for the Jetson capture paths.
//!
//! Every description ends in `appsink` so the capture backend can pull BGR
//! frames out of it.

use super::OnboardPlugin;
use crate::config::Resolution;

/// USB webcam through V4L2 at the requested size.
pub fn usb_pipeline(device_index: i32, resolution: Resolution) -> String {
    format!(
        "v4l2src device=/dev/video{} ! \
         video/x-raw, width=(int){}, height=(int){} ! \
         videoconvert ! appsink",
        device_index, resolution.width, resolution.height
    )
}

/// Onboard CSI camera, scaled by `nvvidconv` to the requested size.
pub fn onboard_pipeline(plugin: OnboardPlugin, resolution: Resolution) -> String {
    match plugin {
        // On L4T releases prior to 28.1 this sensor also needs flip-method=2.
        OnboardPlugin::NvCameraSrc => format!(
            "nvcamerasrc ! \
             video/x-raw(memory:NVMM), \
             width=(int)2592, height=(int)1458, \
             format=(string)I420, framerate=(fraction)30/1 ! \
             nvvidconv ! \
             video/x-raw, width=(int){}, height=(int){}, \
             format=(string)BGRx ! \
             videoconvert ! appsink",
            resolution.width, resolution.height
        ),
        OnboardPlugin::NvArgusCameraSrc => format!(
            "nvarguscamerasrc ! \
             video/x-raw(memory:NVMM), \
             width=(int)1920, height=(int)1080, \
             format=(string)NV12, framerate=(fraction)30/1 ! \
             nvvidconv flip-method=2 ! \
             video/x-raw, width=(int){}, height=(int){}, \
             format=(string)BGRx ! \
             videoconvert ! appsink",
            resolution.width, resolution.height
        ),
    }
}

/// H.264 RTSP stream decoded with the OMX hardware decoder.
pub fn rtsp_pipeline(uri: &str, latency_ms: i32, resolution: Resolution) -> String {
    format!(
        "rtspsrc location={} latency={} ! \
         rtph264depay ! h264parse ! omxh264dec ! \
         nvvidconv ! \
         video/x-raw, width=(int){}, height=(int){}, \
         format=(string)BGRx ! \
         videoconvert ! appsink",
        uri, latency_ms, resolution.width, resolution.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtsp_pipeline_embeds_uri_latency_and_size_in_order() {
        let desc = rtsp_pipeline("rtsp://192.168.1.64:554", 200, Resolution::new(1920, 1080));
        assert_eq!(
            desc,
            "rtspsrc location=rtsp://192.168.1.64:554 latency=200 ! \
             rtph264depay ! h264parse ! omxh264dec ! nvvidconv ! \
             video/x-raw, width=(int)1920, height=(int)1080, format=(string)BGRx ! \
             videoconvert ! appsink"
        );
    }

    #[test]
    fn usb_pipeline_uses_device_node() {
        let desc = usb_pipeline(2, Resolution::new(640, 480));
        assert!(desc.starts_with("v4l2src device=/dev/video2 ! "));
        assert!(desc.contains("width=(int)640, height=(int)480"));
        assert!(desc.ends_with("videoconvert ! appsink"));
    }

    #[test]
    fn onboard_templates_differ_by_plugin() {
        let res = Resolution::new(1280, 720);
        let legacy = onboard_pipeline(OnboardPlugin::NvCameraSrc, res);
        let argus = onboard_pipeline(OnboardPlugin::NvArgusCameraSrc, res);

        assert!(legacy.starts_with("nvcamerasrc ! "));
        assert!(legacy.contains("width=(int)2592, height=(int)1458, format=(string)I420"));
        assert!(!legacy.contains("flip-method"));

        assert!(argus.starts_with("nvarguscamerasrc ! "));
        assert!(argus.contains("format=(string)NV12"));
        assert!(argus.contains("nvvidconv flip-method=2 ! "));

        for desc in [&legacy, &argus] {
            assert!(
                desc.contains("video/x-raw, width=(int)1280, height=(int)720, format=(string)BGRx")
            );
        }
    }
}
