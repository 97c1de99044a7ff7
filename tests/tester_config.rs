use std::sync::Mutex;

use clap::Parser;

use camera_tester::config::{DEFAULT_WINDOW_NAME, DEFAULT_WINDOW_TITLE};
use camera_tester::{Args, Platform, Resolution, SourceMode, TesterConfig};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "CAMERA_TESTER_URI",
        "CAMERA_TESTER_LATENCY",
        "CAMERA_TESTER_VID",
        "CAMERA_TESTER_WIDTH",
        "CAMERA_TESTER_HEIGHT",
    ] {
        std::env::remove_var(key);
    }
}

fn load(argv: &[&str]) -> TesterConfig {
    let mut full = vec!["camera_tester"];
    full.extend_from_slice(argv);
    TesterConfig::from_args(Args::try_parse_from(full).expect("parse args"))
}

#[test]
fn defaults_select_onboard_camera_on_raspi() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = load(&[]);

    assert_eq!(cfg.platform, Platform::Generic);
    assert_eq!(cfg.source, SourceMode::Onboard);
    assert_eq!(cfg.resolution, Resolution::new(1920, 1080));
    assert_eq!(cfg.display.window_name, DEFAULT_WINDOW_NAME);
    assert_eq!(cfg.display.window_title, DEFAULT_WINDOW_TITLE);
    assert_eq!(cfg.display.resolution, cfg.resolution);
}

#[test]
fn rtsp_and_usb_flags_select_their_sources() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let rtsp = load(&["--jetson", "--rtsp", "--uri", "rtsp://192.168.1.64:554"]);
    assert_eq!(rtsp.platform, Platform::Embedded);
    assert_eq!(
        rtsp.source,
        SourceMode::NetworkStream {
            uri: "rtsp://192.168.1.64:554".to_string(),
            latency_ms: 200,
        }
    );

    let usb = load(&["--raspi", "--usb"]);
    assert_eq!(usb.platform, Platform::Generic);
    assert_eq!(usb.source, SourceMode::Usb { device_index: 1 });

    let usb2 = load(&["--usb", "--vid", "2", "--width", "640", "--height", "480"]);
    assert_eq!(usb2.source, SourceMode::Usb { device_index: 2 });
    assert_eq!(usb2.resolution, Resolution::new(640, 480));
}

#[test]
fn uri_without_rtsp_flag_keeps_onboard_camera() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = load(&["--uri", "rtsp://camera-1"]);
    assert_eq!(cfg.source, SourceMode::Onboard);
}

#[test]
fn rtsp_and_usb_conflict() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let err = Args::try_parse_from(["camera_tester", "--rtsp", "--uri", "rtsp://x", "--usb"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn env_supplies_values_and_cli_wins() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("CAMERA_TESTER_URI", "rtsp://camera-1");
    std::env::set_var("CAMERA_TESTER_LATENCY", "50");
    std::env::set_var("CAMERA_TESTER_WIDTH", "800");
    std::env::set_var("CAMERA_TESTER_HEIGHT", "600");

    let cfg = load(&["--jetson", "--rtsp", "--height", "720"]);

    assert_eq!(
        cfg.source,
        SourceMode::NetworkStream {
            uri: "rtsp://camera-1".to_string(),
            latency_ms: 50,
        }
    );
    assert_eq!(cfg.resolution, Resolution::new(800, 720));

    clear_env();
}
