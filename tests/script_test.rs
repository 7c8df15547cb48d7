//! End-to-end tests: scripts in, image files out.
//!
//! Run: cargo test --test script_test

#![allow(clippy::unwrap_used)]

use std::fs;
use std::process::Command;

use image::ImageFormat;
use tempfile::TempDir;

use rasterkit::prelude::*;

const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

fn session(dir: &TempDir, format: OutputFormat) -> Session {
    Session::new(SessionConfig {
        format,
        ..SessionConfig::with_output_dir(dir.path())
    })
}

#[test]
fn test_saves_bmp_canvas() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, OutputFormat::Bmp);

    let saved = session
        .run_script(
            "resetCanvas 20 10\n\
             setColor 255 0 0\n\
             drawLine base 0 0 19 0 Bresenham\n\
             saveCanvas first\n",
        )
        .unwrap();

    assert_eq!(saved, vec![dir.path().join("first.bmp")]);
    let bytes = fs::read(&saved[0]).unwrap();
    assert_eq!(&bytes[..2], b"BM");

    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Bmp)
        .unwrap()
        .to_rgb8();
    assert_eq!(img.dimensions(), (20, 10));
    // y = 0 is the bottom row of the image
    for x in 0..20 {
        assert_eq!(img.get_pixel(x, 9).0, RED);
        assert_eq!(img.get_pixel(x, 0).0, WHITE);
    }
}

#[test]
fn test_saves_png_canvas() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, OutputFormat::Png);

    let saved = session
        .run_script("resetCanvas 8 8\ndrawEllipse e 1 1 6 6\nsaveCanvas ring\n")
        .unwrap();

    assert_eq!(saved, vec![dir.path().join("ring.png")]);
    let bytes = fs::read(&saved[0]).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

    let decoder = png::Decoder::new(bytes.as_slice());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (8, 8));
}

#[test]
fn test_multiple_saves_and_reset() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, OutputFormat::Bmp);

    let saved = session
        .run_script(
            "resetCanvas 30 30\n\
             drawPolygon p 2 2 20 2 10 20 DDA\n\
             saveCanvas one\n\
             \n\
             translate p 5 5\n\
             saveCanvas two\n\
             resetCanvas 10 10\n\
             saveCanvas three\n",
        )
        .unwrap();

    assert_eq!(saved.len(), 3);
    assert!(session.items().is_empty());
    for path in &saved {
        assert!(path.exists(), "{} missing", path.display());
    }

    let three = image::open(&saved[2]).unwrap().to_rgb8();
    assert_eq!(three.dimensions(), (10, 10));
    assert!(three.pixels().all(|p| p.0 == WHITE));
}

#[test]
fn test_transform_and_clip_pipeline() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, OutputFormat::Bmp);

    session
        .run_script(
            "resetCanvas 100 100\n\
             drawLine l -20 10 120 80 DDA\n\
             clip l 0 0 100 100 Liang-Barsky\n\
             drawCurve c 0 0 10 40 30 40 40 0 Bezier\n\
             scale c 0 0 2\n\
             drawLine gone 200 200 300 300 Naive\n\
             clip gone 0 0 50 50 Cohen-Sutherland\n",
        )
        .unwrap();

    let line = session.item("l").unwrap();
    assert_eq!(line.primitive.points, vec![Pixel::new(0, 20), Pixel::new(100, 70)]);

    let curve = session.item("c").unwrap();
    assert_eq!(curve.primitive.points.last(), Some(&Pixel::new(80, 0)));

    assert!(session.item("gone").is_none());
    assert_eq!(session.items().len(), 2);
}

#[test]
fn test_script_errors_report_line() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, OutputFormat::Bmp);

    let err = session
        .run_script("resetCanvas 10 10\ndrawLine l 0 0 5\n")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCommand { line: 2, .. }));

    let err = session.run_script("translate missing 1 1\n").unwrap_err();
    assert!(matches!(err, Error::UnknownItem(id) if id == "missing"));

    let err = session
        .run_script("drawEllipse e 0 0 4 2\nrotate e 0 0 45\n")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPrimitive(_)));
}

// ============================================================================
// Command line
// ============================================================================

#[test]
fn test_cli_writes_canvases() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("input.txt");
    fs::write(
        &script,
        "resetCanvas 50 50\nsetColor 0 0 255\ndrawLine a 0 0 49 49 Bresenham\nsaveCanvas out\n",
    )
    .unwrap();
    let out_dir = dir.path().join("nested/out");

    let status = Command::new(env!("CARGO_BIN_EXE_rasterkit"))
        .arg(&script)
        .arg(&out_dir)
        .args(["--format", "png"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_dir.join("out.png").exists());
}

#[test]
fn test_cli_fails_on_unknown_command() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("input.txt");
    fs::write(&script, "resetCanvas 10 10\nfloodFill a 1 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rasterkit"))
        .arg(&script)
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("floodFill"), "stderr: {stderr}");
}

#[test]
fn test_cli_missing_script() {
    let dir = TempDir::new().unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_rasterkit"))
        .arg(dir.path().join("nope.txt"))
        .arg(dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
}
