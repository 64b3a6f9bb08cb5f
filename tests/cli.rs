use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_watermark"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch the watermark binary")
}

fn sample(path: &Path) {
    RgbImage::from_pixel(120, 80, Rgb([20, 40, 60]))
        .save(path)
        .unwrap();
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn missing_input_prints_usage() {
    let out = run(&[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn single_file_gets_derived_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    sample(&input);

    let out = run(&[arg(&input).as_str(), "-t", "hello", "-n", "-sox", "3", "-soy", "-1", "-sa", "80"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = dir.path().join("photo_watermark.png");
    let image = image::open(&written).unwrap();
    assert_eq!((image.width(), image.height()), (120, 80));
}

#[test]
fn explicit_webp_output_is_written_as_jpg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    sample(&input);
    let requested = dir.path().join("out").join("result.webp");

    let out = run(&[arg(&input).as_str(), "-o", arg(&requested).as_str()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = dir.path().join("out").join("result.jpg");
    let bytes = std::fs::read(written).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    assert!(!requested.exists());
}

#[test]
fn out_of_range_opacity_aborts_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    sample(&input);

    let cases: [&[&str]; 5] = [
        &["-a", "256"],
        &["-a", "-1"],
        &["-sa", "999"],
        &["-s", "0"],
        &["-s", "1000000000"],
    ];
    for bad in cases {
        let mut args = vec![arg(&input)];
        args.extend(bad.iter().map(|s| s.to_string()));
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let out = run(&args);
        assert!(!out.status.success(), "{:?} should be rejected", bad);
        assert!(!dir.path().join("photo_watermark.png").exists());
    }
}

#[test]
fn invalid_position_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    sample(&input);

    let out = run(&[arg(&input).as_str(), "-p", "middle"]);
    assert!(!out.status.success());
    assert!(!dir.path().join("photo_watermark.png").exists());
}

#[test]
fn webp_input_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.webp");
    std::fs::write(&input, b"RIFF....WEBP").unwrap();

    let out = run(&[arg(&input).as_str()]);
    assert!(!out.status.success());
    assert!(!dir.path().join("clip_watermark.jpg").exists());
}

#[test]
fn non_image_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "hello").unwrap();

    let out = run(&[arg(&input).as_str()]);
    assert!(!out.status.success());
}

#[test]
fn directory_input_runs_batch_mode() {
    let dir = tempfile::tempdir().unwrap();
    sample(&dir.path().join("one.png"));
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    sample(&dir.path().join("sub").join("two.png"));

    let out = run(&[arg(dir.path()).as_str(), "-t", "batch", "--seed", "7"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let produced = dir.path().join("watermarked");
    assert!(produced.join("1.png").is_file());
    assert!(produced.join("2.png").is_file());
}
