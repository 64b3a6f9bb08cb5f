use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use watermark::{
    ColorMode, Face, WatermarkParams, Watermarker, collect_image_files, process_directory_with,
};

fn write_image(path: &Path, shade: u8, mtime_secs: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_pixel(80, 40, Rgb([shade, shade, shade]))
        .save(path)
        .unwrap();
    set_mtime(path, mtime_secs);
}

fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

fn watermarker() -> Watermarker<StdRng> {
    Watermarker::with_face_and_rng(Face::Builtin, StdRng::seed_from_u64(9))
}

fn params() -> WatermarkParams {
    WatermarkParams {
        text: "Batch".to_string(),
        font_size: 7,
        color_mode: ColorMode::Fixed,
        ..Default::default()
    }
}

#[test]
fn collects_recursively_in_mtime_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_image(&root.join("b.png"), 10, 3_000);
    write_image(&root.join("nested/deeper/a.jpg"), 20, 1_000);
    write_image(&root.join("c.bmp"), 30, 2_000);
    fs::write(root.join("notes.txt"), "not an image").unwrap();
    fs::write(root.join("UPPER.PNG"), "ignored, extension is case-sensitive").unwrap();

    let files = collect_image_files(root).unwrap();
    assert_eq!(
        files,
        vec![
            root.join("nested/deeper/a.jpg"),
            root.join("c.bmp"),
            root.join("b.png"),
        ]
    );
}

#[test]
fn outputs_are_numbered_by_modification_time() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_image(&input.path().join("zebra.png"), 10, 1_000);
    write_image(&input.path().join("apple.jpg"), 20, 3_000);
    write_image(&input.path().join("mango.png"), 30, 2_000);

    let report = process_directory_with(
        &mut watermarker(),
        input.path(),
        Some(output.path()),
        &params(),
    )
    .unwrap();
    assert_eq!(report.processed, 3);
    assert_eq!(report.errors, 0);

    let first = image::open(output.path().join("1.png")).unwrap().to_rgb8();
    let second = image::open(output.path().join("2.png")).unwrap().to_rgb8();
    assert!(output.path().join("3.jpg").is_file());
    // background shade survives in the corner untouched by the watermark
    assert_eq!(first.get_pixel(0, 0), &Rgb([10, 10, 10]));
    assert_eq!(second.get_pixel(0, 0), &Rgb([30, 30, 30]));
}

#[test]
fn default_output_dir_is_created_inside_input() {
    let input = tempfile::tempdir().unwrap();
    write_image(&input.path().join("only.png"), 50, 1_000);

    let report =
        process_directory_with(&mut watermarker(), input.path(), None, &params()).unwrap();
    assert_eq!(report.processed, 1);
    assert!(input.path().join("watermarked").join("1.png").is_file());
}

#[test]
fn per_file_failures_do_not_abort_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_image(&input.path().join("good.png"), 10, 1_000);
    fs::write(input.path().join("clip.webp"), "webp is recognised but unsupported").unwrap();
    set_mtime(&input.path().join("clip.webp"), 2_000);
    fs::write(input.path().join("broken.jpg"), "garbage").unwrap();
    set_mtime(&input.path().join("broken.jpg"), 3_000);
    write_image(&input.path().join("late.png"), 20, 4_000);
    fs::write(input.path().join("readme.md"), "skip me").unwrap();

    let report = process_directory_with(
        &mut watermarker(),
        input.path(),
        Some(output.path()),
        &params(),
    )
    .unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 2);
    assert_eq!(report.skipped, 1);
    assert!(output.path().join("1.png").is_file());
    // numbering keeps counting through failed files
    assert!(!output.path().join("2.jpg").exists());
    assert!(!output.path().join("3.jpg").exists());
    assert!(output.path().join("4.png").is_file());
}

#[test]
fn missing_root_fails_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let result = process_directory_with(
        &mut watermarker(),
        &dir.path().join("does-not-exist"),
        Some(dir.path()),
        &params(),
    );
    assert!(matches!(result, Err(watermark::Error::Walk(_))));
}
