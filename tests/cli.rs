use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn sample_image(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.path().join("input.png");
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8])
    });
    img.save(&path).unwrap();
    path
}

#[test]
fn carves_to_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let input = sample_image(&dir, 20, 15);
    let output = dir.path().join("output.png");

    Command::cargo_bin("dualseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "14", "--height", "12"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (14, 12));
}

#[test]
fn missing_targets_leave_that_axis_alone() {
    let dir = TempDir::new().unwrap();
    let input = sample_image(&dir, 10, 8);
    let output = dir.path().join("output.png");

    Command::cargo_bin("dualseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["-W", "7"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (7, 8));
}

#[test]
fn refuses_to_upscale() {
    let dir = TempDir::new().unwrap();
    let input = sample_image(&dir, 6, 6);
    let output = dir.path().join("output.png");

    Command::cargo_bin("dualseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));

    assert!(!output.exists());
}

#[test]
fn reports_unreadable_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.png");

    Command::cargo_bin("dualseam")
        .unwrap()
        .arg(dir.path().join("nope.png"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("dualseam:"));
}

#[test]
fn rejects_non_numeric_targets() {
    let dir = TempDir::new().unwrap();
    let input = sample_image(&dir, 4, 4);

    Command::cargo_bin("dualseam")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("output.png"))
        .args(&["--height", "tall"])
        .assert()
        .failure();
}
