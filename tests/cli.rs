// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use pnmseam::Graymap;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const IMAGE: &str = "P2\n# test image\n5 4\n9\n\
                     9 9 0 9 9\n\
                     9 1 9 8 9\n\
                     9 9 9 9 0\n\
                     9 9 9 0 9\n";

fn pnmseam() -> Command {
    Command::cargo_bin("pnmseam").unwrap()
}

fn workspace(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("image.pgm"), contents).unwrap();
    dir
}

#[test]
fn carves_into_the_processed_file() {
    let dir = workspace(IMAGE);
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["2", "1"])
        .assert()
        .success();

    let carved = Graymap::open(dir.path().join("image_processed.pgm")).unwrap();
    assert_eq!(carved.max_value(), 9);
    assert_eq!(carved.pixels().dimensions(), (3, 3));
    assert_eq!(carved.pixels().as_slice(), &[9, 0, 9, 1, 9, 0, 9, 0, 9]);
}

#[test]
fn writes_to_stdout_on_request() {
    let dir = workspace(IMAGE);
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P2\n# carved by pnmseam\n4 4\n9\n"));
}

#[test]
fn writes_an_energy_map() {
    let dir = workspace(IMAGE);
    let energy = dir.path().join("energy.png");
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["0", "0", "--energy-map"])
        .arg(&energy)
        .assert()
        .success();
    assert!(energy.exists());
}

#[test]
fn logs_seams_on_request() {
    let dir = workspace(IMAGE);
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0", "--seams", "-o", "-"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("vertical"));
}

#[test]
fn logging_seams_keeps_rust_log() {
    let dir = workspace(IMAGE);
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0", "--seams", "-o", "-"])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("vertical"));
}

#[test]
fn refuses_to_carve_a_single_pixel() {
    let dir = workspace("P2\n1 1\n255\n5\n");
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 0 can be removed"));
    assert!(!dir.path().join("image_processed.pgm").exists());
}

#[test]
fn refuses_values_above_the_maximum() {
    let dir = workspace("P2\n2 1\n9\n1 10\n");
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got value of 10, but max value is 9"));
}

#[test]
fn refuses_short_images() {
    let dir = workspace("P2\n2 2\n9\n1 2 3\n");
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an image of size 4, but got 3"));
}

#[test]
fn refuses_other_formats() {
    let dir = workspace("P5\n1 1\n255\n");
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incorrect file format"));
}

#[test]
fn refuses_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    pnmseam()
        .arg(dir.path().join("nothing.pgm"))
        .args(&["1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn needs_all_three_arguments() {
    pnmseam().arg("image.pgm").arg("1").assert().failure();
}

#[test]
fn seam_counts_must_be_numbers() {
    let dir = workspace(IMAGE);
    pnmseam()
        .arg(dir.path().join("image.pgm"))
        .args(&["one", "0"])
        .assert()
        .failure();
}
