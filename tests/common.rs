#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch directory so a
/// developer's real `~/.rbooking/rbooking.conf` never leaks into a test.
pub fn rbk() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rbooking_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rbooking");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbooking.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rbk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_booking(db_path: &str, from: &str, to: &str, name: &str) {
    rbk()
        .args([
            "--db", db_path, "add", "--from", from, "--to", to, "--name", name,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset: one past stay, two future ones
/// that overlap.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_booking(db_path, "2001-07-01", "2001-07-05", "Old Guest");
    add_booking(db_path, "2099-03-01", "2099-03-05", "Ana");
    add_booking(db_path, "2099-03-04", "2099-03-08", "Marko");
}
