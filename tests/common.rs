#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttw() -> Command {
    cargo_bin_cmd!("timetowin")
}

/// Config path inside the system temp dir; removed so the defaults apply.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetowin.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command with an isolated (missing) config file, so the statutory breaks apply.
pub fn ttw_isolated(name: &str) -> Command {
    let cfg = setup_test_config(name);
    let mut cmd = ttw();
    cmd.args(["--config", &cfg]);
    cmd
}
