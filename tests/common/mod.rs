use assert_cmd::Command;
use std::path::Path;

pub fn quotebook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.env_remove("QUOTEBOOK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--offline");
    cmd
}

/// Initialize a quote book at `path`
pub fn init_book(path: &Path) {
    quotebook_cmd().arg("init").arg(path).assert().success();
}
