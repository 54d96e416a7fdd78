//! Shared utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Absolute shell path so lookups work with a cleared environment.
pub const SH: &str = "/bin/sh";

/// Path of the built entrypoint binary.
pub fn entrypoint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_entrypoint"))
}

/// A per-test scratch directory, emptied on creation.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("entrypoint-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// TOML array literal for a `sh -c` invocation.
pub fn sh_args(script: &str) -> String {
    format!("[\"-c\", {:?}]", script)
}

/// Write a config whose migrate step runs `script` through `/bin/sh`.
pub fn write_config(dir: &Path, migrate_script: &str, extra: &str) -> PathBuf {
    let path = dir.join("entrypoint.toml");
    let content = format!(
        "[migrate]\nprogram = {:?}\nargs = {}\n\n{}\n",
        SH,
        sh_args(migrate_script),
        extra
    );
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
