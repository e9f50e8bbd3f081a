// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI integration tests, but not all files.
pub fn srcwalk_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("srcwalk"))
}
