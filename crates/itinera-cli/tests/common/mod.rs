//! Shared E2E test helpers for `itinera` binary tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::time::Duration;

/// Default timeout for CLI tests.
pub const TIMEOUT_BASIC: Duration = Duration::from_secs(10);

const ITINERA_VARS: &[&str] = &[
    "ITINERA_DEBUG",
    "ITINERA_VERBOSE",
    "ITINERA_COLOR",
    "ITINERA_OVERLAP",
    "ITINERA_CANCEL_KEY",
    "ITINERA_LOCALE",
    "ITINERA_FLAG_FILE",
];

/// Build a Command for the `itinera` binary isolated from the user's
/// config: `HOME` and the project root both point into a fresh tempdir.
///
/// Returns (command, guard); keep the guard alive for the test's duration.
pub fn itinera_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("itinera");
    cmd.timeout(TIMEOUT_BASIC);
    for var in ITINERA_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("HOME", tmp.path());
    cmd.args(["--no-color", "-C", tmp.path().to_str().expect("valid utf8")]);
    (cmd, tmp)
}
