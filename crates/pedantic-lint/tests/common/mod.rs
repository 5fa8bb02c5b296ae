//! Shared E2E test helpers for `pedantic-lint` binary tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Manifest whose schema matches the classic `basic_schema` fixture.
pub const BASIC_MANIFEST: &str = r#"
[[scopes]]
name = "default"

[[scopes.pipelines]]
name = "load-people"

[[schema.nodes]]
type = "person"
properties = ["nameOfPerson", "age"]

[[schema.nodes]]
type = "Organization"
properties = ["name", "industry"]

[[schema.relationships]]
type = "best_friend_of"
properties = ["since"]

[[schema.relationships]]
type = "HAS_EMPLOYEE"
properties = ["since"]
"#;

pub const CLEAN_MANIFEST: &str = r#"
[[scopes]]
name = "default"

[[scopes.pipelines]]
name = "load-people"

[[schema.nodes]]
type = "Person"
properties = ["name"]

[[schema.relationships]]
type = "KNOWS"
properties = ["since"]
"#;

/// Build a Command for the `pedantic-lint` binary running inside `dir`.
///
/// `PEDANTIC_LOG` is cleared so a developer's shell setting cannot leak
/// log lines into asserted output.
pub fn lint_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("pedantic-lint");
    cmd.timeout(TIMEOUT);
    cmd.env_remove("PEDANTIC_LOG");
    cmd.current_dir(dir);
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}
