//! Common test utilities for snap-installer integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Manifest location relative to the working directory, matching the default
pub const MANIFEST: &str = "templates/snap_installation.yaml";

/// Columns printed by `snap list`
const LIST_HEADER: &str = "Name Version Rev Tracking Publisher Notes";

/// A scratch directory the binary runs in, with a scripted `snap` stand-in
pub struct TestEnv {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let env = Self { temp, path };
        env.write_file("snap-calls.log", "");
        env.write_file("installed.txt", "");
        env.write_file("failing.txt", "");
        env
    }

    /// Write a file relative to the environment root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write the manifest at the default location
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        self.write_file(MANIFEST, content)
    }

    /// Command line for the fake `snap` client.
    ///
    /// The script is run through `sh` so it never has to be executable.
    pub fn snap_command(&self) -> String {
        let log = self.path.join("snap-calls.log");
        let installed = self.path.join("installed.txt");
        let failing = self.path.join("failing.txt");
        let script = format!(
            r#"echo "$*" >> "{log}"
case "$1" in
  list)
    if grep -q "^$2 " "{installed}"; then
      echo "{LIST_HEADER}"
      grep "^$2 " "{installed}"
      exit 0
    fi
    echo "error: no matching snaps installed" >&2
    exit 1
    ;;
  install|refresh|remove)
    if grep -qx "$2" "{failing}"; then
      echo "error: cannot $1 $2" >&2
      exit 1
    fi
    ;;
esac
exit 0
"#,
            log = log.display(),
            installed = installed.display(),
            failing = failing.display(),
        );
        let path = self.write_file("fake-snap.sh", &script);
        format!("sh {}", path.display())
    }

    /// Report `line` (a `snap list` row) as installed
    pub fn mark_installed(&self, line: &str) {
        self.write_file("installed.txt", &format!("{line}\n"));
    }

    /// Make install, refresh and remove fail for `target`
    pub fn fail_on(&self, target: &str) {
        self.write_file("failing.txt", &format!("{target}\n"));
    }

    /// Arguments of every call the fake `snap` received, in order
    pub fn snap_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path.join("snap-calls.log"))
            .expect("Failed to read snap call log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The binary, run inside this environment with a clean configuration
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("snap-installer").expect("Failed to find binary");
        cmd.current_dir(&self.path)
            .env_remove("SNAP_INSTALLER_MANIFEST")
            .env_remove("SNAP_INSTALLER_ARCH")
            .env_remove("SNAP_INSTALLER_ARCH_COMMAND")
            .env_remove("SNAP_INSTALLER_SNAP_COMMAND")
            .env_remove("SNAP_INSTALLER_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_starts_with_no_calls() {
        let env = TestEnv::new();
        assert!(env.snap_calls().is_empty());
    }

    #[test]
    fn test_write_manifest_uses_default_location() {
        let env = TestEnv::new();
        let path = env.write_manifest("amd64: []\n");
        assert!(path.ends_with(MANIFEST));
        assert!(path.is_file());
    }
}
