use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

mod cargo_build;
mod installer;
mod post_install;

const BIN_NAME: &str = "kodegen_bundler_inno";

pub const APP_ID: &str = "com.example.Rnote";

/// A throwaway source tree, build tree and MSYS2 root with scripted tools.
pub struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[cfg(unix)]
    pub fn write_script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.write(rel, &format!("#!/bin/sh\n{body}\n"));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
        cmd.current_dir(&self.root);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DESTDIR");
        cmd
    }

    /// `installer` with the eight positional arguments filled in.
    pub fn installer_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("installer")
            .arg(self.path("src"))
            .arg(self.path("build"))
            .arg(self.path("msys64"))
            .arg("rnote")
            .arg("Rnote")
            .arg(APP_ID)
            .arg("rnote.exe")
            .arg(self.path("build/rnote.iss"));
        cmd
    }
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn missing_subcommand_fails() {
    Fixture::new().command().assert().failure();
}

#[test]
fn installer_rejects_missing_positionals() {
    let fixture = Fixture::new();
    fixture
        .command()
        .args(["installer", "src", "build"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("required"));
}
