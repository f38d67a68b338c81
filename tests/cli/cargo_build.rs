#![cfg(unix)]

use std::fs;

use predicates::prelude::*;

use crate::Fixture;

#[test]
fn builds_and_copies_binary() {
    let f = Fixture::new();
    let cargo = f.write_script(
        "tools/cargo",
        "mkdir -p \"$(dirname \"$BIN\")\"\nprintf '%s %s' \"$PROFILE_NAME\" \"$*\" > \"$BIN\"",
    );
    let bin = f.path("build/target/release/rnote");

    f.command()
        .arg("cargo-build")
        .arg(f.path("build"))
        .arg(f.path("src"))
        .arg(format!("BIN={} PROFILE_NAME=release", bin.display()))
        .arg(&cargo)
        .arg("--release --locked")
        .arg(&bin)
        .arg(f.path("build/rnote"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(f.path("build/rnote")).unwrap(),
        "release build --release --locked"
    );
}

#[test]
fn cargo_failure_is_fatal() {
    let f = Fixture::new();
    let cargo = f.write_script("tools/cargo", "exit 101");

    f.command()
        .arg("cargo-build")
        .arg(f.path("build"))
        .arg(f.path("src"))
        .arg("")
        .arg(&cargo)
        .arg("--release")
        .arg(f.path("build/target/release/rnote"))
        .arg(f.path("build/rnote"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("code: 101"));

    assert!(!f.path("build/rnote").exists());
}

#[test]
fn malformed_environment_is_rejected() {
    let f = Fixture::new();

    f.command()
        .args(["cargo-build", "build", "src", "NOT_A_PAIR", "cargo", "", "bin", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not KEY=VALUE"));
}
