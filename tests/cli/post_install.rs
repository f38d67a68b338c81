use crate::Fixture;

#[test]
fn destdir_skips_cache_updates() {
    let f = Fixture::new();

    f.command()
        .arg("post-install")
        .env("DESTDIR", f.path("stage"))
        .assert()
        .success();

    assert!(!f.path("stage").exists());
}

#[cfg(unix)]
#[test]
fn missing_cache_tools_only_warn() {
    let f = Fixture::new();

    f.command()
        .arg("post-install")
        .env("MESON_INSTALL_PREFIX", f.path("prefix"))
        .env("PATH", f.path("empty-path"))
        .assert()
        .success()
        .stderr(predicates::str::contains("warning:"));
}
