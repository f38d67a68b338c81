#![cfg(unix)]

use std::fs;

use predicates::prelude::*;

use crate::{APP_ID, Fixture, file_names};

/// Lays out a build tree and MSYS2 root where every tool is a shell script.
///
/// The fake `ldd` prints the binary's own content, so each "binary" below is
/// written as the listing it should report.
fn staged_fixture() -> Fixture {
    let f = Fixture::new();

    f.write(
        "build/rnote.exe",
        "\tntdll.dll => /c/WINDOWS/SYSTEM32/ntdll.dll (0x7ffb5e7d0000)\n\
         \tlibgtk-4-1.dll => /mingw64/bin/libgtk-4-1.dll (0x7ffb0a110000)\n\
         \tlibglib-2.0-0.dll => /mingw64/bin/libglib-2.0-0.dll (0x7ffb2c6a0000)\n",
    );
    f.write(
        "msys64/mingw64/lib/gdk-pixbuf-2.0/2.10.0/loaders/libpixbufloader-png.dll",
        "\tlibpng16-16.dll => /mingw64/bin/libpng16-16.dll (0x7ffb3a0d0000)\n\
         \tlibglib-2.0-0.dll => /mingw64/bin/libglib-2.0-0.dll (0x7ffb2c6a0000)\n",
    );
    for dll in ["libgtk-4-1.dll", "libglib-2.0-0.dll", "libpng16-16.dll"] {
        f.write(&format!("msys64/mingw64/bin/{dll}"), dll);
    }

    f.write(
        "msys64/mingw64/share/glib-2.0/schemas/org.gtk.gtk4.Settings.FileChooser.gschema.xml",
        "<schemalist/>",
    );
    f.write(
        "msys64/mingw64/share/glib-2.0/schemas/org.gnome.desktop.interface.gschema.xml",
        "<schemalist/>",
    );
    f.write(
        &format!("build/rnote-ui/data/{APP_ID}.gschema.xml"),
        "<schemalist/>",
    );

    f.write("build/rnote-ui/po/de/LC_MESSAGES/rnote.mo", "de");
    f.write("build/rnote-ui/po/fr/LC_MESSAGES/rnote.mo", "fr");
    for catalog in ["glib20.mo", "gtk40.mo", "libadwaita.mo"] {
        f.write(&format!("msys64/mingw64/share/locale/de/LC_MESSAGES/{catalog}"), catalog);
    }
    f.write("msys64/mingw64/share/locale/fr/LC_MESSAGES/glib20.mo", "glib20");
    f.write("msys64/mingw64/share/locale/fr/LC_MESSAGES/libadwaita.mo", "adw");

    f.write("build/rnote.iss", "[Setup]\nAppName=Rnote\n");

    let ldd = f.write_script("tools/ldd", "cat \"$1\"");
    let compiler = f.write_script("tools/glib-compile-schemas", "ls \"$1\" > \"$1/gschemas.compiled\"");
    let shell = f.write_script("tools/bash", "shift 2\nexec \"$@\"");
    let iscc = f.write_script("tools/iscc", "cp \"$1\" \"$(dirname \"$1\")/setup.exe\"");

    f.write(
        "layout.toml",
        &format!(
            "[tools]\n\
             dependency_inspector = '{}'\n\
             schema_compiler = '{}'\n\
             installer_compiler = '{}'\n\
             shell = '{}'\n",
            ldd.display(),
            compiler.display(),
            iscc.display(),
            shell.display()
        ),
    );

    f
}

#[test]
fn stages_payload_and_compiles_installer() {
    let f = staged_fixture();

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .arg("--expect-installer")
        .arg(f.path("build/setup.exe"))
        .assert()
        .success()
        .stderr(predicate::str::contains("app_id: com.example.Rnote"));

    assert_eq!(
        file_names(&f.path("build/dlls")),
        vec!["libglib-2.0-0.dll", "libgtk-4-1.dll", "libpng16-16.dll"]
    );

    assert_eq!(
        file_names(&f.path("build/gschemas")),
        vec![
            format!("{APP_ID}.gschema.xml"),
            "gschemas.compiled".to_string(),
            "org.gtk.gtk4.Settings.FileChooser.gschema.xml".to_string(),
        ]
    );
    assert!(fs::metadata(f.path("build/gschemas/gschemas.compiled")).unwrap().len() > 0);

    assert_eq!(
        file_names(&f.path("build/locale/de/LC_MESSAGES")),
        vec!["glib20.mo", "gtk40.mo", "libadwaita.mo", "rnote.mo"]
    );
    assert_eq!(
        file_names(&f.path("build/locale/fr/LC_MESSAGES")),
        vec!["glib20.mo", "libadwaita.mo", "rnote.mo"]
    );

    assert_eq!(
        fs::read_to_string(f.path("build/setup.exe")).unwrap(),
        "[Setup]\nAppName=Rnote\n"
    );
}

#[test]
fn rerun_replaces_stale_staging_content() {
    let f = staged_fixture();
    f.write("build/dlls/libold.dll", "stale");
    f.write("build/gschemas/org.old.gschema.xml", "stale");
    f.write("build/locale/it/LC_MESSAGES/rnote.mo", "stale");

    for _ in 0..2 {
        f.installer_command()
            .arg("--layout")
            .arg(f.path("layout.toml"))
            .arg("--stage-only")
            .assert()
            .success();
    }

    assert!(!f.path("build/dlls/libold.dll").exists());
    assert!(!f.path("build/gschemas/org.old.gschema.xml").exists());
    assert_eq!(file_names(&f.path("build/locale")), vec!["de", "fr"]);
    assert_eq!(file_names(&f.path("build/dlls")).len(), 3);
}

#[test]
fn stage_only_skips_installer_compiler() {
    let f = staged_fixture();

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .arg("--stage-only")
        .assert()
        .success();

    assert!(f.path("build/locale/de/LC_MESSAGES/gtk40.mo").is_file());
    assert!(!f.path("build/setup.exe").exists());
}

#[test]
fn inspector_failure_stops_before_schema_phase() {
    let f = staged_fixture();
    f.write_script("tools/ldd", "echo 'ldd: cannot open' >&2\nexit 4");

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Collecting app DLLs failed")
                .and(predicate::str::contains("code: 4"))
                .and(predicate::str::contains("rnote.exe")),
        );

    assert!(f.path("build/dlls").is_dir());
    assert!(!f.path("build/gschemas").exists());
    assert!(!f.path("build/locale").exists());
}

#[test]
fn loader_inspector_failure_stops_before_schema_phase() {
    let f = staged_fixture();
    f.write_script(
        "tools/ldd",
        "case \"$1\" in\n  *loaders*) echo 'ldd: bad loader' >&2; exit 7 ;;\nesac\ncat \"$1\"",
    );

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("pixbuf-loader")
                .and(predicate::str::contains("libpixbufloader-png.dll"))
                .and(predicate::str::contains("code: 7")),
        );

    assert!(!f.path("build/gschemas").exists());
}

#[test]
fn missing_dependency_file_is_fatal() {
    let f = staged_fixture();
    fs::remove_file(f.path("msys64/mingw64/bin/libpng16-16.dll")).unwrap();

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("pixbuf-loader")
                .and(predicate::str::contains("libpng16-16.dll")),
        );

    assert!(!f.path("build/gschemas").exists());
}

#[test]
fn missing_application_schema_is_fatal() {
    let f = staged_fixture();
    fs::remove_file(f.path(&format!("build/rnote-ui/data/{APP_ID}.gschema.xml"))).unwrap();

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("copying application schema"));

    assert!(!f.path("build/locale").exists());
}

#[test]
fn failing_schema_compiler_stops_before_locale_phase() {
    let f = staged_fixture();
    f.write_script("tools/glib-compile-schemas", "echo 'bad schema' >&2\nexit 5");

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Compiling schemas failed")
                .and(predicate::str::contains("code: 5"))
                .and(predicate::str::contains("bad schema")),
        );

    assert!(f.path("build/dlls/libgtk-4-1.dll").is_file());
    assert!(!f.path("build/locale").exists());
}

#[test]
fn empty_compiled_schemas_are_fatal() {
    let f = staged_fixture();
    f.write_script("tools/glib-compile-schemas", ": > \"$1/gschemas.compiled\"");

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty").and(predicate::str::contains("gschemas.compiled")));

    assert!(!f.path("build/locale").exists());
}

#[test]
fn failing_installer_compiler_is_reported() {
    let f = staged_fixture();
    f.write_script("tools/iscc", "echo 'Error on line 1' >&2\nexit 2");

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Running ISCC failed").and(predicate::str::contains("code: 2")),
        );

    // Staging from earlier phases is left in place.
    assert!(f.path("build/locale/de/LC_MESSAGES/rnote.mo").is_file());
}

#[test]
fn unknown_layout_key_is_rejected() {
    let f = staged_fixture();
    f.write("bad.toml", "schema_directory = 'x'\n");

    f.installer_command()
        .arg("--layout")
        .arg(f.path("bad.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid layout file"));

    assert!(!f.path("build/dlls").exists());
}

#[test]
fn verbose_lists_toolchain_catalogs_per_locale() {
    let f = staged_fixture();

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .arg("--stage-only")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("fr: glib20.mo, libadwaita.mo"));

    f.installer_command()
        .arg("--layout")
        .arg(f.path("layout.toml"))
        .arg("--stage-only")
        .assert()
        .success()
        .stderr(predicate::str::contains("fr: glib20.mo").not());
}
