//! Integration tests for the homotypus binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn homotypus(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("homotypus"));
    cmd.arg("--project").arg(project);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Content directory and settings file, but no stylesheet source.
fn setup_markup_only() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("content")).unwrap();
    fs::write(temp.path().join("settings.py"), "SITENAME = 'Test'\n").unwrap();
    temp
}

fn setup_full_project() -> TempDir {
    let temp = setup_markup_only();
    fs::create_dir_all(temp.path().join("extra")).unwrap();
    fs::write(temp.path().join("extra/homotypus.scss"), "body { margin: 0; }\n").unwrap();
    temp
}

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let path = bin.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

/// Point every tool at a fake script that records each call in `calls.log`.
#[cfg(unix)]
fn install_fake_tools(dir: &Path) {
    let log = dir.join("calls.log");
    let recorder = |name: &str, extra: &str| {
        format!(
            "echo \"{} $*\" >> \"{}\"\ncase \"$1\" in --version) echo 1.2.3; exit 0 ;; esac\n{}",
            name,
            log.display(),
            extra
        )
    };

    let pelican = fake_tool(
        dir,
        "pelican",
        &recorder("pelican", "mkdir -p \"$3\"; echo 'Done: Processed 1 article'"),
    );
    let sass = fake_tool(
        dir,
        "sass",
        &recorder(
            "sass",
            "for last in \"$@\"; do :; done; mkdir -p \"$(dirname \"$last\")\"; echo 'body{}' > \"$last\"",
        ),
    );
    let server = fake_tool(dir, "server", &recorder("server", "exit 0"));

    fs::write(
        dir.join("homotypus.yml"),
        format!(
            "tools:\n  markup: [\"{}\"]\n  style: [\"{}\"]\n  server: [\"{}\"]\nserve:\n  open_browser: false\n",
            pelican, sass, server
        ),
    )
    .unwrap();
}

#[cfg(unix)]
fn calls(dir: &Path) -> String {
    fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("homotypus"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pelican"))
        .stdout(predicate::str::contains("serve-pelican"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("homotypus"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("homotypus"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("homotypus"));
    cmd.arg("deploy");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn clean_with_nothing_to_remove() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    homotypus(temp.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running in \"clean\" mode"))
        .stdout(predicate::str::contains("Nothing to remove"))
        .stdout(predicate::str::contains("Finished"));
    Ok(())
}

#[test]
fn clean_removes_generated_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("output"))?;
    fs::write(temp.path().join("output/index.html"), "<html></html>")?;
    fs::create_dir_all(temp.path().join("theme/static/css"))?;
    fs::write(temp.path().join("theme/static/css/homotypus.css"), "body{}")?;

    homotypus(temp.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("The following will be removed:"));

    assert!(!temp.path().join("output").exists());
    assert!(!temp.path().join("theme/static/css/homotypus.css").exists());
    Ok(())
}

#[test]
fn site_without_style_source_fails_validation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_markup_only();
    homotypus(temp.path())
        .arg("site")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("homotypus.scss"))
        .stderr(predicate::str::contains("Validation failed with 1 problem(s)"))
        .stdout(predicate::str::contains("Finished").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn failed_validation_invokes_no_tool() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_markup_only();
    install_fake_tools(temp.path());

    homotypus(temp.path()).arg("site").assert().code(2);

    assert_eq!(calls(temp.path()), "");
    Ok(())
}

#[test]
fn serve_without_output_explains_fix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    homotypus(temp.path())
        .args(["serve", "--no-browser"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("The Pelican output directory"))
        .stderr(predicate::str::contains(
            "Make sure Pelican has been used to generate the site",
        ));
    Ok(())
}

#[test]
fn missing_project_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    homotypus(&temp.path().join("nowhere"))
        .arg("css")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such directory"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("homotypus.yml"), "layout:\n  nonsense: true\n")?;

    homotypus(temp.path())
        .arg("clean")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn log_lines_are_timestamped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    homotypus(temp.path())
        .args(["clean", "--log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"\d{2}:\d{2}:\d{2} \[    INFO\] Running in",
        )?);
    Ok(())
}

#[cfg(unix)]
#[test]
fn site_runs_sass_then_pelican() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_full_project();
    install_fake_tools(temp.path());

    homotypus(temp.path())
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected Pelican 1.2.3"))
        .stdout(predicate::str::contains("Pelican arguments"))
        .stdout(predicate::str::contains("Sass arguments"))
        .stdout(predicate::str::contains("Done: Processed 1 article"))
        .stdout(predicate::str::contains("Finished"));

    let log = calls(temp.path());
    let lines: Vec<_> = log.lines().filter(|l| !l.ends_with("--version")).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("sass --no-quiet --embed-source-map"));
    assert!(lines[1].starts_with("pelican "));
    assert!(lines[1].contains("--settings"));
    assert!(temp.path().join("theme/static/css/homotypus.css").is_file());
    Ok(())
}

#[cfg(unix)]
#[test]
fn html_needs_compiled_css_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_full_project();
    install_fake_tools(temp.path());

    homotypus(temp.path())
        .arg("html")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Make sure Sass has been used to generate the CSS file",
        ));

    homotypus(temp.path()).arg("css").assert().success();
    homotypus(temp.path()).arg("html").assert().success();
    Ok(())
}

#[cfg(unix)]
#[test]
fn serve_uses_port_and_output_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("output"))?;
    install_fake_tools(temp.path());

    homotypus(temp.path())
        .args(["serve", "--port", "8123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Serving Pelican site using Python..."))
        .stdout(predicate::str::contains("Server stopped"));

    let log = calls(temp.path());
    assert!(log.contains("server 8123 --bind localhost --directory"));
    assert!(log.trim_end().ends_with("output"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn serve_pelican_passes_listen_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_full_project();
    fs::create_dir_all(temp.path().join("output"))?;
    install_fake_tools(temp.path());

    homotypus(temp.path())
        .args(["serve-pelican", "--no-browser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server stopped"));

    let log = calls(temp.path());
    assert!(log.contains("--port 8000 --listen"));
    Ok(())
}
