mod common;

use common::{shorten_cmd, LOREM};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn shortens_by_characters() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--by", "characters", "-n", "25"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor more...\n");
}

#[test]
fn shortens_by_words() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--by", "words", "--length", "10"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor sit amet, consectetur adipiscing elit. Mauris more...\n");
}

#[test]
fn shortens_by_lines_with_explicit_width() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--by", "lines", "-n", "1", "--width", "50"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor sit amet, consectetur more...\n");
}

#[test]
fn custom_ellipsis() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["-n", "1", "-w", "50", "--ellipsis", " ...more"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor sit amet, consectetur ...more\n");
}

#[test]
fn measures_in_pixels_with_a_font() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["-n", "1", "-w", "300", "--font", "400 normal 12px Arial"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor sit amet, consectetur more...\n");
}

#[test]
fn wide_enough_prints_the_text_unchanged() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["-n", "3", "-w", "1000"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout(format!("{}\n", LOREM));
}

#[test]
fn headless_prints_the_full_text() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--headless", "--by", "characters", "-n", "5"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout(format!("{}\n", LOREM));
}

#[test]
fn lines_without_any_width_prints_the_full_text() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["-n", "1"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout(format!("{}\n", LOREM))
        .stderr(predicate::str::contains("no width available"));
}

#[test]
fn empty_input_prints_nothing() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["-n", "1", "-w", "10"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn negative_length_shows_only_the_ellipsis() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--by", "words", "-n", "-2"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout(" more...\n");
}

#[test]
fn reads_a_file_argument() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let file = dir.path().join("text.txt");
    fs::write(&file, "alpha beta gamma delta\n").unwrap();

    shorten_cmd(config.path())
        .arg(&file)
        .args(["--by", "words", "-n", "3"])
        .assert()
        .success()
        .stdout("alpha beta more...\n");
}

#[test]
fn missing_file_fails() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .arg("/nonexistent/text.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn config_file_supplies_defaults() {
    let config = tempdir().unwrap();
    let dir = config.path().join("shorten");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config"),
        "# defaults\nby = words\nlength = 4\nellipsis = \" [+]\"\n",
    )
    .unwrap();

    shorten_cmd(config.path())
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem ipsum dolor [+]\n");

    // Flags win over the file
    shorten_cmd(config.path())
        .args(["--by", "characters", "-n", "9"])
        .write_stdin(LOREM)
        .assert()
        .success()
        .stdout("Lorem [+]\n");
}

#[test]
fn invalid_config_is_reported() {
    let config = tempdir().unwrap();
    let dir = config.path().join("shorten");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config"), "by = pages\n").unwrap();

    shorten_cmd(config.path())
        .write_stdin(LOREM)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn invalid_font_is_reported() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path())
        .args(["--font", "Arial"])
        .write_stdin(LOREM)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --font"));
}

#[test]
fn watch_requires_a_file() {
    let config = tempdir().unwrap();
    shorten_cmd(config.path()).arg("--watch").assert().failure();
}
