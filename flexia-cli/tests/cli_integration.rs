//! Integration tests for the flexia CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn flexia() -> Command {
    let mut cmd = Command::cargo_bin("flexia").unwrap();
    cmd.env_remove("FLEXIA_LANGUAGE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_translit() {
    flexia()
        .args(["translit", "Привет люди!", "Хороший"])
        .assert()
        .success()
        .stdout("Privet l'udi!\nHoroshij\n");
}

#[test]
fn test_translit_to_cyrillic() {
    flexia()
        .args(["translit", "--to", "cyrillic", "Privjety :)"])
        .assert()
        .success()
        .stdout("Приветы :)\n");
}

#[test]
fn test_slug_from_stdin() {
    flexia()
        .arg("slug")
        .write_stdin("Hello world!\n\nПривет хабр!\n")
        .assert()
        .success()
        .stdout("hello-world\nprivet-habr\n");
}

#[test]
fn test_plural_and_singular() {
    flexia()
        .args(["plural", "person", "sheep", "box"])
        .assert()
        .success()
        .stdout("people\nsheep\nboxes\n");

    flexia()
        .args(["singular", "children"])
        .assert()
        .success()
        .stdout("child\n");
}

#[test]
fn test_json_output() {
    flexia()
        .args(["--format", "json", "camelize", "hello_ big   world"])
        .assert()
        .success()
        .stdout("{\"input\":\"hello_ big   world\",\"output\":\"HelloBigWorld\"}\n");
}

#[test]
fn test_price_long() {
    flexia()
        .args(["price", "123000,55", "--language", "ru"])
        .assert()
        .success()
        .stdout("сто двадцать три тысячи гривен 55 копеек\n");
}

#[test]
fn test_price_language_from_env() {
    flexia()
        .env("FLEXIA_LANGUAGE", "ua")
        .args(["price", "133", "--no-fraction"])
        .assert()
        .success()
        .stdout("сто тридцять три гривні\n");
}

#[test]
fn test_price_short_form() {
    flexia()
        .args(["price", "301,21", "--short", "руб."])
        .assert()
        .success()
        .stdout("триста один руб. 21 коп.\n");
}

#[test]
fn test_price_unregistered_currency_fails() {
    flexia()
        .args(["price", "10", "--currency", "usd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no number localization registered for 'ru/usd'",
        ));
}

#[test]
fn test_price_malformed_amount_fails() {
    flexia()
        .args(["price", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot render amount 'abc'"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("flexia.toml");
    fs::write(
        &config_path,
        "[price]\ndefault_language = \"ua\"\nshort_label = \"грн.\"\n\n[slug]\nseparator = \"_\"\n",
    )
    .unwrap();

    flexia()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["price", "1000000,12"])
        .assert()
        .success()
        .stdout("один мильйон гривень 12 копійок\n");

    flexia()
        .args(["-c", config_path.to_str().unwrap(), "slug", "Hello big world"])
        .assert()
        .success()
        .stdout("hello_big_world\n");

    // Flags win over the config file
    flexia()
        .args(["-c", config_path.to_str().unwrap()])
        .args(["price", "5", "--short", "-l", "ru", "--no-fraction"])
        .assert()
        .success()
        .stdout("пять грн.\n");
}

#[test]
fn test_missing_config_file() {
    flexia()
        .args(["--config", "/nonexistent/flexia.toml", "plural", "man"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("flexia.toml");
    fs::write(&config_path, "[slug]\nseparator = \"ab\"\n").unwrap();

    flexia()
        .args(["--config", config_path.to_str().unwrap(), "slug", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_list_commands() {
    flexia()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout("ru\nua\n");

    flexia()
        .args(["list", "currencies", "--language", "ua"])
        .assert()
        .success()
        .stdout("rur\nuah\n");
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    flexia()
        .args(["-vv", "plural", "man"])
        .assert()
        .success()
        .stdout("men\n")
        .stderr(predicate::str::contains("pluralize"));
}

#[test]
fn test_help() {
    flexia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("price"))
        .stdout(predicate::str::contains("translit"));
}
