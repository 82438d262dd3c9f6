//! End-to-end runs of the drp binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::helpers::{temp_fixtures, write_file};

/// drp with colors off and HOME pointing at `home` so no user config leaks in
fn drp(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drp").expect("drp binary is built");
    cmd.env("HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn minify_writes_outputs_next_to_inputs() {
    let (temp, paths) = temp_fixtures(&["cart.js", "styles.css"]);

    drp(&temp)
        .arg("minify")
        .args(&paths)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File \"cart.js\" is successfully added.",
        ))
        .stdout(predicate::str::contains("Original size: 180 bytes"))
        .stdout(predicate::str::contains("Reduction: 45%"))
        .stdout(predicate::str::contains("2 minified, 0 skipped"));

    assert_eq!(
        fs::read_to_string(temp.path().join("styles_drp.min.css")).unwrap(),
        "body{margin:0;padding:0}.nav a:hover,.nav a:focus{color:#ff0000;text-decoration:underline}"
    );
    assert!(temp.path().join("cart_drp.min.js").exists());
}

#[test]
fn minify_to_stdout() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "a.css", "a { color : red ; }\n");

    drp(&temp)
        .args(["minify", "--stdout"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a{color:red}\n")
        .stderr(predicate::str::contains("successfully added"));

    assert!(!temp.path().join("a_drp.min.css").exists());
}

#[test]
fn skipped_files_do_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    let empty = write_file(temp.path(), "empty.js", "   \n");
    let text = write_file(temp.path(), "notes.txt", "hello");
    let good = write_file(temp.path(), "ok.js", "f ( ) ;");

    drp(&temp)
        .args(["minify", "--dry-run"])
        .args([&empty, &text, &good])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File \"empty.js\" is empty and will not be processed.",
        ))
        .stdout(predicate::str::contains(
            "Skipped notes.txt: Unsupported file type",
        ))
        .stdout(predicate::str::contains("1 minified, 2 skipped"));

    assert!(!temp.path().join("ok_drp.min.js").exists());
}

#[test]
fn fails_when_nothing_was_minified() {
    let temp = TempDir::new().unwrap();
    let text = write_file(temp.path(), "notes.txt", "hello");

    drp(&temp)
        .arg("minify")
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files were minified (1 skipped)"));
}

#[test]
fn duplicate_names_are_skipped() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("b")).unwrap();
    let first = write_file(temp.path(), "x.js", "a ;");
    let second = write_file(&temp.path().join("b"), "x.js", "b ;");

    drp(&temp)
        .args(["minify", "--dry-run"])
        .args([&first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("File \"x.js\" is already added."));
}

#[test]
fn json_report() {
    let (temp, paths) = temp_fixtures(&["tight.css"]);

    let output = drp(&temp)
        .args(["minify", "--json", "--dry-run"])
        .args(&paths)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], 1);
    assert_eq!(value["outcomes"][0]["already_minified"], true);
    assert_eq!(value["outcomes"][0]["kind"], "css");
    assert_eq!(value["outcomes"][0]["output_name"], "tight_drp.css");
}

#[test]
fn out_dir_and_marker_flags() {
    let (temp, paths) = temp_fixtures(&["cart.js"]);
    let out_dir = temp.path().join("dist");

    drp(&temp)
        .arg("minify")
        .args(&paths)
        .arg("--out-dir")
        .arg(&out_dir)
        .args(["--marker", ".small"])
        .assert()
        .success();

    assert!(out_dir.join("cart.small.min.js").exists());
}

#[test]
fn config_file_sets_defaults() {
    let (temp, paths) = temp_fixtures(&["styles.css"]);
    let config_dir = temp.path().join(".config").join("drp");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[output]\nmarker = \"-cfg\"\ndirectory = \"out\"\n",
    )
    .unwrap();

    drp(&temp)
        .current_dir(temp.path())
        .arg("minify")
        .args(&paths)
        .assert()
        .success();

    assert!(temp.path().join("out").join("styles-cfg.min.css").exists());
}

#[test]
fn config_show_and_path() {
    let temp = TempDir::new().unwrap();

    drp(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("marker = \"_drp\""))
        .stdout(predicate::str::contains("parallel = true"));

    drp(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/drp/config.toml"));
}

#[test]
fn config_init_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".config").join("drp").join("config.toml");

    drp(&temp).args(["config", "init"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("marker = \"_drp\""));

    drp(&temp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    drp(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minify"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "a.css", "a { b : c }");

    drp(&temp)
        .args(["-v", "minify", "--stdout"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a{b:c}\n")
        .stderr(predicate::str::contains("batch finished"));
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    drp(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("minify"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}
