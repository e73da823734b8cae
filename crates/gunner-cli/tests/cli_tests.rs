use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const PIPELINE: &str = "\
name: citest
environments:
  builder: debian
jobs:
  deploy:
    runs-on: builder
    stage: deploy
    steps:
      - name: Deploy to production
        run: ./deploy.sh
";

fn gunner() -> Command {
    let mut cmd = Command::cargo_bin("gunner").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn document(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn text_summary_from_file() {
    let file = document(PIPELINE);

    gunner()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Name: citest\n")
                .and(predicate::str::contains("1. Deploy to production"))
                .and(predicate::str::contains("run: ./deploy.sh")),
        );
}

#[test]
fn json_from_stdin() {
    gunner()
        .args(["--format", "json", "-"])
        .write_stdin(PIPELINE)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"runs-on\": \"builder\"")
                .and(predicate::str::contains("\"uses\"").not()),
        );
}

#[test]
fn tree_format_shows_raw_document() {
    gunner()
        .args(["-f", "tree"])
        .write_stdin("name: ci\nextra:\n  key: value\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"extra\"").and(predicate::str::contains("\"key\": \"value\"")));
}

#[test]
fn strict_mode_rejects_bad_indentation() {
    let input = "jobs:\n    build:\n      stage: x\n  deploy:\n    stage: y\n";

    gunner().write_stdin(input).assert().success();

    gunner()
        .arg("--strict")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed structure at line 4, column 3"));
}

#[test]
fn missing_file_fails() {
    gunner()
        .arg("/nonexistent/pipeline.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read /nonexistent/pipeline.yml"));
}

#[test]
fn unknown_format_is_rejected() {
    gunner()
        .args(["--format", "xml"])
        .write_stdin(PIPELINE)
        .assert()
        .failure();
}
