//! End-to-end tests for the comlin binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn comlin() -> Command {
    Command::cargo_bin("comlin").unwrap()
}

#[test]
fn version_flag_prints_version() {
    comlin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn formats_list_names_every_builtin() {
    comlin()
        .args(["formats", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comprobante_en_linea"))
        .stdout(predicate::str::contains("factura_movil"))
        .stdout(predicate::str::contains("tique_factura"));
}

#[test]
fn formats_verify_passes_on_builtins() {
    comlin()
        .args(["formats", "verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no defects"));
}

#[test]
fn process_rejects_missing_input() {
    comlin()
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_rejects_non_pdf_input() {
    let file = tempfile::Builder::new()
        .prefix("recibo-")
        .suffix(".txt")
        .tempfile()
        .unwrap();

    comlin()
        .arg("process")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_rejects_pattern_without_matches() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());

    comlin()
        .arg("batch")
        .arg(&pattern)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn config_path_points_at_comlin_directory() {
    comlin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comlin"));
}
