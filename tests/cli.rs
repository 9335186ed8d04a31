//! Binary behaviour end to end.
//!
//! Fatal start-up errors must exit non-zero before any remote call and must
//! not create the output file.  A run whose every call fails must still
//! exit 0 and write one row per input row.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Settings pointing at a closed loopback port, so every call fails fast.
const UNREACHABLE_SETTINGS: &str = "[llm]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_secs = 1\n";

fn run_with_config(dir: &Path, input: &str, config: &str, with_key: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ko-corrector"));
    cmd.current_dir(dir)
        .args(["--input", input, "--output", "submission.csv"])
        .args(["--config", config])
        .env_remove("UPSTAGE_API_KEY")
        .env("RUST_LOG", "off");
    for var in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"] {
        cmd.env_remove(var);
    }
    if with_key {
        cmd.env("UPSTAGE_API_KEY", "up-test");
    }
    cmd.output().expect("binary runs")
}

fn run_in(dir: &Path, input: &str, with_key: bool) -> Output {
    run_with_config(dir, input, "missing-settings.toml", with_key)
}

#[test]
fn missing_sentence_column_aborts_without_output() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("in.csv"), "id,sentence\n1,안녕\n").unwrap();

    let out = run_in(dir.path(), "in.csv", true);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("err_sentence"));
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn missing_credential_aborts_without_output() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("in.csv"), "id,err_sentence\n1,안뇽하세요\n").unwrap();

    let out = run_in(dir.path(), "in.csv", false);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("UPSTAGE_API_KEY"));
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn missing_input_file_aborts_without_output() {
    let dir = tempdir().expect("temp dir");

    let out = run_in(dir.path(), "absent.csv", true);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.csv"));
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn failed_calls_still_write_every_row() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("in.csv"), "err_sentence\n오늘 날씨 좋다\n").unwrap();
    std::fs::write(dir.path().join("settings.toml"), UNREACHABLE_SETTINGS).unwrap();

    let out = run_with_config(dir.path(), "in.csv", "settings.toml", true);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 1 rows to submission.csv"));
    let written = std::fs::read_to_string(dir.path().join("submission.csv")).unwrap();
    assert_eq!(
        written,
        "id,err_sentence,cor_sentence\ntemp_id_0,오늘 날씨 좋다,오늘 날씨 좋다\n"
    );
}

#[test]
fn ids_are_copied_and_row_count_matches() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("in.csv"),
        "id,err_sentence,extra\nTRAIN_001,안뇽하세요,x\nTRAIN_002,\"네, 그래요\",y\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("settings.toml"), UNREACHABLE_SETTINGS).unwrap();

    let out = run_with_config(dir.path(), "in.csv", "settings.toml", true);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 2 rows to submission.csv"));
    let written = std::fs::read_to_string(dir.path().join("submission.csv")).unwrap();
    assert_eq!(
        written,
        "id,err_sentence,cor_sentence\n\
         TRAIN_001,안뇽하세요,안뇽하세요\n\
         TRAIN_002,\"네, 그래요\",\"네, 그래요\"\n"
    );
}
