use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ena-pipeline"))
        .args(args)
        .output()
        .expect("ena-pipeline process should run")
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ena-pipeline-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

#[test]
fn config_run_writes_ena_and_grouped_tables() {
    let dir = scratch("config-run");
    let ena_out = dir.join("ena.csv");
    let grouped_out = dir.join("grouped.csv");

    let output = run(&[
        "--config",
        "fixtures/run.toml",
        "--ena-out",
        ena_out.to_str().unwrap(),
        "--grouped-out",
        grouped_out.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "run failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    assert!(stdout.contains("--- ENA Summary ---"));
    assert!(stdout.contains("2025-01-01 .. 2025-01-03"));
    // station 18 and the injected 900 have no productivity
    assert!(stdout.contains("No productivity:   18, 900"));

    let ena = fs::read_to_string(&ena_out).expect("ENA CSV should exist");
    assert_eq!(ena.lines().next(), Some("data,1,6,2"));
    assert_eq!(ena.lines().nth(1), Some("2025-01-01,90.0000,60.0000,50.0000"));

    let grouped = fs::read_to_string(&grouped_out).expect("grouped CSV should exist");
    let lines: Vec<&str> = grouped.lines().collect();
    assert_eq!(
        lines,
        [
            "data,SE,S",
            "2025-01-01,140.0000,60.0000",
            "2025-01-02,210.0000,63.0000",
            "2025-01-03,280.0000,66.0000",
        ]
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn flags_override_config_inputs() {
    let output = run(&[
        "--config",
        "fixtures/run.toml",
        "--grouping-column",
        "ree",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Grande"));
    assert!(stdout.contains("Iguacu"));
}

#[test]
fn rust_log_raises_verbosity_above_info() {
    let output = Command::new(env!("CARGO_BIN_EXE_ena-pipeline"))
        .args(["--config", "fixtures/run.toml"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("ena-pipeline process should run");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "no debug events: {stderr}");
    assert!(stderr.contains("computed ENA"));
}

#[test]
fn default_filter_is_info() {
    let output = Command::new(env!("CARGO_BIN_EXE_ena-pipeline"))
        .args(["--config", "fixtures/run.toml"])
        .env_remove("RUST_LOG")
        .output()
        .expect("ena-pipeline process should run");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INFO"));
    assert!(!stderr.contains("DEBUG"));
}

#[test]
fn unknown_preset_fails() {
    let output = run(&["--preset", "bogus"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}

#[test]
fn missing_input_file_fails() {
    let output = run(&[
        "--flow",
        "fixtures/does-not-exist.csv",
        "--productivity",
        "fixtures/produtibilidade.csv",
    ]);
    assert!(!output.status.success());
}
