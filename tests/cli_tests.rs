//! CLI integration tests

use std::process::Command;

fn speech_recognize_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_speech-recognize"));
    // Keep the developer's config file out of the run
    cmd.env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

const FULL_ARGS: [&str; 8] = [
    "--uri",
    "file:///nonexistent/audio.flac",
    "--host",
    "127.0.0.1",
    "--port",
    "1",
    "--sampling",
    "16000",
];

fn args_without(flag: &str) -> Vec<&'static str> {
    FULL_ARGS
        .chunks(2)
        .filter(|pair| pair[0] != flag)
        .flatten()
        .copied()
        .collect()
}

#[test]
fn help_output() {
    let output = speech_recognize_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NonStreamingRecognize"));
    assert!(stdout.contains("--uri"));
    assert!(stdout.contains("--host"));
    assert!(stdout.contains("--port"));
    assert!(stdout.contains("--sampling"));
}

#[test]
fn version_output() {
    let output = speech_recognize_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("speech-recognize"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_speech-recognize"))
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("speech-recognize"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = speech_recognize_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn no_arguments_reports_missing_uri() {
    let output = speech_recognize_bin()
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("An audio URI must be specified"),
        "Expected missing uri error, got: {}",
        stderr
    );
}

#[test]
fn each_missing_flag_exits_with_usage_error() {
    let cases = [
        ("--uri", "audio URI"),
        ("--host", "API endpoint"),
        ("--port", "SSL port"),
        ("--sampling", "sampling rate"),
    ];

    for (flag, purpose) in cases {
        let output = speech_recognize_bin()
            .args(args_without(flag))
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(1), "omitting {}", flag);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(purpose),
            "Expected error naming {} when omitting {}, got: {}",
            purpose,
            flag,
            stderr
        );
    }
}

#[test]
fn non_integer_port_error() {
    let output = speech_recognize_bin()
        .args(["--uri", "a.flac", "--host", "h", "--port", "https", "--sampling", "16000"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("https") && stderr.contains("--port"),
        "Expected error about invalid port, got: {}",
        stderr
    );
}

#[test]
fn non_integer_sampling_error() {
    let output = speech_recognize_bin()
        .args(["--uri", "a.flac", "--host", "h", "--port", "443", "--sampling", "16k"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("16k"),
        "Expected error about invalid sampling rate, got: {}",
        stderr
    );
}

#[test]
fn unknown_flag_error() {
    let output = speech_recognize_bin()
        .arg("--duration")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
