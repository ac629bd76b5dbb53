use crate::common::{
    make_temp_dir, normalized_lines, run_with_input, run_without_input, write_valid_config,
};
use std::fs;

#[test]
fn missing_config_is_a_startup_error() {
    let dir = make_temp_dir("config");
    let output = run_without_input(&dir);

    assert!(!output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l == "Config error: Configuration file 'config.json' not found."),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_config_json_is_a_startup_error() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ nope").unwrap();
    let output = run_without_input(&dir);

    assert!(!output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l.starts_with("Config error: Invalid JSON in 'config.json':"))
    );
}

#[test]
fn block_size_change_is_persisted_to_disk() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "block 6\nexit\n");
    assert!(output.status.success());

    let text = fs::read_to_string(dir.join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["block_size"]["value"], 6);
}

#[test]
fn empty_start_date_uses_the_wall_clock() {
    // No fixed start date: the window begins today (or tomorrow when today
    // is a Sunday), so the first grid row is close to now.
    let dir = make_temp_dir("config");
    let cfg = r#"{
      "block_size": { "value": 4, "description": "block size" },
      "window_start_date": { "value": null, "description": "start" },
      "file_logging_enabled": { "value": false, "description": "file logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    let today = chrono::Local::now().date_naive();
    let expected_first = if today.format("%a").to_string() == "Sun" {
        today + chrono::Duration::days(1)
    } else {
        today
    };
    let label = format!("{}", expected_first.format("%a %Y-%m-%d"));
    assert!(
        lines.iter().any(|l| l.starts_with(&label)),
        "expected a row starting with {label}"
    );
}
