use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_slotpick"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "slotpick-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Config with a fixed window start (2026-09-07, a Monday) so every grid and
/// pick in these tests is deterministic.
pub fn write_valid_config(dir: &PathBuf) {
    write_config_with_start(dir, "2026-09-07");
}

pub fn write_config_with_start(dir: &PathBuf, start: &str) {
    let cfg = format!(
        r#"{{
      "block_size": {{ "value": 4, "description": "block size" }},
      "window_start_date": {{ "value": "{start}", "description": "start" }},
      "file_logging_enabled": {{ "value": false, "description": "file logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn run_with_input(dir: &PathBuf, input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

pub fn run_without_input(dir: &PathBuf) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B {
            if matches!(bytes.peek(), Some(b'[')) {
                let _ = bytes.next();
                for nb in bytes.by_ref() {
                    if (nb as char).is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }
        if b == b'\n' {
            out.push('\n');
            continue;
        }
        if b.is_ascii_control() {
            continue;
        }
        out.push(b as char);
    }
    out
}

pub fn normalized_lines(raw: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(raw);
    strip_ansi_and_control(&text)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
