use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "faqsplit_cli_{}_{}_{}",
        std::process::id(),
        nanos,
        name
    ))
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_faqsplit"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--qna-json"));
}

#[test]
fn test_cli_missing_input_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_faqsplit"))
        .arg("/definitely/not/here.docx")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unreadable document"));
}

#[test]
fn test_cli_qna_json_contents_only() {
    let input = temp_path("qna.json");
    let output_path = temp_path("out").join("contents.json");
    std::fs::write(
        &input,
        r#"[
            {"thread_id": "t1", "question": "Why?", "answers": [{"answer": "Because.", "is_expert": true}]},
            {"thread_id": "t2", "question": "No answer"}
        ]"#,
    )
    .expect("write qna json");

    let output = Command::new(env!("CARGO_BIN_EXE_faqsplit"))
        .arg("--qna-json")
        .arg(&input)
        .arg("--contents-only")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("Failed to execute command");

    let written = std::fs::read_to_string(&output_path).expect("read contents output");
    let _ = std::fs::remove_file(&input);
    if let Some(parent) = output_path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }

    assert!(output.status.success());
    assert_eq!(written, "[\n  \"Q: Why?\\n\\nA: Because.\"\n]");
}
