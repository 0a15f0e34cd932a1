mod common;

use std::process::Command;
use types::icon_sizes;

#[test]
fn test_writes_icons_next_to_executable() {
    let (dir, exe) = common::install_generator();
    let elsewhere = tempfile::tempdir().unwrap();

    let version = Command::new(&exe).arg("--version").output().unwrap();
    assert!(version.status.success());
    assert!(common::file_names(dir.path()).is_empty());

    let output = Command::new(&exe)
        .current_dir(elsewhere.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let mut expected: Vec<String> = icon_sizes().iter().map(|s| s.file_name()).collect();
    expected.sort();
    assert_eq!(common::file_names(dir.path()), expected);
    assert!(common::file_names(elsewhere.path()).is_empty());

    for size in icon_sizes() {
        let svg = std::fs::read_to_string(dir.path().join(size.file_name())).unwrap();
        assert!(svg.contains(&format!(r#"width="{size}" height="{size}""#)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let confirmations: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("✓ Generated icon: "))
        .collect();
    let expected_lines: Vec<String> = icon_sizes()
        .iter()
        .map(|s| format!("✓ Generated icon: {}", s.file_name()))
        .collect();
    assert_eq!(confirmations, expected_lines);
    assert!(stdout.contains("8 SVG icons generated successfully!"));
    assert!(stdout.contains("for size in 72 96 128 144 152 192 384 512; do"));
    assert!(stdout.contains("convert icon-${size}.png.svg -resize ${size}x${size} icon-${size}.png"));
}
