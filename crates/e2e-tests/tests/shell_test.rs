//! Interactive shell E2E tests: a scripted form session from input to export.

use pretty_assertions::assert_eq;

use e2e_tests::TestHarness;
use mindmap_cli::Shell;

fn run_script(harness: &TestHarness, script: &str) -> (Shell, String) {
    let mut shell = Shell::new(harness.mock_session());
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    (shell, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_form_session() {
    let harness = TestHarness::new();
    let script = "\
title AI
text Data science involves data analysis and data visualization.
text Machine learning uses data.
generate
export svg
export json
quit
";
    let (shell, out) = run_script(&harness, script);

    assert!(out.contains("Mind Map: AI"));
    assert!(out.contains(" 1. Data (4)"));
    assert_eq!(out.matches("Mind map saved to").count(), 2);

    let files = harness.exported_files();
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.ends_with(".svg")));
    assert!(files.iter().any(|f| f.ends_with(".json")));
    assert_eq!(shell.session().current().unwrap().graph.node_count(), 7);
}

#[test]
fn test_error_dialogs_in_order() {
    let harness = TestHarness::new();
    let script = "\
export
generate
text the a an is of
generate
";
    let (_, out) = run_script(&harness, script);

    let lines: Vec<&str> = out
        .lines()
        .filter(|l| l.contains(": ") && !l.starts_with("Mind Map"))
        .collect();
    assert_eq!(
        lines,
        vec![
            "No Mind Map: Generate a mind map before exporting.",
            "Input Error: Please enter some text.",
            "No Keywords: No valid keywords found.",
        ]
    );
    assert!(harness.exported_files().is_empty());
}

#[test]
fn test_show_reports_form_state() {
    let harness = TestHarness::new();
    let (_, out) = run_script(&harness, "text first line\nshow\n");

    assert!(out.contains("Title: (default)"));
    assert!(out.contains("Text (1 lines):"));
    assert!(out.contains("  | first line"));
    assert!(out.contains("No mind map generated yet."));
}
