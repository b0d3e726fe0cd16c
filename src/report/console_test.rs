use super::*;
use crate::report::tests::sample_summary;

fn render(summary: &ProjectSummary) -> String {
    let mut out = Vec::new();
    write_console(summary, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn table_layout() {
    let text = render(&sample_summary());
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].chars().all(|c| c == '-'));
    assert_eq!(lines[1], "Language    Files    Blank    Comment    Code");
    assert_eq!(lines[3], "HTML            1        0          1       5");
    assert_eq!(lines[4], "Rust            1        1          1       3");
    assert_eq!(lines[5], "Unknown         1        0          0       1");
    assert_eq!(lines[7], "Total                    1          2       9");
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().filter(|l| l.starts_with('-')).all(|l| l.len() == lines[0].len()));
}

#[test]
fn empty_summary() {
    let text = render(&ProjectSummary::default());
    assert_eq!(text, "No recognized source files found.\n");
}

#[test]
fn padding_uses_display_width() {
    assert_eq!(pad_left("日本", 6), "日本  ");
    assert_eq!(pad_right("7", 3), "  7");
}
