use super::*;
use crate::loc::{aggregate, classify};
use chrono::TimeZone;
use std::path::Path;

pub(super) fn sample_summary() -> ProjectSummary {
    let files = [
        classify(
            Path::new("src/main.rs"),
            b"// entry\nfn main() {\n\n    run();\n}\n",
            None,
        )
        .unwrap(),
        classify(
            Path::new("web/index.html"),
            b"<html>\n<style>\n/* c */\na {}\n</style>\n</html>\n",
            None,
        )
        .unwrap(),
        classify(Path::new("NOTES"), b"todo\n", None).unwrap(),
    ];
    aggregate(&files)
}

pub(super) fn sample_meta() -> ReportMeta {
    ReportMeta {
        project_name: "demo".to_string(),
        root: PathBuf::from("/work/demo"),
        date: Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    }
}

fn render_to_string(format: ReportFormat) -> String {
    let mut out = Vec::new();
    render(format, &sample_summary(), &sample_meta(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn every_format_renders() {
    for format in [
        ReportFormat::Console,
        ReportFormat::Text,
        ReportFormat::Json,
        ReportFormat::Yaml,
        ReportFormat::Csv,
        ReportFormat::Xml,
        ReportFormat::Html,
    ] {
        assert!(!render_to_string(format).is_empty(), "{format} is empty");
    }
}

#[test]
fn json_layout() {
    let value: serde_json::Value = serde_json::from_str(&render_to_string(ReportFormat::Json)).unwrap();
    assert_eq!(value["formatVersion"], 1);
    assert_eq!(value["projectName"], "demo");
    assert_eq!(value["numFiles"], 3);
    assert_eq!(value["numUnrecognized"], 1);
    assert_eq!(value["numLanguages"], 3);
    assert_eq!(value["totalLines"], 12);
    assert!(value["date"].as_str().unwrap().starts_with("2024-05-01T12:30:00"));

    let languages = value["languages"].as_array().unwrap();
    let names: Vec<&str> = languages.iter().map(|l| l["displayName"].as_str().unwrap()).collect();
    assert_eq!(names, ["HTML", "Rust", "Unknown"]);

    let files = value["files"].as_array().unwrap();
    let page = files.iter().find(|f| f["pathname"] == "web/index.html").unwrap();
    assert_eq!(page["numLanguages"], 2);
    assert_eq!(page["languages"].as_array().unwrap().len(), 2);

    let notes = files.iter().find(|f| f["pathname"] == "NOTES").unwrap();
    assert_eq!(notes["unrecognized"], true);
    assert!(notes.get("languages").is_none());
}

#[test]
fn yaml_matches_json_fields() {
    let text = render_to_string(ReportFormat::Yaml);
    assert!(text.starts_with("---\n"));
    assert!(text.ends_with("...\n"));
    let body = text.trim_start_matches("---\n").trim_end_matches("...\n");
    let value: serde_yaml::Value = serde_yaml::from_str(body).unwrap();
    assert_eq!(value["formatVersion"].as_u64(), Some(1));
    assert_eq!(value["projectName"].as_str(), Some("demo"));
    assert_eq!(value["codeLines"].as_u64(), Some(9));
    assert_eq!(value["files"].as_sequence().map(Vec::len), Some(3));
}

#[test]
fn text_layout() {
    let text = render_to_string(ReportFormat::Text);
    assert!(text.starts_with("Line Count Report For demo\n"));
    assert!(text.contains("Number of files: 3\n"));
    assert!(text.contains("\nLanguages\n---------\n"));
    assert!(text.contains("\nFiles\n-----\n"));
    assert!(text.contains("web/index.html\n    Lines: 6 total, 5 code, 1 comment, 0 blank\n    Languages: CSS, HTML\n"));
}

#[test]
fn display_names() {
    assert_eq!(display_name("cpp"), "C++");
    assert_eq!(display_name("unknown"), "Unknown");
    assert_eq!(display_name("not-a-language"), "not-a-language");
}

#[test]
fn report_format_parses_from_config() {
    let formats: Vec<ReportFormat> = serde_json::from_str(r#"["json", "csv", "console"]"#).unwrap();
    assert_eq!(
        formats,
        [ReportFormat::Json, ReportFormat::Csv, ReportFormat::Console]
    );
    assert_eq!(ReportFormat::Yaml.to_string(), "yaml");
}
