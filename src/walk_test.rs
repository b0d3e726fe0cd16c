use super::*;
use std::fs;

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(
        root.join("src/main.rs"),
        "// entry point\nfn main() {\n\n    println!(\"hi\");\n}\n",
    )
    .unwrap();
    fs::write(root.join("src/lib.rs"), "pub fn f() {} // trailing\n").unwrap();
    fs::write(root.join("scripts/build.py"), "# build\nprint('ok')\n").unwrap();
    fs::write(root.join("README"), "Read me\n").unwrap();
    dir
}

fn strings(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

#[test]
fn counts_every_file() {
    let dir = project();
    let summary = count(dir.path(), &CountSettings::default()).unwrap();

    assert_eq!(summary.file_count(), 4);
    assert_eq!(summary.unrecognized, 1);
    let rust = &summary.languages["rust"];
    assert_eq!(rust.files, 2);
    assert_eq!(rust.counts.code, 4);
    assert_eq!(rust.counts.comment, 1);
    assert_eq!(rust.counts.blank, 1);
    assert!(summary.files.contains_key(Path::new("src/main.rs")));
}

#[test]
fn include_globs_limit_files() {
    let dir = project();
    let settings = CountSettings {
        filter: GlobFilter::new(&strings(&["src/**"]), &[]).unwrap(),
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.file_count(), 2);
    assert_eq!(summary.language_count(), 1);
}

#[test]
fn exclude_globs_win_over_includes() {
    let dir = project();
    let settings = CountSettings {
        filter: GlobFilter::new(&strings(&["**/*.rs"]), &strings(&["**/lib.rs"])).unwrap(),
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.file_count(), 1);
}

#[test]
fn invalid_glob_is_an_error() {
    let err = GlobFilter::new(&strings(&["src/[oops"]), &[]).unwrap_err();
    assert!(matches!(err, LoccError::Glob(_)));
}

#[test]
fn language_filter() {
    let dir = project();
    let settings = CountSettings {
        languages: BTreeSet::from(["python"]),
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.file_count(), 1);
    assert!(summary.languages.contains_key("python"));
}

#[test]
fn unrecognized_files_can_be_excluded() {
    let dir = project();
    let settings = CountSettings {
        count_unrecognized: false,
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.file_count(), 3);
    assert_eq!(summary.unrecognized, 0);
}

#[test]
fn binary_and_oversized_files_are_skipped() {
    let dir = project();
    fs::write(dir.path().join("data.c"), b"hello\x00world").unwrap();
    fs::write(dir.path().join("big.c"), "int x;\n".repeat(100)).unwrap();
    let settings = CountSettings {
        max_file_size: Some(200),
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.skipped, 2);
    assert!(!summary.languages.contains_key("c"));
}

#[test]
fn gitignored_and_git_dirs_are_skipped() {
    let dir = project();
    let root = dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/config.py"), "x = 1\n").unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("target/gen.rs"), "fn g() {}\n").unwrap();
    // .gitignore is only honoured inside a git repository
    fs::write(root.join(".gitignore"), "target/\n").unwrap();

    let files = collect_files(root, &GlobFilter::default()).unwrap();
    let names: Vec<&Path> = files.iter().map(|(_, rel)| rel.as_path()).collect();
    assert!(!names.iter().any(|p| p.starts_with(".git")));
    assert!(names.contains(&Path::new("src/main.rs")));
}

#[test]
fn forced_language_applies_to_all_files() {
    let dir = project();
    let settings = CountSettings {
        force_language: crate::loc::find("python"),
        ..CountSettings::default()
    };
    let summary = count(dir.path(), &settings).unwrap();
    assert_eq!(summary.language_count(), 1);
    assert_eq!(summary.languages["python"].files, 4);
}

#[test]
fn single_file_root() {
    let dir = project();
    let summary = count(&dir.path().join("src/lib.rs"), &CountSettings::default()).unwrap();
    assert_eq!(summary.file_count(), 1);
    assert!(summary.files.contains_key(Path::new("lib.rs")));
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = count(&dir.path().join("nope"), &CountSettings::default()).unwrap_err();
    assert!(matches!(err, LoccError::Io { .. }));
}

#[test]
fn fixed_worker_count() {
    let dir = project();
    let settings = CountSettings {
        jobs: Some(2),
        ..CountSettings::default()
    };
    let parallel = count(dir.path(), &settings).unwrap();
    let default = count(dir.path(), &CountSettings::default()).unwrap();
    assert_eq!(parallel, default);
}

#[test]
fn bom_is_not_code() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.py"), b"\xEF\xBB\xBF# comment\n").unwrap();
    let summary = count(dir.path(), &CountSettings::default()).unwrap();
    assert_eq!(summary.totals.comment, 1);
    assert_eq!(summary.totals.code, 0);
}
