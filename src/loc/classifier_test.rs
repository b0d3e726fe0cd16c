use super::*;
use crate::loc::language::find;
use crate::loc::stats::Counts;
use proptest::prelude::*;

fn profile(id: &str) -> &'static SyntaxProfile {
    find(id).unwrap()
}

fn lines(id: &str, text: &str) -> Vec<LineStats> {
    classify_lines(text.as_bytes(), profile(id), &ClassifyOptions::default(), 0)
}

fn count(id: &str, text: &str) -> Counts {
    lines(id, text).iter().collect()
}

fn flags(line: &LineStats) -> (bool, bool, bool) {
    (line.code, line.comment, line.blank)
}

// ─── basics ──────────────────────────────────────────────────────────

#[test]
fn blank_lines() {
    let c = count("c", "  \n\n  \n");
    assert_eq!(c.blank, 3);
    assert_eq!(c.code, 0);
    assert_eq!(c.comment, 0);
}

#[test]
fn code_only() {
    let c = count("c", "int x = 1;\nreturn x;\n");
    assert_eq!(c.code, 2);
    assert_eq!(c.total(), 2);
}

#[test]
fn line_comment_then_code() {
    let result = lines("c", "// hello\ncode();\n");
    assert_eq!(result.len(), 2);
    assert_eq!(flags(&result[0]), (false, true, false));
    assert_eq!(flags(&result[1]), (true, false, false));
    let c: Counts = result.iter().collect();
    assert_eq!(
        c,
        Counts {
            code: 1,
            comment: 1,
            blank: 0
        }
    );
}

#[test]
fn code_with_trailing_comment_keeps_both_flags() {
    let result = lines("c", "int x = 1; // init x\n");
    assert_eq!(flags(&result[0]), (true, true, false));
    let c: Counts = result.iter().collect();
    assert_eq!(c.code, 1);
    assert_eq!(c.comment, 0);
}

#[test]
fn empty_file_has_no_lines() {
    assert!(lines("c", "").is_empty());
    assert_eq!(count("c", ""), Counts::default());
}

#[test]
fn missing_trailing_newline_still_counts_last_line() {
    let c = count("c", "int x;\nint y;");
    assert_eq!(c.code, 2);
}

#[test]
fn crlf_line_endings() {
    let c = count("c", "int x;\r\n// note\r\n\r\n");
    assert_eq!(c.code, 1);
    assert_eq!(c.comment, 1);
    assert_eq!(c.blank, 1);
}

#[test]
fn indented_line_comment() {
    let result = lines("c", "    // indented\n");
    assert_eq!(flags(&result[0]), (false, true, false));
}

#[test]
fn mixed_blank_code_comment() {
    let c = count("c", "\nint x = 1;\n// comment\n\nint y = 2; // trailing\n");
    assert_eq!(c.blank, 2);
    assert_eq!(c.code, 2);
    assert_eq!(c.comment, 1);
}

// ─── strings ─────────────────────────────────────────────────────────

#[test]
fn comment_marker_inside_double_string() {
    let c = count("c", "char *s = \"// not a comment\";\n");
    assert_eq!(c.code, 1);
    assert_eq!(c.comment, 0);
    assert!(!lines("c", "char *s = \"// x\";\n")[0].comment);
}

#[test]
fn comment_marker_inside_single_string() {
    let result = lines("javascript", "var s = '// not a comment';\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn escaped_quote_in_string() {
    let result = lines("c", "char *s = \"he said \\\"// hi\\\"\";\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn block_comment_inside_string() {
    let result = lines("c", "char *s = \"/* not a comment */\";\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn single_line_string_closes_at_end_of_line() {
    let result = lines("c", "char *s = \"oops\n// real comment\n");
    assert_eq!(flags(&result[1]), (false, true, false));
}

#[test]
fn unterminated_multiline_string_runs_to_eof() {
    let c = count("rust", "let s = \"open\n// still string\nend");
    assert_eq!(c.code, 3);
    assert_eq!(c.comment, 0);
}

#[test]
fn rust_raw_string_hides_comment_markers() {
    let result = lines("rust", "let s = r#\"/* not */ // nope\"#;\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn rust_lifetime_not_string() {
    let result = lines("rust", "fn foo<'a>(x: &'a str) -> &'a str { // body\n");
    assert_eq!(flags(&result[0]), (true, true, false));
}

#[test]
fn rust_char_literal_quote_not_string() {
    let result = lines("rust", "let q = '\"';\n// comment\nlet s = \"x\";\n");
    assert_eq!(flags(&result[0]), (true, false, false));
    assert_eq!(flags(&result[1]), (false, true, false));
    assert_eq!(flags(&result[2]), (true, false, false));

    let escaped = lines("rust", "let q = b'\\\"';\n// comment\n");
    assert_eq!(flags(&escaped[1]), (false, true, false));
}

#[test]
fn no_comment_language() {
    let c = count("json", "{\"key\": \"// value\"}\n");
    assert_eq!(c.code, 1);
    assert_eq!(c.comment, 0);
}

// ─── block comments ──────────────────────────────────────────────────

#[test]
fn single_line_block_comment() {
    assert_eq!(count("c", "/* comment */\n").comment, 1);
}

#[test]
fn multi_line_block_comment() {
    let c = count("c", "/*\n * line 1\n * line 2\n */\n");
    assert_eq!(c.comment, 4);
    assert_eq!(c.code, 0);
}

#[test]
fn code_before_block_comment() {
    let result = lines("c", "int x = 1; /* comment */\n");
    assert_eq!(flags(&result[0]), (true, true, false));
}

#[test]
fn blank_line_inside_block_comment_is_blank() {
    let c = count("c", "/*\n\n */\n");
    assert_eq!(c.comment, 2);
    assert_eq!(c.blank, 1);
}

#[test]
fn nestable_comment_spans_inner_close() {
    let result = lines("rust", "/* a /* b */ c */");
    assert_eq!(result.len(), 1);
    assert_eq!(flags(&result[0]), (false, true, false));
}

#[test]
fn non_nestable_comment_closes_at_first_end() {
    let result = lines("c", "/* a /* b */ c */");
    assert_eq!(flags(&result[0]), (true, true, false));
}

#[test]
fn nested_block_comments_multiline() {
    let c = count("rust", "/* outer\n/* inner */\nstill comment\n*/\ncode();\n");
    assert_eq!(c.comment, 4);
    assert_eq!(c.code, 1);
}

#[test]
fn unterminated_block_comment_is_all_comment() {
    let result = lines("c", "/* never\nclosed\n  at all");
    assert_eq!(result.len(), 3);
    for line in &result {
        assert_eq!(flags(line), (false, true, false));
    }
}

#[test]
fn lua_block_comment_beats_line_comment() {
    let c = count("lua", "--[[ block\nstill block\n]]\nprint(1)\n");
    assert_eq!(c.comment, 3);
    assert_eq!(c.code, 1);
}

// ─── language quirks ─────────────────────────────────────────────────

#[test]
fn python_triple_quote_assignment_is_code() {
    let c = count("python", "s = \"\"\"hello\nworld\"\"\"\n");
    assert_eq!(c.code, 2);
    assert_eq!(c.comment, 0);
}

#[test]
fn python_docstring_is_comment() {
    let text = "def f():\n    \"\"\"Doc.\n    More.\n    \"\"\"\n    return 1\n";
    let c = count("python", text);
    assert_eq!(c.code, 2);
    assert_eq!(c.comment, 3);
}

#[test]
fn python_docstring_as_code_when_disabled() {
    let text = "def f():\n    \"\"\"Doc.\n    \"\"\"\n    return 1\n";
    let options = ClassifyOptions {
        count_doc_strings: false,
    };
    let c: Counts = classify_lines(text.as_bytes(), profile("python"), &options, 0)
        .iter()
        .collect();
    assert_eq!(c.code, 4);
    assert_eq!(c.comment, 0);
}

#[test]
fn python_hash_inside_single_quotes() {
    let result = lines("python", "s = '# not a comment'\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn haskell_pragma_is_code() {
    let c = count("haskell", "{-# LANGUAGE OverloadedStrings #-}\nmodule Main where\n");
    assert_eq!(c.code, 2);
    assert_eq!(c.comment, 0);
}

#[test]
fn haskell_operator_not_comment() {
    let result = lines("haskell", "x = y --> z\n");
    assert_eq!(flags(&result[0]), (true, false, false));
}

#[test]
fn haskell_comments() {
    let c = count("haskell", "-- line\n--- section\n{- block -}\n");
    assert_eq!(c.comment, 3);
}

#[test]
fn batch_multiple_comment_markers() {
    let c = count("batch", ":: comment\nrem comment\nREM comment\necho hello\n");
    assert_eq!(c.comment, 3);
    assert_eq!(c.code, 1);
}

#[test]
fn shebang_is_code() {
    let c = count("python", "#!/usr/bin/env python3\n# comment\nprint('hi')\n");
    assert_eq!(c.code, 2);
    assert_eq!(c.comment, 1);
}

#[test]
fn lines_carry_host_language() {
    assert!(lines("c", "int x;\n// y\n\n").iter().all(|l| l.language == "c"));
}

// ─── properties ──────────────────────────────────────────────────────

fn expected_lines(text: &str) -> usize {
    let newlines = text.bytes().filter(|&b| b == b'\n').count();
    if text.is_empty() || text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

proptest! {
    #[test]
    fn every_line_is_blank_or_not(
        text in "[a /*\"'#\\\\\n\t{}-]{0,200}",
        id in prop::sample::select(vec!["c", "rust", "python", "haskell", "html"]),
    ) {
        let result = lines(id, &text);
        prop_assert_eq!(result.len(), expected_lines(&text));

        let physical: Vec<&str> = text.split('\n').collect();
        for (line, raw) in result.iter().zip(&physical) {
            prop_assert_eq!(line.blank, !(line.code || line.comment));
            prop_assert_eq!(line.blank, raw.trim_ascii().is_empty());
        }

        let c: Counts = result.iter().collect();
        prop_assert_eq!(c.total(), result.len());
    }
}
