use super::embed;
use super::fsm::{State, step_in_block_comment, step_in_string, step_line_comment, step_normal};
use super::language::SyntaxProfile;
use super::stats::LineStats;

/// Knobs for a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Count documentation strings (Python `"""docstrings"""`) as comments
    /// rather than code.
    pub count_doc_strings: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            count_doc_strings: true,
        }
    }
}

/// Collects finished lines plus the flags of the line being scanned.
pub(super) struct LineSink {
    host: &'static str,
    done: Vec<LineStats>,
    code: bool,
    comment: bool,
    /// The host language put visible bytes on the current line.
    host_seen: bool,
    /// First embedded language that put visible bytes on the current line.
    embedded: Option<&'static str>,
}

impl LineSink {
    fn new(host: &'static str) -> Self {
        Self {
            host,
            done: Vec::new(),
            code: false,
            comment: false,
            host_seen: false,
            embedded: None,
        }
    }

    fn at_line_start(&self) -> bool {
        !self.code && !self.comment
    }

    /// Record host-language flags for the current line.
    pub(super) fn mark(&mut self, code: bool, comment: bool) {
        self.code |= code;
        self.comment |= comment;
        self.host_seen |= code || comment;
    }

    /// Record host markup (an embedding's opening or closing trigger),
    /// which may itself span lines.
    pub(super) fn host_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if b == b'\n' {
                self.end_line();
            } else if !b.is_ascii_whitespace() {
                self.mark(true, false);
            }
        }
    }

    /// Merge a line produced by an embedded scanner into the current line.
    pub(super) fn absorb(&mut self, line: &LineStats) {
        self.code |= line.code;
        self.comment |= line.comment;
        if !line.blank && self.embedded.is_none() {
            self.embedded = Some(line.language);
        }
    }

    /// Append a line that the host never touched.
    pub(super) fn push(&mut self, line: LineStats) {
        self.done.push(line);
    }

    pub(super) fn end_line(&mut self) {
        let language = match self.embedded {
            Some(id) if !self.host_seen => id,
            _ => self.host,
        };
        self.done.push(LineStats::new(self.code, self.comment, language));
        self.code = false;
        self.comment = false;
        self.host_seen = false;
        self.embedded = None;
    }
}

/// Classify every physical line of `text` under `profile`.
///
/// Runs a single iterative scan; only embedded regions start a nested
/// scan, bounded by `embed::MAX_EMBED_DEPTH`. Unterminated strings and
/// comments simply run to end of file.
pub(super) fn classify_lines(
    text: &[u8],
    profile: &'static SyntaxProfile,
    options: &ClassifyOptions,
    depth: usize,
) -> Vec<LineStats> {
    let len = text.len();
    let mut sink = LineSink::new(profile.id);
    let mut state = State::Normal;
    let mut pos = 0;

    // Shebang line is code, not a comment
    if depth == 0 && text.starts_with(b"#!") {
        sink.mark(true, false);
        pos = text.iter().position(|&b| b == b'\n').unwrap_or(len);
    }

    while pos < len {
        if text[pos] == b'\n' {
            sink.end_line();
            state = end_of_line(state, profile);
            pos += 1;
            continue;
        }

        let rest = &text[pos..];

        if state == State::Normal
            && let Some(trigger) = embed::match_start(profile, rest, depth)
        {
            pos = embed::resolve(&trigger, text, pos, &mut sink, options, depth);
            continue;
        }

        let step = match state {
            State::Normal => {
                step_normal(rest, profile, sink.at_line_start(), options.count_doc_strings)
            }
            State::LineComment => step_line_comment(rest),
            State::BlockComment { rule, depth } => step_in_block_comment(rest, profile, rule, depth),
            State::InString { rule, doc } => step_in_string(rest, profile, rule, doc),
        };

        sink.mark(step.code, step.comment);
        if let Some(next) = step.state {
            state = next;
        }
        pos += step.advance;
    }

    if len > 0 && text[len - 1] != b'\n' {
        sink.end_line();
    }

    sink.done
}

/// State carried across a newline. Line comments always end; single-line
/// strings are closed leniently.
fn end_of_line(state: State, profile: &SyntaxProfile) -> State {
    match state {
        State::LineComment => State::Normal,
        State::InString { rule, .. } if !profile.strings[rule].multiline => State::Normal,
        other => other,
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
