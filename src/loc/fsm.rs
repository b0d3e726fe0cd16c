/// Finite state machine steps for line classification.
///
/// Each step looks at the unread bytes of the file and reports how far to
/// advance, which state to move to, and whether the consumed bytes were
/// code or comment. The classifier drives these steps over the whole file
/// and owns line boundaries; no step ever consumes a `\n`.
use super::language::SyntaxProfile;

/// Scanner state. `rule` indexes into the profile's `block_comments` or
/// `strings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Normal,
    LineComment,
    BlockComment { rule: usize, depth: usize },
    InString { rule: usize, doc: bool },
}

/// Result of one step.
#[derive(Debug, PartialEq)]
pub(super) struct Step {
    pub advance: usize,
    pub state: Option<State>,
    pub code: bool,
    pub comment: bool,
}

impl Step {
    fn code(advance: usize, state: Option<State>) -> Self {
        Self {
            advance,
            state,
            code: true,
            comment: false,
        }
    }

    fn comment(advance: usize, state: Option<State>) -> Self {
        Self {
            advance,
            state,
            code: false,
            comment: true,
        }
    }

    /// One plain byte: flagged as `code`/`comment` only when it is not whitespace.
    fn byte(ch: u8, as_comment: bool) -> Self {
        let visible = !ch.is_ascii_whitespace();
        Self {
            advance: 1,
            state: None,
            code: visible && !as_comment,
            comment: visible && as_comment,
        }
    }
}

/// The delimiter that opens a new region at the current position.
enum Opener {
    String(usize),
    Block(usize),
    Line(usize),
}

fn is_line_comment(rest: &[u8], marker: &str, not_before: &str) -> bool {
    if !rest.starts_with(marker.as_bytes()) {
        return false;
    }
    match rest.get(marker.len()) {
        Some(next) => !not_before.as_bytes().contains(next),
        None => true,
    }
}

/// Find the longest delimiter starting at `rest`. Equal lengths prefer
/// strings, then block comments, then line comments.
fn longest_opener(rest: &[u8], profile: &SyntaxProfile) -> Option<Opener> {
    let mut best: Option<(usize, Opener)> = None;
    let mut offer = |len: usize, opener: Opener| {
        if len > 0 && best.as_ref().is_none_or(|(l, _)| len > *l) {
            best = Some((len, opener));
        }
    };

    for (i, s) in profile.strings.iter().enumerate() {
        if rest.starts_with(s.start.as_bytes()) {
            offer(s.start.len(), Opener::String(i));
        }
    }
    for (i, b) in profile.block_comments.iter().enumerate() {
        if rest.starts_with(b.start.as_bytes()) {
            offer(b.start.len(), Opener::Block(i));
        }
    }
    for marker in profile.line_comments {
        if is_line_comment(rest, marker, profile.line_comment_not_before) {
            offer(marker.len(), Opener::Line(marker.len()));
        }
    }

    best.map(|(_, opener)| opener)
}

/// Process the byte(s) at `rest` in `Normal` state.
///
/// `line_start` is true while nothing but whitespace has been seen on the
/// current line; a doc-string delimiter opening the line then classifies
/// the whole string as comment when `doc_strings` is enabled.
pub(super) fn step_normal(
    rest: &[u8],
    profile: &SyntaxProfile,
    line_start: bool,
    doc_strings: bool,
) -> Step {
    match longest_opener(rest, profile) {
        Some(Opener::String(rule)) => {
            let delim = &profile.strings[rule];
            let doc = delim.doc && doc_strings && line_start;
            let state = Some(State::InString { rule, doc });
            if doc {
                Step::comment(delim.start.len(), state)
            } else {
                Step::code(delim.start.len(), state)
            }
        }
        Some(Opener::Block(rule)) => Step::comment(
            profile.block_comments[rule].start.len(),
            Some(State::BlockComment { rule, depth: 1 }),
        ),
        Some(Opener::Line(len)) => Step::comment(len, Some(State::LineComment)),
        None => Step::byte(rest[0], false),
    }
}

/// Process one position inside a string. An escape byte consumes the byte
/// after it unless that byte is a newline.
pub(super) fn step_in_string(rest: &[u8], profile: &SyntaxProfile, rule: usize, doc: bool) -> Step {
    let delim = &profile.strings[rule];
    let hit = |advance, state| {
        if doc {
            Step::comment(advance, state)
        } else {
            Step::code(advance, state)
        }
    };

    if let Some(escape) = delim.escape
        && rest[0] == escape
    {
        let advance = match rest.get(1) {
            Some(b'\n') | None => 1,
            Some(_) => 2,
        };
        return hit(advance, None);
    }

    if rest.starts_with(delim.end.as_bytes()) {
        return hit(delim.end.len(), Some(State::Normal));
    }

    Step::byte(rest[0], doc)
}

/// Process one position inside a block comment. Nestable pairs check for a
/// nested open before the close so that `/* /* */ */` stays balanced.
pub(super) fn step_in_block_comment(
    rest: &[u8],
    profile: &SyntaxProfile,
    rule: usize,
    depth: usize,
) -> Step {
    let pair = &profile.block_comments[rule];

    if pair.nestable && rest.starts_with(pair.start.as_bytes()) {
        return Step::comment(
            pair.start.len(),
            Some(State::BlockComment {
                rule,
                depth: depth + 1,
            }),
        );
    }

    if rest.starts_with(pair.end.as_bytes()) {
        let state = if depth <= 1 {
            State::Normal
        } else {
            State::BlockComment {
                rule,
                depth: depth - 1,
            }
        };
        return Step::comment(pair.end.len(), Some(state));
    }

    Step::byte(rest[0], true)
}

/// Consume the rest of a line comment up to (not including) the newline.
pub(super) fn step_line_comment(rest: &[u8]) -> Step {
    let advance = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let visible = rest[..advance].iter().any(|b| !b.is_ascii_whitespace());
    Step {
        advance,
        state: None,
        code: false,
        comment: visible,
    }
}

#[cfg(test)]
#[path = "fsm_test.rs"]
mod tests;
