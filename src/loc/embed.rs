/// Embedded-language regions (CSS and JavaScript inside HTML, Vue, Svelte).
///
/// When the host scanner meets an embedding trigger in `Normal` state, the
/// region up to the closing trigger is classified by a fresh scanner for
/// the embedded language and its lines are spliced into the host output.
use super::classifier::{ClassifyOptions, LineSink, classify_lines};
use super::language::{self, EmbeddingRule, SyntaxProfile};
use super::stats::LineStats;

/// Nesting limit for embedded regions. Triggers found deeper than this are
/// plain host text.
pub(super) const MAX_EMBED_DEPTH: usize = 8;

/// A matched opening trigger.
#[derive(Debug)]
pub(super) struct Trigger {
    rule: &'static EmbeddingRule,
    language: &'static SyntaxProfile,
    /// Length of the whole opening trigger, e.g. `<style type="text/css">`.
    open_len: usize,
}

fn eq_bytes(a: &[u8], b: &[u8], case_insensitive: bool) -> bool {
    if case_insensitive {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

/// Offset of the first occurrence of `needle` in `haystack`.
pub(super) fn find_bytes(haystack: &[u8], needle: &[u8], case_insensitive: bool) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|w| eq_bytes(w, needle, case_insensitive))
}

fn open_trigger(rule: &'static EmbeddingRule, rest: &[u8]) -> Option<Trigger> {
    let start = rule.start.as_bytes();
    let head = rest.get(..start.len())?;
    if !eq_bytes(head, start, rule.case_insensitive) {
        return None;
    }

    // `<style>` or `<style media=...>`, but not `<styles>`
    let after = &rest[start.len()..];
    let close = rule.start_close.as_bytes();
    let at_boundary =
        after.first().is_some_and(|b| b.is_ascii_whitespace()) || after.starts_with(close);
    if !at_boundary {
        return None;
    }

    let close_at = find_bytes(after, close, false)?;
    // Self-closing element: no body
    if after[..close_at].ends_with(b"/") {
        return None;
    }

    let language = language::find(rule.language)?;
    Some(Trigger {
        rule,
        language,
        open_len: start.len() + close_at + close.len(),
    })
}

/// Offset of `rule`'s closing trigger in `bytes`.
pub(super) fn find_end(rule: &EmbeddingRule, bytes: &[u8]) -> Option<usize> {
    find_bytes(bytes, rule.end.as_bytes(), rule.case_insensitive)
}

/// Match an embedding trigger of `profile` at the start of `rest`.
pub(super) fn match_start(profile: &SyntaxProfile, rest: &[u8], depth: usize) -> Option<Trigger> {
    if depth >= MAX_EMBED_DEPTH {
        return None;
    }
    profile
        .embeddings
        .iter()
        .find_map(|rule| open_trigger(rule, rest))
}

/// Classify the embedded region opened at `pos` and splice its lines into
/// `sink`. Returns the offset where host scanning resumes: just past the
/// closing trigger, or end of file when the region is unterminated.
pub(super) fn resolve(
    trigger: &Trigger,
    text: &[u8],
    pos: usize,
    sink: &mut LineSink,
    options: &ClassifyOptions,
    depth: usize,
) -> usize {
    let open_end = pos + trigger.open_len;
    sink.host_bytes(&text[pos..open_end]);

    let rule = trigger.rule;
    let tail = &text[open_end..];
    let (body_len, resume) = match find_end(rule, tail) {
        Some(at) => (at, open_end + at + rule.end.len()),
        None => (tail.len(), text.len()),
    };

    let body = &tail[..body_len];
    let lines = classify_lines(body, trigger.language, options, depth + 1);
    splice(sink, body, &lines);

    sink.host_bytes(&text[open_end + body_len..resume]);
    resume
}

/// Splice embedded lines into the host output. The first line continues
/// the host line holding the opening trigger and the last shares its host
/// line with the closing trigger; lines in between are copied verbatim.
fn splice(sink: &mut LineSink, body: &[u8], lines: &[LineStats]) {
    let newlines = body.iter().filter(|&&b| b == b'\n').count();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            sink.absorb(line);
            if newlines > 0 {
                sink.end_line();
            }
        } else if i < newlines {
            sink.push(*line);
        } else {
            sink.absorb(line);
        }
    }
}

#[cfg(test)]
#[path = "embed_test.rs"]
mod tests;
