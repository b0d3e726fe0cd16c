/// The `lang_profile!` macro for declaring syntax profiles.
///
/// Every section after the id and display name is optional but must
/// appear in this order:
///
/// - `ext: [...]`: file extensions (without the leading dot)
/// - `files: [...]`: exact file names (e.g. `Makefile`)
/// - `line: [...]`: line comment markers
/// - `not_before: "..."`: bytes that cancel a line comment marker when
///   they follow it (Haskell `-->` is an operator, not a comment)
/// - `block: [...]`: `BlockComment` values built with `block`/`nested`
/// - `strings: [...]`: `StringDelim` values built with `quoted`/`text`/`raw`/`doc`
/// - `embed: [...]`: `EmbeddingRule` values built with `tag`
/// - `shebangs: [...]`: interpreter names for `#!` detection
macro_rules! lang_profile {
    (@or $default:expr) => {
        $default
    };
    (@or $default:expr, $value:expr) => {
        $value
    };
    ($id:expr, $name:expr
     $(, ext: [$($ext:expr),* $(,)?])?
     $(, files: [$($f:expr),* $(,)?])?
     $(, line: [$($lc:expr),* $(,)?])?
     $(, not_before: $nb:expr)?
     $(, block: [$($bc:expr),* $(,)?])?
     $(, strings: [$($s:expr),* $(,)?])?
     $(, embed: [$($e:expr),* $(,)?])?
     $(, shebangs: [$($sh:expr),* $(,)?])?
     $(,)?
    ) => {
        SyntaxProfile {
            id: $id,
            name: $name,
            extensions: &[$($($ext),*)?],
            filenames: &[$($($f),*)?],
            line_comments: &[$($($lc),*)?],
            line_comment_not_before: lang_profile!(@or "" $(, $nb)?),
            block_comments: &[$($($bc),*)?],
            strings: &[$($($s),*)?],
            embeddings: &[$($($e),*)?],
            shebangs: &[$($($sh),*)?],
        }
    };
}

pub(super) use lang_profile;
