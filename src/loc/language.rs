use std::collections::BTreeSet;

use super::lang_macro::lang_profile;

/// Block comment delimiters. `nestable` pairs track depth, so
/// `/* a /* b */ c */` is a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockComment {
    pub start: &'static str,
    pub end: &'static str,
    pub nestable: bool,
}

/// String (or other code-only region) delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDelim {
    pub start: &'static str,
    pub end: &'static str,
    pub escape: Option<u8>,
    /// When false, the string is closed at end of line even without its
    /// end delimiter.
    pub multiline: bool,
    /// Opening a line with this delimiter forms a documentation string.
    pub doc: bool,
}

/// A region of the host file governed by another language's syntax,
/// such as `<style>...</style>` in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingRule {
    /// Trigger prefix, e.g. `<style`.
    pub start: &'static str,
    /// Terminator of the opening trigger, e.g. `>`.
    pub start_close: &'static str,
    /// Closing trigger, e.g. `</style>`.
    pub end: &'static str,
    /// Id of the embedded language's profile.
    pub language: &'static str,
    pub case_insensitive: bool,
}

/// Comment and string syntax for one language.
#[derive(Debug)]
pub struct SyntaxProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub line_comment_not_before: &'static str,
    pub block_comments: &'static [BlockComment],
    pub strings: &'static [StringDelim],
    pub embeddings: &'static [EmbeddingRule],
    pub shebangs: &'static [&'static str],
}

impl SyntaxProfile {
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN.id
    }
}

impl PartialEq for SyntaxProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SyntaxProfile {}

const fn block(start: &'static str, end: &'static str) -> BlockComment {
    BlockComment {
        start,
        end,
        nestable: false,
    }
}

const fn nested(start: &'static str, end: &'static str) -> BlockComment {
    BlockComment {
        start,
        end,
        nestable: true,
    }
}

/// Single-line string with backslash escapes.
const fn quoted(delim: &'static str) -> StringDelim {
    StringDelim {
        start: delim,
        end: delim,
        escape: Some(b'\\'),
        multiline: false,
        doc: false,
    }
}

/// Multi-line string with backslash escapes.
const fn text(delim: &'static str) -> StringDelim {
    StringDelim {
        start: delim,
        end: delim,
        escape: Some(b'\\'),
        multiline: true,
        doc: false,
    }
}

/// Multi-line region without escapes (raw strings, pragmas).
const fn raw(start: &'static str, end: &'static str) -> StringDelim {
    StringDelim {
        start,
        end,
        escape: None,
        multiline: true,
        doc: false,
    }
}

/// Multi-line string that doubles as a documentation string.
const fn doc(delim: &'static str) -> StringDelim {
    StringDelim {
        start: delim,
        end: delim,
        escape: Some(b'\\'),
        multiline: true,
        doc: true,
    }
}

/// Code token that starts like a string delimiter, such as Rust's `'"'`.
/// The region closes at `end` or at end of line.
const fn literal(start: &'static str, end: &'static str) -> StringDelim {
    StringDelim {
        start,
        end,
        escape: None,
        multiline: false,
        doc: false,
    }
}

/// HTML-style element whose body is another language.
const fn tag(start: &'static str, end: &'static str, language: &'static str) -> EmbeddingRule {
    EmbeddingRule {
        start,
        start_close: ">",
        end,
        language,
        case_insensitive: true,
    }
}

/// Sentinel profile for files whose language could not be determined.
/// Lines are classified as code or blank only.
pub static UNKNOWN: SyntaxProfile = lang_profile!("unknown", "Unknown");

pub fn languages() -> &'static [SyntaxProfile] {
    static LANGUAGES: &[SyntaxProfile] = &[
        lang_profile!("rust", "Rust", ext: ["rs"],
                      line: ["//"], block: [nested("/*", "*/")],
                      strings: [text("\""), raw("r#\"", "\"#"),
                                literal("'\"", "'"), literal("'\\\"", "'")]),
        lang_profile!("python", "Python", ext: ["py", "pyi", "pyw"],
                      line: ["#"],
                      strings: [doc("\"\"\""), doc("'''"), quoted("\""), quoted("'")],
                      shebangs: ["python", "python3"]),
        lang_profile!("javascript", "JavaScript", ext: ["js", "mjs", "cjs", "jsx"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'"), text("`")],
                      shebangs: ["node"]),
        lang_profile!("typescript", "TypeScript", ext: ["ts", "mts", "cts", "tsx"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'"), text("`")],
                      shebangs: ["deno", "ts-node"]),
        lang_profile!("java", "Java", ext: ["java"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [text("\"\"\""), quoted("\""), quoted("'")]),
        lang_profile!("c", "C", ext: ["c", "h"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("cpp", "C++", ext: ["cpp", "cxx", "cc", "hpp", "hxx", "hh", "ipp"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("csharp", "C#", ext: ["cs", "csx"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [text("\"\"\""), quoted("\""), quoted("'")]),
        lang_profile!("go", "Go", ext: ["go"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'"), raw("`", "`")]),
        lang_profile!("kotlin", "Kotlin", ext: ["kt", "kts"],
                      line: ["//"], block: [nested("/*", "*/")],
                      strings: [raw("\"\"\"", "\"\"\""), quoted("\""), quoted("'")]),
        lang_profile!("gradle", "Gradle", ext: ["gradle", "gradle.kts"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [raw("\"\"\"", "\"\"\""), raw("'''", "'''"), quoted("\""), quoted("'")]),
        lang_profile!("groovy", "Groovy", ext: ["groovy", "gvy"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [raw("\"\"\"", "\"\"\""), raw("'''", "'''"), quoted("\""), quoted("'")],
                      shebangs: ["groovy"]),
        lang_profile!("scala", "Scala", ext: ["scala", "sc", "sbt"],
                      line: ["//"], block: [nested("/*", "*/")],
                      strings: [raw("\"\"\"", "\"\"\""), quoted("\""), quoted("'")]),
        lang_profile!("swift", "Swift", ext: ["swift"],
                      line: ["//"], block: [nested("/*", "*/")],
                      strings: [text("\"\"\""), quoted("\"")]),
        lang_profile!("objc", "Objective-C", ext: ["m", "mm"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("dart", "Dart", ext: ["dart"],
                      line: ["//"], block: [nested("/*", "*/")],
                      strings: [text("\"\"\""), text("'''"), quoted("\""), quoted("'")]),
        lang_profile!("php", "PHP", ext: ["php", "php3", "php4", "php5", "phtml"],
                      line: ["//", "#"], block: [block("/*", "*/")],
                      strings: [text("\""), text("'")],
                      shebangs: ["php"]),
        lang_profile!("ruby", "Ruby", ext: ["rb", "rake", "gemspec"], files: ["Rakefile", "Gemfile"],
                      line: ["#"], block: [block("=begin", "=end")],
                      strings: [quoted("\""), quoted("'")],
                      shebangs: ["ruby"]),
        lang_profile!("perl", "Perl", ext: ["pl", "pm", "t"],
                      line: ["#"], block: [block("=pod", "=cut")],
                      strings: [quoted("\""), quoted("'")],
                      shebangs: ["perl"]),
        lang_profile!("lua", "Lua", ext: ["lua"],
                      line: ["--"], block: [block("--[[", "]]")],
                      strings: [quoted("\""), quoted("'"), raw("[[", "]]")],
                      shebangs: ["lua"]),
        lang_profile!("r", "R", ext: ["r"],
                      line: ["#"],
                      strings: [text("\""), text("'")],
                      shebangs: ["Rscript"]),
        lang_profile!("julia", "Julia", ext: ["jl"],
                      line: ["#"], block: [nested("#=", "=#")],
                      strings: [doc("\"\"\""), quoted("\"")],
                      shebangs: ["julia"]),
        lang_profile!("haskell", "Haskell", ext: ["hs", "lhs"],
                      line: ["--"], not_before: "!#$%&*+./<=>?@\\^|~",
                      block: [nested("{-", "-}")],
                      strings: [raw("{-#", "#-}"), quoted("\"")],
                      shebangs: ["runhaskell"]),
        lang_profile!("ocaml", "OCaml", ext: ["ml", "mli"],
                      block: [nested("(*", "*)")],
                      strings: [text("\"")]),
        lang_profile!("fsharp", "F#", ext: ["fs", "fsi", "fsx"],
                      line: ["//"], block: [nested("(*", "*)")],
                      strings: [raw("\"\"\"", "\"\"\""), text("\"")]),
        lang_profile!("elixir", "Elixir", ext: ["ex", "exs"],
                      line: ["#"],
                      strings: [doc("\"\"\""), doc("'''"), text("\""), quoted("'")],
                      shebangs: ["elixir"]),
        lang_profile!("erlang", "Erlang", ext: ["erl", "hrl"],
                      line: ["%"],
                      strings: [quoted("\"")],
                      shebangs: ["escript"]),
        lang_profile!("clojure", "Clojure", ext: ["clj", "cljs", "cljc", "edn"],
                      line: [";"],
                      strings: [text("\"")]),
        lang_profile!("nim", "Nim", ext: ["nim", "nims"],
                      line: ["#"], block: [nested("#[", "]#")],
                      strings: [raw("\"\"\"", "\"\"\""), quoted("\"")]),
        lang_profile!("zig", "Zig", ext: ["zig"],
                      line: ["//"],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("sh", "Bourne Shell", ext: ["sh"],
                      line: ["#"],
                      strings: [text("\""), raw("'", "'")],
                      shebangs: ["sh", "dash"]),
        lang_profile!("bash", "Bourne Again Shell", ext: ["bash"], files: [".bashrc", ".bash_profile"],
                      line: ["#"],
                      strings: [text("\""), raw("'", "'")],
                      shebangs: ["bash"]),
        lang_profile!("zsh", "Zsh", ext: ["zsh"], files: [".zshrc"],
                      line: ["#"],
                      strings: [text("\""), raw("'", "'")],
                      shebangs: ["zsh"]),
        lang_profile!("powershell", "PowerShell", ext: ["ps1", "psm1", "psd1"],
                      line: ["#"], block: [block("<#", "#>")],
                      strings: [quoted("\""), quoted("'")],
                      shebangs: ["pwsh"]),
        lang_profile!("batch", "DOS Batch", ext: ["bat", "cmd"],
                      line: ["::", "rem ", "REM ", "Rem ", "@rem ", "@REM "]),
        lang_profile!("sql", "SQL", ext: ["sql"],
                      line: ["--"], block: [block("/*", "*/")],
                      strings: [text("'")]),
        lang_profile!("html", "HTML", ext: ["html", "htm", "xhtml"],
                      block: [block("<!--", "-->")],
                      embed: [tag("<style", "</style>", "css"), tag("<script", "</script>", "javascript")]),
        lang_profile!("vue", "Vue", ext: ["vue"],
                      block: [block("<!--", "-->")],
                      embed: [tag("<style", "</style>", "css"), tag("<script", "</script>", "javascript")]),
        lang_profile!("svelte", "Svelte", ext: ["svelte"],
                      block: [block("<!--", "-->")],
                      embed: [tag("<style", "</style>", "css"), tag("<script", "</script>", "javascript")]),
        lang_profile!("xml", "XML", ext: ["xml", "xsl", "xslt", "xsd", "svg", "csproj", "fsproj", "vbproj", "vcxproj", "plist", "xaml", "pom"],
                      block: [block("<!--", "-->")],
                      strings: [raw("<![CDATA[", "]]>")]),
        lang_profile!("css", "CSS", ext: ["css"],
                      block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("scss", "SCSS", ext: ["scss"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("less", "LESS", ext: ["less"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("markdown", "Markdown", ext: ["md", "markdown"]),
        lang_profile!("json", "JSON", ext: ["json"],
                      strings: [quoted("\"")]),
        lang_profile!("toml", "TOML", ext: ["toml"], files: ["Cargo.lock"],
                      line: ["#"],
                      strings: [text("\"\"\""), raw("'''", "'''"), quoted("\""), quoted("'")]),
        lang_profile!("yaml", "YAML", ext: ["yaml", "yml"],
                      line: ["#"],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("ini", "INI", ext: ["ini", "cfg"],
                      line: [";", "#"]),
        lang_profile!("properties", "Properties", ext: ["properties"],
                      line: ["#", "!"]),
        lang_profile!("makefile", "Makefile", ext: ["mk", "mak"], files: ["Makefile", "makefile", "GNUmakefile"],
                      line: ["#"]),
        lang_profile!("cmake", "CMake", ext: ["cmake"], files: ["CMakeLists.txt"],
                      line: ["#"], block: [block("#[[", "]]")],
                      strings: [text("\"")]),
        lang_profile!("dockerfile", "Dockerfile", ext: ["dockerfile"], files: ["Dockerfile", "Containerfile"],
                      line: ["#"]),
        lang_profile!("terraform", "Terraform", ext: ["tf", "tfvars", "hcl"],
                      line: ["#", "//"], block: [block("/*", "*/")],
                      strings: [quoted("\"")]),
        lang_profile!("proto", "Protocol Buffers", ext: ["proto"],
                      line: ["//"], block: [block("/*", "*/")],
                      strings: [quoted("\""), quoted("'")]),
        lang_profile!("text", "Plain Text", ext: ["txt", "text"]),
    ];
    LANGUAGES
}

/// Look up a profile by id or display name, ignoring ASCII case.
pub fn find(id: &str) -> Option<&'static SyntaxProfile> {
    languages()
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id) || p.name.eq_ignore_ascii_case(id))
}

/// Ids of every language with a syntax profile.
pub fn supported_languages() -> BTreeSet<&'static str> {
    languages().iter().map(|p| p.id).collect()
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
