//! Long help text constants for CLI subcommands.

/// Line classification rules and detection order.
pub const COUNT: &str = "\
Count code, comment and blank lines by language.

Every physical line is classified once:
  blank    only whitespace (also inside comments and strings)
  comment  comment text and no code
  code     anything else, including code followed by a comment

Comment markers inside strings are ignored, nested block comments are
tracked where the language allows them, and CSS/JavaScript inside
HTML, Vue and Svelte files are counted with their own rules.

Language detection order:
  1. --force-language
  2. exact file name (Makefile, Dockerfile, CMakeLists.txt)
  3. longest extension (build.gradle.kts before .kts)
  4. shebang interpreter (#!/usr/bin/env python3)
  5. unknown: counted as code/blank, see --exclude-unrecognized

Settings are read from locc.toml in the counted directory (or --config)
and command line flags override them.";

/// Output of `locc languages`.
pub const LANGUAGES: &str = "\
List every supported language id with its display name, extensions
and file names.

Ids are accepted by --language, --force-language and the `languages`
and `extensions` keys of locc.toml.";
