use cocomo_scan_domain::{Accumulator, ScanProfile, model::tags};
use cocomo_scan_shared_kernel::{FunctionCount, LineCount};

/// Unconditional declaration prefixes.
const DECLARATION_PREFIXES: [&str; 2] = ["sub", "function"];
/// Visibility prefixes; these only count when the line also opens a block.
const VISIBILITY_PREFIXES: [&str; 3] = ["public", "private", "protected"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Non-blank lines only.
    Plain,
    /// Non-blank lines plus the function heuristic.
    Code,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub lines: LineCount,
    pub functions: FunctionCount,
}

/// Physical lines of `text`; `\n`, `\r\n` and a lone `\r` all end a line.
///
/// A `\r\n` pair produces an extra empty piece, which every caller drops as blank.
pub fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Heuristic, non-parsing check on a trimmed, lower-cased line.
pub fn is_function_declaration(line: &str) -> bool {
    DECLARATION_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        || (VISIBILITY_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) && line.contains('{'))
}

pub fn count_text(text: &str, mode: Mode) -> TextCounts {
    let mut counts = TextCounts::default();
    for line in physical_lines(text) {
        let work = line.trim().to_lowercase();
        if work.is_empty() {
            continue;
        }
        if mode == Mode::Code && is_function_declaration(&work) {
            counts.functions.bump();
        }
        counts.lines.bump();
    }
    counts
}

/// Source file: `LOC_<ext>`, `LOC`, `functions_<ext>` and `functions`.
pub fn record_code(text: &str, extension: &str, acc: &mut dyn Accumulator) {
    let counts = count_text(text, Mode::Code);
    acc.add(&tags::loc(extension), counts.lines.value());
    acc.add(tags::LOC, counts.lines.value());
    acc.add(&tags::functions(extension), counts.functions.value());
    acc.add(tags::FUNCTIONS, counts.functions.value());
}

/// Plain text file: `LOC_other` and `LOC`.
pub fn record_plain(text: &str, acc: &mut dyn Accumulator) {
    let counts = count_text(text, Mode::Plain);
    acc.add(&tags::loc(tags::PLAIN_LANGUAGE), counts.lines.value());
    acc.add(tags::LOC, counts.lines.value());
}

/// Bump the category of every configured keyword found in `line` (lower-cased).
pub fn record_keywords(line: &str, profile: &ScanProfile, acc: &mut dyn Accumulator) {
    for category in profile.categories_in(line) {
        acc.bump(category);
    }
}
