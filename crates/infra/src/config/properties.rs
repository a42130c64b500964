//! Minimal `.properties` style reader/writer.
//!
//! Supported: `key=value` and `key:value`, `#`/`!` comment lines, surrounding
//! whitespace, a trailing `\` continuing the value on the next line, and the
//! backslash escapes (`\=`, `\:`, `\\`, `\t`, `\n`, `\uXXXX`, ...).
//! Whitespace-only separators are not.

use cocomo_scan_shared_kernel::{DomainError, DomainResult};

/// Parse `text` into `(key, value)` pairs in file order.
///
/// Lines without a separator are reported as errors; the caller decides whether
/// to skip them.
pub fn parse(text: &str) -> Vec<DomainResult<(String, String)>> {
    let mut entries = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let (start, mut logical) = match pending.take() {
            Some((start, so_far)) => (start, so_far),
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if continues(line) {
            logical.push_str(&line[..line.len() - 1]);
            pending = Some((start, logical));
            continue;
        }
        logical.push_str(line);
        entries.push(split_entry(start, &logical));
    }

    if let Some((start, logical)) = pending {
        entries.push(split_entry(start, &logical));
    }
    entries
}

fn split_entry(line: usize, logical: &str) -> DomainResult<(String, String)> {
    let Some(pos) = separator_position(logical) else {
        return Err(DomainError::MalformedMapping { line, content: logical.to_string() });
    };
    let key = unescape(logical[..pos].trim());
    if key.is_empty() {
        return Err(DomainError::MalformedMapping { line, content: logical.to_string() });
    }
    Ok((key, unescape(logical[pos + 1..].trim())))
}

/// An odd number of trailing backslashes continues the line; an even one is escaped backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Byte offset of the first `=` or `:` that is not escaped.
fn separator_position(logical: &str) -> Option<usize> {
    let mut escaped = false;
    for (pos, c) in logical.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' | ':' => return Some(pos),
            _ => {}
        }
    }
    None
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// One entry per non-blank line, `#` comments ignored.
pub fn parse_line_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
