//! Substitute Sub-Lexer (§4.5.1): tokenizes the raw tail of a `substitute`,
//! `&&`, or `global`-nested-command pattern into (delimiter, search,
//! replacement, flags, count).
//!
//! Grammar:
//! ```text
//! substitute : short | long
//! short      : FLAGS? COUNT?
//! long       : SEP STRING (SEP STRING? (SEP FLAGS? COUNT?)?)?
//! STRING     : (CHAR | '\' ANY)*
//! SEP        : one of '!$:/&@%' (consistent within one invocation)
//! FLAGS      : characters from {g, i, I}
//! COUNT      : decimal digits
//! ```

use crate::types::ParseError;

const SEPARATORS: &str = "!$:/&@%";
const FLAG_CHARS: &str = "giI";

/// The decoded fields of a substitute invocation. Any field absent because
/// the input ended early is the empty string, never omitted, so callers can
/// always address pattern/replacement/flags/count by position (§4.5.1).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstituteFields {
    /// The search pattern (escape-decoded).
    pub pattern: String,
    /// The replacement text (escape-decoded); empty if omitted.
    pub replacement: String,
    /// Flag characters, drawn from `{g, i, I}`.
    pub flags: String,
    /// Repeat count, as raw decimal digits.
    pub count: String,
}

/// Tokenize a substitute pattern tail.
pub fn parse_substitute(input: &str) -> Result<SubstituteFields, ParseError> {
    let mut chars = input.chars().peekable();
    match chars.peek() {
        Some(c) if SEPARATORS.contains(*c) => parse_long(input),
        _ => parse_short(input),
    }
}

fn parse_short(input: &str) -> Result<SubstituteFields, ParseError> {
    let mut rest = input.trim_start_matches([' ', '\t']);
    let flags_len = rest.chars().take_while(|c| FLAG_CHARS.contains(*c)).count();
    let (flags, remainder) = split_at_chars(rest, flags_len);
    rest = remainder.trim_start_matches([' ', '\t']);
    let count_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    let (count, remainder) = split_at_chars(rest, count_len);
    rest = remainder;

    if !rest.is_empty() {
        return Err(ParseError::TrailingChars);
    }

    Ok(SubstituteFields {
        pattern: String::new(),
        replacement: String::new(),
        flags: flags.to_string(),
        count: count.to_string(),
    })
}

fn parse_long(input: &str) -> Result<SubstituteFields, ParseError> {
    let mut chars = input.chars();
    let delim = chars.next().ok_or(ParseError::TrailingChars)?;
    let mut rest = chars.as_str();

    let mut pattern = String::new();
    let mut replacement = String::new();
    let mut flags = String::new();
    let mut count = String::new();

    if !rest.is_empty() {
        let (p, consumed) = scan_string(rest, delim);
        pattern = p;
        rest = &rest[consumed..];
    }

    if let Some(after_delim) = rest.strip_prefix(delim) {
        rest = after_delim;
        if !rest.is_empty() {
            let (r, consumed) = scan_string(rest, delim);
            replacement = r;
            rest = &rest[consumed..];
        }

        if let Some(after_delim) = rest.strip_prefix(delim) {
            rest = after_delim;
            if !rest.is_empty() {
                let flags_len = rest.chars().take_while(|c| FLAG_CHARS.contains(*c)).count();
                let (f, remainder) = split_at_chars(rest, flags_len);
                flags = f.to_string();
                rest = remainder;

                let count_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
                let (c, remainder) = split_at_chars(rest, count_len);
                count = c.to_string();
                rest = remainder;
            }
        }
    }

    if !rest.is_empty() {
        return Err(ParseError::TrailingChars);
    }

    Ok(SubstituteFields {
        pattern,
        replacement,
        flags,
        count,
    })
}

/// Scan a `STRING` up to (but not including) the next unescaped `delim`,
/// decoding escapes per §4.5.1: `\\` → `\`, `\<delim>` → `<delim>`, any
/// other `\x` passes `\x` through unchanged. Returns `(decoded,
/// bytes_consumed)`; `bytes_consumed` stops short of the delimiter itself
/// (or covers the whole input, at eof), mirroring the source's separate
/// `parse_string`/`match_SEPARATOR` steps so the caller consumes each
/// separator explicitly.
fn scan_string(input: &str, delim: char) -> (String, usize) {
    let mut out = String::new();
    let mut chars = input.chars();
    loop {
        let before_this_char = chars.as_str();
        match chars.next() {
            None => return (out, input.len() - before_this_char.len()),
            Some(c) if c == delim => return (out, input.len() - before_this_char.len()),
            Some('\\') => match chars.next() {
                None => {
                    out.push('\\');
                    return (out, input.len() - chars.as_str().len());
                }
                Some(c2) if c2 == '\\' || c2 == delim => out.push(c2),
                Some(c2) => {
                    out.push('\\');
                    out.push(c2);
                }
            },
            Some(c) => out.push(c),
        }
    }
}

fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    let byte_len: usize = s.chars().take(n).map(|c| c.len_utf8()).sum();
    (&s[..byte_len], &s[byte_len..])
}
