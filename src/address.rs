//! Address Lexer (§4.1): consumes exactly one address expression from the
//! front of the input and reports how many bytes were consumed.

use crate::types::{Address, AddressKind};

/// Consume one address expression from the front of `input`.
///
/// Returns `None` if no recognized address token begins at the cursor — this
/// is not an error, per §4.1; the caller decides whether that's a grammar
/// violation. On success, returns the parsed [`Address`] and the number of
/// bytes consumed from `input`.
pub fn lex_address(input: &str) -> Option<(Address, usize)> {
    let mut rest = input;
    let mut chars = rest.chars();
    let first = chars.next()?;

    let kind = match first {
        '.' => {
            rest = chars.as_str();
            AddressKind::CurrentLine
        }
        '$' => {
            rest = chars.as_str();
            AddressKind::LastLine
        }
        '%' => {
            rest = chars.as_str();
            AddressKind::WholeFile
        }
        '\'' => {
            let mark = chars.next()?;
            if !is_mark_char(mark) {
                return None;
            }
            rest = chars.as_str();
            AddressKind::Mark(mark)
        }
        '/' => {
            let (pattern, closed, consumed) = scan_delimited(chars.as_str(), '/');
            rest = &chars.as_str()[consumed..];
            if closed {
                AddressKind::ForwardSearch(pattern)
            } else {
                AddressKind::OpenForwardSearch(pattern)
            }
        }
        '?' => {
            let (pattern, closed, consumed) = scan_delimited(chars.as_str(), '?');
            rest = &chars.as_str()[consumed..];
            if closed {
                AddressKind::ReverseSearch(pattern)
            } else {
                AddressKind::OpenReverseSearch(pattern)
            }
        }
        c if c.is_ascii_digit() => {
            let digits_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            let (digits, remainder) = split_chars(rest, digits_len);
            rest = remainder;
            let value: u32 = digits.parse().unwrap_or(u32::MAX);
            AddressKind::Numeric(value)
        }
        _ => return None,
    };

    let discard_offsets = matches!(kind, AddressKind::WholeFile);
    let mut address = Address::new(kind);
    let consumed_before_offsets = input.len() - rest.len();
    let (offset, search_offsets, offset_len) = consume_offsets(rest);
    rest = &rest[offset_len..];
    if !discard_offsets {
        address.offset = offset;
        address.search_offsets = search_offsets;
    }

    let total_consumed = input.len() - rest.len();
    debug_assert_eq!(total_consumed, consumed_before_offsets + offset_len);
    Some((address, total_consumed))
}

fn is_mark_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '<' || c == '>'
}

/// Split a `&str` after `n` chars, returning `(prefix, suffix)`.
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let byte_len: usize = s.chars().take(n).map(|c| c.len_utf8()).sum();
    (&s[..byte_len], &s[byte_len..])
}

/// Scan a delimiter-terminated string starting *after* the opening delimiter.
///
/// Escape handling per §4.1: `\\` is a literal backslash, `\<delim>` is a
/// literal delimiter, any other `\x` passes through as `x` (the backslash is
/// stripped). Returns `(decoded_text, found_closing_delimiter, bytes_consumed)`.
pub(crate) fn scan_delimited(input: &str, delim: char) -> (String, bool, usize) {
    let mut out = String::new();
    let mut chars = input.chars();
    loop {
        match chars.next() {
            None => return (out, false, input.len() - chars.as_str().len()),
            Some(c) if c == delim => {
                return (out, true, input.len() - chars.as_str().len());
            }
            Some('\\') => match chars.next() {
                None => {
                    out.push('\\');
                    return (out, false, input.len() - chars.as_str().len());
                }
                Some(c2) if c2 == '\\' || c2 == delim => out.push(c2),
                Some(c2) => out.push(c2),
            },
            Some(c) => out.push(c),
        }
    }
}

/// Consume zero or more offset tokens: signed decimals, bare signs, or
/// trailing search-offsets. Returns `(numeric_sum, search_offsets, bytes_consumed)`.
fn consume_offsets(input: &str) -> (i64, Vec<String>, usize) {
    let mut sum: i64 = 0;
    let mut search_offsets = Vec::new();
    let mut rest = input;

    loop {
        let mut chars = rest.chars();
        match chars.next() {
            Some(sign @ ('+' | '-')) => {
                let after_sign = chars.as_str();
                let digits_len = after_sign.chars().take_while(|c| c.is_ascii_digit()).count();
                if digits_len == 0 {
                    sum += if sign == '+' { 1 } else { -1 };
                    rest = after_sign;
                } else {
                    let (digits, remainder) = split_chars(after_sign, digits_len);
                    let value: i64 = digits.parse().unwrap_or(i64::MAX);
                    sum += if sign == '+' { value } else { -value };
                    rest = remainder;
                }
            }
            Some(delim @ ('/' | '?')) => {
                let after_delim = chars.as_str();
                let (pattern, _closed, consumed) = scan_delimited(after_delim, delim);
                search_offsets.push(pattern);
                rest = &after_delim[consumed..];
            }
            _ => break,
        }
    }

    (sum, search_offsets, input.len() - rest.len())
}
