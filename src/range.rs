//! Range Parser (§4.2): composes one or two addresses with a separator into
//! a [`Range`], in either prefix (followed by a command) or standalone
//! (goto) position.

use crate::address::lex_address;
use crate::types::{Address, AddressKind, Range, Separator};

/// Consume a prefix range from the front of `input` — the form used when a
/// range may be followed by a command name. Open-ended search addresses
/// (`/text` or `?text` with no closing delimiter) are not accepted here;
/// they are only valid in [`parse_standalone_range`].
///
/// Returns `(None, 0)` if no range begins at the cursor.
pub fn parse_prefix_range(input: &str) -> (Option<Range>, usize) {
    parse_range(input, false)
}

/// Parse `input` as a standalone range — the entire string must be
/// consumed. Open-ended search addresses are accepted here since a bare
/// `/text` or `?text` line is itself a valid goto target.
pub fn parse_standalone_range(input: &str) -> Option<Range> {
    let (range, consumed) = parse_range(input, true);
    if consumed == input.len() {
        range
    } else {
        None
    }
}

fn lex_one_address(input: &str, allow_open_ended: bool) -> Option<(Address, usize)> {
    let (addr, len) = lex_address(input)?;
    if !allow_open_ended
        && matches!(
            addr.kind,
            AddressKind::OpenForwardSearch(_) | AddressKind::OpenReverseSearch(_)
        )
    {
        return None;
    }
    Some((addr, len))
}

fn parse_range(input: &str, allow_open_ended: bool) -> (Option<Range>, usize) {
    let left = lex_one_address(input, allow_open_ended);
    let mut pos = left.as_ref().map(|(_, len)| *len).unwrap_or(0);
    let left_addr = left.map(|(a, _)| a);

    let sep_char = input[pos..].chars().next();
    let separator = match sep_char {
        Some(',') => Some(Separator::Comma),
        Some(';') => Some(Separator::Semicolon),
        _ => None,
    };

    if separator.is_none() {
        return match left_addr {
            None => (None, 0),
            Some(addr) => {
                let whole_file = matches!(addr.kind, AddressKind::WholeFile);
                let range = if whole_file {
                    Range::whole_file()
                } else {
                    Range {
                        left: Some(addr),
                        separator: None,
                        right: None,
                        incomplete: false,
                    }
                };
                (Some(range), pos)
            }
        };
    }

    // Consume the separator.
    pos += 1;
    let right = lex_one_address(&input[pos..], allow_open_ended);
    let right_len = right.as_ref().map(|(_, len)| *len).unwrap_or(0);
    pos += right_len;
    let right_addr = right.map(|(a, _)| a);

    let incomplete = left_addr.is_none() || right_addr.is_none();
    let whole_file = matches!(left_addr.as_ref().map(|a| &a.kind), Some(AddressKind::WholeFile))
        || matches!(right_addr.as_ref().map(|a| &a.kind), Some(AddressKind::WholeFile));

    if whole_file {
        return (Some(Range::whole_file()), pos);
    }

    let left_addr = left_addr.unwrap_or_else(|| Address::new(AddressKind::CurrentLine));
    let right_addr = right_addr.unwrap_or_else(|| Address::new(AddressKind::CurrentLine));

    let range = Range {
        left: Some(left_addr),
        separator,
        right: Some(right_addr),
        incomplete,
    };
    (Some(range), pos)
}
