//! Core data types shared across the parser pipeline.

use std::collections::BTreeMap;
use std::fmt;

/// A 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNr(pub u32);

/// The kind of address endpoint recognized by the address lexer (§4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressKind {
    /// `.` — current line.
    CurrentLine,
    /// `$` — last line.
    LastLine,
    /// `%` — whole buffer; only ever resolves to `[1, $]`.
    WholeFile,
    /// Unsigned decimal line number.
    Numeric(u32),
    /// `'x` — a mark name.
    Mark(char),
    /// `/pattern/` — forward search, closed.
    ForwardSearch(String),
    /// `?pattern?` — reverse search, closed.
    ReverseSearch(String),
    /// `/pattern` with no closing delimiter; only valid as the entire input.
    OpenForwardSearch(String),
    /// `?pattern` with no closing delimiter; only valid as the entire input.
    OpenReverseSearch(String),
}

/// One endpoint of a [`Range`], as produced by the address lexer (§4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// What kind of address this is.
    pub kind: AddressKind,
    /// Algebraic sum of numeric/bare-sign offset tokens following the address.
    pub offset: i64,
    /// Trailing search-offset tokens (additional `/…/` or `?…?` after the address).
    pub search_offsets: Vec<String>,
}

impl Address {
    /// Construct an address with no offsets.
    pub fn new(kind: AddressKind) -> Self {
        Address {
            kind,
            offset: 0,
            search_offsets: Vec::new(),
        }
    }
}

/// Separator joining the two sides of a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `,` — both addresses evaluated in the original caret context.
    Comma,
    /// `;` — right address evaluated with context anchored to the left result.
    Semicolon,
}

/// Zero, one, or two addresses describing a line span (§4.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// Left-hand address, if present.
    pub left: Option<Address>,
    /// Separator between left and right, if a separator appeared.
    pub separator: Option<Separator>,
    /// Right-hand address, if present.
    pub right: Option<Address>,
    /// Set when one side of a two-sided range was omitted (e.g. `,10` or `10,`).
    pub incomplete: bool,
}

impl Range {
    /// The whole-buffer range `[1, $]`, produced by a bare `%`.
    pub fn whole_file() -> Self {
        Range {
            left: Some(Address::new(AddressKind::Numeric(1))),
            separator: Some(Separator::Comma),
            right: Some(Address::new(AddressKind::LastLine)),
            incomplete: false,
        }
    }

    /// The single-line range denoting the current line (`.`).
    pub fn current_line() -> Self {
        Range {
            left: Some(Address::new(AddressKind::CurrentLine)),
            separator: None,
            right: None,
            incomplete: false,
        }
    }

    /// True if this range carries no addresses at all.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A named-argument map: short string keys to string values (SPEC_FULL.md §9).
pub type ArgMap = BTreeMap<String, String>;

/// A fully parsed ex command line (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The resolved canonical long name, or a synthesized name (`NOP`, `:`, `!`).
    pub name: String,
    /// Stable command identifier consumed by a downstream dispatcher.
    pub command_id: String,
    /// Whether `!` (force) followed the command name.
    pub forced: bool,
    /// The parsed range, if any was present.
    pub range: Option<Range>,
    /// Extracted arguments.
    pub args: ArgMap,
    /// Accumulated non-fatal parse errors.
    pub parse_errors: Vec<ParseError>,
}

/// Error codes emitted by the parser, numbered per Vim's own `E<code>` convention (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// E492 — the command word did not resolve to any table entry.
    UnknownCommand,
    /// E488 — characters remained after a command that takes no further input.
    TrailingChars,
    /// E477 — `!` followed a command that disallows it.
    NoBangAllowed,
    /// E481 — a range preceded a command that disallows ranges.
    NoRangeAllowed,
    /// E16 — the range text did not form a valid range.
    InvalidRange,
    /// E14 — an address token was malformed.
    InvalidAddress,
    /// E14 — the command requires an address argument and none was given.
    AddressRequired,
    /// E37 — the buffer has unsaved changes (reserved for a future downstream dispatcher).
    UnsavedChanges,
}

impl ParseError {
    /// The Vim `E<code>` numbering for this error kind.
    pub fn code(self) -> u32 {
        match self {
            ParseError::UnknownCommand => 492,
            ParseError::TrailingChars => 488,
            ParseError::NoBangAllowed => 477,
            ParseError::NoRangeAllowed => 481,
            ParseError::InvalidRange => 16,
            ParseError::InvalidAddress => 14,
            ParseError::AddressRequired => 14,
            ParseError::UnsavedChanges => 37,
        }
    }

    fn message(self) -> &'static str {
        match self {
            ParseError::UnknownCommand => "Not an editor command.",
            ParseError::TrailingChars => "Trailing characters.",
            ParseError::NoBangAllowed => "No ! allowed.",
            ParseError::NoRangeAllowed => "No range allowed.",
            ParseError::InvalidRange => "Invalid range.",
            ParseError::InvalidAddress => "Invalid address.",
            ParseError::AddressRequired => "Invalid address.",
            ParseError::UnsavedChanges => "There are unsaved changes.",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ParseError {}
