//! Command Table (§4.3): a static, insertion-ordered registry mapping
//! canonical names and abbreviations to a [`CommandDescriptor`].
//!
//! Every invocation shape in this crate is matched by a hand-written scanner
//! (see [`crate::args`]) rather than a compiled regex, so the table needs no
//! runtime initialization step — it is a plain `&'static` array, stronger
//! than the "initialize once at startup" requirement of SPEC_FULL.md §5
//! since there is no initialization at all.

use crate::types::{ParseError, Range};

/// Which argument-extraction routine a command's residual argument string
/// should be run through. Stands in for SPEC_FULL.md §3's abstract ordered
/// list of `ArgumentInvocationPattern` regexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// No invocations: any residual argument string is a `TrailingChars`
    /// candidate, reported only if the descriptor's `error_on` asks for it.
    None,
    /// The `write` family: `>>` redirect, `!subcmd` filter, or bare filename,
    /// each with an optional leading run of `++opt` tokens.
    Write,
    /// The `read` family: `++opt` filename, or a bare `!cmd` shell filter.
    Read,
    /// The `delete` family: optional register name, optional count.
    Delete,
    /// The `print`/`Print` family: optional count, optional flags from `{l,#,p}`.
    Print,
    /// The `move`/`copy`/`t` family: a single mandatory destination address.
    Address,
    /// The `substitute`/`global`/`&&` family: the full residual tail captured
    /// verbatim under `pattern`, tokenized later by [`crate::substitute`].
    Pattern,
    /// The `edit` family: the residual argument string must be empty.
    EmptyOnly,
}

/// A per-command fallback range, applied by the parser façade (§4.6) only
/// when no explicit range token preceded the command. Most commands with an
/// absent range simply report `None` to the caller, but the `substitute`
/// family and `global` have a standing default per the §8 worked-scenario
/// table (`:s/foo\/bar/baz/gi` → range `.`; `:g/TODO/delete` → range `%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRange {
    /// Defaults to the current line (`.`).
    CurrentLine,
    /// Defaults to the whole buffer (`%`).
    WholeFile,
}

impl DefaultRange {
    /// Materialize this default as a concrete [`Range`].
    pub fn to_range(self) -> Range {
        match self {
            DefaultRange::CurrentLine => Range::current_line(),
            DefaultRange::WholeFile => Range::whole_file(),
        }
    }
}

/// A single command's static specification (§4.3).
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    /// Canonical long name, e.g. `"write"`.
    pub long: &'static str,
    /// Recognized abbreviation, e.g. `"w"`. May equal `long` when there is none.
    pub short: &'static str,
    /// Stable identifier consumed by a downstream dispatcher.
    pub command_id: &'static str,
    /// Which argument shape this command's residual text is parsed as.
    pub arg_shape: ArgShape,
    /// Disallowed-context codes checked by the Error Classifier (§4.7).
    pub error_on: &'static [ParseError],
    /// Fallback range applied when the command line carried no explicit
    /// range token. `None` for the vast majority of commands.
    pub default_range: Option<DefaultRange>,
}

use ArgShape::*;
use DefaultRange::*;
use ParseError::*;

/// The full command table, in declaration order. Declaration order is load
/// bearing: the Name Resolver (§4.4) returns the earliest-registered prefix
/// match when a command word is ambiguous, so this order must never be
/// treated as incidental.
pub static COMMAND_TABLE: &[CommandDescriptor] = &[
    CommandDescriptor { long: "write", short: "w", command_id: "write_file", arg_shape: Write, error_on: &[], default_range: None },
    CommandDescriptor { long: "wall", short: "wa", command_id: "write_all", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "pwd", short: "pw", command_id: "print_working_dir", arg_shape: None, error_on: &[NoRangeAllowed, NoBangAllowed, TrailingChars], default_range: None },
    CommandDescriptor { long: "buffers", short: "buffers", command_id: "prompt_select_open_file", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "files", short: "files", command_id: "prompt_select_open_file", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "ls", short: "ls", command_id: "prompt_select_open_file", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "map", short: "map", command_id: "map", arg_shape: None, error_on: &[], default_range: None },
    CommandDescriptor { long: "abbreviate", short: "ab", command_id: "abbreviate", arg_shape: None, error_on: &[], default_range: None },
    CommandDescriptor { long: "quit", short: "q", command_id: "quit", arg_shape: None, error_on: &[TrailingChars, NoRangeAllowed], default_range: None },
    CommandDescriptor { long: "qall", short: "qa", command_id: "quit_all", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "wq", short: "wq", command_id: "write_and_quit", arg_shape: None, error_on: &[], default_range: None },
    CommandDescriptor { long: "read", short: "r", command_id: "read_shell_out", arg_shape: Read, error_on: &[], default_range: None },
    CommandDescriptor { long: "enew", short: "ene", command_id: "new_file", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "ascii", short: "as", command_id: "show_ascii_info", arg_shape: None, error_on: &[NoRangeAllowed, NoBangAllowed, TrailingChars], default_range: None },
    CommandDescriptor { long: "file", short: "f", command_id: "file", arg_shape: None, error_on: &[NoRangeAllowed], default_range: None },
    CommandDescriptor { long: "move", short: "move", command_id: "move", arg_shape: Address, error_on: &[NoBangAllowed, InvalidRange], default_range: None },
    CommandDescriptor { long: "copy", short: "co", command_id: "copy", arg_shape: Address, error_on: &[NoBangAllowed, InvalidRange], default_range: None },
    CommandDescriptor { long: "t", short: "t", command_id: "copy", arg_shape: Address, error_on: &[NoBangAllowed, InvalidRange], default_range: None },
    CommandDescriptor { long: "substitute", short: "s", command_id: "substitute", arg_shape: Pattern, error_on: &[], default_range: Some(CurrentLine) },
    CommandDescriptor { long: "&&", short: "&&", command_id: "substitute_repeat", arg_shape: Pattern, error_on: &[], default_range: Some(CurrentLine) },
    CommandDescriptor { long: "shell", short: "sh", command_id: "shell", arg_shape: None, error_on: &[NoRangeAllowed, NoBangAllowed, TrailingChars], default_range: None },
    CommandDescriptor { long: "delete", short: "d", command_id: "delete", arg_shape: Delete, error_on: &[NoBangAllowed], default_range: None },
    CommandDescriptor { long: "global", short: "g", command_id: "global", arg_shape: Pattern, error_on: &[], default_range: Some(WholeFile) },
    CommandDescriptor { long: "print", short: "p", command_id: "print", arg_shape: Print, error_on: &[NoBangAllowed], default_range: None },
    CommandDescriptor { long: "Print", short: "P", command_id: "print", arg_shape: Print, error_on: &[NoBangAllowed], default_range: None },
    CommandDescriptor { long: "browse", short: "bro", command_id: "browse", arg_shape: None, error_on: &[NoBangAllowed, NoRangeAllowed, TrailingChars], default_range: None },
    // error_on diverges from the historical source's `error_on=()`; SPEC_FULL.md §4.5
    // is explicit that non-empty content here is `TrailingChars`, so that governs.
    CommandDescriptor { long: "edit", short: "e", command_id: "edit", arg_shape: EmptyOnly, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: "cquit", short: "cq", command_id: "cquit", arg_shape: None, error_on: &[TrailingChars, NoRangeAllowed], default_range: None },
    CommandDescriptor { long: "xit", short: "x", command_id: "exit", arg_shape: None, error_on: &[], default_range: None },
    CommandDescriptor { long: "exit", short: "exi", command_id: "exit", arg_shape: None, error_on: &[], default_range: None },
    CommandDescriptor { long: "only", short: "on", command_id: "only", arg_shape: None, error_on: &[TrailingChars], default_range: None },
    CommandDescriptor { long: ":", short: ":", command_id: "colon", arg_shape: None, error_on: &[], default_range: None },
    // Carried for table completeness; unreachable via the normal name-resolution
    // path, since a leading `!` is intercepted as `shell_out` before command-name
    // extraction runs (§4.6 step 5), matching the historical source.
    CommandDescriptor { long: "!", short: "!", command_id: "filter", arg_shape: None, error_on: &[], default_range: None },
];
