//! # exline - a Vim-compatible ex command-line parser
//!
//! Parses a single line of ex command-line text — an optional leading `:`,
//! an optional line range, an optional command name (possibly abbreviated),
//! an optional `!` (force) flag, and command-specific arguments — into a
//! [`ParsedCommand`]. Resolution failure is not a parse failure: an
//! unrecognized command word still yields a `ParsedCommand` with an empty
//! `command_id` and `UnknownCommand` in `parse_errors`.
//!
//! The parser is a pure function: no I/O, no shared mutable state, and no
//! host editor dependency. Resolving an [`Address`] to a concrete line
//! number (searching a buffer, following a mark, anchoring a `;` to the
//! left result) is left to a host-supplied evaluator; this crate only
//! produces the structured [`Range`] describing what to resolve.
//!
//! ## Modules
//!
//! - [`types`] - the data model: addresses, ranges, parsed commands, errors.
//! - [`address`] - the address lexer.
//! - [`range`] - the range parser (prefix and standalone forms).
//! - [`command_table`] - the static command registry.
//! - [`resolver`] - command-name resolution (exact match, prefix match).
//! - [`substitute`] - the `:s`/`:g` pattern sub-lexer.
//! - [`args`] - per-command argument extraction.
//! - [`classifier`] - post-parse error classification.
//! - [`parser`] - the façade tying the above into [`parser::parse`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;
pub use types::*;

pub mod address;
pub mod range;
pub mod command_table;
pub mod resolver;
pub mod substitute;
pub mod args;
pub mod classifier;
pub mod parser;

pub use parser::parse;

/// Convenient imports for consumers embedding this parser.
pub mod prelude {
    pub use crate::types::*;
    pub use crate::parser::parse;
}
