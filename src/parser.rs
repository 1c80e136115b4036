//! Command-Line Parser façade (§4.6): `parse(line)` ties the Address Lexer,
//! Range Parser, Name Resolver, Argument Extractor, and Error Classifier
//! into the single public entry point.

use crate::args::extract_args;
use crate::classifier::classify;
use crate::range::{parse_prefix_range, parse_standalone_range};
use crate::resolver::resolve;
use crate::types::{ArgMap, ParseError, ParsedCommand, Range};

/// Parse a single ex command line.
///
/// Always returns a [`ParsedCommand`] — there is no wholly-rejected input
/// short of an empty command name, which surfaces as `command_id = ""` with
/// `UnknownCommand` in `parse_errors` (§3's "non-empty command id iff
/// resolution succeeded" invariant).
pub fn parse(line: &str) -> ParsedCommand {
    let trimmed = line.trim();
    let after_colon = trimmed.strip_prefix(':').unwrap_or(trimmed);
    let body = after_colon.trim_start();

    if body.is_empty() {
        return ParsedCommand {
            name: "NOP".to_string(),
            command_id: "nop".to_string(),
            forced: false,
            range: Some(Range::current_line()),
            args: ArgMap::new(),
            parse_errors: Vec::new(),
        };
    }

    if let Some(range) = parse_standalone_range(body) {
        return ParsedCommand {
            name: "goto".to_string(),
            command_id: "goto".to_string(),
            forced: false,
            range: Some(range),
            args: ArgMap::new(),
            parse_errors: Vec::new(),
        };
    }

    let (range, consumed) = parse_prefix_range(body);
    let rest = &body[consumed..];

    if let Some(shell_cmd) = rest.strip_prefix('!') {
        let mut args = ArgMap::new();
        args.insert("shell_cmd".to_string(), shell_cmd.to_string());
        return ParsedCommand {
            name: "!".to_string(),
            command_id: "shell_out".to_string(),
            forced: false,
            range,
            args,
            parse_errors: Vec::new(),
        };
    }

    let (name, name_len) = extract_command_name(rest);
    let rest = &rest[name_len..];

    if name.is_empty() {
        return unknown_command(rest, range);
    }

    let (forced, rest) = match rest.strip_prefix('!') {
        Some(after) => (true, after),
        None => (false, rest),
    };

    let Some(descriptor) = resolve(&name) else {
        return unknown_command(rest, range);
    };

    let (args, leftover) = extract_args(rest, descriptor.arg_shape);
    let parse_errors = classify(descriptor, forced, &range, &args, &leftover);
    let range = range.or_else(|| descriptor.default_range.map(|d| d.to_range()));

    ParsedCommand {
        name: descriptor.long.to_string(),
        command_id: descriptor.command_id.to_string(),
        forced,
        range,
        args,
        parse_errors,
    }
}

fn unknown_command(attempted: &str, range: Option<Range>) -> ParsedCommand {
    ParsedCommand {
        name: attempted.to_string(),
        command_id: String::new(),
        forced: false,
        range,
        args: ArgMap::new(),
        parse_errors: vec![ParseError::UnknownCommand],
    }
}

/// Extract a command name: `"&&"`, `":"`, and a lone `"&"` are recognized as
/// single-token punctuation names (§4.6 step 6 preserves spec.md:97's
/// "single-character commands (`:`, `!`, `&`) are recognized as names when
/// they appear where a name is expected" verbatim); otherwise the maximal
/// leading run of alphabetic characters is taken (matching the historical
/// source's `takewhile(str.isalpha)`). A lone `&` resolves through the Name
/// Resolver's earliest-prefix-match rule to the `&&`/`substitute_repeat`
/// entry, since no table entry is named plain `"&"`.
fn extract_command_name(input: &str) -> (String, usize) {
    if input.starts_with("&&") {
        return ("&&".to_string(), 2);
    }
    if input.starts_with('&') {
        return ("&".to_string(), 1);
    }
    if input.starts_with(':') {
        return (":".to_string(), 1);
    }
    let alpha_len = input.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    (input.chars().take(alpha_len).collect(), alpha_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_nop() {
        let p = parse("");
        assert_eq!(p.command_id, "nop");
        assert!(p.range.is_some());
    }

    #[test]
    fn bare_colon_is_nop() {
        let p = parse(":");
        assert_eq!(p.command_id, "nop");
    }

    #[test]
    fn colon_with_trailing_space_is_nop() {
        let p = parse(":   ");
        assert_eq!(p.command_id, "nop");
    }

    #[test]
    fn numeric_goto() {
        let p = parse(":100");
        assert_eq!(p.command_id, "goto");
        assert!(p.range.is_some());
    }

    #[test]
    fn search_offset_goto() {
        let p = parse(":/foo/+10,$-5");
        assert_eq!(p.command_id, "goto");
    }

    #[test]
    fn forced_write_sets_forced_flag() {
        let p = parse(":w!");
        assert_eq!(p.command_id, "write_file");
        assert!(p.forced);
    }

    #[test]
    fn forced_pwd_is_flagged_no_bang_allowed() {
        let p = parse(":pwd!");
        assert_eq!(p.command_id, "print_working_dir");
        assert!(p.parse_errors.contains(&ParseError::NoBangAllowed));
    }

    #[test]
    fn copy_with_destination_address() {
        let p = parse(":10,20copy30");
        assert_eq!(p.command_id, "copy");
        assert_eq!(p.args.get("address").unwrap(), "30");
    }

    #[test]
    fn substitute_pattern_captured() {
        let p = parse(r":s/foo\/bar/baz/gi");
        assert_eq!(p.command_id, "substitute");
        assert_eq!(p.args.get("pattern").unwrap(), r"/foo\/bar/baz/gi");
    }

    #[test]
    fn shell_out_bare_bang() {
        let p = parse(":!ls -la");
        assert_eq!(p.command_id, "shell_out");
        assert_eq!(p.args.get("shell_cmd").unwrap(), "ls -la");
    }

    #[test]
    fn global_with_pattern_and_nested_command() {
        let p = parse(":g/TODO/delete");
        assert_eq!(p.command_id, "global");
        assert_eq!(p.args.get("pattern").unwrap(), "/TODO/delete");
    }

    #[test]
    fn two_sided_numeric_goto() {
        let p = parse(":100,200");
        assert_eq!(p.command_id, "goto");
    }

    #[test]
    fn edit_rejects_trailing_content() {
        let p = parse(":edit foo.txt");
        assert_eq!(p.command_id, "edit");
        assert!(p.parse_errors.contains(&ParseError::TrailingChars));
    }

    #[test]
    fn edit_with_no_args_is_clean() {
        let p = parse(":edit");
        assert_eq!(p.command_id, "edit");
        assert!(p.parse_errors.is_empty());
    }

    #[test]
    fn unknown_command_word() {
        let p = parse(":bogus");
        assert_eq!(p.command_id, "");
        assert!(p.parse_errors.contains(&ParseError::UnknownCommand));
    }

    #[test]
    fn unambiguous_prefix_resolves_same_as_long_name() {
        let short = parse(":subs/a/b/");
        let long = parse(":substitute/a/b/");
        assert_eq!(short.command_id, long.command_id);
    }

    #[test]
    fn lone_ampersand_resolves_to_substitute_repeat() {
        let p = parse(":&");
        assert_eq!(p.command_id, "substitute_repeat");
    }

    #[test]
    fn substitute_and_global_default_range_when_absent() {
        let s = parse(r":s/foo/bar/");
        assert_eq!(s.range, Some(Range::current_line()));
        let g = parse(":g/TODO/delete");
        assert_eq!(g.range, Some(Range::whole_file()));
    }
}
