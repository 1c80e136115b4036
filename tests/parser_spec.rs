//! Integration tests encoding the worked-scenario table (SPEC_FULL.md §8).

use exline::types::{AddressKind, ParseError, Separator};
use exline::{parse, Range};

#[test]
fn bare_colon_is_nop() {
    let p = parse(":");
    assert_eq!(p.command_id, "nop");
    assert!(!p.forced);
    assert_eq!(p.range, Some(Range::current_line()));
    assert!(p.args.is_empty());
    assert!(p.parse_errors.is_empty());
}

#[test]
fn numeric_goto() {
    let p = parse(":100");
    assert_eq!(p.command_id, "goto");
    assert!(!p.forced);
    let range = p.range.unwrap();
    assert_eq!(range.left.unwrap().kind, AddressKind::Numeric(100));
    assert!(range.right.is_none());
    assert!(p.args.is_empty());
    assert!(p.parse_errors.is_empty());
}

#[test]
fn search_with_offsets_goto() {
    let p = parse(":/foo/+10,$-5");
    assert_eq!(p.command_id, "goto");
    let range = p.range.unwrap();
    let left = range.left.unwrap();
    assert_eq!(left.kind, AddressKind::ForwardSearch("foo".to_string()));
    assert_eq!(left.offset, 10);
    assert_eq!(range.separator, Some(Separator::Comma));
    let right = range.right.unwrap();
    assert_eq!(right.kind, AddressKind::LastLine);
    assert_eq!(right.offset, -5);
    assert!(p.parse_errors.is_empty());
}

#[test]
fn forced_write_has_no_errors() {
    let p = parse(":w!");
    assert_eq!(p.command_id, "write_file");
    assert!(p.forced);
    assert!(p.range.is_none());
    assert!(p.args.is_empty());
    assert!(p.parse_errors.is_empty());
}

#[test]
fn forced_pwd_is_rejected() {
    let p = parse(":pwd!");
    assert_eq!(p.command_id, "print_working_dir");
    assert!(p.forced);
    assert!(p.range.is_none());
    assert!(p.args.is_empty());
    assert_eq!(p.parse_errors, vec![ParseError::NoBangAllowed]);
}

#[test]
fn copy_with_two_sided_range_and_destination() {
    let p = parse(":10,20copy30");
    assert_eq!(p.command_id, "copy");
    assert!(!p.forced);
    let range = p.range.unwrap();
    assert_eq!(range.left.unwrap().kind, AddressKind::Numeric(10));
    assert_eq!(range.separator, Some(Separator::Comma));
    assert_eq!(range.right.unwrap().kind, AddressKind::Numeric(20));
    assert_eq!(p.args.get("address").unwrap(), "30");
    assert!(p.parse_errors.is_empty());
}

#[test]
fn substitute_long_form_captures_full_pattern_tail() {
    let p = parse(r":s/foo\/bar/baz/gi");
    assert_eq!(p.command_id, "substitute");
    assert!(!p.forced);
    // No explicit range token appears in the input; `substitute` defaults an
    // omitted range to the current line per the worked-scenario table (§8).
    assert_eq!(p.range, Some(Range::current_line()));
    assert_eq!(p.args.get("pattern").unwrap(), r"/foo\/bar/baz/gi");
    assert!(p.parse_errors.is_empty());
}

#[test]
fn bare_bang_is_shell_out() {
    let p = parse(":!ls -la");
    assert_eq!(p.command_id, "shell_out");
    assert!(!p.forced);
    assert!(p.range.is_none());
    assert_eq!(p.args.get("shell_cmd").unwrap(), "ls -la");
    assert!(p.parse_errors.is_empty());
}

#[test]
fn global_with_pattern_and_nested_delete() {
    let p = parse(":g/TODO/delete");
    assert_eq!(p.command_id, "global");
    assert!(!p.forced);
    // No explicit range token appears in the input; `global` defaults an
    // omitted range to the whole buffer per the worked-scenario table (§8).
    assert_eq!(p.range, Some(Range::whole_file()));
    assert_eq!(p.args.get("pattern").unwrap(), "/TODO/delete");
    assert!(p.parse_errors.is_empty());
}

#[test]
fn lone_ampersand_repeats_last_substitute() {
    let p = parse(":&");
    assert_eq!(p.command_id, "substitute_repeat");
    assert!(!p.forced);
    assert_eq!(p.range, Some(Range::current_line()));
}

#[test]
fn two_sided_numeric_goto() {
    let p = parse(":100,200");
    assert_eq!(p.command_id, "goto");
    let range = p.range.unwrap();
    assert_eq!(range.left.unwrap().kind, AddressKind::Numeric(100));
    assert_eq!(range.separator, Some(Separator::Comma));
    assert_eq!(range.right.unwrap().kind, AddressKind::Numeric(200));
    assert!(p.args.is_empty());
    assert!(p.parse_errors.is_empty());
}
