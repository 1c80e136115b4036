//! Argument Extractor (§4.5): turns the residual argument string (after
//! command name and `!`) into a named-argument map, per the descriptor's
//! [`ArgShape`].

use crate::command_table::ArgShape;
use crate::range::parse_prefix_range;
use crate::types::ArgMap;

/// Extract arguments from `args` according to `shape`.
///
/// Returns `(map, leftover)`. `leftover` is whatever text the shape's
/// grammar did not account for; the Error Classifier (§4.7) turns a
/// non-empty `leftover` into `TrailingChars` for descriptors that declare
/// that code in their `error_on` list.
pub fn extract_args(args: &str, shape: ArgShape) -> (ArgMap, String) {
    match shape {
        ArgShape::None => (ArgMap::new(), args.trim().to_string()),
        ArgShape::Write => extract_write(args),
        ArgShape::Read => extract_read(args),
        ArgShape::Delete => extract_delete(args),
        ArgShape::Print => extract_print(args),
        ArgShape::Address => extract_address(args),
        ArgShape::Pattern => (extract_pattern(args), String::new()),
        ArgShape::EmptyOnly => (ArgMap::new(), args.trim().to_string()),
    }
}

fn extract_write(args: &str) -> (ArgMap, String) {
    let mut map = ArgMap::new();
    let (plusplus, rest) = take_plusplus_args(args);
    if !plusplus.is_empty() {
        map.insert("plusplus_args".to_string(), plusplus);
    }
    let rest = rest.trim_start();

    if let Some(target) = rest.strip_prefix(">>") {
        map.insert("operator".to_string(), ">>".to_string());
        let target = target.trim();
        if !target.is_empty() {
            map.insert("target_redirect".to_string(), target.to_string());
        }
    } else if let Some(subcmd) = rest.strip_prefix('!') {
        map.insert("operator".to_string(), "!".to_string());
        map.insert("subcmd".to_string(), subcmd.to_string());
    } else if !rest.is_empty() {
        map.insert("file_name".to_string(), rest.to_string());
    }
    (map, String::new())
}

fn extract_read(args: &str) -> (ArgMap, String) {
    let mut map = ArgMap::new();
    if let Some(subcmd) = args.trim_start().strip_prefix('!') {
        map.insert("name".to_string(), subcmd.to_string());
        return (map, String::new());
    }
    let (plusplus, rest) = take_plusplus_args(args);
    if !plusplus.is_empty() {
        map.insert("plusplus".to_string(), plusplus);
    }
    let rest = rest.trim();
    if !rest.is_empty() {
        map.insert("name".to_string(), rest.to_string());
    }
    (map, String::new())
}

fn extract_delete(args: &str) -> (ArgMap, String) {
    let mut map = ArgMap::new();
    let rest = args.trim_start();
    let mut chars = rest.chars();
    let mut rest2 = rest;
    if let Some(c) = chars.next() {
        if c.is_ascii_alphanumeric() {
            map.insert("register".to_string(), c.to_string());
            rest2 = chars.as_str();
        }
    }
    let rest2 = rest2.trim_start();
    let count_len = rest2.chars().take_while(|c| c.is_ascii_digit()).count();
    let count: String = rest2.chars().take(count_len).collect();
    let leftover: String = rest2.chars().skip(count_len).collect();
    if !count.is_empty() {
        map.insert("count".to_string(), count);
    }
    (map, leftover.trim().to_string())
}

fn extract_print(args: &str) -> (ArgMap, String) {
    let mut map = ArgMap::new();
    let rest = args.trim();
    let count_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    let count: String = rest.chars().take(count_len).collect();
    let remainder: String = rest.chars().skip(count_len).collect();
    if !count.is_empty() {
        map.insert("count".to_string(), count);
    }
    let remainder = remainder.trim();
    let flags: String = remainder
        .chars()
        .take_while(|c| matches!(c, 'l' | '#' | 'p'))
        .collect();
    let leftover: String = remainder.chars().skip(flags.chars().count()).collect();
    if !flags.is_empty() {
        map.insert("flags".to_string(), flags);
    }
    (map, leftover.trim().to_string())
}

fn extract_address(args: &str) -> (ArgMap, String) {
    let mut map = ArgMap::new();
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return (map, String::new());
    }
    let (range, consumed) = parse_prefix_range(trimmed);
    if range.is_some() && consumed > 0 {
        map.insert("address".to_string(), trimmed[..consumed].to_string());
        return (map, trimmed[consumed..].trim().to_string());
    }
    (map, trimmed.to_string())
}

fn extract_pattern(args: &str) -> ArgMap {
    let mut map = ArgMap::new();
    if !args.is_empty() {
        map.insert("pattern".to_string(), args.to_string());
    }
    map
}

/// Consume a leading run of whitespace-separated `++opt` tokens.
fn take_plusplus_args(input: &str) -> (String, &str) {
    let mut rest = input;
    let mut collected = Vec::new();
    loop {
        let trimmed = rest.trim_start();
        let Some(after) = trimmed.strip_prefix("++") else {
            return (collected.join(" "), rest);
        };
        let token_len = after
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count();
        if token_len == 0 {
            return (collected.join(" "), rest);
        }
        let token: String = after.chars().take(token_len).collect();
        collected.push(format!("++{token}"));
        let consumed_bytes = trimmed.len() - after.len() + token.len();
        rest = &trimmed[consumed_bytes..];
    }
}
