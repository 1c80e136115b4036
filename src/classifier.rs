//! Error Classifier (§4.7): decides, for each disallowed-context code a
//! descriptor declares, whether that code applies to a particular parse.

use crate::command_table::{ArgShape, CommandDescriptor};
use crate::types::{ArgMap, ParseError, Range};

/// Classify a parsed command against its descriptor's `error_on` list.
///
/// `leftover` is the unconsumed residual text reported by the Argument
/// Extractor (empty string if the shape consumed everything).
pub fn classify(
    descriptor: &CommandDescriptor,
    forced: bool,
    range: &Option<Range>,
    args: &ArgMap,
    leftover: &str,
) -> Vec<ParseError> {
    let mut errors = Vec::new();
    for code in descriptor.error_on {
        let applies = match code {
            ParseError::NoBangAllowed => forced,
            ParseError::TrailingChars => !leftover.is_empty(),
            ParseError::NoRangeAllowed => range.is_some(),
            ParseError::InvalidRange | ParseError::AddressRequired => {
                descriptor.arg_shape == ArgShape::Address && args.is_empty()
            }
            _ => false,
        };
        if applies {
            errors.push(*code);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_table::COMMAND_TABLE;

    fn find(long: &str) -> &'static CommandDescriptor {
        COMMAND_TABLE.iter().find(|d| d.long == long).unwrap()
    }

    #[test]
    fn bang_on_no_bang_command_is_flagged() {
        let d = find("pwd");
        let errors = classify(d, true, &None, &ArgMap::new(), "");
        assert!(errors.contains(&ParseError::NoBangAllowed));
    }

    #[test]
    fn range_on_no_range_command_is_flagged() {
        let d = find("pwd");
        let errors = classify(d, false, &Some(Range::whole_file()), &ArgMap::new(), "");
        assert!(errors.contains(&ParseError::NoRangeAllowed));
    }

    #[test]
    fn leftover_text_is_trailing_chars() {
        let d = find("wall");
        let errors = classify(d, false, &None, &ArgMap::new(), "junk");
        assert!(errors.contains(&ParseError::TrailingChars));
    }

    #[test]
    fn clean_parse_has_no_errors() {
        let d = find("write");
        let mut args = ArgMap::new();
        args.insert("file_name".to_string(), "foo.txt".to_string());
        let errors = classify(d, false, &None, &args, "");
        assert!(errors.is_empty());
    }

    #[test]
    fn copy_without_destination_is_invalid_range() {
        let d = find("copy");
        let errors = classify(d, false, &None, &ArgMap::new(), "");
        assert!(errors.contains(&ParseError::InvalidRange));
    }

    #[test]
    fn copy_with_destination_has_no_range_error() {
        let d = find("copy");
        let mut args = ArgMap::new();
        args.insert("address".to_string(), "30".to_string());
        let errors = classify(d, false, &None, &args, "");
        assert!(!errors.contains(&ParseError::InvalidRange));
    }
}
