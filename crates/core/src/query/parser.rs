//! Query parser: whitespace-separated predicates over the atom lexer.

use super::lexer::lex_atom;
use super::{CompareOp, Comparison, Query};
use crate::error::{ParseError, ParseErrorKind};

/// Parses a raw query string into a [`Query`].
///
/// The empty string (and all-whitespace strings) parse to the empty
/// query. Errors carry the character offset and the unconsumed remainder
/// of the input.
pub fn parse(input: &str) -> Result<Query, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut query = Query::default();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let (key, next) = lex_atom(&chars, i)?;
        i = next;

        if chars.get(i) != Some(&':') {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedColon,
                offset: i,
                rest: chars[i..].iter().collect(),
            });
        }
        i += 1;

        let op = match chars.get(i) {
            Some('>') => {
                i += 1;
                CompareOp::Gt
            }
            Some('<') => {
                i += 1;
                CompareOp::Lt
            }
            _ => CompareOp::Eq,
        };

        let (value, next) = lex_atom(&chars, i)?;
        i = next;

        query.ands.push(Comparison {
            key: key.split('.').map(str::to_owned).collect(),
            op,
            value,
        });
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(key: &[&str], op: CompareOp, value: &str) -> Comparison {
        Comparison {
            key: key.iter().map(|s| s.to_string()).collect(),
            op,
            value: value.to_owned(),
        }
    }

    #[test]
    fn test_empty_string_is_the_empty_query() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_is_the_empty_query() {
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_single_predicate() {
        assert_eq!(
            parse("a:1").unwrap().ands,
            vec![cmp(&["a"], CompareOp::Eq, "1")]
        );
    }

    #[test]
    fn test_dotted_keys_split_into_paths() {
        assert_eq!(
            parse("a.b:1 c:2").unwrap().ands,
            vec![
                cmp(&["a", "b"], CompareOp::Eq, "1"),
                cmp(&["c"], CompareOp::Eq, "2"),
            ]
        );
    }

    #[test]
    fn test_explicit_operators() {
        assert_eq!(
            parse("a.b:1 c:>2").unwrap().ands,
            vec![
                cmp(&["a", "b"], CompareOp::Eq, "1"),
                cmp(&["c"], CompareOp::Gt, "2"),
            ]
        );
        assert_eq!(
            parse("age:<50").unwrap().ands,
            vec![cmp(&["age"], CompareOp::Lt, "50")]
        );
    }

    #[test]
    fn test_quoted_atoms_keep_whitespace() {
        assert_eq!(
            parse("\" a \":\" n \"").unwrap().ands,
            vec![cmp(&[" a "], CompareOp::Eq, " n ")]
        );
    }

    #[test]
    fn test_trailing_whitespace_is_accepted() {
        assert_eq!(parse("a:1  ").unwrap().ands.len(), 1);
    }

    #[test]
    fn test_missing_colon_reports_offset_and_rest() {
        let err = parse("abc def:1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedColon);
        assert_eq!(err.offset, 3);
        assert_eq!(err.rest, " def:1");
    }

    #[test]
    fn test_key_must_be_an_atom() {
        let err = parse(":1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoAtom);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_unterminated_quoted_value_fails() {
        let err = parse("a:\"unclosed").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    }
}
