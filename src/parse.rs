use std::num::ParseIntError;

use thiserror::Error;

/// Errors from parsing user supplied input like the value list or a traversal order name.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid value {segment:?}: {source}")]
    InvalidValue {
        segment: String,
        source: ParseIntError,
    },

    #[error("unknown traversal order {0:?}, expected \"preorder\", \"inorder\" or \"postorder\"")]
    UnknownOrder(String),
}

/// Parse a comma separated list of node values.
///
/// Segments are trimmed and empty segments are skipped, so `"1, 2,,3"` parses fine.
///
/// # Errors
///
/// Errors when a non-empty segment is not a valid integer.
///
/// # Example
///
/// ```
/// # use tree_walk_labels::parse_values;
/// assert_eq!(parse_values("1,2,3,4,5,6,7")?, [1, 2, 3, 4, 5, 6, 7]);
/// # Ok::<(), tree_walk_labels::ParseError>(())
/// ```
pub fn parse_values(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse().map_err(|source| ParseError::InvalidValue {
                segment: segment.to_owned(),
                source,
            })
        })
        .collect()
}

#[test]
fn parses_plain_list() {
    assert_eq!(parse_values("1,2,3").unwrap(), [1, 2, 3]);
}

#[test]
fn trims_whitespace() {
    assert_eq!(parse_values(" 1 , 2 ,3 ").unwrap(), [1, 2, 3]);
}

#[test]
fn skips_empty_segments() {
    assert_eq!(parse_values("1,,2,").unwrap(), [1, 2]);
}

#[test]
fn empty_input_is_empty_list() {
    assert!(parse_values("").unwrap().is_empty());
    assert!(parse_values(" , ,").unwrap().is_empty());
}

#[test]
fn parses_negative_values() {
    assert_eq!(parse_values("-7,0,42").unwrap(), [-7, 0, 42]);
}

#[test]
fn invalid_segment_is_reported() {
    let error = parse_values("1,two,3").unwrap_err();
    assert!(error.to_string().contains("\"two\""));
}
