//! Textual integer sequences
//!
//! Accepted forms:
//! - comma list: `3,1,4,1,5`
//! - half-open range: `0..10`

use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

/// Upper bound on the number of elements a single sequence may expand to.
pub const MAX_SEQUENCE_LEN: usize = 1 << 20;

/// Errors produced while parsing a sequence description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// Nothing but whitespace was supplied.
    #[error("empty sequence")]
    Empty,

    /// A list element or range bound is not an integer.
    #[error("invalid integer '{token}': {source}")]
    InvalidInteger {
        /// Offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// Range with `start > end`.
    #[error("reversed range {start}..{end}")]
    ReversedRange {
        /// Range start.
        start: i64,
        /// Range end (exclusive).
        end: i64,
    },

    /// Sequence would hold more than [`MAX_SEQUENCE_LEN`] elements.
    #[error("sequence of {len} elements exceeds the limit of {max}")]
    TooLong {
        /// Requested element count.
        len: u64,
        /// Maximum accepted element count.
        max: usize,
    },
}

/// Parse a comma list or a `start..end` range into its elements.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, SequenceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SequenceError::Empty);
    }

    let values: Vec<i64> = match text.split_once("..") {
        Some((start, end)) => {
            let start = parse_integer(start)?;
            let end = parse_integer(end)?;
            if start > end {
                return Err(SequenceError::ReversedRange { start, end });
            }
            check_len(end.abs_diff(start))?;
            (start..end).collect()
        }
        None => {
            check_len(text.split(',').count() as u64)?;
            text.split(',')
                .map(parse_integer)
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    debug!(len = values.len(), "parsed sequence");
    Ok(values)
}

fn check_len(len: u64) -> Result<(), SequenceError> {
    if len > MAX_SEQUENCE_LEN as u64 {
        return Err(SequenceError::TooLong {
            len,
            max: MAX_SEQUENCE_LEN,
        });
    }
    Ok(())
}

fn parse_integer(token: &str) -> Result<i64, SequenceError> {
    let token = token.trim();
    token
        .parse()
        .map_err(|source| SequenceError::InvalidInteger {
            token: token.to_string(),
            source,
        })
}
