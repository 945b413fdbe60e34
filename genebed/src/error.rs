//! Errors raised by the interval engine.

use std::fmt::Display;

use thiserror::Error;

/// Why a batch ended up with nothing to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCause {
    /// No records were provided at all.
    NoRecords,
    /// Records were provided, but contig filtering removed every one of them.
    AllFiltered { dropped: usize },
}

impl Display for EmptyCause {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            EmptyCause::NoRecords => write!(f, "no records provided"),
            EmptyCause::AllFiltered { dropped } => {
                write!(
                    f,
                    "all {} records were on excluded contigs",
                    dropped
                )
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// A record lacks one of the fields required for merging, or the value
    /// cannot be written as a BED column.
    #[error("record {index} has a missing or malformed `{field}` field")]
    InputShape { index: usize, field: &'static str },

    /// Nothing left to merge.
    #[error("empty input: {cause}")]
    EmptyInput { cause: EmptyCause },

    /// Records of one gene were found on different contigs.
    #[error("gene `{label}` is located on several contigs ({first}, {other})")]
    CrossContig {
        label: String,
        first: String,
        other: String,
    },
}

impl IntervalError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, IntervalError::EmptyInput { .. })
    }
}
