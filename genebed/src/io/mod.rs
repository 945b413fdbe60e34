//! Reading record hand-offs and writing BED output.
//!
//! - [`records`]: position records from JSON, TSV or BED files.
//! - [`bed`]: [`BedWriter`](bed::BedWriter), tab-separated `contig start end
//!   label` rows without a header.

pub mod bed;
pub mod records;
