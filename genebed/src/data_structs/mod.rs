//! Core data structures shared by the normalizer, the merge engine and the
//! readers/writers.
//!
//! - [`record`]: [`PositionRecord`](record::PositionRecord) for single gene
//!   position observations, its unvalidated counterpart
//!   [`RawPositionRecord`](record::RawPositionRecord) and the output row
//!   [`MergedInterval`](record::MergedInterval).
//! - [`Strand`]: orientation carried by every record.
//! - [`typedef`]: coordinate type and contig name constants.

mod enums;
pub mod record;
pub mod typedef;


pub use enums::Strand;
