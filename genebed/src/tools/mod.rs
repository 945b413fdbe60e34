//! Processing stages.
//!
//! - [`normalize`]: per-record contig canonicalization, coordinate ordering
//!   and standard chromosome tagging.
//! - [`natural`]: natural-order comparator for contig names.
//! - [`merge`]: filtering, per-gene merge, extension and sorting.

pub mod merge;
pub mod natural;
pub mod normalize;
