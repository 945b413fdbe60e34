//! # genebed
//!
//! `genebed` turns gene position records into a canonical, sorted BED
//! interval table. Records usually come from an annotation lookup (one or
//! several observations per gene symbol, Ensembl-style contig names, reverse
//! strand genes with flipped coordinates) and the crate takes care of making
//! them consistent before they are handed to downstream tools.
//!
//! The processing is split in two pure stages:
//!
//! * **Normalization** ([`ContigNormalizer`]): contig names get the `chr`
//!   prefix, `start <= end` is enforced and every record is tagged as lying on
//!   a standard chromosome or not. The set of standard chromosomes is an
//!   injected value ([`StandardContigs`]) so alternate genome builds can be
//!   used.
//! * **Merge and extend** ([`IntervalEngine`], [`build_intervals`]): optional
//!   removal of `alt`/`fix` contigs, one interval per gene spanning all of its
//!   records, optional symmetric flanks and a final sort by contig in natural
//!   order ([`natural_cmp`]) and start position.
//!
//! ## Structure
//!
//! * [`data_structs`]: records, merged intervals and strand.
//! * [`tools`]: the normalizer, the natural-order comparator and the merge
//!   engine.
//! * [`io`]: readers for record hand-offs (JSON, TSV, BED) and the BED writer.
//! * [`utils`]: thread pool, builder macros, FASTA index helpers.
//!
//! ## Usage
//!
//! ```
//! use genebed::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = vec![
//!         PositionRecord::new("BRCA1", "17", 43_125_483, 43_044_295, Strand::Reverse),
//!         PositionRecord::new("TP53", "chr17", 7_661_779, 7_687_538, Strand::Reverse),
//!     ];
//!
//!     let intervals = build_intervals(records, 1000, true, true)?;
//!     assert_eq!(intervals[0].label(), "TP53");
//!     assert_eq!(intervals[1].start(), 43_043_295);
//!
//!     let mut writer = BedWriter::new(Vec::new());
//!     writer.write_all(&intervals)?;
//!     writer.finish()?;
//!     Ok(())
//! }
//! ```
//!
//! Number of threads used for batch normalization can be configured with the
//! `GENEBED_NUM_THREADS` environment variable.

pub mod data_structs;
mod error;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;

pub use error::{
    EmptyCause,
    IntervalError,
};
pub use tools::merge::{
    build_intervals,
    IntervalEngine,
};
pub use tools::natural::natural_cmp;
pub use tools::normalize::{
    ContigNormalizer,
    StandardContigs,
};
