//! Per-record coordinate normalization.
//!
//! [`ContigNormalizer::normalize`] is total and idempotent:
//!
//! - the contig gets the `chr` prefix unless it already starts with it,
//! - reversed coordinates are swapped (strand is never touched),
//! - the record is tagged as standard if its canonical contig belongs to the
//!   injected [`StandardContigs`] set.

mod standard;

use std::borrow::Cow;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
pub use standard::StandardContigs;
use standard::HUMAN_STANDARD_CONTIGS;

use crate::data_structs::record::PositionRecord;
use crate::data_structs::typedef::CONTIG_PREFIX;
use crate::utils::THREAD_POOL;

/// Adds the `chr` prefix to a contig name if it is missing.
pub fn canonical_contig(contig: &str) -> Cow<'_, str> {
    if contig.starts_with(CONTIG_PREFIX) {
        Cow::Borrowed(contig)
    }
    else {
        Cow::Owned(format!("{}{}", CONTIG_PREFIX, contig))
    }
}

#[derive(Debug, Clone)]
pub struct ContigNormalizer {
    standard: Arc<StandardContigs>,
}

impl Default for ContigNormalizer {
    /// Normalizer for the human reference (`chr1`..`chr22`, `chrX`, `chrY`).
    fn default() -> Self {
        Self {
            standard: HUMAN_STANDARD_CONTIGS.clone(),
        }
    }
}

impl ContigNormalizer {
    pub fn new(standard: StandardContigs) -> Self {
        Self {
            standard: Arc::new(standard),
        }
    }

    pub fn standard(&self) -> &StandardContigs {
        &self.standard
    }

    pub fn is_standard(
        &self,
        contig: &str,
    ) -> bool {
        self.standard.contains(contig)
    }

    /// Normalizes a single record.
    pub fn normalize(
        &self,
        mut record: PositionRecord,
    ) -> PositionRecord {
        if !record.contig().starts_with(CONTIG_PREFIX) {
            let contig = canonical_contig(record.contig()).into_owned();
            record.set_contig(contig);
        }
        record.repair_order();
        let is_standard = self.is_standard(record.contig());
        record.set_standard(is_standard);
        record
    }

    /// Normalizes a batch on the crate thread pool. Input order is kept.
    pub fn normalize_batch(
        &self,
        records: Vec<PositionRecord>,
    ) -> Vec<PositionRecord> {
        debug!("Normalizing batch of {} records", records.len());
        THREAD_POOL.install(|| {
            records
                .into_par_iter()
                .map(|record| self.normalize(record))
                .collect()
        })
    }

    /// Normalizes a batch and splits it into standard and non-standard
    /// records, each keeping input order.
    pub fn partition_standard(
        &self,
        records: Vec<PositionRecord>,
    ) -> (Vec<PositionRecord>, Vec<PositionRecord>) {
        let (standard, other): (Vec<_>, Vec<_>) = self
            .normalize_batch(records)
            .into_iter()
            .partition(PositionRecord::is_standard);
        debug!(
            "{} records on standard contigs, {} elsewhere",
            standard.len(),
            other.len()
        );
        (standard, other)
    }
}

#[cfg(test)]
mod tests;
