//! Merge-and-extend engine.
//!
//! Turns a batch of gene position records into one interval per gene:
//!
//! 1. every record is validated and normalized,
//! 2. records on `alt` / `fix` contigs are optionally dropped (substring
//!    match on the canonical contig name),
//! 3. coordinates are put in order again,
//! 4. records are grouped by label; each group spans the minimum start to
//!    the maximum end of its members,
//! 5. intervals are optionally extended on both sides, the start stopping at
//!    zero,
//! 6. the result is sorted by contig in natural order, then by start. Ties
//!    keep the order in which labels first appeared in the input.
//!
//! The whole batch either succeeds or fails; no partial output is produced.

mod config;

pub use config::{
    CrossContigPolicy,
    MergeConfig,
};
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{
    debug,
    warn,
};

use crate::data_structs::record::{
    IntoPositionRecord,
    MergedInterval,
    PositionRecord,
};
use crate::data_structs::typedef::{
    PosType,
    ALT_MARKER,
    FIX_MARKER,
};
use crate::error::{
    EmptyCause,
    IntervalError,
};
use crate::tools::natural::natural_cmp;
use crate::tools::normalize::ContigNormalizer;

/// Builds sorted, merged intervals with the default (human) normalizer.
///
/// ```
/// use genebed::prelude::*;
///
/// let records = vec![
///     PositionRecord::new("A", "17", 100, 50, Strand::Reverse),
///     PositionRecord::new("A", "chr17", 30, 80, Strand::Reverse),
/// ];
/// let intervals = build_intervals(records, 0, true, true).unwrap();
/// assert_eq!(intervals, vec![MergedInterval::new("chr17", 30, 100, "A")]);
/// ```
pub fn build_intervals<I, R>(
    records: I,
    extend_bp: PosType,
    remove_alt: bool,
    remove_fix: bool,
) -> Result<Vec<MergedInterval>, IntervalError>
where
    I: IntoIterator<Item = R>,
    R: IntoPositionRecord, {
    IntervalEngine::new(
        ContigNormalizer::default(),
        MergeConfig::new(extend_bp, remove_alt, remove_fix),
    )
    .build(records)
}

/// Sorts intervals by contig (natural order), then start. The sort is
/// stable.
pub fn sort_intervals(intervals: &mut [MergedInterval]) {
    intervals.sort_by(|a, b| {
        natural_cmp(a.contig(), b.contig()).then_with(|| a.start().cmp(&b.start()))
    });
}

/// A normalizer paired with merge settings.
#[derive(Debug, Clone, Default)]
pub struct IntervalEngine {
    normalizer: ContigNormalizer,
    config:     MergeConfig,
}

impl IntervalEngine {
    pub fn new(
        normalizer: ContigNormalizer,
        config: MergeConfig,
    ) -> Self {
        Self { normalizer, config }
    }

    pub fn normalizer(&self) -> &ContigNormalizer {
        &self.normalizer
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Runs the full pipeline over one batch.
    pub fn build<I, R>(
        &self,
        records: I,
    ) -> Result<Vec<MergedInterval>, IntervalError>
    where
        I: IntoIterator<Item = R>,
        R: IntoPositionRecord, {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_position_record(index)
                    .map(|r| self.normalizer.normalize(r))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if records.is_empty() {
            return Err(IntervalError::EmptyInput {
                cause: EmptyCause::NoRecords,
            });
        }
        let total = records.len();

        let kept = self.filter_contigs(records);
        if kept.is_empty() {
            return Err(IntervalError::EmptyInput {
                cause: EmptyCause::AllFiltered { dropped: total },
            });
        }
        debug!(
            "{} of {} records kept after contig filtering",
            kept.len(),
            total
        );

        let mut intervals = self.merge_groups(kept)?;

        if self.config.extend_bp > 0 {
            for interval in intervals.iter_mut() {
                interval.extend(self.config.extend_bp);
            }
        }

        sort_intervals(&mut intervals);
        debug!("Built {} intervals", intervals.len());
        Ok(intervals)
    }

    /// Whether the contig is removed by the `alt` / `fix` filters.
    pub fn is_excluded(
        &self,
        contig: &str,
    ) -> bool {
        (self.config.remove_alt && contig.contains(ALT_MARKER))
            || (self.config.remove_fix && contig.contains(FIX_MARKER))
    }

    fn filter_contigs(
        &self,
        records: Vec<PositionRecord>,
    ) -> Vec<PositionRecord> {
        if !self.config.remove_alt && !self.config.remove_fix {
            return records;
        }
        records
            .into_iter()
            .filter(|record| !self.is_excluded(record.contig()))
            .collect()
    }

    fn merge_groups(
        &self,
        records: Vec<PositionRecord>,
    ) -> Result<Vec<MergedInterval>, IntervalError> {
        let mut groups: IndexMap<String, MergedInterval> = IndexMap::new();

        for mut record in records {
            record.repair_order();

            match groups.entry(record.label().to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(MergedInterval::from(record));
                },
                Entry::Occupied(mut entry) => {
                    let interval = entry.get_mut();
                    if interval.contig() != record.contig() {
                        match self.config.cross_contig {
                            CrossContigPolicy::Fail => {
                                return Err(IntervalError::CrossContig {
                                    label: record.label().to_owned(),
                                    first: interval.contig().to_owned(),
                                    other: record.contig().to_owned(),
                                });
                            },
                            CrossContigPolicy::First => {
                                warn!(
                                    "Gene {} found on {} and {}, keeping {}",
                                    record.label(),
                                    interval.contig(),
                                    record.contig(),
                                    interval.contig()
                                );
                            },
                        }
                    }
                    interval.absorb(record.start(), record.end());
                },
            }
        }

        Ok(groups.into_values().collect())
    }
}

#[cfg(test)]
mod tests;
