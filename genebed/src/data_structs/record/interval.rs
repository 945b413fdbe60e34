use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::PositionRecord;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;

/// One output row: a labelled interval on a contig.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedInterval {
    contig: String,
    start:  PosType,
    end:    PosType,
    label:  String,
}

impl MergedInterval {
    /// Creates a new `MergedInterval`.
    pub fn new<C: Into<String>, L: Into<String>>(
        contig: C,
        start: PosType,
        end: PosType,
        label: L,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self {
            contig: contig.into(),
            start,
            end,
            label: label.into(),
        }
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> PosType {
        self.end - self.start
    }

    /// Grows the interval so it also covers `start..end`.
    pub fn absorb(
        &mut self,
        start: PosType,
        end: PosType,
    ) {
        self.start = self.start.min(start);
        self.end = self.end.max(end);
    }

    /// Moves the start upstream by `length`, stopping at zero.
    pub fn extend_upstream(
        &mut self,
        length: PosType,
    ) {
        self.start = self.start.saturating_sub(length);
    }

    /// Moves the end downstream by `length`. No upper bound is applied.
    pub fn extend_downstream(
        &mut self,
        length: PosType,
    ) {
        self.end = self.end.saturating_add(length);
    }

    /// Extends both sides by `length`.
    pub fn extend(
        &mut self,
        length: PosType,
    ) {
        self.extend_upstream(length);
        self.extend_downstream(length);
    }
}

impl From<PositionRecord> for MergedInterval {
    /// Single-member group. Reversed coordinates are put in order.
    fn from(value: PositionRecord) -> Self {
        let (start, end) = if value.start() <= value.end() {
            (value.start(), value.end())
        }
        else {
            (value.end(), value.start())
        };
        Self {
            contig: value.contig().to_owned(),
            start,
            end,
            label: value.label().to_owned(),
        }
    }
}

impl From<MergedInterval> for PositionRecord {
    /// Strand is not part of a BED row; the record is put on the forward
    /// strand.
    fn from(value: MergedInterval) -> Self {
        PositionRecord::new(
            value.label,
            value.contig,
            value.start,
            value.end,
            Strand::Forward,
        )
    }
}

impl From<&MergedInterval> for bio::io::bed::Record {
    fn from(value: &MergedInterval) -> Self {
        let mut record = bio::io::bed::Record::new();
        record.set_chrom(&value.contig);
        record.set_start(value.start);
        record.set_end(value.end);
        record.set_name(&value.label);
        record
    }
}

impl TryFrom<bio::io::bed::Record> for MergedInterval {
    type Error = anyhow::Error;

    /// Requires the name column; coordinates must be ordered.
    fn try_from(value: bio::io::bed::Record) -> Result<Self, Self::Error> {
        let label = value.name().ok_or_else(|| {
            anyhow::anyhow!(
                "BED record {}:{}-{} has no name column",
                value.chrom(),
                value.start(),
                value.end()
            )
        })?;
        if value.start() > value.end() {
            anyhow::bail!(
                "BED record {} has start {} after end {}",
                label,
                value.start(),
                value.end()
            );
        }
        Ok(Self::new(value.chrom(), value.start(), value.end(), label))
    }
}

impl Display for MergedInterval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.contig, self.start, self.end, self.label
        )
    }
}
