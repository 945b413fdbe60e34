use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;

/// A single gene position observation.
///
/// Coordinates are kept as given until the record passes through
/// [`ContigNormalizer`](crate::ContigNormalizer); `is_standard` is assigned
/// there as well and is `false` for freshly constructed records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRecord {
    #[serde(rename = "gene", alias = "label")]
    label:       String,
    #[serde(rename = "chr", alias = "contig")]
    contig:      String,
    start:       PosType,
    end:         PosType,
    #[serde(default)]
    strand:      Strand,
    #[serde(default)]
    is_standard: bool,
}

impl PositionRecord {
    pub fn new<L: Into<String>, C: Into<String>>(
        label: L,
        contig: C,
        start: PosType,
        end: PosType,
        strand: Strand,
    ) -> Self {
        Self {
            label: label.into(),
            contig: contig.into(),
            start,
            end,
            strand,
            is_standard: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
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

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn is_standard(&self) -> bool {
        self.is_standard
    }

    /// Returns `true` if `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Swaps the coordinates if they are reversed. Strand is left untouched.
    pub fn repair_order(&mut self) {
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    /// Length of the record. Reversed coordinates are measured as if they
    /// were ordered.
    pub fn length(&self) -> PosType {
        self.end.abs_diff(self.start)
    }

    pub fn set_contig<C: Into<String>>(
        &mut self,
        contig: C,
    ) {
        self.contig = contig.into();
    }

    pub fn set_standard(
        &mut self,
        is_standard: bool,
    ) {
        self.is_standard = is_standard;
    }
}

impl Display for PositionRecord {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{}-{} ({})",
            self.label, self.contig, self.start, self.end, self.strand
        )
    }
}
