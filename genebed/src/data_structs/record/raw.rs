use serde::{
    Deserialize,
    Serialize,
};

use super::PositionRecord;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;
use crate::error::IntervalError;

/// Unvalidated record as delivered by a lookup service or a file.
///
/// Field names follow the lookup wire format (`gene`, `chr`, `start`, `end`,
/// `strand`); `label` and `contig` are accepted as aliases. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPositionRecord {
    #[serde(alias = "label")]
    pub gene:   Option<String>,
    #[serde(alias = "contig")]
    pub chr:    Option<String>,
    pub start:  Option<PosType>,
    pub end:    Option<PosType>,
    pub strand: Option<Strand>,
}

impl RawPositionRecord {
    pub fn new(
        gene: Option<&str>,
        chr: Option<&str>,
        start: Option<PosType>,
        end: Option<PosType>,
    ) -> Self {
        Self {
            gene: gene.map(String::from),
            chr: chr.map(String::from),
            start,
            end,
            strand: None,
        }
    }

    /// Checks field presence and builds a [`PositionRecord`].
    ///
    /// Blank `gene` or `chr` values count as missing, values containing a
    /// tab or line break are rejected. A missing strand defaults to forward.
    pub fn validate(
        self,
        index: usize,
    ) -> Result<PositionRecord, IntervalError> {
        let missing = |field| IntervalError::InputShape { index, field };

        let gene = self
            .gene
            .filter(|s| is_bed_field(s))
            .ok_or_else(|| missing("gene"))?;
        let chr = self
            .chr
            .filter(|s| is_bed_field(s))
            .ok_or_else(|| missing("chr"))?;
        let start = self.start.ok_or_else(|| missing("start"))?;
        let end = self.end.ok_or_else(|| missing("end"))?;

        Ok(PositionRecord::new(
            gene.trim(),
            chr.trim(),
            start,
            end,
            self.strand.unwrap_or_default(),
        ))
    }
}

/// Non-blank once trimmed and free of column or row separators.
fn is_bed_field(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.contains(['\t', '\n', '\r'])
}

impl From<PositionRecord> for RawPositionRecord {
    fn from(value: PositionRecord) -> Self {
        Self {
            gene:   Some(value.label().to_owned()),
            chr:    Some(value.contig().to_owned()),
            start:  Some(value.start()),
            end:    Some(value.end()),
            strand: Some(value.strand()),
        }
    }
}
