//! Record hand-offs: JSON arrays, tab-separated tables with a header row and
//! BED files with a name column. Readers return [`RawPositionRecord`]s;
//! validation happens later, per record.

use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use log::{
    debug,
    info,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::record::{
    PositionRecord,
    RawPositionRecord,
};
use crate::io::bed::read_intervals;

/// Layout of a record hand-off file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Pick from the file extension.
    #[default]
    Auto,
    /// Array of objects with `gene`, `chr`, `start`, `end` and optional
    /// `strand`.
    Json,
    /// Tab-separated with a header row naming the same fields.
    Tsv,
    /// BED with a name column, e.g. previous output.
    Bed,
}

impl RecordFormat {
    /// Resolves [`RecordFormat::Auto`] using the file extension. Unknown
    /// extensions are read as TSV.
    pub fn resolve(
        self,
        path: &Path,
    ) -> Self {
        if self != RecordFormat::Auto {
            return self;
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => RecordFormat::Json,
            Some("bed") => RecordFormat::Bed,
            _ => RecordFormat::Tsv,
        }
    }
}

/// Reads records from a JSON array.
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<RawPositionRecord>> {
    let records: Vec<RawPositionRecord> =
        serde_json::from_reader(BufReader::new(reader))
            .map_err(|e| anyhow::anyhow!("Invalid JSON records: {}", e))?;
    debug!("Parsed {} JSON records", records.len());
    Ok(records)
}

/// Reads records from a tab-separated file with a header row. Empty cells
/// are treated as missing values.
pub fn read_tsv<R: Read>(reader: R) -> anyhow::Result<Vec<RawPositionRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<RawPositionRecord>()
        .enumerate()
        .map(|(i, record)| {
            record.map_err(|e| anyhow::anyhow!("Invalid TSV row {}: {}", i + 1, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!("Parsed {} TSV records", records.len());
    Ok(records)
}

/// Reads BED rows as single-record genes.
pub fn read_bed<R: Read>(reader: R) -> anyhow::Result<Vec<RawPositionRecord>> {
    Ok(read_intervals(reader)?
        .into_iter()
        .map(|interval| RawPositionRecord::from(PositionRecord::from(interval)))
        .collect())
}

/// Reads records from `path` in the given format.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    format: RecordFormat,
) -> anyhow::Result<Vec<RawPositionRecord>> {
    let path = path.as_ref();
    let format = format.resolve(path);
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;

    let records = match format {
        RecordFormat::Json => read_json(file)?,
        RecordFormat::Bed => read_bed(file)?,
        RecordFormat::Tsv | RecordFormat::Auto => read_tsv(file)?,
    };
    info!(
        "Read {} records from {} ({:?})",
        records.len(),
        path.display(),
        format
    );
    Ok(records)
}
