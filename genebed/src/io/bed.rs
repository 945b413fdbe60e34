//! BED output and reading BED files back as intervals.

use std::fs::File;
use std::io::{
    BufWriter,
    Read,
    Write,
};
use std::path::Path;

use log::{
    debug,
    info,
};

use crate::data_structs::record::MergedInterval;

/// Writes intervals as BED rows: `contig`, `start`, `end`, `label`,
/// tab-separated, one per line, no header. Rows are written in the order
/// they are given.
///
/// Each interval goes through [`bio::io::bed::Record`]; only the first four
/// columns are emitted. Labels and contigs never contain tabs or line
/// breaks, [`RawPositionRecord::validate`] rejects them.
///
/// [`RawPositionRecord::validate`]: crate::data_structs::record::RawPositionRecord::validate
pub struct BedWriter<W: Write> {
    writer:  csv::Writer<W>,
    written: usize,
}

impl BedWriter<BufWriter<File>> {
    pub fn to_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            anyhow::anyhow!("Failed to create {}: {}", path.display(), e)
        })?;
        debug!("Writing BED to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> BedWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink);
        Self { writer, written: 0 }
    }

    pub fn write_interval(
        &mut self,
        interval: &MergedInterval,
    ) -> anyhow::Result<()> {
        let record = bio::io::bed::Record::from(interval);
        self.writer.serialize((
            record.chrom(),
            record.start(),
            record.end(),
            record.name().unwrap_or_default(),
        ))?;
        self.written += 1;
        Ok(())
    }

    /// Writes every interval, returning how many were written.
    pub fn write_all<'a, I>(
        &mut self,
        intervals: I,
    ) -> anyhow::Result<usize>
    where
        I: IntoIterator<Item = &'a MergedInterval>, {
        let before = self.written;
        for interval in intervals {
            self.write_interval(interval)?;
        }
        Ok(self.written - before)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(self) -> anyhow::Result<W> {
        let written = self.written;
        let sink = self
            .writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush BED output: {}", e.error()))?;
        info!("Wrote {} BED records", written);
        Ok(sink)
    }
}

/// Reads BED rows (at least 4 columns) back into intervals.
pub fn read_intervals<R: Read>(reader: R) -> anyhow::Result<Vec<MergedInterval>> {
    let mut bed_reader = bio::io::bed::Reader::new(reader);
    bed_reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record
                .map_err(|e| anyhow::anyhow!("Invalid BED line {}: {}", i + 1, e))?;
            MergedInterval::try_from(record)
        })
        .collect()
}
