use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use clap::Args;
use console::style;
use genebed::prelude::*;
use log::{
    info,
    warn,
};

use crate::strings::{
    build as strings,
    input as input_strings,
};
use crate::utils::{
    validate_input,
    validate_output,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    #[arg(help = input_strings::INPUT)]
    pub input: PathBuf,

    #[arg(short = 'f', long, value_enum, default_value_t = RecordFormat::Auto, help = input_strings::FORMAT)]
    pub format: RecordFormat,

    #[arg(long, help = input_strings::FAI)]
    pub fai: Option<PathBuf>,
}

impl InputArgs {
    pub fn normalizer(&self) -> anyhow::Result<ContigNormalizer> {
        match &self.fai {
            Some(path) => {
                let file = File::open(validate_input(path)?)?;
                let standard = StandardContigs::from_fai(file)?;
                info!(
                    "Using {} standard contigs from {}",
                    standard.len(),
                    path.display()
                );
                Ok(ContigNormalizer::new(standard))
            },
            None => Ok(ContigNormalizer::default()),
        }
    }

    pub fn read(&self) -> anyhow::Result<Vec<RawPositionRecord>> {
        read_records(validate_input(&self.input)?, self.format)
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct BuildArgs {
    #[clap(flatten)]
    input: InputArgs,

    #[arg(short = 'o', long, help = strings::OUTPUT)]
    output: Option<PathBuf>,

    #[arg(short = 'e', long = "extend", help = strings::EXTEND)]
    extend_bp: Option<PosType>,

    #[arg(long, help = strings::KEEP_ALT)]
    keep_alt: bool,

    #[arg(long, help = strings::KEEP_FIX)]
    keep_fix: bool,

    #[arg(long, value_enum, help = strings::CROSS_CONTIG)]
    cross_contig: Option<CrossContigPolicy>,

    #[arg(long, help = strings::STANDARD_ONLY)]
    standard_only: bool,

    #[arg(short = 'c', long, help = strings::CONFIG)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    fn merge_config(&self) -> anyhow::Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::from_json_file(validate_input(path)?)?,
            None => MergeConfig::default(),
        };
        if let Some(extend_bp) = self.extend_bp {
            config = config.with_extend_bp(extend_bp);
        }
        if self.keep_alt {
            config = config.with_remove_alt(false);
        }
        if self.keep_fix {
            config = config.with_remove_fix(false);
        }
        if let Some(policy) = self.cross_contig {
            config = config.with_cross_contig(policy);
        }
        Ok(config)
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.merge_config()?;
        let normalizer = self.input.normalizer()?;
        info!("Merge settings: {:?}", config);

        let raw = self.input.read()?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        let records = if self.standard_only {
            let (standard, other) = normalizer.partition_standard(records);
            for record in other.iter() {
                warn!("Skipping {} on non-standard contig", record);
            }
            if standard.is_empty() && !other.is_empty() {
                anyhow::bail!(
                    "All {} records were on non-standard contigs. Drop {} to keep them.",
                    style(other.len()).red(),
                    style("--standard-only").green()
                )
            }
            standard
        }
        else {
            records
        };

        let engine = IntervalEngine::new(normalizer, config);
        let intervals = match engine.build(records) {
            Ok(intervals) => intervals,
            Err(IntervalError::EmptyInput {
                cause: EmptyCause::AllFiltered { dropped },
            }) => {
                anyhow::bail!(
                    "All {} records were on excluded contigs. Use {} or {} to keep them.",
                    style(dropped).red(),
                    style("--keep-alt").green(),
                    style("--keep-fix").green()
                )
            },
            Err(e) => return Err(e.into()),
        };

        let written = match &self.output {
            Some(path) => {
                let mut writer = BedWriter::to_path(validate_output(path)?)?;
                writer.write_all(&intervals)?;
                let written = writer.written();
                writer.finish()?;
                eprintln!(
                    "[{}] Wrote {} intervals to {}",
                    style("V").green(),
                    style(written).green(),
                    path.display()
                );
                written
            },
            None => {
                let stdout = std::io::stdout();
                let sink: Box<dyn Write> = Box::new(BufWriter::new(stdout.lock()));
                let mut writer = BedWriter::new(sink);
                writer.write_all(&intervals)?;
                let written = writer.written();
                writer.finish()?.flush()?;
                written
            },
        };
        info!("Done, {} intervals", written);
        Ok(())
    }
}
