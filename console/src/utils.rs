use std::path::{
    Path,
    PathBuf,
};

use clap::Args;
use log::{
    debug,
    LevelFilter,
};

use crate::strings::utils as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, action = clap::ArgAction::Count, help = strings::VERBOSE)]
    pub verbose: u8,

    #[arg(long, help = strings::THREADS)]
    pub threads: Option<usize>,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        if let Some(threads) = self.threads {
            std::env::set_var("GENEBED_NUM_THREADS", threads.to_string());
        }

        if std::env::var_os("RUST_LOG").is_some() {
            pretty_env_logger::try_init()?;
        }
        else {
            pretty_env_logger::formatted_builder()
                .filter_level(self.log_level())
                .try_init()?;
        }
        debug!("Using {} threads", genebed::utils::n_threads());
        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<PathBuf> {
    if !path.exists() {
        anyhow::bail!("Input file {} does not exist", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Input path {} is not a file", path.display());
    }
    Ok(path.to_path_buf())
}

pub(crate) fn validate_output(path: &Path) -> anyhow::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            anyhow::bail!(
                "Output directory {} does not exist",
                parent.display()
            );
        }
    }
    if path.is_dir() {
        anyhow::bail!("Output path {} is a directory", path.display());
    }
    Ok(path.to_path_buf())
}
