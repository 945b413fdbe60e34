use std::fmt::Display;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;
use crate::with_field_fn;

/// What to do when records of one gene sit on different contigs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CrossContigPolicy {
    /// Keep the contig of the first record of the gene (input order) and log
    /// a warning.
    #[default]
    First,
    /// Abort the whole batch.
    Fail,
}

impl Display for CrossContigPolicy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            CrossContigPolicy::First => write!(f, "first"),
            CrossContigPolicy::Fail => write!(f, "fail"),
        }
    }
}

/// Per-invocation settings of the merge engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Flank added to both sides of every merged interval.
    pub extend_bp:    PosType,
    /// Drop records on contigs containing `alt`.
    pub remove_alt:   bool,
    /// Drop records on contigs containing `fix`.
    pub remove_fix:   bool,
    pub cross_contig: CrossContigPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            extend_bp:    0,
            remove_alt:   true,
            remove_fix:   true,
            cross_contig: CrossContigPolicy::default(),
        }
    }
}

impl MergeConfig {
    with_field_fn!(extend_bp, PosType);
    with_field_fn!(remove_alt, bool);
    with_field_fn!(remove_fix, bool);
    with_field_fn!(cross_contig, CrossContigPolicy);

    pub fn new(
        extend_bp: PosType,
        remove_alt: bool,
        remove_fix: bool,
    ) -> Self {
        Self {
            extend_bp,
            remove_alt,
            remove_fix,
            ..Default::default()
        }
    }

    /// Reads a configuration from a JSON file. Missing keys take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            anyhow::anyhow!("Failed to open config {}: {}", path.display(), e)
        })?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| {
                anyhow::anyhow!("Invalid config {}: {}", path.display(), e)
            })?;
        Ok(config)
    }
}
