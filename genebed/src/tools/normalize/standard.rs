use std::io::Read;
use std::sync::Arc;

use hashbrown::HashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;

use super::canonical_contig;
use crate::tools::natural::natural_cmp;
use crate::utils::read_chrs_from_fai;

pub(crate) static HUMAN_STANDARD_CONTIGS: Lazy<Arc<StandardContigs>> =
    Lazy::new(|| Arc::new(StandardContigs::human()));

/// Immutable set of contig names considered standard chromosomes.
///
/// Membership is exact and case-sensitive. Names are stored in canonical
/// (`chr`-prefixed) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardContigs {
    names: HashSet<String>,
}

impl StandardContigs {
    /// `chr1` .. `chr22`, `chrX`, `chrY`.
    pub fn human() -> Self {
        (1..=22)
            .map(|i| i.to_string())
            .chain(["X".to_string(), "Y".to_string()])
            .collect()
    }

    /// Uses every sequence of a FASTA index (`.fai`) as a standard contig.
    pub fn from_fai<R: Read>(reader: R) -> anyhow::Result<Self> {
        let names = read_chrs_from_fai(reader)?;
        if names.is_empty() {
            anyhow::bail!("FASTA index lists no sequences");
        }
        Ok(names.into_iter().collect())
    }

    pub fn contains(
        &self,
        contig: &str,
    ) -> bool {
        self.names.contains(contig)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in natural order.
    pub fn names(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .sorted_by(|a, b| natural_cmp(a, b))
            .collect()
    }
}

impl Default for StandardContigs {
    fn default() -> Self {
        Self::human()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StandardContigs {
    /// Names are canonicalized, so `"1"` and `"chr1"` are the same entry.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|s| canonical_contig(s.as_ref().trim()).into_owned())
                .collect(),
        }
    }
}
