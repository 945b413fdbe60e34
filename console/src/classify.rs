use clap::Args;
use console::style;
use genebed::prelude::*;
use itertools::Itertools;
use serde::Serialize;

use crate::bed::InputArgs;
use crate::strings::classify as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct ClassifyArgs {
    #[clap(flatten)]
    input: InputArgs,

    #[arg(long, help = strings::JSON)]
    json: bool,
}

#[derive(Serialize)]
struct Classified<'a> {
    genes:        &'a [PositionRecord],
    non_standard: &'a [PositionRecord],
}

impl ClassifyArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let normalizer = self.input.normalizer()?;
        let records = self
            .input
            .read()?
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        let (standard, other) = normalizer.partition_standard(records);

        if self.json {
            let classified = Classified {
                genes:        &standard,
                non_standard: &other,
            };
            println!("{}", serde_json::to_string_pretty(&classified)?);
            return Ok(());
        }

        println!(
            "{} ({})",
            style("Standard chromosomes").green().bold(),
            standard.len()
        );
        print_table(&standard);
        if !other.is_empty() {
            println!();
            println!(
                "{} ({})",
                style("Non-standard contigs").yellow().bold(),
                other.len()
            );
            print_table(&other);
        }
        Ok(())
    }
}

fn print_table(records: &[PositionRecord]) {
    let width = records
        .iter()
        .map(|r| r.label().len())
        .max()
        .unwrap_or(0)
        .max(4);
    for record in records
        .iter()
        .sorted_by(|a, b| natural_cmp(a.contig(), b.contig()).then(a.start().cmp(&b.start())))
    {
        println!(
            "  {:<width$}  {}:{}-{} ({})",
            record.label(),
            record.contig(),
            record.start(),
            record.end(),
            record.strand(),
            width = width
        );
    }
}
