mod bed;
mod classify;
mod strings;
mod utils;

use bed::BuildArgs;
use clap::{
    Parser,
    Subcommand,
};
use classify::ClassifyArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Merge gene position records into a sorted BED file.
    Build {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  BuildArgs,
    },

    /// Split gene position records by standard / non-standard contig.
    Classify {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ClassifyArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Build { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Classify { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
    }
    Ok(())
}
