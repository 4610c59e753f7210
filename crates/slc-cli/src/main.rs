use clap::Parser;
use slc_cli::{init_logging, run, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli)
}
