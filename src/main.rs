use branchswap::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.run().map_err(anyhow::Error::new)
}
