use crate::cli::Cli;
use crate::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = "branchswap";

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
