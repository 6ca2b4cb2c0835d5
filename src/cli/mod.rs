pub mod commands;
pub mod output;

use crate::config;
use crate::errors::{BranchSwapError, Result};
use crate::git::{self, VcsBackend};
use crate::stack::SwapStack;
use clap::Parser;
use clap_complete::Shell;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "branchswap")]
#[command(about = "Stash git branches for later use")]
#[command(version)]
pub struct Cli {
    /// Branch to switch to; omit to only park the current branch
    #[arg(conflicts_with_all = ["list", "index"])]
    pub branch: Option<String>,

    /// List stashed branches
    #[arg(long, short, visible_alias = "ls")]
    pub list: bool,

    /// Swap to the stashed branch at this position
    #[arg(long, short, conflicts_with = "list")]
    pub index: Option<usize>,

    /// Stack file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Version control backend
    #[arg(long, value_enum)]
    pub backend: Option<VcsBackend>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with_all = ["branch", "list", "index"])]
    pub completions: Option<Shell>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        if let Some(shell) = self.completions {
            return commands::completions::generate_completions(shell);
        }

        let settings = config::load_settings()?;
        let cwd = std::env::current_dir()?;

        // An explicit --file is taken relative to where the user stands
        let stack_path = match &self.file {
            Some(file) => config::resolve_stack_path(file, false, &cwd),
            None => config::resolve_stack_path(
                Path::new(&settings.storage.file_name),
                settings.storage.repo_relative,
                &cwd,
            ),
        };

        let backend = self.backend.unwrap_or(settings.git.backend);
        let vcs = git::open_backend(backend, &cwd).map_err(BranchSwapError::VcsQuery)?;
        tracing::debug!(
            "Using {:?} backend with stack file {}",
            backend,
            stack_path.display()
        );

        let mut stack = SwapStack::new(&*vcs, stack_path);
        stack.load()?;

        if self.list {
            commands::list::run(&stack);
            return Ok(());
        }

        if let Some(index) = self.index {
            return commands::swap::restore(&mut stack, index);
        }

        commands::swap::run(&mut stack, self.branch.as_deref().unwrap_or(""))
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };

        if self.no_color {
            console::set_colors_enabled(false);
        }

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_ansi(!self.no_color)
            .with_writer(std::io::stderr)
            .init();
    }
}
