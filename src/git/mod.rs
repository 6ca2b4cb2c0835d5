pub mod command;
pub mod repository;

pub use command::GitCommand;
pub use repository::GitRepository;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Failure reported by a version control adapter.
///
/// The stack treats these as opaque and wraps them into the matching
/// [`BranchSwapError`](crate::errors::BranchSwapError) variant.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The version control tool could not be launched
    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// The tool ran but exited unsuccessfully
    #[error("'{command}' failed: {message}")]
    Command { command: String, message: String },

    /// libgit2 errors
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// HEAD does not point at a local branch
    #[error("HEAD is detached, not on a branch")]
    DetachedHead,

    /// Checkout target is not a local branch
    #[error("'{0}' is not a local branch")]
    NotABranch(String),

    /// Discovery found a bare repository
    #[error("Repository has no working directory (bare repo?)")]
    BareRepository,

    /// The tool produced output that could not be decoded
    #[error("Unexpected output from '{0}'")]
    InvalidOutput(String),
}

/// The three version control capabilities the swap stack needs.
///
/// Implementations hold no state of their own beyond a handle on the
/// underlying tool; every call is synchronous.
pub trait VersionControl {
    /// Name of the branch HEAD currently points at
    fn get_current_branch(&self) -> Result<String, VcsError>;

    /// Switch the working tree to the named local branch
    fn checkout_branch(&self, name: &str) -> Result<(), VcsError>;

    /// Names of all branches that currently exist locally
    fn get_local_branches(&self) -> Result<HashSet<String>, VcsError>;
}

/// Which adapter the CLI should drive
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VcsBackend {
    /// Shell out to the `git` executable
    #[default]
    Command,
    /// Talk to the repository through libgit2
    Libgit2,
}

/// Build the adapter for `backend`, rooted at `workdir`
pub fn open_backend(backend: VcsBackend, workdir: &Path) -> Result<Box<dyn VersionControl>, VcsError> {
    match backend {
        VcsBackend::Command => Ok(Box::new(GitCommand::with_workdir(workdir))),
        VcsBackend::Libgit2 => Ok(Box::new(GitRepository::open(workdir)?)),
    }
}

/// Find the work tree root of the repository enclosing `start_path`
pub fn find_repository_root(start_path: &Path) -> Result<PathBuf, VcsError> {
    let repo = git2::Repository::discover(start_path)?;

    let workdir = repo.workdir().ok_or(VcsError::BareRepository)?;

    Ok(workdir.to_path_buf())
}
