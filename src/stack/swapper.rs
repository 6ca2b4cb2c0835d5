use super::file;
use crate::errors::{BranchSwapError, Result};
use crate::git::VersionControl;
use std::collections::HashSet;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when the caller does not pick one
pub const DEFAULT_STACK_FILE: &str = ".branchswap";

/// Ordered, duplicate-free stack of parked branch names.
///
/// Index 0 is the oldest parked branch. Every mutation rewrites the stack file
/// before returning, so the file always mirrors the in-memory stack.
pub struct SwapStack<'a> {
    /// Version control adapter, borrowed for the stack's lifetime
    vcs: &'a dyn VersionControl,
    /// Path to the stack file
    path: PathBuf,
    /// Parked branches, oldest first
    entries: Vec<String>,
}

impl<'a> SwapStack<'a> {
    /// Create an empty stack persisted at `path`
    pub fn new(vcs: &'a dyn VersionControl, path: impl Into<PathBuf>) -> Self {
        Self {
            vcs,
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Create an empty stack persisted at [`DEFAULT_STACK_FILE`]
    pub fn with_default_file(vcs: &'a dyn VersionControl) -> Self {
        Self::new(vcs, DEFAULT_STACK_FILE)
    }

    /// Path to the stack file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory stack with the stack file's content.
    ///
    /// Lines naming branches that no longer exist locally are dropped, as are
    /// repeats of a name already seen. The normalized stack is written back.
    pub fn load(&mut self) -> Result<()> {
        let mut file = file::open_stack_file(&self.path)?;
        let lines = file::read_entries(BufReader::new(&file))?;

        let local_branches = self
            .vcs
            .get_local_branches()
            .map_err(BranchSwapError::VcsQuery)?;

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(lines.len());
        for line in lines {
            if !local_branches.contains(&line) {
                debug!("Dropping '{}' from stack: not a local branch", line);
                continue;
            }
            if !seen.insert(line.clone()) {
                debug!("Dropping duplicate stack entry '{}'", line);
                continue;
            }
            entries.push(line);
        }
        self.entries = entries;

        file::rewrite(&mut file, &self.entries)?;
        debug!(
            "Loaded {} parked branches from {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the in-memory stack to the stack file, replacing its content
    pub fn unload(&self) -> Result<()> {
        let mut file = file::open_stack_file(&self.path)?;
        file::rewrite(&mut file, &self.entries)?;

        debug!(
            "Saved {} parked branches to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Copy of the parked branches, oldest first
    pub fn stack(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `branch` is parked
    pub fn contains(&self, branch: &str) -> bool {
        self.position(branch).is_some()
    }

    /// Park the current branch, then switch to `branch`.
    ///
    /// An empty `branch` only parks. If `branch` was parked it leaves the
    /// stack once the checkout succeeds. A failed checkout keeps the park.
    pub fn swap(&mut self, branch: &str) -> Result<()> {
        self.stash_current_branch()?;

        if branch.is_empty() {
            return Ok(());
        }

        self.vcs
            .checkout_branch(branch)
            .map_err(|e| BranchSwapError::checkout_failed(branch, e))?;
        info!("Switched to branch '{}'", branch);

        if let Some(index) = self.position(branch) {
            self.entries.remove(index);
            self.unload()?;
        }

        Ok(())
    }

    /// Park the current branch, then switch to the branch at `index` and
    /// remove that position from the stack.
    ///
    /// `index` is checked against the stack before anything is parked.
    pub fn swap_from_stack(&mut self, index: usize) -> Result<()> {
        let len = self.entries.len();
        if index >= len {
            return Err(BranchSwapError::IndexOutOfRange { index, len });
        }

        self.stash_current_branch()?;

        // Parking only appends, so `index` still names the same entry
        let branch = self.entries[index].clone();
        self.vcs
            .checkout_branch(&branch)
            .map_err(|e| BranchSwapError::checkout_failed(branch.as_str(), e))?;
        info!("Switched to branch '{}'", branch);

        self.entries.remove(index);
        self.unload()
    }

    fn stash_current_branch(&mut self) -> Result<()> {
        let current = self
            .vcs
            .get_current_branch()
            .map_err(BranchSwapError::VcsQuery)?;

        if self.contains(&current) {
            debug!("Branch '{}' is already parked", current);
            return Ok(());
        }

        info!("Parked branch '{}'", current);
        self.entries.push(current);
        self.unload()
    }

    fn position(&self, branch: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == branch)
    }
}
