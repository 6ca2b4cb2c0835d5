use super::{VcsError, VersionControl};
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Version control adapter that shells out to the `git` executable
#[derive(Debug, Clone, Default)]
pub struct GitCommand {
    workdir: Option<PathBuf>,
}

impl GitCommand {
    /// Run git in the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `workdir`
    pub fn with_workdir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, VcsError> {
        let command_line = format!("git {}", args.join(" "));
        debug!("Running {}", command_line);

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(VcsError::Spawn)?;
        if !output.status.success() {
            return Err(VcsError::Command {
                command: command_line,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| VcsError::InvalidOutput(command_line))
    }
}

impl VersionControl for GitCommand {
    fn get_current_branch(&self) -> Result<String, VcsError> {
        let output = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let name = output.trim();

        // rev-parse answers a literal "HEAD" when nothing is checked out by name
        if name == "HEAD" || name.is_empty() {
            return Err(VcsError::DetachedHead);
        }
        Ok(name.to_string())
    }

    fn checkout_branch(&self, name: &str) -> Result<(), VcsError> {
        // `git checkout` also restores paths and takes options; only local
        // branch names may reach it
        if name.starts_with('-') || !self.get_local_branches()?.contains(name) {
            return Err(VcsError::NotABranch(name.to_string()));
        }

        self.run(&["checkout", name, "--"])?;
        Ok(())
    }

    fn get_local_branches(&self) -> Result<HashSet<String>, VcsError> {
        let output = self.run(&["for-each-ref", "--format=%(refname:lstrip=2)", "refs/heads/"])?;
        Ok(parse_branch_list(&output))
    }
}

/// Parse one branch name per line, as printed by `git for-each-ref`
fn parse_branch_list(output: &str) -> HashSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
