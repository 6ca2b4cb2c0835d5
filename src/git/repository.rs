use super::{VcsError, VersionControl};
use git2::{build::CheckoutBuilder, BranchType, Repository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version control adapter backed by libgit2
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open the Git repository enclosing the given path
    pub fn open(path: &Path) -> Result<Self, VcsError> {
        let repo = Repository::discover(path)?;

        let workdir = repo
            .workdir()
            .ok_or(VcsError::BareRepository)?
            .to_path_buf();

        Ok(Self {
            repo,
            path: workdir,
        })
    }

    /// Get repository path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionControl for GitRepository {
    fn get_current_branch(&self) -> Result<String, VcsError> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(VcsError::DetachedHead);
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| VcsError::InvalidOutput("HEAD".to_string()))
    }

    fn checkout_branch(&self, name: &str) -> Result<(), VcsError> {
        let branch = self.repo.find_branch(name, BranchType::Local)?;
        let branch_ref = branch.get();
        let tree = branch_ref.peel_to_tree()?;

        // Refuse to clobber local modifications, the same way `git checkout` does
        let mut checkout = CheckoutBuilder::new();
        checkout.safe();
        self.repo.checkout_tree(tree.as_object(), Some(&mut checkout))?;

        let refname = branch_ref
            .name()
            .ok_or_else(|| VcsError::InvalidOutput(name.to_string()))?;
        self.repo.set_head(refname)?;

        debug!("Switched {} to branch '{}'", self.path.display(), name);
        Ok(())
    }

    fn get_local_branches(&self) -> Result<HashSet<String>, VcsError> {
        let mut names = HashSet::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }
}
