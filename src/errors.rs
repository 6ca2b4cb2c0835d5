use crate::git::VcsError;

/// Branchswap Error Types
#[derive(Debug, thiserror::Error)]
pub enum BranchSwapError {
    /// Stack file could not be opened, read, truncated or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Version control could not report the current or local branches
    #[error("Version control query failed: {0}")]
    VcsQuery(#[source] VcsError),

    /// Version control refused to switch branches
    #[error("Could not checkout branch '{branch}': {source}")]
    CheckoutFailed {
        branch: String,
        #[source]
        source: VcsError,
    },

    /// Restore requested a position outside the stack
    #[error("Index {index} out of range (stack has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BranchSwapError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BranchSwapError::Config(msg.into())
    }

    pub fn checkout_failed<S: Into<String>>(branch: S, source: VcsError) -> Self {
        BranchSwapError::CheckoutFailed {
            branch: branch.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BranchSwapError>;
