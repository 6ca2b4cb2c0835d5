pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod stack;

pub use errors::BranchSwapError;
pub use git::VersionControl;
pub use stack::SwapStack;
