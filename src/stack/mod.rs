//! Stack management module
//!
//! This module implements the branch parking stack:
//! - The in-memory stack and its swap/restore operations
//! - The plain-text stack file codec
//! - Reconciliation against the live set of local branches

pub mod file;
pub mod swapper;

pub use swapper::{SwapStack, DEFAULT_STACK_FILE};
