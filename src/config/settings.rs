use crate::errors::{BranchSwapError, Result};
use crate::git::VcsBackend;
use crate::stack::DEFAULT_STACK_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub git: GitSettings,
}

/// Where the stack file lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Stack file name or path
    pub file_name: String,
    /// Resolve a relative `file_name` against the repository root instead of
    /// the current directory
    pub repo_relative: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    pub backend: VcsBackend,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_STACK_FILE.to_string(),
            repo_relative: true,
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| BranchSwapError::config(format!("Failed to read config file: {e}")))?;

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| BranchSwapError::config(format!("Failed to parse config file: {e}")))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let name = &self.storage.file_name;
        if name.trim().is_empty() {
            return Err(BranchSwapError::config("storage.file_name must not be empty"));
        }
        if name.contains('\n') || name.contains('\r') {
            return Err(BranchSwapError::config(
                "storage.file_name must not contain line breaks",
            ));
        }
        Ok(())
    }
}
