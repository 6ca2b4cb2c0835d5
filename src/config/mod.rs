pub mod settings;

pub use settings::{GitSettings, Settings, StorageSettings};

use crate::errors::{BranchSwapError, Result};
use crate::git::find_repository_root;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "BRANCHSWAP_CONFIG";

/// Get the Branchswap configuration directory (~/.branchswap/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| BranchSwapError::config("Could not find home directory"))?;
    Ok(home_dir.join(".branchswap"))
}

/// Path of the settings file, honouring `BRANCHSWAP_CONFIG`
pub fn get_config_file() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_config_dir()?.join("config.json")),
    }
}

/// Load the user's settings, falling back to defaults when none are saved
pub fn load_settings() -> Result<Settings> {
    let path = get_config_file()?;
    let settings = Settings::load_from_file(&path)?;
    tracing::debug!("Using settings from {}", path.display());
    Ok(settings)
}

/// Work out where the stack file lives.
///
/// Absolute names are used as given. Relative names are joined to the
/// repository root enclosing `cwd` when `repo_relative` is set and such a
/// repository exists, otherwise to `cwd`.
pub fn resolve_stack_path(name: &Path, repo_relative: bool, cwd: &Path) -> PathBuf {
    if name.is_absolute() {
        return name.to_path_buf();
    }

    if repo_relative {
        match find_repository_root(cwd) {
            Ok(root) => return root.join(name),
            Err(e) => tracing::debug!("No repository root for {}: {}", cwd.display(), e),
        }
    }

    cwd.join(name)
}
