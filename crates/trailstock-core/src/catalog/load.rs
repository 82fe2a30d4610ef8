//! Catalog loading from files and environment
//!
//! Sources are tried in order; the first hit wins:
//! 1. `TRAILSTOCK_CATALOG` environment variable (explicit file path)
//! 2. Project catalog: `.trailstock/catalog.toml`
//! 3. Global catalog: `~/.config/trailstock/catalog.toml`
//! 4. Built-in standard catalog
//!
//! An explicit `TRAILSTOCK_CATALOG` that points at a missing file is an
//! error, not a silent fallback.

use std::path::{Path, PathBuf};

use super::types::Catalog;
use crate::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load the catalog from the highest-priority available source.
///
/// # Errors
///
/// Returns error if:
/// - `TRAILSTOCK_CATALOG` is set but the file does not exist
/// - A catalog file is malformed TOML
/// - A catalog file fails validation (duplicate or invalid entries)
pub fn load_catalog() -> Result<Catalog> {
    // 1. Explicit path from the environment
    if let Ok(value) = std::env::var("TRAILSTOCK_CATALOG") {
        let path = PathBuf::from(value);
        if !path.exists() {
            return Err(Error::io_error(format!(
                "TRAILSTOCK_CATALOG points to a missing file: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "loading catalog from TRAILSTOCK_CATALOG");
        return load_catalog_from(&path);
    }

    // 2. Project catalog if present
    let project_path = project_catalog_path()?;
    if project_path.exists() {
        tracing::debug!(path = %project_path.display(), "loading project catalog");
        return load_catalog_from(&project_path);
    }

    // 3. Global catalog if present
    if let Some(global_path) = global_catalog_path() {
        if global_path.exists() {
            tracing::debug!(path = %global_path.display(), "loading global catalog");
            return load_catalog_from(&global_path);
        }
    }

    // 4. Built-in catalog
    tracing::debug!("no catalog file found, using built-in catalog");
    Ok(Catalog::standard())
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to the global catalog file
pub fn global_catalog_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "trailstock")
        .map(|proj_dirs| proj_dirs.config_dir().join("catalog.toml"))
}

/// Get path to the project catalog file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_catalog_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(".trailstock/catalog.toml"))
        .map_err(|e| Error::io_error(format!("Failed to get current directory: {e}")))
}

/// Load and validate a catalog from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - Path is a directory instead of a file
/// - TOML is malformed or the catalog entries fail validation
pub fn load_catalog_from(path: &Path) -> Result<Catalog> {
    // Check if path is a directory
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Catalog path is a directory, not a file: {}\n\
             \n\
             The catalog path should point to a TOML file, not a directory.\n\
             Expected: .trailstock/catalog.toml (file)\n\
             Found: {} (directory)",
            path.display(),
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("permission") || err_str.contains("denied") {
            Error::io_error(format!(
                "Permission denied reading catalog file {}: {e}\n\
                 \n\
                 Check file permissions: ls -l {}",
                path.display(),
                path.display()
            ))
        } else {
            Error::io_error(format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ))
        }
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse catalog file {}: {e}\n\
             \n\
             The catalog file is invalid.\n\
             Please check the file for:\n\
             • Missing or extra brackets\n\
             • Unclosed quotes\n\
             • Duplicate tool or sheet entries\n\
             \n\
             Error details: {e}",
            path.display()
        ))
    })
}
