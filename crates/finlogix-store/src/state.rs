use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Transaction;
use crate::{StoreError, StoreResult};

/// File name of the durable transaction sequence inside the store home.
pub const STORAGE_FILE: &str = "transactions.json";

pub fn resolve_store_home(home_override: Option<&Path>) -> StoreResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os("FINLOGIX_HOME") {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".finlogix")
            } else {
                return Err(StoreError::store_init_failed(
                    Path::new("."),
                    "Could not resolve a home directory for the transaction store.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_store_directory(path: &Path) -> StoreResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn storage_file_path(home: &Path) -> PathBuf {
    home.join(STORAGE_FILE)
}

/// Reads the durable sequence. A missing file is a cold start; content
/// that fails to decode is also treated as a cold start, with the decode
/// detail returned so the caller can surface a warning.
pub fn load_transactions(path: &Path) -> StoreResult<(Vec<Transaction>, Option<String>)> {
    let raw = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok((Vec::new(), None));
        }
        Err(error) => return Err(map_io_error(path, &error)),
    };

    match serde_json::from_str::<Vec<Transaction>>(&raw) {
        Ok(transactions) => Ok((transactions, None)),
        Err(error) => Ok((Vec::new(), Some(error.to_string()))),
    }
}

/// Writes the full sequence through a sibling temp file and a rename, so a
/// failed write never truncates the previous committed state.
pub fn save_transactions(path: &Path, transactions: &[Transaction]) -> StoreResult<()> {
    let encoded = serde_json::to_string_pretty(transactions)
        .map_err(|error| StoreError::internal_serialization(&error.to_string()))?;

    let temp_path = temp_sibling_path(path);
    fs::write(&temp_path, encoded).map_err(|error| StoreError::persist_failed(path, &error.to_string()))?;
    fs::rename(&temp_path, path).map_err(|error| {
        let _ = fs::remove_file(&temp_path);
        StoreError::persist_failed(path, &error.to_string())
    })?;

    Ok(())
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> StoreError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return StoreError::store_init_permission_denied(path, &error.to_string());
    }

    StoreError::store_init_failed(path, &error.to_string())
}

fn temp_sibling_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

fn absolutize(path: &Path) -> StoreResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| StoreError::store_init_failed(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
