//! Whole-collection snapshot files.
//!
//! A snapshot is a JSON array of records. Writes go to a temporary sibling
//! file which is synced and then renamed over the target, so a reader of
//! the target path sees either the previous or the next collection.

use crate::{Result as StoreErrorResult, StoreError};

use std::ffi::OsString;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Load the snapshot at `path`. A missing or blank file is an empty
/// collection.
pub(crate) async fn load<R: DeserializeOwned>(path: &Path) -> StoreErrorResult<Vec<R>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io("read", path, e)),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupted {
        path: path.to_path_buf(),
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Replace the snapshot at `path` with `records`.
pub(crate) async fn write_atomic<R: Serialize>(
    path: &Path,
    records: &[R],
) -> StoreErrorResult<()> {
    let json = serde_json::to_vec_pretty(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io("create directory for", path, e))?;
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = write_synced(&temp_path, &json).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::io("write", &temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(StoreError::io("replace", path, e));
    }

    // The new snapshot is already in place, so a failed directory sync is only logged
    if let Err(e) = sync_parent(path).await {
        warn!("Failed to sync directory of {}: {}", path.display(), e);
    }

    Ok(())
}

async fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

/// Make the rename itself durable by syncing the containing directory.
#[cfg(unix)]
async fn sync_parent(path: &Path) -> std::io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::File::open(parent).await?.sync_all().await,
        None => fs::File::open(".").await?.sync_all().await,
    }
}

#[cfg(not(unix))]
async fn sync_parent(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(format!(".tmp.{}", std::process::id()));
    path.with_file_name(name)
}
