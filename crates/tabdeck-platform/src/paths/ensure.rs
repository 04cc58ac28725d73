use std::fs;
use std::path::PathBuf;

use tabdeck_common::PlatformError;

use super::resolve::{cache_dir, config_dir, data_dir, log_dir, partitions_dir};

/// Creates every application directory that does not exist yet.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    let dirs: [fn() -> Result<PathBuf, PlatformError>; 5] =
        [config_dir, data_dir, cache_dir, log_dir, partitions_dir];
    for dir in dirs {
        let path = dir()?;
        fs::create_dir_all(&path)
            .map_err(|e| PlatformError::Dirs(format!("{}: {e}", path.display())))?;
    }
    Ok(())
}
