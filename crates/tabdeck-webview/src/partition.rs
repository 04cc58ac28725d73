//! Per-tab storage partitions.
//!
//! Every tab key gets its own data directory so cookies, local storage and
//! cache never leak between tabs. The directory name is the key with unsafe
//! characters replaced, plus a short digest of the raw key so that keys
//! differing only in replaced characters stay apart.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tabdeck_common::TabKey;

const MAX_READABLE_LEN: usize = 48;

/// Directory name for `key`.
pub fn partition_name(key: &TabKey) -> String {
    let readable: String = key
        .as_str()
        .chars()
        .take(MAX_READABLE_LEN)
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let digest = Sha256::digest(key.as_str().as_bytes());
    let short: String = digest[..4].iter().map(|b| format!("{b:02x}")).collect();
    format!("{readable}-{short}")
}

/// `<root>/<partition_name(key)>`
pub fn partition_path(root: &Path, key: &TabKey) -> PathBuf {
    root.join(partition_name(key))
}
