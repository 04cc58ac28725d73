mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{cache_dir, capture_dir, config_dir, data_dir, log_dir, partitions_dir};
