use std::path::PathBuf;
use std::time::Duration;

/// Default directory holding the persisted slots.
pub const DEFAULT_DATA_DIR: &str = ".shipbox";

/// Default quiescence window for the list search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Config {
    /// Directory where the box slot is written.
    ///
    /// Ignored when `ephemeral` is set.
    pub data_dir: PathBuf,
    /// Keeps the box list in memory only, nothing is read or written on disk.
    pub ephemeral: bool,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops decoration, 2 prints results only.
    pub quiet: u8,
    pub debounce: Duration,
}

