use std::path::Path;
use std::path::PathBuf;

/// Smallest output, in bytes, accepted as a real database. Anything under this is treated as an
/// empty or truncated build.
pub const DEFAULT_MIN_SIZE: u64 = 1024;

pub const DEFAULT_ASSET: &str = "irblaster";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub script_path: PathBuf,
    pub output_path: PathBuf,
    pub min_size: u64,
}

impl Config {
    pub fn new(script_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
            output_path: output_path.into(),
            min_size: DEFAULT_MIN_SIZE,
        }
    }

    /// Paths for the asset `name` under `root`, i.e. `assets/db_src/<name>.sql` in and
    /// `assets/db/<name>.sqlite` out.
    pub fn for_asset(root: &Path, name: &str) -> Self {
        let assets = root.join("assets");

        Self::new(
            assets.join("db_src").join(format!("{name}.sql")),
            assets.join("db").join(format!("{name}.sqlite")),
        )
    }

    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = min_size;
        self
    }
}
