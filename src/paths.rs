use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the profile store location
pub const PROFILES_ENV: &str = "CRUNCH_PROFILES";

/// File name of the profile store
pub const PROFILES_FILE_NAME: &str = "profiles.json";

/// All computed paths used by the crunch tools
#[derive(Debug, Clone)]
pub struct Paths {
    /// The profile store, `profiles.json`
    pub profiles_file: PathBuf,
}

impl Paths {
    /// Resolve the store location.
    ///
    /// Priority:
    /// 1. `explicit` (from the `--profiles` flag)
    /// 2. `CRUNCH_PROFILES` env var
    /// 3. `profiles.json` in the installation root (parent of the binary's directory)
    /// 4. `~/.crunch/profiles.json`
    pub fn new(explicit: Option<&Path>) -> Result<Self> {
        if let Some(file) = explicit {
            return Ok(Self::from_file(file));
        }

        if let Some(file) = std::env::var_os(PROFILES_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::from_file(Path::new(&file)));
        }

        if let Some(root) = install_root() {
            return Ok(Self::in_dir(&root));
        }

        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
        Ok(Self::in_dir(&base_dirs.home_dir().join(".crunch")))
    }

    /// Paths for a store living in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            profiles_file: dir.join(PROFILES_FILE_NAME),
        }
    }

    /// Paths for an explicit store file
    pub fn from_file(file: &Path) -> Self {
        Self {
            profiles_file: file.to_path_buf(),
        }
    }
}

/// Binaries are installed as `<root>/bin/<exe>`; the store sits in `<root>`.
fn install_root() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let bin_dir = exe.parent()?;
    bin_dir.parent().map(Path::to_path_buf)
}
