use crate::error::InstallError;
use crate::platform::platform;
use fs_err as fs;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Marker file identifying a templates root; also the installer entry point.
pub const ENTRY_POINT: &str = "install.sh";
/// Directory name used under the shared-data locations.
pub const DATA_DIR_NAME: &str = "claude-parallel";

/// Base directories the candidate templates locations are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    pub prefix: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub source_dir: PathBuf,
}

/// A templates directory that contained the entry point when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub templates_dir: PathBuf,
    pub entry_point_path: PathBuf,
}

impl SearchRoots {
    pub fn from_env() -> Self {
        let p = platform();
        SearchRoots {
            prefix: p.install_prefix(),
            home: p.home_dir(),
            source_dir: source_checkout_dir(),
        }
    }

    /// Candidate templates directories, highest priority first.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out = Vec::with_capacity(3);
        if let Some(prefix) = &self.prefix {
            out.push(prefix.join("share").join(DATA_DIR_NAME));
        }
        if let Some(home) = &self.home {
            out.push(home.join(".local").join("share").join(DATA_DIR_NAME));
        }
        out.push(self.source_dir.clone());
        out
    }
}

// This file lives at <checkout>/src/locator.rs.
fn source_checkout_dir() -> PathBuf {
    let this_file = Path::new(env!("CARGO_MANIFEST_DIR")).join(file!());
    this_file
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

pub fn locate(roots: &SearchRoots) -> Result<InstallTarget, InstallError> {
    let candidates = roots.candidates();
    for dir in &candidates {
        let entry = dir.join(ENTRY_POINT);
        match fs::metadata(&entry) {
            Ok(meta) if meta.is_file() => {
                info!("using templates from {}", dir.display());
                return Ok(InstallTarget {
                    templates_dir: dir.clone(),
                    entry_point_path: entry,
                });
            }
            Ok(_) => debug!("{} is not a regular file", entry.display()),
            Err(e) => debug!("skipping candidate: {e}"),
        }
    }
    Err(InstallError::NotFound {
        searched: candidates,
    })
}
