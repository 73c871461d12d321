//! Runfiles lookup for data files shipped next to the binary.
//!
//! A hermetic build places a binary's data dependencies either in a
//! `<binary>.runfiles/` directory tree or, on platforms without symlinks, in a
//! manifest mapping logical paths to real ones. The environment variables
//! `RUNFILES_DIR` and `RUNFILES_MANIFEST_FILE` override discovery.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runfiles {
    Directory(PathBuf),
    Manifest(HashMap<String, PathBuf>),
}

impl Runfiles {
    /// Discover runfiles from the environment, then next to the executable.
    pub fn from_env() -> Option<Self> {
        if let Some(dir) = std::env::var_os("RUNFILES_DIR").filter(|v| !v.is_empty()) {
            return Some(Runfiles::Directory(PathBuf::from(dir)));
        }
        if let Some(manifest) = std::env::var_os("RUNFILES_MANIFEST_FILE").filter(|v| !v.is_empty())
        {
            match Self::from_manifest(Path::new(&manifest)) {
                Ok(runfiles) => return Some(runfiles),
                Err(e) => tracing::debug!(
                    "Ignoring unreadable runfiles manifest {}: {}",
                    Path::new(&manifest).display(),
                    e
                ),
            }
        }

        let exe = std::env::current_exe().ok()?;
        let dir = sibling_runfiles_dir(&exe);
        dir.is_dir().then_some(Runfiles::Directory(dir))
    }

    /// Load a manifest of `logical-path real-path` lines.
    pub fn from_manifest(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse_manifest(&content))
    }

    fn parse_manifest(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let (logical, real) = line.split_once(' ')?;
                let real = real.trim();
                if logical.is_empty() || real.is_empty() {
                    return None;
                }
                Some((logical.to_string(), PathBuf::from(real)))
            })
            .collect();
        Runfiles::Manifest(entries)
    }

    /// Map a logical runfiles path to a real filesystem path.
    ///
    /// Absolute paths are returned unchanged. For a manifest, unknown paths map
    /// to `None`; a directory tree maps every path, whether or not it exists.
    pub fn rlocation(&self, path: &str) -> Option<PathBuf> {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return Some(candidate.to_path_buf());
        }
        match self {
            Runfiles::Directory(root) => Some(root.join(candidate)),
            Runfiles::Manifest(entries) => entries.get(path).cloned(),
        }
    }
}

fn sibling_runfiles_dir(exe: &Path) -> PathBuf {
    let mut dir = OsString::from(exe.as_os_str());
    dir.push(".runfiles");
    PathBuf::from(dir)
}
