//! Optional data files shipped alongside the binary.

use super::runfiles::Runfiles;
use crate::utils::read_text;
use std::path::Path;

/// Load the README data file through runfiles.
///
/// Missing runfiles, an unmapped path, an unreadable file or blank content all
/// yield `None`; the README is never required.
pub fn load_readme(runfiles_path: &str) -> Option<String> {
    let Some(path) = Runfiles::from_env().and_then(|r| r.rlocation(runfiles_path)) else {
        tracing::debug!("No runfiles location for {}", runfiles_path);
        return None;
    };
    read_resource(&path)
}

/// Read a text resource, trimmed. Blank or unreadable files give `None`.
pub fn read_resource(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(decoded) => {
            let content = decoded.content.trim();
            if content.is_empty() {
                return None;
            }
            tracing::info!("Loaded resource from {}", path.display());
            Some(content.to_string())
        }
        Err(e) => {
            tracing::debug!("Resource {} unavailable: {}", path.display(), e);
            None
        }
    }
}
