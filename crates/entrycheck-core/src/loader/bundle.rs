//! Resolution of `.vst3` bundle directories.
//!
//! A bundle keeps its binary at `Contents/<arch>-linux/<stem>.so`. Only that one
//! candidate is derived; nothing is scanned.
use std::env::consts::ARCH;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{BUNDLE_CONTENTS_DIR, BUNDLE_LIBRARY_EXTENSION, BUNDLE_PLATFORM_SUFFIX};

/// Map `path` to the shared object the platform loader should open.
///
/// Files and paths that do not exist come back unchanged so the loader
/// reports on them itself.
pub fn library_path(path: &Path) -> PathBuf {
    if !path.is_dir() {
        return path.to_path_buf();
    }
    let resolved = bundle_library_path(path, ARCH);
    debug!("Resolved bundle {} to {}", path.display(), resolved.display());
    resolved
}

/// The shared object of `bundle` for machine architecture `arch`.
pub fn bundle_library_path(bundle: &Path, arch: &str) -> PathBuf {
    // Pushed rather than set_extension so dotted stems like "my.plugin" survive.
    let mut file_name = bundle.file_stem().unwrap_or_default().to_os_string();
    file_name.push(".");
    file_name.push(BUNDLE_LIBRARY_EXTENSION);
    bundle
        .join(BUNDLE_CONTENTS_DIR)
        .join(format!("{arch}-{BUNDLE_PLATFORM_SUFFIX}"))
        .join(file_name)
}
