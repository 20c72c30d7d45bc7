use std::fs;
use std::io;
use std::path::Path;

use tracing::event;

/// Version compiled into this binary.
pub const COMPILED_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default name of the local version override file.
pub const VERSION_FILE: &str = "version.txt";

/// The local version: the trimmed contents of `path` when it exists and
/// isn't blank, otherwise [`COMPILED_VERSION`].
pub fn local_version(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => contents.trim().to_string(),
        Ok(_) => {
            event!(tracing::Level::WARN, path = %path.display(), "Version file is empty");
            COMPILED_VERSION.to_string()
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => COMPILED_VERSION.to_string(),
        Err(e) => {
            event!(tracing::Level::WARN, path = %path.display(), error = %e, "Can't read version file");
            COMPILED_VERSION.to_string()
        }
    }
}

/// Any difference is an update, even to an older looking version.
pub fn is_update(local: &str, remote: &str) -> bool {
    local != remote
}
