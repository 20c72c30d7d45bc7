//! Writing downloaded files over the installed ones.
//!
//! Every target that already exists is first renamed to `<name>.bak`,
//! then the new content is written under the original name with the old
//! file's permissions. Nothing about the download is verified: whatever
//! the host sends is written and later executed. The rename and the
//! write are separate steps, so a crash in between leaves only the
//! backup behind.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{event, trace_span};

use super::client::UpdateClient;
use super::error::{Result, UpdateError};
use super::manifest::FileDescriptor;

/// Appended to a file name before it is overwritten.
pub const BACKUP_SUFFIX: &str = ".bak";

/// What happened to one entry of the update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Replaced {
        path: PathBuf,
        /// Where the previous file went, if there was one.
        backup: Option<PathBuf>,
    },
    /// The descriptor lacked a name or url.
    Skipped { index: usize },
    Failed { name: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<FileOutcome>,
}

impl ApplyReport {
    pub fn replaced(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Replaced { .. }))
            .count()
    }

    /// Only restart when something on disk actually changed.
    pub fn needs_restart(&self) -> bool {
        self.replaced() > 0
    }
}

/// `dir/name` becomes `dir/name.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Back up `path` if it exists and write `content` in its place.
///
/// Returns the backup path when a previous file was moved aside.
pub fn replace_file(path: &Path, content: &[u8]) -> Result<Option<PathBuf>> {
    let file_error = |source: io::Error| UpdateError::File {
        path: path.to_path_buf(),
        source,
    };

    let previous = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(file_error(e)),
    };

    let backup = match previous {
        Some(_) => {
            let backup = backup_path(path);
            fs::rename(path, &backup).map_err(file_error)?;
            event!(tracing::Level::INFO, from = %path.display(), to = %backup.display(), "Backed up");
            Some(backup)
        }
        None => None,
    };

    fs::write(path, content).map_err(file_error)?;
    if let Some(permissions) = previous {
        fs::set_permissions(path, permissions).map_err(file_error)?;
    }
    Ok(backup)
}

fn download_and_replace(client: &UpdateClient, url: &str, path: &Path) -> Result<Option<PathBuf>> {
    let content = client.download(url)?;
    event!(tracing::Level::DEBUG, url, bytes = content.len(), "Downloaded");
    replace_file(path, &content)
}

/// Apply every descriptor in order, relative to `install_dir`.
///
/// Incomplete descriptors are skipped and failures are recorded; neither
/// stops the remaining entries.
pub fn apply_files(
    client: &UpdateClient,
    install_dir: &Path,
    files: &[FileDescriptor],
) -> ApplyReport {
    let span = trace_span!("apply_files", count = files.len());
    let _enter = span.enter();

    let mut report = ApplyReport::default();
    for (index, descriptor) in files.iter().enumerate() {
        let Some((name, url)) = descriptor.target() else {
            event!(tracing::Level::WARN, index, ?descriptor, "Skipping incomplete file entry");
            report.outcomes.push(FileOutcome::Skipped { index });
            continue;
        };

        let path = install_dir.join(name);
        let outcome = match download_and_replace(client, url, &path) {
            Ok(backup) => FileOutcome::Replaced { path, backup },
            Err(e) => {
                event!(tracing::Level::WARN, name, error = %e, "File update failed");
                FileOutcome::Failed {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            }
        };
        report.outcomes.push(outcome);
    }
    report
}

/// Replace exactly one file, normally the running executable.
pub fn apply_single(client: &UpdateClient, url: &str, target: &Path) -> ApplyReport {
    let outcome = match download_and_replace(client, url, target) {
        Ok(backup) => FileOutcome::Replaced {
            path: target.to_path_buf(),
            backup,
        },
        Err(e) => {
            event!(tracing::Level::WARN, target = %target.display(), error = %e, "Self update failed");
            FileOutcome::Failed {
                name: target.display().to_string(),
                reason: e.to_string(),
            }
        }
    };
    ApplyReport {
        outcomes: vec![outcome],
    }
}
