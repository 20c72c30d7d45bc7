//! Error types for the update process

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while checking for or applying an update
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The request never produced a response
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non success status
    #[error("HTTP status: {0}")]
    Status(u16),

    /// The manifest was neither JSON nor markup wrapped JSON
    #[error("Manifest could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not build the HTTP client: {0}")]
    Client(String),

    /// Backup rename or write of a target file failed
    #[error("{}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    /// No files in the manifest and no single file url configured
    #[error("Nothing to download")]
    NothingToDownload,

    #[error("Restart failed: {0}")]
    Restart(io::Error),

    #[error("Console failure: {0}")]
    Console(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, UpdateError>;
