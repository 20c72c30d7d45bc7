use tracing::{event, trace_span};

use super::client::UpdateClient;
use super::error::{Result, UpdateError};
use super::manifest::{FileDescriptor, Manifest, parse_tolerant};
use super::version::is_update;

/// A newer (or at least different) version the user can install.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOffer {
    pub current: String,
    pub latest: String,
    pub changelog: String,
    /// Empty for the single file variant.
    pub files: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    UpToDate { version: String },
    Available(UpdateOffer),
}

/// Compare a manifest with the local version. Only exact equality counts
/// as up to date.
pub fn evaluate(manifest: &Manifest, local: &str) -> UpdateStatus {
    let latest = manifest.latest_version_or(local);
    if !is_update(local, latest) {
        return UpdateStatus::UpToDate {
            version: local.to_string(),
        };
    }
    UpdateStatus::Available(UpdateOffer {
        current: local.to_string(),
        latest: latest.to_string(),
        changelog: manifest.changelog().to_string(),
        files: manifest.files().to_vec(),
    })
}

/// Fetch the manifest once and evaluate it. No retries.
pub fn check(client: &UpdateClient, manifest_url: &str, local: &str) -> Result<UpdateStatus> {
    let span = trace_span!("update_check", manifest_url);
    let _enter = span.enter();

    let response = client.get(manifest_url)?;
    if !response.is_success() {
        event!(tracing::Level::WARN, status = response.status, "Manifest request failed");
        return Err(UpdateError::Status(response.status));
    }

    let manifest = parse_tolerant(&response.text())?;
    let status = evaluate(&manifest, local);
    event!(tracing::Level::INFO, local, ?status, "Update check finished");
    Ok(status)
}
