//! Self update: fetch a version manifest, compare it with the local
//! version, and on request download the listed files over the installed
//! ones before restarting.

use std::path::PathBuf;

use tracing::event;

use crate::config::UpdateConfig;
use crate::console::{Console, ask_yes};

pub mod applier;
pub mod checker;
pub mod client;
mod error;
pub mod manifest;
pub mod restart;
pub mod version;

pub use self::applier::{ApplyReport, BACKUP_SUFFIX, FileOutcome};
pub use self::checker::{UpdateOffer, UpdateStatus};
pub use self::client::{MockServer, UpdateClient};
pub use self::error::{Result, UpdateError};
pub use self::manifest::{FileDescriptor, Manifest};

/// How an interactive update check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateFlow {
    UpToDate,
    /// Network, status or parse failure. Already reported.
    CheckFailed,
    Declined,
    /// The update could not even start.
    ApplyFailed,
    Applied(ApplyReport),
}

impl UpdateFlow {
    /// The process should be replaced by the freshly written files.
    pub fn needs_restart(&self) -> bool {
        matches!(self, UpdateFlow::Applied(report) if report.needs_restart())
    }
}

pub struct Updater {
    client: UpdateClient,
    config: UpdateConfig,
}

impl Updater {
    pub fn new(client: UpdateClient, config: UpdateConfig) -> Self {
        Self { client, config }
    }

    pub fn local_version(&self) -> String {
        version::local_version(&self.config.version_file)
    }

    /// The executable to replace and restart.
    pub fn self_path(&self) -> Result<PathBuf> {
        match &self.config.self_path {
            Some(path) => Ok(path.clone()),
            None => std::env::current_exe().map_err(UpdateError::Restart),
        }
    }

    pub fn check(&self) -> Result<UpdateStatus> {
        checker::check(&self.client, &self.config.manifest_url, &self.local_version())
    }

    /// Download the offered files. Without a file list the single
    /// configured url replaces the executable itself.
    pub fn apply(&self, offer: &UpdateOffer) -> Result<ApplyReport> {
        if !offer.files.is_empty() {
            return Ok(applier::apply_files(
                &self.client,
                &self.config.install_dir,
                &offer.files,
            ));
        }
        let url = self
            .config
            .script_url
            .as_deref()
            .ok_or(UpdateError::NothingToDownload)?;
        Ok(applier::apply_single(&self.client, url, &self.self_path()?))
    }

    /// Check, show the changelog, ask, and apply. Check and apply
    /// failures are printed and folded into the returned flow; only a
    /// console failure is an error.
    pub fn run_interactive<C: Console + ?Sized>(&self, console: &mut C) -> Result<UpdateFlow> {
        console.println("Checking for updates...")?;
        let offer = match self.check() {
            Ok(UpdateStatus::UpToDate { .. }) => {
                console.println("You are running the latest version.")?;
                return Ok(UpdateFlow::UpToDate);
            }
            Ok(UpdateStatus::Available(offer)) => offer,
            Err(UpdateError::Status(status)) => {
                console.println(&format!(
                    "Could not check for updates (HTTP status: {})",
                    status
                ))?;
                return Ok(UpdateFlow::CheckFailed);
            }
            Err(e) => {
                event!(tracing::Level::WARN, error = %e, "Update check failed");
                console.println(&format!("Update check failed: {}", e))?;
                return Ok(UpdateFlow::CheckFailed);
            }
        };

        show_offer(console, &offer)?;
        if !ask_yes(console, "Do you want to update now? (y/n): ")? {
            console.println("Update canceled by user.")?;
            return Ok(UpdateFlow::Declined);
        }

        console.println("Downloading updated version...")?;
        let report = match self.apply(&offer) {
            Ok(report) => report,
            Err(e) => {
                event!(tracing::Level::WARN, error = %e, "Update failed");
                console.println(&format!("Update failed: {}", e))?;
                return Ok(UpdateFlow::ApplyFailed);
            }
        };
        show_report(console, &report)?;
        Ok(UpdateFlow::Applied(report))
    }
}

fn show_offer<C: Console + ?Sized>(console: &mut C, offer: &UpdateOffer) -> std::io::Result<()> {
    console.println("")?;
    console.println("Update available!")?;
    console.println(&format!("Current version: {}", offer.current))?;
    console.println(&format!("Latest version: {}", offer.latest))?;
    console.println("")?;
    console.println("Changelog:")?;
    console.println(&offer.changelog)?;
    if !offer.files.is_empty() {
        console.println("")?;
        console.println("Files to update:")?;
        for d in &offer.files {
            console.println(&format!(
                "  - {}",
                d.name.as_deref().unwrap_or("<unnamed>")
            ))?;
        }
    }
    console.println("")
}

fn show_report<C: Console + ?Sized>(console: &mut C, report: &ApplyReport) -> std::io::Result<()> {
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Replaced {
                path,
                backup: Some(backup),
            } => console.println(&format!(
                "Updated {} (previous version kept as {})",
                path.display(),
                backup.display()
            ))?,
            FileOutcome::Replaced { path, backup: None } => {
                console.println(&format!("Updated {}", path.display()))?
            }
            FileOutcome::Skipped { index } => console.println(&format!(
                "Warning: skipping file entry {}: missing name or url",
                index + 1
            ))?,
            FileOutcome::Failed { name, reason } => {
                console.println(&format!("Failed to update {}: {}", name, reason))?
            }
        }
    }
    if report.needs_restart() {
        console.println("Update downloaded and applied. Restarting...")
    } else {
        console.println("No files were updated.")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::console::ScriptedConsole;

    const URL: &str = "http://updates.test/version.json";

    fn updater(server: MockServer, dir: &std::path::Path) -> Updater {
        let config = UpdateConfig {
            manifest_url: URL.to_string(),
            script_url: Some("http://updates.test/casino".to_string()),
            version_file: dir.join("version.txt"),
            install_dir: dir.to_path_buf(),
            self_path: Some(dir.join("casino")),
            ..UpdateConfig::default()
        };
        Updater::new(UpdateClient::new_mock(server), config)
    }

    #[test]
    fn test_up_to_date_never_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let updater = updater(
            MockServer::new().with_body(URL, r#"{"latest_version": "1.0.0"}"#),
            dir.path(),
        );
        let mut console = ScriptedConsole::new(["y"]);
        assert_eq!(UpdateFlow::UpToDate, updater.run_interactive(&mut console).unwrap());
        assert!(console.printed("You are running the latest version."));
        assert!(!console.printed("Do you want to update now?"));
        assert_eq!(1, console.remaining_inputs());
    }

    #[test]
    fn test_version_file_overrides_compiled() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("version.txt"), "2.0.0\n").unwrap();
        let updater = updater(
            MockServer::new().with_body(URL, r#"{"latest_version": "2.0.0"}"#),
            dir.path(),
        );
        assert_eq!("2.0.0", updater.local_version());
        assert!(matches!(updater.check().unwrap(), UpdateStatus::UpToDate { .. }));
    }

    #[test]
    fn test_declined() {
        let dir = tempfile::tempdir().unwrap();
        let updater = updater(
            MockServer::new().with_body(URL, r#"{"latest_version": "2.0.0", "changelog": "fixes"}"#),
            dir.path(),
        );
        let mut console = ScriptedConsole::new(["n"]);
        assert_eq!(UpdateFlow::Declined, updater.run_interactive(&mut console).unwrap());
        assert!(console.printed("Update available!"));
        assert!(console.printed("fixes"));
        assert!(console.printed("Update canceled by user."));
        assert!(!dir.path().join("casino").exists());
    }

    #[test]
    fn test_bad_status_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let updater = updater(MockServer::new().with_status(URL, 404, ""), dir.path());
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(UpdateFlow::CheckFailed, updater.run_interactive(&mut console).unwrap());
        assert!(console.printed("Could not check for updates (HTTP status: 404)"));
    }

    #[test]
    fn test_unreachable_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let updater = updater(MockServer::new().with_unreachable(URL), dir.path());
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(UpdateFlow::CheckFailed, updater.run_interactive(&mut console).unwrap());
        assert!(console.printed("Update check failed: "));
    }

    #[test_log::test]
    fn test_single_file_update() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("casino"), "v1").unwrap();
        let updater = updater(
            MockServer::new()
                .with_body(URL, r#"{"latest_version": "1.1.0"}"#)
                .with_body("http://updates.test/casino", "v2"),
            dir.path(),
        );
        let mut console = ScriptedConsole::new(["y"]);
        let flow = updater.run_interactive(&mut console).unwrap();
        assert!(flow.needs_restart());
        assert_eq!("v2", fs::read_to_string(dir.path().join("casino")).unwrap());
        assert_eq!("v1", fs::read_to_string(dir.path().join("casino.bak")).unwrap());
        assert!(console.printed("Update downloaded and applied. Restarting..."));
    }

    #[test]
    fn test_no_files_and_no_script_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut updater = updater(
            MockServer::new().with_body(URL, r#"{"latest_version": "1.1.0"}"#),
            dir.path(),
        );
        updater.config.script_url = None;
        let mut console = ScriptedConsole::new(["y"]);
        let flow = updater.run_interactive(&mut console).unwrap();
        assert_eq!(UpdateFlow::ApplyFailed, flow);
        assert!(!flow.needs_restart());
        assert!(console.printed("Update failed: Nothing to download"));
    }

    #[test]
    fn test_all_downloads_failing_means_no_restart() {
        let dir = tempfile::tempdir().unwrap();
        let updater = updater(
            MockServer::new().with_body(
                URL,
                r#"{"latest_version": "2.0.0", "files": [{"name": "a.txt", "url": "http://x/a"}, {"url": "http://x/b"}]}"#,
            ),
            dir.path(),
        );
        let mut console = ScriptedConsole::new(["y"]);
        let flow = updater.run_interactive(&mut console).unwrap();
        assert!(!flow.needs_restart());
        assert!(console.printed("Failed to update a.txt: HTTP status: 404"));
        assert!(console.printed("Warning: skipping file entry 2: missing name or url"));
        assert!(console.printed("No files were updated."));
    }
}
