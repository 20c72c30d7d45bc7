use std::path::PathBuf;
use std::time::Duration;

use crate::update::version::VERSION_FILE;

/// Where the manifest lives unless told otherwise.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/your-username/your-repo-name/main/version.json";

/// Replacement binary for the single file update, when the manifest
/// lists no files.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/your-username/your-repo-name/main/casino";

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConfig {
    pub manifest_url: String,
    /// Used when the manifest has no `files`. `None` disables the single
    /// file update.
    pub script_url: Option<String>,
    /// Optional local version override.
    pub version_file: PathBuf,
    /// Manifest file names are relative to this.
    pub install_dir: PathBuf,
    /// The executable the single file update replaces and the restart
    /// runs. `None` means the current executable.
    pub self_path: Option<PathBuf>,
    /// `None` waits forever.
    pub http_timeout: Option<Duration>,
    pub restart_delay: Duration,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            script_url: Some(DEFAULT_SCRIPT_URL.to_string()),
            version_file: PathBuf::from(VERSION_FILE),
            install_dir: PathBuf::from("."),
            self_path: None,
            http_timeout: None,
            restart_delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub update: UpdateConfig,
    /// Run an update check before the first menu.
    pub check_on_startup: bool,
    /// How long the "Invalid choice" message stays up.
    pub invalid_choice_pause: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            update: UpdateConfig::default(),
            check_on_startup: true,
            invalid_choice_pause: Duration::from_secs(1),
        }
    }
}
