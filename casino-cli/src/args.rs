use std::path::PathBuf;
use std::time::Duration;

use casino::config::{DEFAULT_MANIFEST_URL, DEFAULT_SCRIPT_URL, LauncherConfig, UpdateConfig};
use casino::update::version::VERSION_FILE;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "casino")]
#[command(about = "Blackjack, coin flip, dice, slots and roulette in your terminal")]
pub struct Cli {
    /// Where to fetch the version manifest from
    #[arg(long, default_value = DEFAULT_MANIFEST_URL)]
    pub manifest_url: String,

    /// Replacement for this executable when the manifest lists no files
    #[arg(long, default_value = DEFAULT_SCRIPT_URL)]
    pub script_url: String,

    /// Never replace this executable from --script-url
    #[arg(long)]
    pub no_self_update: bool,

    /// Local version override
    #[arg(long, default_value = VERSION_FILE)]
    pub version_file: PathBuf,

    /// Directory the manifest's file names are relative to
    #[arg(long, default_value = ".")]
    pub install_dir: PathBuf,

    /// Skip the update check before the first menu
    #[arg(long)]
    pub skip_update_check: bool,

    /// Give up on HTTP requests after this many seconds. Waits forever
    /// when unset.
    #[arg(long)]
    pub http_timeout: Option<u64>,

    /// Seconds to wait before restarting after an update
    #[arg(long, default_value_t = 2)]
    pub restart_delay: u64,

    /// Seed the random source to replay a session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn launcher_config(&self, self_path: PathBuf) -> LauncherConfig {
        LauncherConfig {
            update: UpdateConfig {
                manifest_url: self.manifest_url.clone(),
                script_url: (!self.no_self_update).then(|| self.script_url.clone()),
                version_file: self.version_file.clone(),
                install_dir: self.install_dir.clone(),
                self_path: Some(self_path),
                http_timeout: self.http_timeout.map(Duration::from_secs),
                restart_delay: Duration::from_secs(self.restart_delay),
            },
            check_on_startup: !self.skip_update_check,
            ..LauncherConfig::default()
        }
    }
}
