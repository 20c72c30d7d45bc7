use casino::launcher::{Launcher, LauncherExit};
use casino::update::{UpdateClient, Updater, restart::restart_process};
use casino_cli::{args::Cli, frame::TerminalConsole, logging};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    // Resolved now: after a self update renames the binary the OS
    // reports the backup as the current executable.
    let self_path = match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error locating the casino executable: {}", e);
            std::process::exit(1);
        }
    };

    let config = cli.launcher_config(self_path.clone());
    let client = match UpdateClient::new_http(config.update.http_timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let restart_delay = config.update.restart_delay;
    let updater = Updater::new(client, config.update.clone());
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut console = TerminalConsole::new();
    let mut launcher = Launcher::new(config, updater, rng);
    match launcher.run(&mut console) {
        Ok(LauncherExit::Quit) => {}
        Ok(LauncherExit::Restart) => {
            if let Err(e) = restart_process(&self_path, restart_delay) {
                eprintln!("Update applied but restart failed: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
