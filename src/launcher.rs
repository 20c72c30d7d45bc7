//! The main menu.

use rand::Rng;
use thiserror::Error;
use tracing::event;

use crate::config::LauncherConfig;
use crate::console::{Console, wait_for_enter};
use crate::core::GameError;
use crate::games::GameKind;
use crate::update::{UpdateError, Updater};

pub const TITLE: &str = "=== Rust Casino ===";

/// Errors that end the menu loop. Everything else is reported and the
/// menu comes back.
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error(transparent)]
    Console(#[from] std::io::Error),
    #[error(transparent)]
    Update(#[from] UpdateError),
}

pub type Result<T> = std::result::Result<T, LauncherError>;

/// One line of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameKind),
    CheckForUpdates,
    Exit,
}

impl MenuChoice {
    /// Exact match on `1` through `7` after trimming.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Play(GameKind::Blackjack)),
            "2" => Some(MenuChoice::Play(GameKind::CoinFlip)),
            "3" => Some(MenuChoice::Play(GameKind::DiceRoll)),
            "4" => Some(MenuChoice::Play(GameKind::SlotMachine)),
            "5" => Some(MenuChoice::Play(GameKind::Roulette)),
            "6" => Some(MenuChoice::CheckForUpdates),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Why the menu loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherExit {
    /// The player chose exit, or input closed.
    Quit,
    /// An update was written to disk; the caller should re-exec.
    Restart,
}

pub struct Launcher<R: Rng> {
    config: LauncherConfig,
    updater: Updater,
    rng: R,
}

impl<R: Rng> Launcher<R> {
    pub fn new(config: LauncherConfig, updater: Updater, rng: R) -> Self {
        Self {
            config,
            updater,
            rng,
        }
    }

    fn show_menu<C: Console + ?Sized>(&self, console: &mut C, version: &str) -> std::io::Result<()> {
        console.clear()?;
        console.println(TITLE)?;
        console.println(&format!("Version: {}", version))?;
        console.println("")?;
        console.println("Select a game:")?;
        for (i, game) in GameKind::games().iter().enumerate() {
            console.println(&format!("{}. {}", i + 1, game))?;
        }
        console.println("6. Check for Updates")?;
        console.println("7. Exit")
    }

    fn play<C: Console + ?Sized>(&mut self, console: &mut C, game: GameKind) -> Result<()> {
        event!(tracing::Level::DEBUG, %game, "Starting game");
        match game.play(console, &mut self.rng) {
            Ok(()) => Ok(()),
            Err(GameError::Console(e)) => Err(e.into()),
            Err(e) => {
                event!(tracing::Level::WARN, %game, error = %e, "Game ended early");
                console.println(&format!("{} ended early: {}", game, e))?;
                Ok(())
            }
        }
    }

    /// Run until the player exits or an update asks for a restart.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<LauncherExit> {
        if self.config.check_on_startup && self.updater.run_interactive(console)?.needs_restart() {
            return Ok(LauncherExit::Restart);
        }

        loop {
            let version = self.updater.local_version();
            self.show_menu(console, &version)?;
            let Some(input) = console.read_line("Enter your choice (1-7): ")? else {
                event!(tracing::Level::INFO, "Input closed, leaving");
                return Ok(LauncherExit::Quit);
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Play(game)) => self.play(console, game)?,
                Some(MenuChoice::CheckForUpdates) => {
                    if self.updater.run_interactive(console)?.needs_restart() {
                        return Ok(LauncherExit::Restart);
                    }
                    wait_for_enter(console)?;
                }
                Some(MenuChoice::Exit) => {
                    console.println("Goodbye!")?;
                    return Ok(LauncherExit::Quit);
                }
                None => {
                    event!(tracing::Level::DEBUG, input = %input, "Invalid menu choice");
                    console.println("Invalid choice. Please try again.")?;
                    console.pause(self.config.invalid_choice_pause);
                }
            }
        }
    }
}
