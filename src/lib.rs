//! A small terminal casino.
//!
//! Five single round games (blackjack, coin flip, dice, slots and
//! roulette) behind a numbered menu, plus a self updater that reads a
//! JSON manifest over HTTP, replaces the listed files and restarts.

/// Cards, decks and hands used by the table games.
pub mod core;
/// The games themselves.
pub mod games;

/// Console abstraction shared by the menu and the games.
pub mod console;
/// Launcher and updater settings.
pub mod config;
/// The main menu loop.
pub mod launcher;
/// Manifest driven self update.
pub mod update;
