//! Line oriented console used by the menu and every game.
//!
//! The games never touch stdin or stdout directly. They talk to a
//! [`Console`], which the binary backs with the real terminal and the
//! tests back with a [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Shown after every game and after an update check.
pub const RETURN_PROMPT: &str = "Press Enter to return to the main menu...";

pub trait Console {
    /// Clear the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Print one line of output.
    fn println(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input without the line ending.
    ///
    /// Returns `Ok(None)` once the input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Block for a fixed amount of time.
    fn pause(&mut self, duration: Duration);
}

/// Ask a yes / no question. Only `y` (any case, surrounding
/// whitespace ignored) is a yes; everything else, including a closed
/// input, is a no.
pub fn ask_yes<C: Console + ?Sized>(console: &mut C, prompt: &str) -> io::Result<bool> {
    let answer = console.read_line(prompt)?;
    Ok(matches!(answer, Some(a) if a.trim().to_lowercase() == "y"))
}

/// Wait until the player acknowledges the result.
pub fn wait_for_enter<C: Console + ?Sized>(console: &mut C) -> io::Result<()> {
    console.read_line(RETURN_PROMPT)?;
    Ok(())
}

/// Console that replays canned input and records everything printed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    /// Every printed line and every prompt, in order.
    pub transcript: Vec<String>,
    /// How many times the screen was cleared.
    pub clears: usize,
    /// Every pause requested.
    pub pauses: Vec<Duration>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Input lines not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Is there a transcript line containing `needle`?
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn println(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
