use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use casino::console::Console;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};

/// The real terminal: lines from stdin, output on stdout, clearing via
/// crossterm.
pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> io::Result<()> {
        // Clear the entire screen and move cursor to top-left corner
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.stdout.flush()
    }

    fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.stdout, "{}", prompt)?;
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(&line).to_string()))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!("7", trim_line_ending("7\n"));
        assert_eq!("7", trim_line_ending("7\r\n"));
        assert_eq!(" y ", trim_line_ending(" y \n"));
        assert_eq!("", trim_line_ending("\n"));
    }
}
