//! Interactive prompt
//!
//! Reads commands line by line, dispatches them to the [`Pager`] and prints
//! the results. Errors from a single command are printed and the loop keeps
//! going.

mod commands;

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage};
use crate::pager::Pager;

pub use commands::{clean_input, Command, CommandInfo, COMMANDS};

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The read-eval-print loop.
#[derive(Debug)]
pub struct Repl<W> {
    pager: Pager,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(pager: Pager, out: W) -> Self {
        Self { pager, out }
    }

    /// Consumes the REPL and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `exit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out)?;
                self.say_goodbye()?;
                return Ok(());
            };

            match self.execute(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(PokedexError::Io(e)) => return Err(e.into()),
                Err(e) => {
                    if matches!(e, PokedexError::Http(_)) {
                        warn!("Command failed: {}", e);
                    }
                    writeln!(self.out, "{}", e)?;
                }
            }
        }
    }

    /// Parses and runs a single line of input.
    pub async fn execute(&mut self, line: &str) -> Result<Flow> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Help => self.print_help()?,
            Command::Exit => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
            Command::Clear => execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?,
            Command::Map => {
                let page = self.pager.next_page().await?;
                self.print_page(&page)?;
            }
            Command::MapBack => {
                let page = self.pager.previous_page().await?;
                self.print_page(&page)?;
            }
            Command::Explore(area) => {
                writeln!(self.out, "Exploring {}...", area)?;
                let area = self.pager.explore(&area).await?;
                self.print_area(&area)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Welcome to the Pokedex!")?;
        writeln!(self.out, "Usage:")?;
        writeln!(self.out)?;
        for entry in COMMANDS {
            writeln!(self.out, "{}: {}", entry.usage, entry.description)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn say_goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
        Ok(())
    }

    fn print_page(&mut self, page: &LocationAreaPage) -> Result<()> {
        for name in page.names() {
            writeln!(self.out, "{}", name)?;
        }
        Ok(())
    }

    fn print_area(&mut self, area: &LocationArea) -> Result<()> {
        if area.pokemon_encounters.is_empty() {
            writeln!(self.out, "No Pokemon found in {}", area.name)?;
            return Ok(());
        }

        writeln!(self.out, "Found Pokemon:")?;
        for name in area.pokemon_names() {
            writeln!(self.out, " - {}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::api::PokeApiClient;
    use crate::cache::Cache;

    fn offline_repl() -> Repl<Vec<u8>> {
        let client = PokeApiClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let pager = Pager::new(
            client,
            Cache::detached(Duration::from_secs(60)),
            Cache::detached(Duration::from_secs(60)),
            20,
        );
        Repl::new(pager, Vec::new())
    }

    fn output(repl: Repl<Vec<u8>>) -> String {
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let mut repl = offline_repl();

        assert_eq!(repl.execute("help").await.unwrap(), Flow::Continue);

        let text = output(repl);
        assert!(text.contains("Welcome to the Pokedex!"));
        for entry in COMMANDS {
            assert!(text.contains(entry.usage), "help should mention {}", entry.name);
        }
    }

    #[tokio::test]
    async fn test_exit_stops_the_loop() {
        let mut repl = offline_repl();

        assert_eq!(repl.execute("exit").await.unwrap(), Flow::Exit);
        assert!(output(repl).contains("Goodbye"));
    }

    #[tokio::test]
    async fn test_clear_wipes_screen_and_homes_cursor() {
        let mut repl = offline_repl();

        assert_eq!(repl.execute("clear").await.unwrap(), Flow::Continue);

        let mut expected = Vec::new();
        crossterm::queue!(expected, Clear(ClearType::All), MoveTo(0, 0)).unwrap();
        let text = output(repl);
        assert_eq!(text.as_bytes(), expected.as_slice());
        assert!(text.starts_with("\x1B[2J"));
        assert!(!text.contains(PROMPT));
    }

    #[tokio::test]
    async fn test_run_reports_errors_and_continues() {
        let mut repl = offline_repl();

        repl.run(&b"fly\nmapb\n\nexit\nhelp\n"[..]).await.unwrap();

        let text = output(repl);
        assert!(text.contains("fly: command not recognized"));
        assert!(text.contains("first page"));
        assert!(text.contains("Goodbye"));
        assert!(!text.contains("Welcome"), "input after exit is not read");
        assert_eq!(text.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn test_run_ends_on_end_of_input() {
        let mut repl = offline_repl();

        repl.run(&b"help\n"[..]).await.unwrap();

        let text = output(repl);
        assert!(text.contains("Welcome"));
        assert!(text.ends_with("Goodbye!\n"));
    }
}
