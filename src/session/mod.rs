//! Top-level menu loop dispatching to the guide, quiz and practice flows.

mod guide;
mod practice;
mod quiz;

pub use guide::run_guide;
pub use practice::run_practice;
pub use quiz::{SessionScore, run_quiz};

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::console::{Console, Tone};
use crate::models::Catalog;

/// A parsed main-menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Guide,
    Quiz,
    Practice,
    Exit,
}

/// Input that does not match any menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidCommand(pub String);

impl fmt::Display for InvalidCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu choice: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCommand {}

impl FromStr for MenuCommand {
    type Err = InvalidCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuCommand::Guide),
            "2" => Ok(MenuCommand::Quiz),
            "3" => Ok(MenuCommand::Practice),
            "4" => Ok(MenuCommand::Exit),
            other => Err(InvalidCommand(other.to_string())),
        }
    }
}

/// Run the main menu loop until the user selects Exit or input ends.
///
/// End of input, at the menu prompt or inside a session, terminates the
/// loop cleanly rather than surfacing an error.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
) -> io::Result<()> {
    loop {
        render_menu(console)?;

        let choice = match console.ask("Please select an option (1-4): ") {
            Ok(choice) => choice,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(err) => return Err(err),
        };

        match choice.parse::<MenuCommand>() {
            Ok(MenuCommand::Exit) => {
                console.say("Exiting the program. Goodbye!", Tone::Info)?;
                return Ok(());
            }
            Ok(command) => match run_session(console, catalog, command) {
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                other => other?,
            },
            Err(_) => console.say("Invalid choice. Please try again.", Tone::Error)?,
        }
    }
}

fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    command: MenuCommand,
) -> io::Result<()> {
    match command {
        MenuCommand::Guide => run_guide(console, catalog),
        MenuCommand::Quiz => run_quiz(console, &catalog.quiz).map(|_| ()),
        MenuCommand::Practice => run_practice(console, &catalog.practice),
        // Exit never reaches dispatch; the menu loop handles it.
        MenuCommand::Exit => Ok(()),
    }
}

fn render_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.line("\nMain Menu:", Tone::Info)?;
    console.line("1. Guide", Tone::Success)?;
    console.line("2. Quiz", Tone::Success)?;
    console.line("3. Interactive Practice", Tone::Success)?;
    console.line("4. Exit", Tone::Error)
}
