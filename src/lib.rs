//! # temphum-guide
//!
//! A terminal walkthrough for assembling an ESP-01 based temperature and
//! humidity sensing setup: a paced step-by-step guide, a multiple-choice
//! quiz, and an interactive practice run, driven by a main menu loop.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use temphum_guide::{Lesson, Walkthrough, WalkthroughError};
//!
//! fn main() -> Result<(), WalkthroughError> {
//!     // Run one of the built-in lessons in the terminal
//!     let walkthrough = Walkthrough::builtin(Lesson::Mcu);
//!     walkthrough.run()?;
//!
//!     Ok(())
//! }
//! ```

pub mod console;
mod data;
mod models;
mod session;

use std::io;
use std::path::Path;
use std::time::Duration;

pub use data::{Lesson, LoadError, load_builtin, load_catalog_from_path, parse_catalog};
pub use models::{Catalog, GuideStep, PracticeStep, QuizItem, normalize_answer};
pub use session::{
    InvalidCommand, MenuCommand, SessionScore, run_guide, run_menu, run_practice, run_quiz,
};

/// Error type for walkthrough operations.
#[derive(Debug)]
pub enum WalkthroughError {
    /// Error loading a lesson catalog.
    Load(LoadError),
    /// IO error during the walkthrough.
    Io(io::Error),
}

impl std::fmt::Display for WalkthroughError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkthroughError::Load(e) => write!(f, "Failed to load catalog: {}", e),
            WalkthroughError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for WalkthroughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkthroughError::Load(e) => Some(e),
            WalkthroughError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for WalkthroughError {
    fn from(err: LoadError) -> Self {
        WalkthroughError::Load(err)
    }
}

impl From<io::Error> for WalkthroughError {
    fn from(err: io::Error) -> Self {
        WalkthroughError::Io(err)
    }
}

/// A walkthrough instance that can be run in the terminal.
#[derive(Debug)]
pub struct Walkthrough {
    catalog: Catalog,
    delay: Option<Duration>,
    colors: bool,
}

impl Walkthrough {
    /// Create a walkthrough from an already validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            delay: None,
            colors: true,
        }
    }

    /// Create a walkthrough from one of the built-in lessons.
    pub fn builtin(lesson: Lesson) -> Self {
        Self::new(load_builtin(lesson))
    }

    /// Load a walkthrough from a JSON catalog file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use temphum_guide::Walkthrough;
    ///
    /// let walkthrough = Walkthrough::from_json("my-lesson.json").expect("Failed to load catalog");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, WalkthroughError> {
        let catalog = load_catalog_from_path(path)?;
        Ok(Self::new(catalog))
    }

    /// Override the catalog's pacing delay between printed characters.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Enable or disable colored output.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Get a reference to the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the walkthrough menu loop on the process stdin/stdout.
    ///
    /// Returns when the user selects Exit or the input stream ends.
    pub fn run(self) -> Result<(), WalkthroughError> {
        let delay = self
            .delay
            .unwrap_or_else(|| Duration::from_millis(self.catalog.delay_ms));
        let mut console = console::StdConsole::stdio(delay, self.colors);
        session::run_menu(&mut console, &self.catalog)?;
        Ok(())
    }
}
