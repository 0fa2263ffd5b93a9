//! Paced, styled console output and line-based input.
//!
//! All user interaction goes through [`Console`], which pairs an input and
//! an output stream. Sessions stay free of terminal concerns and can be
//! driven from scripted buffers in tests.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    queue,
    style::{Color, ResetColor, SetForegroundColor},
};

/// Semantic tone of a message, mapped to a foreground color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Emphasis,
    Question,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Plain => Color::White,
            Tone::Info => Color::Cyan,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Emphasis => Color::Magenta,
            Tone::Question => Color::Blue,
            Tone::Error => Color::Red,
        }
    }
}

/// A console that prints one character at a time and reads whole lines.
pub struct Console<R, W> {
    input: R,
    output: W,
    delay: Duration,
    colors: bool,
}

/// Console wired to the process stdin/stdout.
pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

impl StdConsole {
    pub fn stdio(delay: Duration, colors: bool) -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout(), delay, colors)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, delay: Duration, colors: bool) -> Self {
        Self {
            input,
            output,
            delay,
            colors,
        }
    }

    /// Print `text` one character at a time, sleeping for the pacing delay
    /// between characters, then reset styling and end the line.
    ///
    /// Empty text prints nothing but still terminates the line.
    pub fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        if self.colors {
            queue!(self.output, SetForegroundColor(tone.color()))?;
        }
        for ch in text.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        if self.colors {
            queue!(self.output, ResetColor)?;
        }
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Print a whole styled line at once, without pacing.
    pub fn line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        if self.colors {
            queue!(self.output, SetForegroundColor(tone.color()))?;
            write!(self.output, "{text}")?;
            queue!(self.output, ResetColor)?;
            writeln!(self.output)?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        self.output.flush()
    }

    /// Write `prompt` unpaced, then read one line of input and return it
    /// trimmed. End of input surfaces as [`io::ErrorKind::UnexpectedEof`].
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Block until the user presses Enter. The input content is discarded;
    /// any line, including an empty one, proceeds.
    pub fn pause(&mut self) -> io::Result<()> {
        self.ask("\nPress Enter to continue...").map(|_| ())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Instant;

    use super::*;

    fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Duration::ZERO,
            false,
        )
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, output) = console.into_parts();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_say_writes_text_and_newline() {
        let mut console = test_console("");
        console.say("hello", Tone::Info).unwrap();
        assert_eq!(output_of(console), "hello\n");
    }

    #[test]
    fn test_say_empty_text() {
        let mut console = test_console("");
        console.say("", Tone::Error).unwrap();
        assert_eq!(output_of(console), "\n");
    }

    #[test]
    fn test_say_pacing_duration_scales_with_length() {
        let delay = Duration::from_millis(2);
        let mut console = Console::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            delay,
            false,
        );
        let start = Instant::now();
        console.say("0123456789", Tone::Plain).unwrap();
        assert!(start.elapsed() >= delay * 10);
    }

    #[test]
    fn test_ask_trims_input() {
        let mut console = test_console("  b  \n");
        assert_eq!(console.ask("Your answer: ").unwrap(), "b");
    }

    #[test]
    fn test_ask_eof() {
        let mut console = test_console("");
        let err = console.ask("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_pause_discards_input() {
        let mut console = test_console("anything at all\n");
        console.pause().unwrap();
        let output = output_of(console);
        assert!(output.contains("Press Enter to continue..."));
    }

    #[test]
    fn test_colored_output_contains_text() {
        let mut console = Console::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            Duration::ZERO,
            true,
        );
        console.say("wired", Tone::Success).unwrap();
        let (_, output) = console.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("wired"));
        // Styling is reset before the line ends.
        assert!(output.contains("\x1b[0m"));
    }
}
