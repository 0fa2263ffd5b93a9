//! Step-by-step assembly guide flow.

use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};
use crate::models::Catalog;

/// Render the full guide: step overview, detailed instructions, then the
/// protocols and principles sections (skipped when a catalog has none).
pub fn run_guide<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
) -> io::Result<()> {
    console.say(&catalog.greeting, Tone::Info)?;
    console.say("Here are the basic steps to set up your system:\n", Tone::Info)?;
    for step in &catalog.steps {
        console.say(&step.title, Tone::Success)?;
    }
    console.pause()?;

    console.say("\nDetailed Instructions:\n", Tone::Info)?;
    for step in &catalog.steps {
        console.say(&format!("\n{}", step.title), Tone::Success)?;
        for line in &step.lines {
            console.say(line, Tone::Plain)?;
        }
        if let Some(code) = &step.code {
            console.say(code, Tone::Info)?;
        }
        console.pause()?;
    }

    if !catalog.protocols.is_empty() {
        console.say("\nProtocols to follow:\n", Tone::Warning)?;
        for protocol in &catalog.protocols {
            console.say(protocol, Tone::Warning)?;
        }
        console.pause()?;
    }

    if !catalog.principles.is_empty() {
        console.say("\nPrinciples to keep in mind:\n", Tone::Emphasis)?;
        for principle in &catalog.principles {
            console.say(principle, Tone::Emphasis)?;
        }
        console.pause()?;
    }

    Ok(())
}
