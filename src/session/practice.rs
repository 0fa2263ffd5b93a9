//! Interactive practice flow.

use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};
use crate::models::PracticeStep;

/// Walk through `steps` in catalog order, asking for a yes/no completion
/// confirmation after each one.
///
/// A "no" answer only adds a reminder and an extra pause; the walkthrough
/// still advances to the next step.
pub fn run_practice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    steps: &[PracticeStep],
) -> io::Result<()> {
    console.say("Interactive Practice Section", Tone::Info)?;
    console.say(
        "Follow the steps and confirm each step before proceeding.\n",
        Tone::Info,
    )?;

    for step in steps {
        console.say(&step.title, Tone::Success)?;
        console.say(&step.detail, Tone::Plain)?;

        let answer = console.ask("Have you completed this step? (yes/no): ")?;
        if answer.eq_ignore_ascii_case("yes") {
            console.say("Great! Moving to the next step.", Tone::Success)?;
        } else {
            console.say("Please complete the step before proceeding.", Tone::Error)?;
            console.pause()?;
        }
        console.pause()?;
    }

    console.say("Practice section completed. Good job!", Tone::Info)
}
