//! Multiple-choice quiz flow.

use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};
use crate::models::QuizItem;

/// Tally of a finished quiz run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionScore {
    pub correct: usize,
    pub total: usize,
}

/// Run the quiz over `items` in catalog order and return the final score.
///
/// Answers are normalized (trim + uppercase) and compared exactly to the
/// stored key; anything else, including garbage input, counts as incorrect.
pub fn run_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    items: &[QuizItem],
) -> io::Result<SessionScore> {
    console.say(
        "Temperature and Humidity Monitoring System Quiz",
        Tone::Info,
    )?;

    let mut correct = 0;
    for item in items {
        console.say(&format!("\n{}", item.question), Tone::Question)?;
        for option in &item.options {
            console.say(option, Tone::Question)?;
        }

        let answer = console.ask("Your answer: ")?;
        if item.is_correct(&answer) {
            console.say("Correct!", Tone::Success)?;
            correct += 1;
        } else {
            console.say(
                &format!("Incorrect! The correct answer was {}.", item.answer_key()),
                Tone::Error,
            )?;
        }
    }

    let score = SessionScore {
        correct,
        total: items.len(),
    };
    console.say(
        &format!(
            "\nYou got {} out of {} correct!",
            score.correct, score.total
        ),
        Tone::Info,
    )?;
    Ok(score)
}
