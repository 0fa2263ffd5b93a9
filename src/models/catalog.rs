use serde::Deserialize;

fn default_delay_ms() -> u64 {
    50
}

/// A complete lesson: guide steps, protocols, principles, quiz items and
/// practice steps, presented in catalog order.
///
/// Catalogs are loaded once (from an embedded asset or a JSON file) and
/// never mutated afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct Catalog {
    pub title: String,
    /// Opening line of the guide session, rendered verbatim.
    pub greeting: String,
    /// Default pacing delay between printed characters, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    pub steps: Vec<GuideStep>,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde(default)]
    pub principles: Vec<String>,
    pub quiz: Vec<QuizItem>,
    pub practice: Vec<PracticeStep>,
}

/// One step of the assembly guide.
#[derive(Clone, Debug, Deserialize)]
pub struct GuideStep {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Illustrative firmware snippet, displayed as-is. Never executed.
    pub code: Option<String>,
}

/// A multiple-choice quiz question with four labeled options.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: [String; 4],
    /// Single-letter key of the correct option, e.g. "B".
    pub answer: String,
}

/// One step of the interactive practice run. The detail text may embed
/// code examples; the whole string is treated as opaque.
#[derive(Clone, Debug, Deserialize)]
pub struct PracticeStep {
    pub title: String,
    pub detail: String,
}

/// Normalize a raw quiz answer: trim surrounding whitespace, uppercase.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl QuizItem {
    /// The normalized key of the correct option.
    pub fn answer_key(&self) -> String {
        normalize_answer(&self.answer)
    }

    /// Exact match against the normalized answer key. Garbage input is
    /// simply incorrect, not a format error.
    pub fn is_correct(&self, raw_answer: &str) -> bool {
        normalize_answer(raw_answer) == self.answer_key()
    }

    /// Number of options whose leading label matches the answer key.
    /// A valid item has exactly one.
    pub fn matching_option_count(&self) -> usize {
        let key = self.answer_key();
        self.options
            .iter()
            .filter(|option| {
                option
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string() == key)
                    .unwrap_or(false)
            })
            .count()
    }
}
