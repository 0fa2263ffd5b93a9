//! Catalog loading and validation.
//!
//! Two lesson catalogs are compiled into the binary; custom catalogs can be
//! loaded from JSON files and go through the same validation.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Catalog;

const ESP01_MCU_JSON: &str = include_str!("../../catalogs/esp01_mcu.json");
const ESP01_MICROPYTHON_JSON: &str = include_str!("../../catalogs/esp01_micropython.json");

/// Built-in lessons shipped with the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lesson {
    /// ESP-01 wired to an external 8-bit MCU reading a DHT sensor.
    Mcu,
    /// ESP-01 running MicroPython standalone.
    MicroPython,
}

/// Error type for catalog loading.
#[derive(Debug)]
pub enum LoadError {
    /// Error reading the catalog file.
    Io { path: String, source: io::Error },
    /// The catalog is not valid JSON for the expected schema.
    Parse(serde_json::Error),
    /// A section that must have at least one entry is empty.
    EmptySection(&'static str),
    /// A quiz answer key does not identify exactly one option.
    BadAnswerKey { question: usize, key: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "failed to read {}: {}", path, source),
            LoadError::Parse(e) => write!(f, "failed to parse catalog: {}", e),
            LoadError::EmptySection(section) => {
                write!(f, "catalog section '{}' must not be empty", section)
            }
            LoadError::BadAnswerKey { question, key } => write!(
                f,
                "quiz question {}: answer key {:?} does not match exactly one option",
                question + 1,
                key
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Load one of the built-in lesson catalogs.
///
/// The embedded assets are validated by the test suite, so a failure here
/// means a corrupted build.
pub fn load_builtin(lesson: Lesson) -> Catalog {
    let json = match lesson {
        Lesson::Mcu => ESP01_MCU_JSON,
        Lesson::MicroPython => ESP01_MICROPYTHON_JSON,
    };
    parse_catalog(json).unwrap_or_else(|err| panic!("built-in catalog is invalid: {}", err))
}

/// Load and validate a catalog from a JSON file.
pub fn load_catalog_from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&json)
}

/// Parse and validate a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(LoadError::Parse)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), LoadError> {
    if catalog.steps.is_empty() {
        return Err(LoadError::EmptySection("steps"));
    }
    if catalog.quiz.is_empty() {
        return Err(LoadError::EmptySection("quiz"));
    }
    if catalog.practice.is_empty() {
        return Err(LoadError::EmptySection("practice"));
    }

    for (index, item) in catalog.quiz.iter().enumerate() {
        if item.matching_option_count() != 1 {
            return Err(LoadError::BadAnswerKey {
                question: index,
                key: item.answer_key(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mcu_catalog() {
        let catalog = load_builtin(Lesson::Mcu);
        assert_eq!(catalog.steps.len(), 7);
        assert_eq!(catalog.quiz.len(), 8);
        assert_eq!(catalog.practice.len(), 7);
        assert_eq!(catalog.protocols.len(), 4);
        assert_eq!(catalog.principles.len(), 4);
        assert_eq!(catalog.delay_ms, 50);
        // Practice mirrors the guide step order.
        for (step, practice) in catalog.steps.iter().zip(catalog.practice.iter()) {
            assert_eq!(step.title, practice.title);
        }
    }

    #[test]
    fn test_builtin_micropython_catalog() {
        let catalog = load_builtin(Lesson::MicroPython);
        assert_eq!(catalog.steps.len(), 6);
        assert_eq!(catalog.quiz.len(), 2);
        assert!(catalog.protocols.is_empty());
        assert!(catalog.principles.is_empty());
        assert_eq!(catalog.delay_ms, 100);
    }

    fn minimal_catalog_json(answer: &str, options: &str) -> String {
        format!(
            r#"{{
                "title": "t",
                "greeting": "g",
                "steps": [{{"title": "Step 1", "lines": ["do it"]}}],
                "quiz": [{{"question": "q?", "options": {}, "answer": "{}"}}],
                "practice": [{{"title": "Step 1", "detail": "do it"}}]
            }}"#,
            options, answer
        )
    }

    const OPTIONS: &str = r#"["A) one", "B) two", "C) three", "D) four"]"#;

    #[test]
    fn test_parse_minimal_catalog() {
        let catalog = parse_catalog(&minimal_catalog_json("b", OPTIONS)).unwrap();
        assert_eq!(catalog.quiz[0].answer_key(), "B");
        assert_eq!(catalog.delay_ms, 50); // serde default
    }

    #[test]
    fn test_answer_key_matching_no_option() {
        let err = parse_catalog(&minimal_catalog_json("E", OPTIONS)).unwrap_err();
        match err {
            LoadError::BadAnswerKey { question, key } => {
                assert_eq!(question, 0);
                assert_eq!(key, "E");
            }
            other => panic!("expected BadAnswerKey, got {}", other),
        }
    }

    #[test]
    fn test_answer_key_matching_two_options() {
        let options = r#"["A) one", "A) dup", "C) three", "D) four"]"#;
        let err = parse_catalog(&minimal_catalog_json("A", options)).unwrap_err();
        assert!(matches!(err, LoadError::BadAnswerKey { question: 0, .. }));
    }

    #[test]
    fn test_empty_quiz_rejected() {
        let json = r#"{
            "title": "t",
            "greeting": "g",
            "steps": [{"title": "Step 1"}],
            "quiz": [],
            "practice": [{"title": "Step 1", "detail": "d"}]
        }"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, LoadError::EmptySection("quiz")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            parse_catalog("not json").unwrap_err(),
            LoadError::Parse(_)
        ));
        // Five options do not fit the fixed-size array.
        let options = r#"["A) 1", "B) 2", "C) 3", "D) 4", "E) 5"]"#;
        assert!(matches!(
            parse_catalog(&minimal_catalog_json("A", options)).unwrap_err(),
            LoadError::Parse(_)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
