mod catalog;

pub use catalog::{Catalog, GuideStep, PracticeStep, QuizItem, normalize_answer};
