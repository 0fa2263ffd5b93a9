mod loader;

pub use loader::{Lesson, LoadError, load_builtin, load_catalog_from_path, parse_catalog};
