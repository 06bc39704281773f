//! Lesson files: the compiled-in catalog and on-disk catalog directories.
//!
//! Each module is authored as one YAML document. Files are ordered by file
//! name, which is why the built-in lessons carry a two-digit prefix.

use std::{fs, path::Path};

use log::debug;

use crate::{
    error::{Result, TutorialError},
    models::Module,
};

const BUILTIN_CATALOG: &[(&str, &str)] = &[
    (
        "01-react-basics.yaml",
        include_str!("../../catalog/01-react-basics.yaml"),
    ),
    (
        "02-state-and-event-handlers.yaml",
        include_str!("../../catalog/02-state-and-event-handlers.yaml"),
    ),
    (
        "03-effects-and-data-fetching.yaml",
        include_str!("../../catalog/03-effects-and-data-fetching.yaml"),
    ),
    (
        "04-routes-and-navigation.yaml",
        include_str!("../../catalog/04-routes-and-navigation.yaml"),
    ),
    (
        "05-hooks-and-performance.yaml",
        include_str!("../../catalog/05-hooks-and-performance.yaml"),
    ),
    (
        "06-state-management.yaml",
        include_str!("../../catalog/06-state-management.yaml"),
    ),
    (
        "07-forms-and-authentication.yaml",
        include_str!("../../catalog/07-forms-and-authentication.yaml"),
    ),
];

/// Parse one lesson document. `name` is only used in error messages.
pub fn parse_module(name: &str, source: &str) -> Result<Module> {
    serde_yaml::from_str(source).map_err(|e| TutorialError::CatalogParse {
        name: name.to_string(),
        source: e,
    })
}

/// Parse the lessons compiled into the binary.
pub fn builtin_modules() -> Result<Vec<Module>> {
    BUILTIN_CATALOG
        .iter()
        .map(|(name, source)| parse_module(name, source))
        .collect()
}

/// Load every `*.yaml` / `*.yml` file of a directory, ordered by file name.
pub fn load_dir(dir: &Path) -> Result<Vec<Module>> {
    let entries = fs::read_dir(dir).map_err(|e| TutorialError::FileSystem {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| TutorialError::FileSystem {
                path: dir.to_path_buf(),
                source: e,
            })?
            .path();
        if is_lesson_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| {
            debug!("Loading lesson file {}", path.display());
            let source = fs::read_to_string(path).map_err(|e| TutorialError::FileSystem {
                path: path.clone(),
                source: e,
            })?;
            parse_module(&display_name(path), &source)
        })
        .collect()
}

fn is_lesson_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
