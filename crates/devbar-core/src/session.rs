//! On-disk persistence of a learner's [`ProgressState`].
//!
//! The core never touches the filesystem on its own; a front end that wants
//! progress to survive between runs loads and saves it through a
//! [`SessionFile`]. The default location follows the XDG Base Directory
//! specification (`$XDG_STATE_HOME/devbar/session.json`).

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, TutorialError},
    models::ProgressState,
};

const SESSION_FILE_NAME: &str = "session.json";

/// A JSON file holding one [`ProgressState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Use `path` if given, otherwise the default XDG state location.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::XdgDirectory` if no default location can be
    /// determined.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    /// Session file at an explicit path.
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved state. A missing file is a fresh session.
    pub fn load(&self) -> Result<ProgressState> {
        match fs::read_to_string(&self.path) {
            Ok(json) => ProgressState::from_json(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session at {}, starting fresh", self.path.display());
                Ok(ProgressState::default())
            }
            Err(source) => Err(TutorialError::FileSystem {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Write the state, creating parent directories as needed.
    pub fn save(&self, state: &ProgressState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TutorialError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = state.to_json()?;
        fs::write(&self.path, json).map_err(|source| TutorialError::FileSystem {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("devbar")
            .place_state_file(SESSION_FILE_NAME)
            .map_err(|e| TutorialError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::ModuleStatus;

    #[test]
    fn test_missing_file_is_fresh_session() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let session = SessionFile::at(temp_dir.path().join("session.json"));

        let state = session.load().expect("Failed to load session");
        assert_eq!(state, ProgressState::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let session = SessionFile::new(Some(temp_dir.path().join("nested/dir/session.json")))
            .expect("Failed to create session");

        let mut state = ProgressState {
            current_module_id: Some("1-react-basics".to_string()),
            current_step_index: Some(6),
            ..Default::default()
        };
        state
            .module_statuses
            .insert("1-react-basics".to_string(), ModuleStatus::Completed);

        session.save(&state).expect("Failed to save session");
        assert!(session.path().exists());
        assert_eq!(session.load().expect("Failed to load session"), state);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "not json").expect("write");

        let result = SessionFile::at(&path).load();
        assert!(matches!(result, Err(TutorialError::Serialization { .. })));
    }
}
