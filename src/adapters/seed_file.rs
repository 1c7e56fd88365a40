//! YAML seed-file data source.
//!
//! Lets a developer point the CLI at a fixture file instead of the
//! built-in demo data (`FIELDOPS_SEED=<path>`). The file holds a full
//! snapshot: tasks, user, and upstream metrics.

use std::path::{Path, PathBuf};

use crate::ports::source::{Snapshot, SourceError, TaskSource};

/// Data source reading a [`Snapshot`] from a YAML file.
pub struct SeedFileSource {
    path: PathBuf,
}

impl SeedFileSource {
    /// Creates a source reading from the given path on every `load`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl TaskSource for SeedFileSource {
    fn load(&self) -> Result<Snapshot, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            SourceError::Transport(format!("failed to read {}: {e}", self.path.display()))
        })?;
        serde_yaml::from_str(&contents).map_err(|e| {
            SourceError::Malformed(format!("failed to parse {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::DemoSource;
    use chrono::Utc;

    #[test]
    fn missing_file_is_a_transport_error() {
        let source = SeedFileSource::new(Path::new("/nonexistent/seed.yaml"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }

    #[test]
    fn garbage_yaml_is_a_malformed_error() {
        let dir = std::env::temp_dir().join("fieldops_seed_garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("seed.yaml");
        std::fs::write(&path, "tasks: \"not a list\"\n").unwrap();

        let err = SeedFileSource::new(&path).load().unwrap_err();
        let _ = std::fs::remove_dir_all(&dir);
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn round_trips_a_snapshot() {
        let dir = std::env::temp_dir().join("fieldops_seed_roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("seed.yaml");

        let snapshot = DemoSource::new(Utc::now()).load().unwrap();
        std::fs::write(&path, serde_yaml::to_string(&snapshot).unwrap()).unwrap();

        let loaded = SeedFileSource::new(&path).load().unwrap();
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(loaded, snapshot);
    }
}
