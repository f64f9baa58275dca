//! Recording session for the ports a command touches.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the id generator cassette inside a recording directory.
pub const ID_GEN_CASSETTE: &str = "id_gen.cassette.yaml";

/// Owns the recorders for one recorded run.
///
/// Recording adapters hold clones of the recorder handles; they must be
/// dropped before [`finish`](Self::finish) is called.
pub struct RecordingSession {
    /// Recorder for identifier generation.
    pub id_gen: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing cassettes into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or already holds
    /// an id generator cassette.
    pub fn at(output_dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let path = output_dir.join(ID_GEN_CASSETTE);
        if path.exists() {
            return Err(format!("Cassette already exists: {}", path.display()));
        }

        let name = format!("{}-id_gen", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        Ok(Self {
            id_gen: Arc::new(Mutex::new(CassetteRecorder::new(path, name))),
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Writes every cassette and returns the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.id_gen)
            .map_err(|_| "Recording adapter for id_gen still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for id_gen poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write id_gen cassette: {e}"))?;
        Ok(self.output_dir)
    }
}
