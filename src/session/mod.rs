//! Operation scripts driven against a router-bit store.
//!
//! A script is a YAML list of operations:
//!
//! ```yaml
//! - op: add
//!   name: 1/4 End Mill
//!   type: flat
//!   diameter: 6.35
//!   description: roughing
//! - op: remove_at
//!   position: 0
//! - op: remove
//!   id: 0f8fad5b-d9cb-469f-a165-70867728950e
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::NewRouterBit;
use crate::store::RouterBitStore;

/// One step of a session script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Add a router bit; the store assigns its id.
    Add(NewRouterBit),
    /// Remove the router bit with this id.
    Remove {
        /// Identifier to remove.
        id: String,
    },
    /// Remove whichever bit currently sits at `position` (zero-based).
    ///
    /// Lets a script refer to bits it added itself, whose ids are random.
    RemoveAt {
        /// Index into the current collection.
        position: usize,
    },
}

/// Errors raised while loading or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the script from stdin failed.
    #[error("failed to read script from stdin: {0}")]
    Stdin(#[source] std::io::Error),
    /// The script is not a valid list of operations.
    #[error("invalid script: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A `remove_at` pointed past the end of the collection.
    #[error("step {step}: position {position} is out of range for {len} router bit(s)")]
    PositionOutOfRange {
        /// Zero-based index of the failing step.
        step: usize,
        /// Requested position.
        position: usize,
        /// Collection length at that moment.
        len: usize,
    },
}

/// Parses a YAML script. An empty document is an empty script.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] if the text is not a list of operations.
pub fn parse_script(text: &str) -> Result<Vec<Operation>, ScriptError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Reads a script from `path`, or from stdin when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn load_script(path: Option<&Path>) -> Result<Vec<Operation>, ScriptError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| ScriptError::Read { path: path.to_path_buf(), source })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(ScriptError::Stdin)?;
            buf
        }
    };
    parse_script(&text)
}

/// Applies `operations` to `store` in order.
///
/// Stops at the first step that cannot be resolved; steps before it have
/// already taken effect.
///
/// # Errors
///
/// Returns [`ScriptError::PositionOutOfRange`] for a `remove_at` past the
/// end of the collection.
pub fn execute(
    store: &mut RouterBitStore<'_>,
    operations: &[Operation],
) -> Result<(), ScriptError> {
    for (step, operation) in operations.iter().enumerate() {
        match operation {
            Operation::Add(bit) => store.add(bit.clone()),
            Operation::Remove { id } => store.remove(id),
            Operation::RemoveAt { position } => {
                let snapshot = store.snapshot();
                let bit = snapshot.get(*position).ok_or(ScriptError::PositionOutOfRange {
                    step,
                    position: *position,
                    len: snapshot.len(),
                })?;
                store.remove(&bit.id);
            }
        }
    }
    info!(steps = operations.len(), bits = store.len(), "script finished");
    Ok(())
}
