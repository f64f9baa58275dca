//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveIdGenerator;
use crate::adapters::recording::RecordingIdGenerator;
use crate::adapters::replaying::ReplayingIdGenerator;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects used by the store and commands.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// ID generator for router-bit identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context backed by random UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self::with_id_gen(Box::new(LiveIdGenerator::new()))
    }

    /// Creates a context around an arbitrary ID generator.
    #[must_use]
    pub fn with_id_gen(id_gen: Box<dyn IdGenerator>) -> Self {
        Self { id_gen }
    }

    /// Creates a live context whose interactions are recorded into `dir`.
    ///
    /// The returned session must be finished after this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be prepared.
    pub fn recording_at(dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir)?;
        let id_gen = RecordingIdGenerator::new(
            Box::new(LiveIdGenerator::new()),
            Arc::clone(&session.id_gen),
        );
        Ok((Self::with_id_gen(Box::new(id_gen)), session))
    }

    /// Creates a context that replays ids from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let replayer = CassetteReplayer::for_port(&cassette, "id_gen");
        Ok(Self::with_id_gen(Box::new(ReplayingIdGenerator::new(replayer))))
    }
}
