//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::IdGenerator;

/// Delegates to an inner generator and records every id it returns.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Wraps `inner`, writing its ids into `recorder`.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> String {
        let id = self.inner.generate_id();
        record_interaction(&self.recorder, "id_gen", "generate_id", &(), &id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdGenerator;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_each_generated_id() {
        let dir = std::env::temp_dir().join("routerbits_rec_id_gen");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("id_gen.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));
        let ids = {
            let gen =
                RecordingIdGenerator::new(Box::new(LiveIdGenerator::new()), Arc::clone(&recorder));
            vec![gen.generate_id(), gen.generate_id()]
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        let recorded: Vec<&str> =
            cassette.interactions.iter().filter_map(|i| i.output.as_str()).collect();
        assert_eq!(recorded, ids);
        assert!(cassette.interactions.iter().all(|i| i.port == "id_gen"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
