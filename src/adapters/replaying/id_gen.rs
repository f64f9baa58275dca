//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::IdGenerator;

/// Returns ids from a cassette in the order they were recorded.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let interaction =
            self.replayer.lock().expect("replayer lock poisoned").next_interaction("generate_id");
        interaction
            .output
            .as_str()
            .expect("id_gen::generate_id: expected string output")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn cassette(outputs: &[serde_json::Value]) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.0.0".into(),
            interactions: outputs
                .iter()
                .enumerate()
                .map(|(seq, output)| Interaction {
                    seq: seq as u64,
                    port: "id_gen".into(),
                    method: "generate_id".into(),
                    input: json!(null),
                    output: output.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn replays_ids_in_recorded_order() {
        let cassette = cassette(&[json!("uuid-001"), json!("uuid-002")]);
        let gen = ReplayingIdGenerator::new(CassetteReplayer::for_port(&cassette, "id_gen"));
        assert_eq!(gen.generate_id(), "uuid-001");
        assert_eq!(gen.generate_id(), "uuid-002");
    }

    #[test]
    #[should_panic(expected = "expected string output")]
    fn non_string_output_panics() {
        let cassette = cassette(&[json!(7)]);
        let gen = ReplayingIdGenerator::new(CassetteReplayer::for_port(&cassette, "id_gen"));
        let _ = gen.generate_id();
    }
}
