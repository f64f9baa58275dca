//! Recording adapters that capture interactions to cassettes.

pub mod id_gen;

pub use id_gen::RecordingIdGenerator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Appends one call and its result to the shared recorder.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input = serde_json::to_value(input).expect("failed to serialize recording input");
    let output = serde_json::to_value(output).expect("failed to serialize recording output");

    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}
