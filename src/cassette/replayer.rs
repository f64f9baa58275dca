//! Serves recorded interactions back in order.

use std::collections::VecDeque;

use super::format::{Cassette, Interaction};

/// Replays one port's interactions from a cassette, oldest first.
pub struct CassetteReplayer {
    port: String,
    queue: VecDeque<Interaction>,
    consumed: usize,
}

impl CassetteReplayer {
    /// Builds a replayer over the interactions recorded for `port`.
    ///
    /// Interactions for other ports are ignored, so a single cassette can
    /// feed several replayers.
    #[must_use]
    pub fn for_port(cassette: &Cassette, port: &str) -> Self {
        let queue = cassette.interactions.iter().filter(|i| i.port == port).cloned().collect();
        Self { port: port.to_string(), queue, consumed: 0 }
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Returns the next recorded interaction, which must be a call to `method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette is exhausted or the next recorded call was to
    /// a different method, since replay has diverged from the recording.
    pub fn next_interaction(&mut self, method: &str) -> Interaction {
        let Some(interaction) = self.queue.pop_front() else {
            panic!(
                "Cassette exhausted: all {consumed} interactions for port={port:?} have been \
                 consumed, but {method:?} was called again",
                consumed = self.consumed,
                port = self.port,
            );
        };
        assert!(
            interaction.method == method,
            "Cassette mismatch on port={port:?}: expected call to {recorded:?} (seq={seq}), \
             got {method:?}",
            port = self.port,
            recorded = interaction.method,
            seq = interaction.seq,
        );
        self.consumed += 1;
        interaction
    }
}
