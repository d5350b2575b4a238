//! Sound-cue capability injected into the session.
//!
//! The session emits named cues on transitions and never learns whether
//! anything actually played; the trait has no failure channel on purpose.

use std::sync::{Arc, Mutex};

use memory_match_types::SoundCue;

/// Receiver for fire-and-forget sound cues.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);

    /// Start or stop looping a cue (ambient tracks).
    fn set_loop(&mut self, _cue: SoundCue, _looping: bool) {}

    /// Silence everything this sink started.
    fn stop_all(&mut self) {}
}

/// Sink that discards every cue. Default for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that records cues in order, for assertions in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<SoundCue>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the cue log; clones observe the same log.
    pub fn log_handle(&self) -> Arc<Mutex<Vec<SoundCue>>> {
        Arc::clone(&self.log)
    }
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: SoundCue) {
        if let Ok(mut log) = self.log.lock() {
            log.push(cue);
        }
    }

    fn stop_all(&mut self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}
