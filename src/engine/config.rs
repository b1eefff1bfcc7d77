#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{params::ParameterSet, DEFAULT_SAMPLE_RATE};

/// Capacity of the control → render ring.
pub const PARAM_QUEUE_SIZE: usize = 64;
/// Capacity of the render → control status ring.
pub const STATUS_QUEUE_SIZE: usize = 16;

/// Settings used to build a [`Metronome`](crate::Metronome) and its engine.
///
/// ```
/// use metronome_dsp::{EngineConfig, ParameterSet};
///
/// let config = EngineConfig::new()
///     .sample_rate(44_100.0)
///     .params(ParameterSet { bpm: 96.0, ..ParameterSet::default() })
///     .playing(true);
/// assert_eq!(config.params.bpm, 96.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Host sample rate in Hz
    pub sample_rate: f32,
    /// Messages the control side may have in flight before sends fail
    pub queue_capacity: usize,
    /// Status snapshots buffered for the control side
    pub status_capacity: usize,
    /// Parameter values at construction
    pub params: ParameterSet,
    /// Gate state at construction
    pub playing: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            queue_capacity: PARAM_QUEUE_SIZE,
            status_capacity: STATUS_QUEUE_SIZE,
            params: ParameterSet::default(),
            playing: false,
        }
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn status_capacity(mut self, capacity: usize) -> Self {
        self.status_capacity = capacity;
        self
    }

    /// Initial parameters. Out-of-range fields fall back to their defaults.
    pub fn params(mut self, params: ParameterSet) -> Self {
        self.params = params.sanitized();
        self
    }

    pub fn playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
