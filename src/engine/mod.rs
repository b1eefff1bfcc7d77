//! The real-time side of the metronome.
//!
//! [`SignalEngine`] owns the oscillator and envelope state and renders one
//! 128-sample quantum per call. Whatever drives it (an audio device callback,
//! an offline bounce, a test) only needs the [`AudioProcessor`] capability.

/// Engine construction settings.
pub mod config;
/// Render-callback trait shared by everything the host can drive.
pub mod processor;
/// Oscillator + envelope block renderer.
pub mod signal;

pub use config::EngineConfig;
pub use processor::AudioProcessor;
pub use signal::SignalEngine;
