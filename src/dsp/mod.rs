//! Low-level DSP primitives used by the signal engine.
//!
//! These components are allocation-free and realtime-safe. They hold only
//! their own phase state; parameter values are passed in on every call so the
//! engine can change them between samples without resetting anything.

/// Decibel/linear gain conversion.
pub mod conversion;
/// Beat-clocked attack/decay envelope with a play gate.
pub mod envelope;
/// Phase-accumulating sine oscillator.
pub mod oscillator;

pub use conversion::{decibel_to_gain, gain_to_decibel};
pub use envelope::ClickEnvelope;
pub use oscillator::SineOscillator;
