//! Host-facing side of the engine: audio devices and buffer adaptation.

/// Default output device session built on cpal.
pub mod device;
/// Fixed-quantum rendering for hosts with arbitrary buffer sizes.
pub mod quantum;

pub use device::AudioSession;
pub use quantum::QuantumAdapter;
