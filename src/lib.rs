pub mod channel; // Lock-free control/status queues
pub mod control; // Facade used by the UI thread
pub mod dsp;
pub mod engine; // Realtime click renderer
pub mod error;
pub mod io;
pub mod params;

pub use channel::{ControlMessage, EngineStatus};
pub use control::Metronome;
pub use engine::{AudioProcessor, EngineConfig, SignalEngine};
pub use error::{ControlError, DeviceError};
pub use io::AudioSession;
pub use params::{ParamKey, ParamSpec, ParameterSet};

/// Samples rendered per call to [`AudioProcessor::render_block`].
pub const RENDER_QUANTUM: usize = 128;
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;
