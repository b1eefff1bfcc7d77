use thiserror::Error;

use crate::{channel::ControlMessage, params::ParamKey};

/// Why a control-side request was not accepted.
///
/// A rejected request never reaches the engine; the previous value stays in
/// effect on both sides of the channel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("{key} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        key: ParamKey,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{key} must be a finite number, got {value}")]
    NonFinite { key: ParamKey, value: f32 },
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
    #[error("parameter queue is full, {0:?} was not sent")]
    QueueFull(ControlMessage),
}

/// Failure to bring up an audio session. Fatal to that session; the caller
/// decides whether to try again.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no default output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("unsupported sample format {0:?}")]
    UnsupportedSampleFormat(cpal::SampleFormat),
    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),
}
