use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    FromSample, SampleFormat, SizedSample, StreamConfig,
};
use rtrb::Producer;
use tracing::{error, info};

use crate::{
    control::Metronome, engine::AudioProcessor, engine::EngineConfig, error::DeviceError,
    io::quantum::QuantumAdapter,
};

/// A running output stream on the default device.
///
/// The session owns the stream, and the stream's callback owns the engine.
/// Dropping the session stops audio and frees both.
pub struct AudioSession {
    _stream: cpal::Stream,
    device_name: String,
    sample_rate: f32,
    channels: usize,
}

impl AudioSession {
    /// Open the default output device and start a metronome on it.
    ///
    /// The engine's sample rate is taken from the device. When `tap` is given,
    /// every rendered sample is also pushed into it (dropped when full) so a
    /// UI can draw the output.
    pub fn start(
        config: EngineConfig,
        tap: Option<Producer<f32>>,
    ) -> Result<(Metronome, Self), DeviceError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(DeviceError::NoOutputDevice)?;
        let supported = device.default_output_config()?;

        let sample_rate = supported.sample_rate().0 as f32;
        let sample_format = supported.sample_format();
        let stream_config = supported.config();
        let channels = stream_config.channels as usize;
        let device_name = device.name().unwrap_or_else(|_| String::from("unknown"));

        info!(
            device = %device_name,
            sample_rate,
            channels,
            ?sample_format,
            "opening output stream"
        );

        let (metronome, engine) = Metronome::new(config.sample_rate(sample_rate));

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32, _>(&device, &stream_config, engine, tap)?,
            SampleFormat::I16 => build_stream::<i16, _>(&device, &stream_config, engine, tap)?,
            SampleFormat::U16 => build_stream::<u16, _>(&device, &stream_config, engine, tap)?,
            other => return Err(DeviceError::UnsupportedSampleFormat(other)),
        };
        stream.play()?;

        let session = Self {
            _stream: stream,
            device_name,
            sample_rate,
            channels,
        };
        Ok((metronome, session))
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        info!(device = %self.device_name, "closing output stream");
    }
}

fn build_stream<T, P>(
    device: &cpal::Device,
    config: &StreamConfig,
    processor: P,
    mut tap: Option<Producer<f32>>,
) -> Result<cpal::Stream, DeviceError>
where
    T: SizedSample + FromSample<f32>,
    P: AudioProcessor + 'static,
{
    let channels = (config.channels as usize).max(1);
    let mut adapter = QuantumAdapter::new(processor);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            // mono engine, copied to every channel of the frame
            for frame in data.chunks_mut(channels) {
                let sample = adapter.next_sample();
                if let Some(tap) = tap.as_mut() {
                    let _ = tap.push(sample);
                }

                let value = T::from_sample(sample);
                for out in frame.iter_mut() {
                    *out = value;
                }
            }
        },
        |err| error!(%err, "output stream error"),
        None,
    )?;

    Ok(stream)
}
