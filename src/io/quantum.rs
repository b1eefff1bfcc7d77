use crate::{engine::AudioProcessor, RENDER_QUANTUM};

/// Serves samples one at a time from 128-sample quanta.
///
/// Host callbacks hand over buffers of whatever size the driver picked.
/// The adapter keeps the engine on a strict quantum grid by rendering a full
/// block whenever the previous one is used up and carrying leftovers into the
/// next callback.
pub struct QuantumAdapter<P> {
    processor: P,
    block: [f32; RENDER_QUANTUM],
    cursor: usize,
}

impl<P: AudioProcessor> QuantumAdapter<P> {
    pub fn new(processor: P) -> Self {
        Self {
            processor,
            block: [0.0; RENDER_QUANTUM],
            cursor: RENDER_QUANTUM,
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.cursor == RENDER_QUANTUM {
            self.processor.render_block(Some(&mut self.block[..]));
            self.cursor = 0;
        }
        let sample = self.block[self.cursor];
        self.cursor += 1;
        sample
    }

    /// Fill a mono buffer of any length.
    pub fn fill(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }
}
