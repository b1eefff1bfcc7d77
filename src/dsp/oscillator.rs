use std::f32::consts::TAU;

/*
Sine Oscillator
===============

The click tone is a plain sine wave produced by a phase accumulator.

  phase       Position inside the current cycle, in [0, 1).

  increment   Cycles advanced per sample: frequency / sample_rate.
              A 880 Hz tone at 48 kHz advances 0.01833 per sample, so a
              full cycle takes 48000 / 880 ≈ 54.5 samples.

Every call emits sin(2π · phase) and then moves the phase forward, wrapping
modulo 1. The phase is never reset: changing the frequency only changes the
increment, so the waveform stays continuous and no discontinuity (click) is
introduced when the tone is retuned while sounding.
*/

#[derive(Debug, Clone, Default)]
pub struct SineOscillator {
    phase: f32,
}

impl SineOscillator {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Emit one sample and advance by `normalized_frequency` cycles.
    ///
    /// `normalized_frequency` is `frequency / sample_rate`.
    #[inline]
    pub fn next(&mut self, normalized_frequency: f32) -> f32 {
        let value = (TAU * self.phase).sin();
        self.phase = (self.phase + normalized_frequency).rem_euclid(1.0);
        value
    }

    /// Fill `out` with consecutive samples at a fixed frequency.
    pub fn render(&mut self, out: &mut [f32], normalized_frequency: f32) {
        for sample in out.iter_mut() {
            *sample = self.next(normalized_frequency);
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn first_sample_starts_at_zero_phase() {
        let mut osc = SineOscillator::new();
        assert_eq!(osc.next(440.0 / SAMPLE_RATE), 0.0);
    }

    #[test]
    fn matches_reference_sine() {
        let frequency = 440.0;
        let mut osc = SineOscillator::new();
        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer, frequency / SAMPLE_RATE);

        for (n, &actual) in buffer.iter().enumerate().take(32) {
            let expected = (TAU * frequency * n as f32 / SAMPLE_RATE).sin();
            assert!(
                (actual - expected).abs() < 1e-4,
                "sample {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn phase_stays_in_unit_interval() {
        let mut osc = SineOscillator::new();
        for frequency in [10.0, 880.0, 3000.0, 23_999.0] {
            for _ in 0..10_000 {
                osc.next(frequency / SAMPLE_RATE);
                assert!((0.0..1.0).contains(&osc.phase()), "phase {}", osc.phase());
            }
        }
    }

    #[test]
    fn output_is_periodic() {
        // 1200 Hz at 48 kHz repeats every 40 samples
        let mut osc = SineOscillator::new();
        let mut buffer = vec![0.0f32; 400];
        osc.render(&mut buffer, 1200.0 / SAMPLE_RATE);

        for n in 0..(buffer.len() - 40) {
            assert!(
                (buffer[n] - buffer[n + 40]).abs() < 1e-3,
                "sample {n} differs from one period later"
            );
        }
    }

    #[test]
    fn fractional_periods_track_reference_sine() {
        // none of these periods is a whole number of samples
        let cases = [(880.0f32, 44_100.0f32), (1100.0, 96_000.0), (3000.0, 22_050.0)];
        for (frequency, sample_rate) in cases {
            let period = sample_rate / frequency;
            let len = (period * 12.0) as usize;
            let mut osc = SineOscillator::new();
            let mut buffer = vec![0.0f32; len];
            osc.render(&mut buffer, frequency / sample_rate);

            for (n, &actual) in buffer.iter().enumerate() {
                let expected =
                    (std::f64::consts::TAU * frequency as f64 * n as f64 / sample_rate as f64).sin();
                assert!(
                    (actual as f64 - expected).abs() < 1e-3,
                    "{frequency} Hz at {sample_rate}: sample {n} expected {expected}, got {actual}"
                );
            }
        }
    }

    #[test]
    fn retuning_keeps_phase_continuous() {
        let mut osc = SineOscillator::new();
        for _ in 0..100 {
            osc.next(880.0 / SAMPLE_RATE);
        }
        let before = osc.phase();
        osc.next(3000.0 / SAMPLE_RATE);
        let expected = (before + 3000.0 / SAMPLE_RATE).rem_euclid(1.0);
        assert!((osc.phase() - expected).abs() < 1e-6);
    }
}
