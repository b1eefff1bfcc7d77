/*
Click Envelope
==============

A metronome click is a short attack/decay burst that repeats once per beat.
Unlike a keyboard ADSR there is no note_on/note_off: the envelope is driven
by a beat clock and only gated by `playing`.

Vocabulary
----------

  phase       Seconds elapsed since the start of the current beat, in
              [0, beat_interval).

  beat_interval
              Seconds per beat: 60 / bpm. At 140 bpm this is ~0.4286 s.

  sample_delta
              Seconds per sample: 1 / sample_rate.


The Shape
---------

  Level
    1.0 ┐  ╱╲
        │ ╱  ╲
        │╱    ╲
    0.0 └──────╲────────────────────┬──╱╲───────→ Time
         A   D      silence          next beat
        |<-------- beat_interval -------->|

  phase < attack             level = phase / attack
  phase < attack + decay     level = 1 - (phase - attack) / decay
  otherwise                  level = 0

Zero-length stages are legal. attack = 0 jumps straight to 1.0 at phase 0,
decay = 0 drops straight to 0 after the peak sample. With both zero the
click is a single full-scale sample at the start of every beat. After a wrap
the phase is a rounding hair above 0 rather than exactly 0, so that case
counts the whole first sample step of the beat, [0, sample_delta), as the
peak.


The Gate
--------

Stopping never cuts a click short. When `playing` goes low the envelope keeps
running until its phase wraps back past the beat boundary; only then does it
rest and output silence. It rests wherever the wrap left it, somewhere in
[0, sample_delta], and does not advance from there, so a later
`playing = true` resumes at that phase and starts a click immediately.

Toggling off and back on mid-beat never touches the phase, so playback stays
locked to the beat grid it started on.


Precision
---------

The phase is accumulated in f64. At 1 bpm the interval is 60 s and an f32
phase near 60.0 has a resolution of ~3.8e-6 s, which is a sizeable fraction
of a 48 kHz sample step (~2.1e-5 s).
*/

#[derive(Debug, Clone, Default)]
pub struct ClickEnvelope {
    playing: bool,
    phase: f64,
}

impl ClickEnvelope {
    pub fn new() -> Self {
        Self {
            playing: false,
            phase: 0.0,
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Seconds since the start of the current beat.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// True when the gate is low and the last click has finished.
    pub fn is_resting(&self, sample_delta: f64) -> bool {
        !self.playing && self.phase <= sample_delta
    }

    /// Advance one sample and return the amplitude coefficient in [0, 1].
    pub fn next(&mut self, sample_delta: f64, attack: f64, decay: f64, beat_interval: f64) -> f32 {
        if self.is_resting(sample_delta) {
            return 0.0;
        }

        let level = Self::level_at(self.phase, sample_delta, attack, decay);

        let advanced = self.phase + sample_delta;
        self.phase = if beat_interval > 0.0 {
            advanced.rem_euclid(beat_interval)
        } else {
            advanced
        };

        level
    }

    /// Envelope shape at `phase` seconds into a beat, sampled every
    /// `sample_delta` seconds.
    pub fn level_at(phase: f64, sample_delta: f64, attack: f64, decay: f64) -> f32 {
        let level = if attack + decay == 0.0 {
            // single-sample click on the first step of the beat
            if phase < sample_delta {
                1.0
            } else {
                0.0
            }
        } else if phase < attack {
            phase / attack
        } else if phase < attack + decay {
            1.0 - (phase - attack) / decay
        } else if phase == attack {
            // zero-length decay: the peak sample itself
            1.0
        } else {
            0.0
        };

        debug_assert!((0.0..=1.0).contains(&level));
        level as f32
    }
}
