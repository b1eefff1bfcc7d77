//! Metronome parameters and their bounds.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::conversion::decibel_to_gain, error::ControlError};

/// The five continuous controls of the click generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Tempo in beats per minute
    Bpm,
    /// Linear output amplitude
    Gain,
    /// Click tone in Hz
    Frequency,
    /// Attack time in seconds
    Attack,
    /// Decay time in seconds
    Decay,
}

/// Default value and inclusive range of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

impl ParamSpec {
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl ParamKey {
    pub const ALL: [ParamKey; 5] = [
        ParamKey::Bpm,
        ParamKey::Gain,
        ParamKey::Frequency,
        ParamKey::Attack,
        ParamKey::Decay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamKey::Bpm => "bpm",
            ParamKey::Gain => "gain",
            ParamKey::Frequency => "frequency",
            ParamKey::Attack => "attack",
            ParamKey::Decay => "decay",
        }
    }

    pub fn spec(self) -> ParamSpec {
        match self {
            ParamKey::Bpm => ParamSpec {
                default: 140.0,
                min: 1.0,
                max: 320.0,
            },
            ParamKey::Gain => ParamSpec {
                default: decibel_to_gain(-10.0),
                min: decibel_to_gain(-40.0),
                max: decibel_to_gain(10.0),
            },
            ParamKey::Frequency => ParamSpec {
                default: 880.0,
                min: 10.0,
                max: 3000.0,
            },
            ParamKey::Attack => ParamSpec {
                default: 0.005,
                min: 0.0,
                max: 1.0,
            },
            ParamKey::Decay => ParamSpec {
                default: 0.05,
                min: 0.0,
                max: 1.0,
            },
        }
    }

    /// Check a value submitted from the control side.
    ///
    /// Gain additionally accepts exactly `0.0` as a mute.
    pub fn validate(self, value: f32) -> Result<f32, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::NonFinite { key: self, value });
        }

        let spec = self.spec();
        if spec.contains(value) || self.is_mute(value) {
            Ok(value)
        } else {
            Err(ControlError::OutOfRange {
                key: self,
                value,
                min: spec.min,
                max: spec.max,
            })
        }
    }

    /// Pull a value that arrived at the engine into range.
    ///
    /// Returns `None` for non-finite input so the previous value is kept.
    pub fn coerce(self, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        if self.is_mute(value) {
            return Some(0.0);
        }
        let spec = self.spec();
        Some(value.clamp(spec.min, spec.max))
    }

    fn is_mute(self, value: f32) -> bool {
        self == ParamKey::Gain && value == 0.0
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKey {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ControlError::UnknownParam(s.to_owned()))
    }
}

/// Current value of every parameter. Always within bounds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub bpm: f32,
    pub gain: f32,
    pub frequency: f32,
    pub attack: f32,
    pub decay: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            bpm: ParamKey::Bpm.spec().default,
            gain: ParamKey::Gain.spec().default,
            frequency: ParamKey::Frequency.spec().default,
            attack: ParamKey::Attack.spec().default,
            decay: ParamKey::Decay.spec().default,
        }
    }
}

impl ParameterSet {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Bpm => self.bpm,
            ParamKey::Gain => self.gain,
            ParamKey::Frequency => self.frequency,
            ParamKey::Attack => self.attack,
            ParamKey::Decay => self.decay,
        }
    }

    fn slot(&mut self, key: ParamKey) -> &mut f32 {
        match key {
            ParamKey::Bpm => &mut self.bpm,
            ParamKey::Gain => &mut self.gain,
            ParamKey::Frequency => &mut self.frequency,
            ParamKey::Attack => &mut self.attack,
            ParamKey::Decay => &mut self.decay,
        }
    }

    /// Store `value` if it passes [`ParamKey::validate`], otherwise keep the old value.
    pub fn set(&mut self, key: ParamKey, value: f32) -> Result<(), ControlError> {
        *self.slot(key) = key.validate(value)?;
        Ok(())
    }

    /// Store `value` pulled into range. Non-finite input is ignored.
    pub fn apply_coerced(&mut self, key: ParamKey, value: f32) {
        if let Some(value) = key.coerce(value) {
            *self.slot(key) = value;
        }
    }

    /// Seconds per beat.
    pub fn beat_interval(&self) -> f32 {
        60.0 / self.bpm
    }

    /// Replace any out-of-range or non-finite field with its default.
    pub fn sanitized(mut self) -> Self {
        for key in ParamKey::ALL {
            let value = self.get(key);
            if key.validate(value).is_err() {
                *self.slot(key) = key.spec().default;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bounds_table() {
        let params = ParameterSet::default();
        assert_eq!(params.bpm, 140.0);
        assert_eq!(params.frequency, 880.0);
        assert_eq!(params.attack, 0.005);
        assert_eq!(params.decay, 0.05);
        assert!((params.gain - 0.316_227_77).abs() < 1e-6);

        let gain = ParamKey::Gain.spec();
        assert!((gain.min - 0.01).abs() < 1e-7);
        assert!((gain.max - 3.162_277_7).abs() < 1e-5);
    }

    #[test]
    fn defaults_are_within_bounds() {
        let params = ParameterSet::default();
        for key in ParamKey::ALL {
            assert!(key.spec().contains(params.get(key)), "{key} default out of range");
        }
    }

    #[test]
    fn rejects_out_of_range_and_keeps_previous() {
        let mut params = ParameterSet::default();
        params.set(ParamKey::Bpm, 90.0).unwrap();

        let err = params.set(ParamKey::Bpm, 500.0).unwrap_err();
        assert!(matches!(err, ControlError::OutOfRange { key: ParamKey::Bpm, .. }));
        assert!(params.set(ParamKey::Bpm, -5.0).is_err());
        assert_eq!(params.bpm, 90.0);
    }

    #[test]
    fn rejects_non_finite() {
        let mut params = ParameterSet::default();
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = params.set(ParamKey::Frequency, value).unwrap_err();
            assert!(matches!(err, ControlError::NonFinite { .. }));
        }
        assert_eq!(params.frequency, 880.0);
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut params = ParameterSet::default();
        params.set(ParamKey::Bpm, 1.0).unwrap();
        params.set(ParamKey::Bpm, 320.0).unwrap();
        params.set(ParamKey::Attack, 0.0).unwrap();
        params.set(ParamKey::Decay, 1.0).unwrap();
        params.set(ParamKey::Gain, ParamKey::Gain.spec().max).unwrap();
    }

    #[test]
    fn zero_gain_is_mute() {
        let mut params = ParameterSet::default();
        params.set(ParamKey::Gain, 0.0).unwrap();
        assert_eq!(params.gain, 0.0);
        assert!(params.set(ParamKey::Gain, 0.001).is_err());
    }

    #[test]
    fn coerce_clamps_rounding_error() {
        assert_eq!(ParamKey::Bpm.coerce(320.000_03), Some(320.0));
        assert_eq!(ParamKey::Attack.coerce(-1e-9), Some(0.0));
        assert_eq!(ParamKey::Decay.coerce(f32::NAN), None);

        let mut params = ParameterSet::default();
        params.apply_coerced(ParamKey::Frequency, f32::INFINITY);
        assert_eq!(params.frequency, 880.0);
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("bpm".parse::<ParamKey>().unwrap(), ParamKey::Bpm);
        assert_eq!("decay".parse::<ParamKey>().unwrap(), ParamKey::Decay);
        assert_eq!(
            "tempo".parse::<ParamKey>().unwrap_err(),
            ControlError::UnknownParam("tempo".into())
        );
        for key in ParamKey::ALL {
            assert_eq!(key.to_string().parse::<ParamKey>().unwrap(), key);
        }
    }

    #[test]
    fn sanitized_restores_defaults() {
        let params = ParameterSet {
            bpm: 1000.0,
            frequency: f32::NAN,
            ..ParameterSet::default()
        }
        .sanitized();
        assert_eq!(params, ParameterSet::default());
    }
}
