/// Convert a level in decibels to a linear amplitude: `10^(db / 20)`.
#[inline]
pub fn decibel_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Convert a linear amplitude to decibels. Zero maps to negative infinity.
#[inline]
pub fn gain_to_decibel(gain: f32) -> f32 {
    20.0 * gain.log10()
}
