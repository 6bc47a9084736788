/// Integer range of a panel fader: positions run 0..=SLIDER_MAX.
pub const SLIDER_MAX: i32 = 1000;

/// Bias added before scaling in both directions so that float truncation
/// lands on the intended integer.
const SCALE_BIAS: f32 = 0.0005;

/// Convert a fader position to the wire value sent to the remote.
pub fn wire_from_slider(value: i32) -> f32 {
    value as f32 / SLIDER_MAX as f32 + SCALE_BIAS
}

/// Convert an echoed wire value to a fader position. Echoes outside
/// the wire range clamp to the slider bounds.
pub fn slider_from_wire(value: f32) -> i32 {
    (((value + SCALE_BIAS) * SLIDER_MAX as f32) as i32).clamp(0, SLIDER_MAX)
}
