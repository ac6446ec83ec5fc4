//! Slider-value to ordinal-label mapping.

/// Convert a style dial in `[0, 1]` to one of five ordinal labels.
///
/// The thresholds are fixed and the function is total: anything at or above
/// 0.8 (including out-of-range values and NaN) lands on `"High"`.
pub fn intensity_label(value: f32) -> &'static str {
    if value < 0.2 {
        "Low"
    } else if value < 0.4 {
        "Medium-Low"
    } else if value < 0.6 {
        "Medium"
    } else if value < 0.8 {
        "Medium-High"
    } else {
        "High"
    }
}
