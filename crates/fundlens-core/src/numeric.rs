//! Small numeric helpers shared by the aligner and the scorer.
//!
//! All helpers are total: they return `None` (or a clamped value) instead of
//! producing `NaN` or infinities.

/// Most decimal places an `f64` can meaningfully round to.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Rounds `value` to `places` decimal places, half away from zero.
///
/// `places` is capped at [`MAX_DECIMAL_PLACES`]. Non-finite input, or a
/// value too large to scale, is returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // Avoid emitting -0.0 for tiny negative changes.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Clamps `value` into `[0, 1]`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Divides `num` by `den`, returning `None` for a zero denominator or a
/// non-finite result.
#[must_use]
pub fn safe_div(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    let ratio = num / den;
    ratio.is_finite().then_some(ratio)
}

/// Percentage change of `value` relative to `base`, i.e.
/// `((value - base) / base) * 100`.
#[must_use]
pub fn percent_change(value: f64, base: f64) -> Option<f64> {
    safe_div(value - base, base).map(|ratio| ratio * 100.0)
}

/// Arithmetic mean, or `None` for an empty input.
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    safe_div(sum, count as f64)
}
