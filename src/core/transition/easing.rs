/// Cubic ease-in-out on `[0, 1]`. Inputs outside the range are clamped and
/// non-finite inputs map to 0.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }

    let t = t.clamp(0.0, 1.0);

    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
