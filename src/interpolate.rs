//! Two-point linear interpolation

/// Build the line through `(x0, f(x0))` and `(x1, f(x1))`.
///
/// The returned function extrapolates freely outside `x0..=x1`; callers are
/// expected to keep `x` within range. When `x0 == x1` the line is undefined,
/// so the known value `f(x0)` is returned for every `x`.
pub fn linear<F>(f: F, x0: f64, x1: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let y0 = f(x0);
    let y1 = f(x1);

    move |x| {
        if x0 == x1 {
            y0
        } else {
            y0 + (y1 - y0) / (x1 - x0) * (x - x0)
        }
    }
}
