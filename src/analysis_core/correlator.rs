//! Pearson correlation over aligned value arrays

/// Fewer paired points than this and the coefficient is undefined.
const MIN_POINTS: usize = 3;

/// Pearson correlation coefficient of two index-paired arrays, over the
/// first `min(len)` elements.
///
/// Returns `None` when fewer than three pairs are available or when either
/// side has zero variance (e.g. a constant series); the result is never
/// NaN or infinite. Floating-point rounding can leave the value marginally
/// outside `[-1, 1]`; it is returned as-is rather than clamped, so callers
/// comparing against thresholds should use tolerances.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len().min(y.len());
    if n < MIN_POINTS {
        return None;
    }

    let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for i in 0..n {
        let (xv, yv) = (x[i], y[i]);
        sx += xv;
        sy += yv;
        sxx += xv * xv;
        syy += yv * yv;
        sxy += xv * yv;
    }

    let nf = n as f64;
    let cov = sxy / nf - (sx / nf) * (sy / nf);
    let var_x = sxx / nf - (sx / nf) * (sx / nf);
    let var_y = syy / nf - (sy / nf) * (sy / nf);

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    Some(cov / denom)
}
