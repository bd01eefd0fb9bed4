/// Standard normal cumulative distribution function.
pub fn cum_normal(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

// Abramowitz & Stegun 7.1.26, absolute error below 1.5e-7
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

/// Positive difference, `max(0, x - y)`.
#[inline]
pub fn dim(x: f64, y: f64) -> f64 {
    if x > y {
        x - y
    } else {
        0.0
    }
}

/// Division which yields zero instead of infinity.
#[inline]
pub fn xdiv(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        0.0
    } else {
        x / y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cum_normal_known_points() {
        assert!((cum_normal(0.0) - 0.5).abs() < 1e-7);
        assert!((cum_normal(1.0) - 0.841345).abs() < 1e-5);
        assert!((cum_normal(-1.96) - 0.024998).abs() < 1e-5);
        assert!(cum_normal(-5.0) < 1e-6);
    }

    #[test]
    fn test_cum_normal_is_symmetric() {
        for x in [0.3, 1.2, 2.5] {
            assert!((cum_normal(x) + cum_normal(-x) - 1.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_dim_and_xdiv() {
        assert_eq!(dim(5.0, 3.0), 2.0);
        assert_eq!(dim(3.0, 5.0), 0.0);
        assert_eq!(xdiv(1.0, 0.0), 0.0);
        assert_eq!(xdiv(6.0, 3.0), 2.0);
    }
}
