//! Normal-distribution helpers and Owen's T function.

use scilib::math::basic::erf;
use std::f64::consts::{PI, SQRT_2};

/// Simpson intervals used for Owen's T on `0 <= a <= 1` (must be even).
const OWENS_T_INTERVALS: usize = 256;

/// Standard normal probability density.
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Beyond this many standard deviations the tail is taken from the continued
/// fraction instead of `erf`.
const TAIL_CUTOFF: f64 = 3.0;

/// Continued-fraction depth for the upper tail at `x >= TAIL_CUTOFF`.
const TAIL_TERMS: usize = 120;

/// Standard normal cumulative distribution, expressed via the error function.
pub fn normal_cdf(x: f64) -> f64 {
    if x >= TAIL_CUTOFF {
        1.0 - upper_tail(x)
    } else if x <= -TAIL_CUTOFF {
        upper_tail(-x)
    } else {
        0.5 * (1.0 + erf(x / SQRT_2))
    }
}

/// `1 - Φ(x)` for large positive `x` via Laplace's continued fraction
/// `φ(x) / (x + 1/(x + 2/(x + 3/(x + ...))))`.
fn upper_tail(x: f64) -> f64 {
    let mut frac = 0.0;
    for k in (1..=TAIL_TERMS).rev() {
        frac = k as f64 / (x + frac);
    }
    normal_pdf(x) / (x + frac)
}

/// Owen's T function `T(h, a) = 1/(2π) ∫₀ᵃ exp(-h²(1+x²)/2) / (1+x²) dx`.
///
/// Even in `h`, odd in `a`. For `a > 1` the reciprocal identity
/// `T(h, a) = Φ(h)/2 + Φ(ah)/2 - Φ(h)Φ(ah) - T(ah, 1/a)` (with `h >= 0`)
/// keeps the quadrature interval within `[0, 1]`.
pub fn owens_t(h: f64, a: f64) -> f64 {
    if a == 0.0 || h.is_infinite() {
        return 0.0;
    }
    if a < 0.0 {
        return -owens_t(h, -a);
    }

    let h = h.abs();
    if a > 1.0 {
        let ah = a * h;
        let p_h = normal_cdf(h);
        let p_ah = normal_cdf(ah);
        return 0.5 * p_h + 0.5 * p_ah - p_h * p_ah - owens_t(ah, 1.0 / a);
    }

    let half_h2 = 0.5 * h * h;
    let integrand = |x: f64| {
        let one_x2 = 1.0 + x * x;
        (-half_h2 * one_x2).exp() / one_x2
    };

    let n = OWENS_T_INTERVALS;
    let step = a / n as f64;
    let mut sum = integrand(0.0) + integrand(a);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * integrand(i as f64 * step);
    }
    sum * step / 3.0 / (2.0 * PI)
}
