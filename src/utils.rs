//! Polynomial root solvers and small numeric helpers shared by the curve
//! types.
//!
//! The solvers here work over the whole real line; range filtering to the
//! curve parameter domain `[0, 1]` is applied by the curve-level queries in
//! `quadratic_bezier` and `cubic_bezier`.

use crate::scalar::Scalar;
use arrayvec::ArrayVec;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp<S: Scalar>(a: S, b: S, t: S) -> S {
    a + (b - a) * t
}

/// Computes the real roots of `a·t² + b·t + c = 0`.
///
/// Uses the numerically stable variant of the quadratic formula,
/// `q = -½·(b + sign(b)·√Δ)` with roots `q/a` and `c/q`, which avoids the
/// catastrophic cancellation the naïve formula suffers when `b` and `√Δ`
/// are close in magnitude.
///
/// A near-zero leading coefficient falls back to the linear solve `-c/b`
/// rather than dividing by zero; a near-zero `b` on top of that yields no
/// roots. A repeated root (Δ == 0) is returned twice, except when `b` and
/// the discriminant both vanish, in which case the single vertex root is
/// returned once.
pub fn quadratic_roots<S: Scalar>(a: S, b: S, c: S) -> ArrayVec<[S; 2]> {
    let mut result = ArrayVec::new();

    if a.is_near_zero() {
        // Degree one (or zero) equation.
        if b.is_near_zero() {
            return result;
        }
        result.push(-c / b);
        return result;
    }

    let delta = b * b - S::FOUR * a * c;
    if delta < S::ZERO {
        return result;
    }

    let q = -S::HALF * (b + delta.sqrt() * b.signum());
    if q == S::ZERO {
        // b and the discriminant both vanish, the vertex is the only root.
        result.push(-b / (S::TWO * a));
        return result;
    }

    result.push(q / a);
    result.push(c / q);

    result
}

/// Computes the real roots of `a·t³ + b·t² + c·t + d = 0`.
///
/// The cubic is normalized by its leading coefficient and solved in closed
/// form: Cardano's formula when the discriminant is non-negative, the
/// trigonometric method for the three-distinct-real-roots case. A near-zero
/// leading coefficient delegates to [`quadratic_roots`](fn.quadratic_roots.html).
pub fn cubic_polynomial_roots<S: Scalar>(a: S, b: S, c: S, d: S) -> ArrayVec<[S; 3]> {
    let mut result = ArrayVec::new();

    if a.is_near_zero() {
        for root in quadratic_roots(b, c, d) {
            result.push(root);
        }
        return result;
    }

    let frac_1_3 = S::value(1.0 / 3.0);

    let bn = b / a;
    let cn = c / a;
    let dn = d / a;

    let delta0 = (S::THREE * cn - bn * bn) / S::NINE;
    let delta1 = (S::NINE * bn * cn - S::value(27.0) * dn - S::TWO * bn * bn * bn) / S::value(54.0);
    let discriminant = delta0 * delta0 * delta0 + delta1 * delta1;

    if discriminant >= S::ZERO {
        let delta_p_sqrt = delta1 + discriminant.sqrt();
        let delta_m_sqrt = delta1 - discriminant.sqrt();

        let s = delta_p_sqrt.signum() * delta_p_sqrt.abs().powf(frac_1_3);
        let t = delta_m_sqrt.signum() * delta_m_sqrt.abs().powf(frac_1_3);

        result.push(-bn * frac_1_3 + (s + t));

        // A vanishing s - t means the discriminant is zero and a second,
        // repeated real root exists.
        if (s - t).abs() < S::EPSILON {
            result.push(-bn * frac_1_3 - (s + t) / S::TWO);
        }
    } else {
        // Rounding can push the cosine marginally out of [-1, 1] when the
        // discriminant is barely negative, which would turn every root into
        // a NaN. Clamp before taking the arc cosine.
        let cos_theta = (delta1 / (-delta0 * delta0 * delta0).sqrt())
            .max(-S::ONE)
            .min(S::ONE);
        let theta = cos_theta.acos();
        let two_sqrt_delta0 = S::TWO * (-delta0).sqrt();
        result.push(two_sqrt_delta0 * (theta * frac_1_3).cos() - bn * frac_1_3);
        result.push(two_sqrt_delta0 * ((theta + S::TWO * S::PI()) * frac_1_3).cos() - bn * frac_1_3);
        result.push(two_sqrt_delta0 * ((theta + S::FOUR * S::PI()) * frac_1_3).cos() - bn * frac_1_3);
    }

    result
}
