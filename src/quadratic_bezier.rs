use crate::math::{point, rect, Point, Rect, Vector};
use crate::scalar::Scalar;
use crate::utils::{min_max, quadratic_roots};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by three points: the beginning of the segment,
/// a control point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticCurve<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

/// Power-basis coefficients of a quadratic curve.
///
/// The position at `t` is `(a·t + b)·t + c`, each axis evaluated
/// independently. `c` is the curve's start point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticCoefficients<S> {
    pub a: Vector<S>,
    pub b: Vector<S>,
    pub c: Point<S>,
}

impl<S: Scalar> QuadraticCurve<S> {
    pub fn new(from: Point<S>, ctrl: Point<S>, to: Point<S>) -> Self {
        QuadraticCurve { from, ctrl, to }
    }

    /// Builds the curve from a flat buffer of interleaved coordinates
    /// `[x0, y0, x1, y1, x2, y2]`.
    ///
    /// The coordinates are copied out of the buffer; the curve does not
    /// alias the caller's storage.
    pub fn from_buffer(buffer: &[S; 6]) -> Self {
        QuadraticCurve {
            from: point(buffer[0], buffer[1]),
            ctrl: point(buffer[2], buffer[3]),
            to: point(buffer[4], buffer[5]),
        }
    }

    /// The control points in the interleaved layout `from_buffer` expects.
    pub fn to_buffer(&self) -> [S; 6] {
        [
            self.from.x, self.from.y,
            self.ctrl.x, self.ctrl.y,
            self.to.x, self.to.y,
        ]
    }

    /// Computes the power-basis coefficients from the control points.
    ///
    /// With `v1 = ctrl - from` and `v2 = to - ctrl`: `a = v2 - v1` and
    /// `b = 2·v1`.
    pub fn coefficients(&self) -> QuadraticCoefficients<S> {
        let v1 = self.ctrl - self.from;
        let v2 = self.to - self.ctrl;
        QuadraticCoefficients {
            a: v2 - v1,
            b: v1 * S::TWO,
            c: self.from,
        }
    }

    /// Sample the curve at t. The parameter is not clamped: values outside
    /// [0, 1] extrapolate the polynomial.
    pub fn sample(&self, t: S) -> Point<S> {
        let QuadraticCoefficients { a, b, c } = self.coefficients();
        c + (a * t + b) * t
    }

    /// Sample the x coordinate of the curve at t.
    pub fn x(&self, t: S) -> S {
        self.sample(t).x
    }

    /// Sample the y coordinate of the curve at t.
    pub fn y(&self, t: S) -> S {
        self.sample(t).y
    }

    /// Sample the curve's derivative at t.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let QuadraticCoefficients { a, b, .. } = self.coefficients();
        a * (S::TWO * t) + b
    }

    /// Parameters in [0, 1] at which the x coordinate of the curve is zero.
    pub fn x_roots(&self) -> ArrayVec<[S; 2]> {
        let QuadraticCoefficients { a, b, c } = self.coefficients();
        Self::axis_roots(a.x, b.x, c.x)
    }

    /// Parameters in [0, 1] at which the y coordinate of the curve is zero.
    pub fn y_roots(&self) -> ArrayVec<[S; 2]> {
        let QuadraticCoefficients { a, b, c } = self.coefficients();
        Self::axis_roots(a.y, b.y, c.y)
    }

    fn axis_roots(a: S, b: S, c: S) -> ArrayVec<[S; 2]> {
        let mut result = ArrayVec::new();
        for root in quadratic_roots(a, b, c) {
            if root >= S::ZERO && root <= S::ONE {
                result.push(root);
            }
        }
        result
    }

    /// Return the parameter of the x stationary point, or `None` if the x
    /// polynomial is degree one or the stationary point falls outside
    /// [0, 1].
    pub fn local_x_extremum_t(&self) -> Option<S> {
        let QuadraticCoefficients { a, b, .. } = self.coefficients();
        Self::axis_extremum(a.x, b.x)
    }

    /// Return the parameter of the y stationary point, or `None` if the y
    /// polynomial is degree one or the stationary point falls outside
    /// [0, 1].
    pub fn local_y_extremum_t(&self) -> Option<S> {
        let QuadraticCoefficients { a, b, .. } = self.coefficients();
        Self::axis_extremum(a.y, b.y)
    }

    fn axis_extremum(a: S, b: S) -> Option<S> {
        if a.is_near_zero() {
            return None;
        }
        let t = -b / (S::TWO * a);
        if t >= S::ZERO && t <= S::ONE {
            return Some(t);
        }
        None
    }

    /// Returns the smallest range of x this curve is contained in for
    /// t in [0, 1].
    pub fn bounding_range_x(&self) -> (S, S) {
        let (mut min_x, mut max_x) = min_max(self.from.x, self.to.x);
        if let Some(t) = self.local_x_extremum_t() {
            let x = self.x(t);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }
        (min_x, max_x)
    }

    /// Returns the smallest range of y this curve is contained in for
    /// t in [0, 1].
    pub fn bounding_range_y(&self) -> (S, S) {
        let (mut min_y, mut max_y) = min_max(self.from.y, self.to.y);
        if let Some(t) = self.local_y_extremum_t() {
            let y = self.y(t);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        (min_y, max_y)
    }

    /// Returns the smallest rectangle the curve is contained in for
    /// t in [0, 1].
    pub fn bounding_rect(&self) -> Rect<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        rect(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Split this curve into two sub-curves at t.
    ///
    /// The split point is shared: `left.sample(1)`, `right.sample(0)` and
    /// `self.sample(t)` coincide up to floating point error.
    pub fn split(&self, t: S) -> (QuadraticCurve<S>, QuadraticCurve<S>) {
        let ctrl_a = self.from.lerp(self.ctrl, t);
        let ctrl_b = self.ctrl.lerp(self.to, t);
        let mid = ctrl_a.lerp(ctrl_b, t);

        (
            QuadraticCurve {
                from: self.from,
                ctrl: ctrl_a,
                to: mid,
            },
            QuadraticCurve {
                from: mid,
                ctrl: ctrl_b,
                to: self.to,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    fn assert_approx_eq(a: Point<f64>, b: Point<f64>, epsilon: f64) {
        assert!(
            (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn sample_matches_bernstein_form() {
        let curve = QuadraticCurve {
            from: point(1.0, 2.0),
            ctrl: point(5.0, -3.0),
            to: point(7.0, 4.0),
        };

        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let one_t = 1.0 - t;
            let expected = point(
                curve.from.x * one_t * one_t + curve.ctrl.x * 2.0 * one_t * t + curve.to.x * t * t,
                curve.from.y * one_t * one_t + curve.ctrl.y * 2.0 * one_t * t + curve.to.y * t * t,
            );
            assert_approx_eq(curve.sample(t), expected, 1e-12);
        }
    }

    #[test]
    fn sample_endpoints() {
        let curve = QuadraticCurve {
            from: point(-1.0, 4.0),
            ctrl: point(2.0, 2.0),
            to: point(3.0, -5.0),
        };

        assert_approx_eq(curve.sample(0.0), curve.from, 1e-12);
        assert_approx_eq(curve.sample(1.0), curve.to, 1e-12);
    }

    #[test]
    fn coefficients_from_vectors() {
        let curve = QuadraticCurve {
            from: point(0.0, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0),
        };
        let c = curve.coefficients();

        // v1 = (1, 1), v2 = (1, -1).
        assert_eq!(c.a, crate::math::vector(0.0, -2.0));
        assert_eq!(c.b, crate::math::vector(2.0, 2.0));
        assert_eq!(c.c, curve.from);
    }

    #[test]
    fn split_junction_continuity() {
        let curve = QuadraticCurve {
            from: point(0.0, 0.0),
            ctrl: point(10.0, 10.0),
            to: point(20.0, -4.0),
        };

        for &t in &[0.1, 0.25, 0.5, 0.75, 0.9] {
            let (left, right) = curve.split(t);
            assert_approx_eq(left.sample(1.0), curve.sample(t), 1e-9);
            assert_approx_eq(right.sample(0.0), curve.sample(t), 1e-9);
        }
    }

    #[test]
    fn split_reparameterization() {
        let curve = QuadraticCurve {
            from: point(-3.0, 1.0),
            ctrl: point(4.0, 8.0),
            to: point(11.0, -2.0),
        };

        let split_t = 0.4;
        let (left, right) = curve.split(split_t);

        for i in 0..=10 {
            let u = i as f64 / 10.0;
            assert_approx_eq(left.sample(u), curve.sample(u * split_t), 1e-9);
            assert_approx_eq(
                right.sample(u),
                curve.sample(split_t + u * (1.0 - split_t)),
                1e-9,
            );
        }
    }

    #[test]
    fn local_extremum_for_simple_segment() {
        let curve = QuadraticCurve {
            from: point(0.0, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0),
        };

        assert_eq!(curve.local_y_extremum_t(), Some(0.5));
        // x is linear along this curve.
        assert_eq!(curve.local_x_extremum_t(), None);
    }

    #[test]
    fn extremum_vanishing_derivative() {
        let curve: QuadraticCurve<f64> = QuadraticCurve {
            from: point(2.0, 0.0),
            ctrl: point(-1.0, 1.0),
            to: point(3.0, 2.0),
        };

        let t = curve.local_x_extremum_t().unwrap();
        assert!(t >= 0.0 && t <= 1.0);
        assert!(curve.derivative(t).x.abs() < 1e-9);
    }

    #[test]
    fn roots_on_axis_crossing() {
        // y starts below zero, crosses up and comes back down.
        let curve: QuadraticCurve<f64> = QuadraticCurve {
            from: point(0.0, -1.0),
            ctrl: point(1.0, 3.0),
            to: point(2.0, -1.0),
        };

        let roots = curve.y_roots();
        assert_eq!(roots.len(), 2);
        for t in roots {
            assert!(t >= 0.0 && t <= 1.0);
            assert!(curve.y(t).abs() < 1e-9);
        }

        // x stays strictly positive, no roots in range.
        let curve_positive = QuadraticCurve {
            from: point(1.0, 0.0),
            ctrl: point(2.0, 1.0),
            to: point(3.0, 0.0),
        };
        assert!(curve_positive.x_roots().is_empty());
    }

    #[test]
    fn roots_filtered_to_parameter_domain() {
        // t² - 3t + 2 on x: roots at 1 and 2, only 1 is in range.
        let curve: QuadraticCurve<f64> = QuadraticCurve {
            from: point(2.0, 0.0),
            ctrl: point(0.5, 1.0),
            to: point(0.0, 2.0),
        };

        let roots = curve.x_roots();
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bounding_rect_contains_samples() {
        let curve = QuadraticCurve {
            from: point(0.0, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0),
        };

        let r = curve.bounding_rect();
        assert_eq!(r, crate::math::rect(0.0, 0.0, 2.0, 0.5));

        for i in 0..=100 {
            let p = curve.sample(i as f64 / 100.0);
            assert!(p.x >= r.min_x() - 1e-9 && p.x <= r.max_x() + 1e-9);
            assert!(p.y >= r.min_y() - 1e-9 && p.y <= r.max_y() + 1e-9);
        }
    }

    #[test]
    fn buffer_round_trip() {
        let buffer = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let curve = QuadraticCurve::from_buffer(&buffer);

        assert_eq!(curve.from, point(0.0, 1.0));
        assert_eq!(curve.ctrl, point(2.0, 3.0));
        assert_eq!(curve.to, point(4.0, 5.0));
        assert_eq!(curve.to_buffer(), buffer);
    }
}
