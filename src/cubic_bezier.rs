use crate::math::{point, rect, vector, Point, Rect, Vector};
use crate::scalar::Scalar;
use crate::utils::{cubic_polynomial_roots, lerp, min_max, quadratic_roots};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by four points: the beginning of the segment,
/// two control points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * (1 - t) * t² * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicCurve<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

/// Power-basis coefficients of a cubic curve.
///
/// The position at `t` is `((a·t + b)·t + c)·t + d`, each axis evaluated
/// independently. `d` is the curve's start point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicCoefficients<S> {
    pub a: Vector<S>,
    pub b: Vector<S>,
    pub c: Vector<S>,
    pub d: Point<S>,
}

impl<S: Scalar> CubicCurve<S> {
    pub fn new(from: Point<S>, ctrl1: Point<S>, ctrl2: Point<S>, to: Point<S>) -> Self {
        CubicCurve { from, ctrl1, ctrl2, to }
    }

    /// Builds the curve from a flat buffer of interleaved coordinates
    /// `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    ///
    /// The coordinates are copied out of the buffer; the curve does not
    /// alias the caller's storage.
    pub fn from_buffer(buffer: &[S; 8]) -> Self {
        CubicCurve {
            from: point(buffer[0], buffer[1]),
            ctrl1: point(buffer[2], buffer[3]),
            ctrl2: point(buffer[4], buffer[5]),
            to: point(buffer[6], buffer[7]),
        }
    }

    /// The control points in the interleaved layout `from_buffer` expects.
    pub fn to_buffer(&self) -> [S; 8] {
        [
            self.from.x, self.from.y,
            self.ctrl1.x, self.ctrl1.y,
            self.ctrl2.x, self.ctrl2.y,
            self.to.x, self.to.y,
        ]
    }

    /// Computes the power-basis coefficients from the control points.
    ///
    /// With `v1 = ctrl1 - from`, `v2 = ctrl2 - ctrl1` and `v3 = to - ctrl2`:
    /// `a = v3 - 2·v2 + v1`, `b = 3·(v2 - v1)` and `c = 3·v1`.
    pub fn coefficients(&self) -> CubicCoefficients<S> {
        let v1 = self.ctrl1 - self.from;
        let v2 = self.ctrl2 - self.ctrl1;
        let v3 = self.to - self.ctrl2;
        CubicCoefficients {
            a: v3 - v2 * S::TWO + v1,
            b: (v2 - v1) * S::THREE,
            c: v1 * S::THREE,
            d: self.from,
        }
    }

    /// Sample the curve at t. The parameter is not clamped: values outside
    /// [0, 1] extrapolate the polynomial.
    pub fn sample(&self, t: S) -> Point<S> {
        let CubicCoefficients { a, b, c, d } = self.coefficients();
        d + ((a * t + b) * t + c) * t
    }

    /// Sample the x coordinate of the curve at t.
    pub fn x(&self, t: S) -> S {
        self.sample(t).x
    }

    /// Sample the y coordinate of the curve at t.
    pub fn y(&self, t: S) -> S {
        self.sample(t).y
    }

    /// Sample the curve with an independent parameter per axis, by repeated
    /// linear interpolation of the control points.
    ///
    /// `sample_axes(t, t)` coincides with `sample(t)`; distinct `tx`/`ty`
    /// advance the two coordinate polynomials separately, which the
    /// visualization layer uses to illustrate per-axis parameterization.
    pub fn sample_axes(&self, tx: S, ty: S) -> Point<S> {
        let p01x = lerp(self.from.x, self.ctrl1.x, tx);
        let p01y = lerp(self.from.y, self.ctrl1.y, ty);

        let p12x = lerp(self.ctrl1.x, self.ctrl2.x, tx);
        let p12y = lerp(self.ctrl1.y, self.ctrl2.y, ty);

        let p23x = lerp(self.ctrl2.x, self.to.x, tx);
        let p23y = lerp(self.ctrl2.y, self.to.y, ty);

        point(
            lerp(lerp(p01x, p12x, tx), lerp(p12x, p23x, tx), tx),
            lerp(lerp(p01y, p12y, ty), lerp(p12y, p23y, ty), ty),
        )
    }

    /// Sample the curve's derivative at t: `(3a·t + 2b)·t + c`.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let CubicCoefficients { a, b, c, .. } = self.coefficients();
        (a * (S::THREE * t) + b * S::TWO) * t + c
    }

    /// Sample the x coordinate of the curve's derivative at t.
    pub fn dx(&self, t: S) -> S {
        self.derivative(t).x
    }

    /// Sample the y coordinate of the curve's derivative at t.
    pub fn dy(&self, t: S) -> S {
        self.derivative(t).y
    }

    /// The unit normal at t: the derivative rotated a quarter turn
    /// clockwise and normalized.
    ///
    /// Where the derivative vanishes (a cusp) the result is NaN; detecting
    /// that case is the caller's responsibility.
    pub fn normal(&self, t: S) -> Vector<S> {
        let v = self.derivative(t);
        vector(v.y, -v.x) / v.length()
    }

    /// Parameters in [0, 1] at which the x coordinate of the curve is zero.
    pub fn x_roots(&self) -> ArrayVec<[S; 3]> {
        let CubicCoefficients { a, b, c, d } = self.coefficients();
        Self::axis_roots(a.x, b.x, c.x, d.x)
    }

    /// Parameters in [0, 1] at which the y coordinate of the curve is zero.
    pub fn y_roots(&self) -> ArrayVec<[S; 3]> {
        let CubicCoefficients { a, b, c, d } = self.coefficients();
        Self::axis_roots(a.y, b.y, c.y, d.y)
    }

    fn axis_roots(a: S, b: S, c: S, d: S) -> ArrayVec<[S; 3]> {
        let mut result = ArrayVec::new();
        for root in cubic_polynomial_roots(a, b, c, d) {
            if root >= S::ZERO && root <= S::ONE {
                result.push(root);
            }
        }
        result
    }

    /// Parameters in [0, 1] at which the x derivative is zero.
    pub fn local_x_extrema_t(&self) -> ArrayVec<[S; 2]> {
        let CubicCoefficients { a, b, c, .. } = self.coefficients();
        Self::axis_extrema(a.x, b.x, c.x)
    }

    /// Parameters in [0, 1] at which the y derivative is zero.
    pub fn local_y_extrema_t(&self) -> ArrayVec<[S; 2]> {
        let CubicCoefficients { a, b, c, .. } = self.coefficients();
        Self::axis_extrema(a.y, b.y, c.y)
    }

    // The derivative of a cubic is a quadratic, so the stationary points
    // come out of the shared quadratic solver.
    fn axis_extrema(a: S, b: S, c: S) -> ArrayVec<[S; 2]> {
        let mut result = ArrayVec::new();
        for t in quadratic_roots(S::THREE * a, S::TWO * b, c) {
            if t >= S::ZERO && t <= S::ONE {
                result.push(t);
            }
        }
        result
    }

    /// All extremum parameters of the curve, x axis first then y axis.
    /// Every value is in [0, 1].
    pub fn extrema_t(&self) -> ArrayVec<[S; 4]> {
        let mut result = ArrayVec::new();
        for t in self.local_x_extrema_t() {
            result.push(t);
        }
        for t in self.local_y_extrema_t() {
            result.push(t);
        }
        result
    }

    /// The position of each extremum parameter, in the order `extrema_t`
    /// returns them.
    pub fn extrema_points(&self) -> ArrayVec<[Point<S>; 4]> {
        let mut result = ArrayVec::new();
        for t in self.extrema_t() {
            result.push(self.sample(t));
        }
        result
    }

    /// Returns the smallest range of x this curve is contained in for
    /// t in [0, 1].
    ///
    /// A cubic's coordinate extremes occur either at the endpoints or where
    /// the derivative vanishes, so this range is exact.
    pub fn bounding_range_x(&self) -> (S, S) {
        let (mut min_x, mut max_x) = min_max(self.from.x, self.to.x);
        for t in self.local_x_extrema_t() {
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
        for t in self.local_y_extrema_t() {
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

    /// Returns a conservative rectangle the curve is contained in, from the
    /// control polygon alone.
    ///
    /// This method is faster than `bounding_rect` but the result can be
    /// larger.
    pub fn fast_bounding_rect(&self) -> Rect<S> {
        let min_x = self.from.x.min(self.ctrl1.x).min(self.ctrl2.x).min(self.to.x);
        let max_x = self.from.x.max(self.ctrl1.x).max(self.ctrl2.x).max(self.to.x);
        let min_y = self.from.y.min(self.ctrl1.y).min(self.ctrl2.y).min(self.to.y);
        let max_y = self.from.y.max(self.ctrl1.y).max(self.ctrl2.y).max(self.to.y);

        rect(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Split this curve into two sub-curves at t.
    pub fn split(&self, t: S) -> (CubicCurve<S>, CubicCurve<S>) {
        let ctrl1a = self.from.lerp(self.ctrl1, t);
        let ctrl2a = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl3a = self.ctrl2.lerp(self.to, t);
        let ctrl1aa = ctrl1a.lerp(ctrl2a, t);
        let ctrl2aa = ctrl2a.lerp(ctrl3a, t);
        let mid = ctrl1aa.lerp(ctrl2aa, t);

        (
            CubicCurve {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: mid,
            },
            CubicCurve {
                from: mid,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }
}
