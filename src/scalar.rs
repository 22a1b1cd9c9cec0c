use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst, NumCast};

/// Trait for the types used as the numeric representation of the curves.
///
/// Implemented for `f32` and `f64`. The constants exist so that generic
/// curve code can name small integer values without going through a cast,
/// and `EPSILON` is the near-zero threshold every solver branch compares
/// against.
pub trait Scalar: Float + FloatConst + NumCast + Display + Debug {
    const HALF: Self;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const FOUR: Self;
    const NINE: Self;

    /// Threshold under which a coefficient is treated as zero when picking
    /// a solver branch.
    const EPSILON: Self;

    fn value(v: f64) -> Self;

    /// Whether `self` is close enough to zero to be treated as a vanishing
    /// coefficient.
    #[inline]
    fn is_near_zero(self) -> bool {
        self.abs() < Self::EPSILON
    }
}

impl Scalar for f32 {
    const HALF: Self = 0.5;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FOUR: Self = 4.0;
    const NINE: Self = 9.0;
    const EPSILON: Self = 1e-5;

    #[inline]
    fn value(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    const HALF: Self = 0.5;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;
    const FOUR: Self = 4.0;
    const NINE: Self = 9.0;
    const EPSILON: Self = 1e-9;

    #[inline]
    fn value(v: f64) -> Self {
        v
    }
}
