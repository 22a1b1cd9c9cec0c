//! # 2d quadratic and cubic bézier curve maths.
//!
//! This crate is the numeric core of an interactive curve visualization: it
//! represents quadratic and cubic bézier curves, extracts their power-basis
//! polynomial coefficients, evaluates positions and derivatives, solves for
//! per-axis roots and extrema in closed form, and computes tight bounding
//! boxes. Rendering, coordinate transforms and pointer interaction live in
//! the embedding application and only consume the plain numbers produced
//! here.
//!
//! The geometric types are aliases over [euclid](https://crates.io/crates/euclid),
//! see the [`math`](math/index.html) module. Curves are immutable `Copy`
//! values generic over `f32`/`f64` through the [`Scalar`](trait.Scalar.html)
//! trait; coefficients are always recomputed from the control points, so
//! there is no cached state to invalidate.
//!
//! Parameters are not clamped: `sample` and `derivative` extrapolate the
//! polynomial outside `[0, 1]`. Root and extremum queries on the curves
//! filter their results to `[0, 1]`; the raw unfiltered solvers are exposed
//! in [`utils`](utils/index.html).

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod cubic_bezier;
pub mod quadratic_bezier;
pub mod scalar;
pub mod utils;

/// Alias for the euclid types used throughout this crate.
pub mod math {
    /// Alias for `euclid::default::Point2D`.
    pub type Point<S> = euclid::default::Point2D<S>;

    /// Alias for `euclid::default::Vector2D`.
    pub type Vector<S> = euclid::default::Vector2D<S>;

    /// Alias for `euclid::default::Size2D`.
    pub type Size<S> = euclid::default::Size2D<S>;

    /// Alias for `euclid::default::Rect`.
    pub type Rect<S> = euclid::default::Rect<S>;

    /// Shorthand for `Point::new`.
    pub use euclid::point2 as point;

    /// Shorthand for `Vector::new`.
    pub use euclid::vec2 as vector;

    /// Shorthand for `Rect::new`.
    pub use euclid::rect;
}

pub use crate::cubic_bezier::{CubicCoefficients, CubicCurve};
pub use crate::quadratic_bezier::{QuadraticCoefficients, QuadraticCurve};
pub use crate::scalar::Scalar;

pub use euclid;
