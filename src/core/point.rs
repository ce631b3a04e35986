use crate::{traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Describes an evaluated point in parameter space.
///
/// The position is owned, so storing a [`Point`] as a "best" position never aliases the
/// position of the particle that found it.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's evaluation
    pub fx: Float,
}
impl Point {
    /// Create a new point from a position and its (already computed) evaluation.
    pub const fn new(x: DVector<Float>, fx: Float) -> Self {
        Self { x, fx }
    }
    /// Evaluate `func` at `x` and store both.
    pub fn evaluate(func: &dyn CostFunction, x: DVector<Float>) -> Self {
        let fx = func.evaluate(&x);
        Self { x, fx }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: [")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+.5}", xi)?;
        }
        write!(f, "], f(x): {:.5}", self.fx)
    }
}
