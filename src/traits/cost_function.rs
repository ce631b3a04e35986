use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$ to be minimized by a
/// swarm.
///
/// Implementations must be pure: the same input always yields the same output and evaluation has
/// no side effects. Inputs are not clamped to any domain before evaluation.
pub trait CostFunction {
    /// The evaluation of the function at a point `x`.
    fn evaluate(&self, x: &DVector<Float>) -> Float;
}

impl<F> CostFunction for F
where
    F: Fn(&DVector<Float>) -> Float,
{
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        self(x)
    }
}
