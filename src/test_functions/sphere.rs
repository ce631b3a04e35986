use crate::{traits::CostFunction, DVector, Float};

/// The Sphere function, a convex bowl with its minimum at the origin.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^n x_i^2
/// ```
pub struct Sphere {
    /// The number of dimensions of the function.
    pub n: usize,
}
impl CostFunction for Sphere {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        x.iter().map(|&xi| xi.powi(2)).sum()
    }
}
