use crate::{traits::CostFunction, DVector, Float, PI};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10cos(2\pi x_i))
/// ```
pub struct Rastrigin {
    /// The number of dimensions of the function.
    pub n: usize,
}
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        #[allow(clippy::suboptimal_flops)]
        let sum = x
            .iter()
            .map(|&xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
            .sum::<Float>();
        10.0 * self.n as Float + sum
    }
}
