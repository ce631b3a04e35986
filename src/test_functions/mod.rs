use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{traits::CostFunction, DVector, Float, SwarmError};

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// Module containing the Sphere test function.
pub mod sphere;
pub use sphere::Sphere;

/// Selects which benchmark function a [`Swarm`](crate::algorithms::particles::Swarm) minimizes.
///
/// The dimension used by the function is the length of the evaluated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Objective {
    /// The [`Rastrigin`] function
    #[default]
    Rastrigin,
    /// The [`Sphere`] function
    Sphere,
}

impl CostFunction for Objective {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        match self {
            Self::Rastrigin => Rastrigin { n: x.len() }.evaluate(x),
            Self::Sphere => Sphere { n: x.len() }.evaluate(x),
        }
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rastrigin => write!(f, "Rastrigin"),
            Self::Sphere => write!(f, "Sphere"),
        }
    }
}

impl FromStr for Objective {
    type Err = SwarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rastrigin" => Ok(Self::Rastrigin),
            "sphere" => Ok(Self::Sphere),
            _ => Err(SwarmError::invalid(
                "objective",
                format!("must be \"Rastrigin\" or \"Sphere\", got {:?}", s),
            )),
        }
    }
}
