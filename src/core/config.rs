use serde::{Deserialize, Serialize};

use crate::{test_functions::Objective, Float, SwarmError};

const DEFAULT_SWARM_SIZE: usize = 20;
const DEFAULT_DIMENSIONS: usize = 2;
const DEFAULT_MAX_ITERATIONS: usize = 100;
const DEFAULT_RANDOM_SEED: u64 = 42;

/// The configuration struct for a [`Swarm`](crate::algorithms::particles::Swarm). Every field is
/// fixed once the swarm has been built.
///
/// Unset fields fall back to their defaults when deserializing, so a configuration file only
/// needs to list the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// The number of particles in the swarm.
    pub swarm_size: usize,
    /// The dimension of the search space.
    pub dimensions: usize,
    /// The number of iterations performed by [`Swarm::run`](crate::algorithms::particles::Swarm::run)
    /// when no explicit count is given.
    pub max_iterations: usize,
    /// The inertial weight $`\omega`$.
    pub inertia_weight: Float,
    /// The cognitive weight $`c_1`$ which pulls a particle towards its personal best.
    pub cognitive_coefficient: Float,
    /// The social weight $`c_2`$ which pulls a particle towards the global best.
    pub social_coefficient: Float,
    /// The lower edge of the search domain in every dimension.
    pub xmin: Float,
    /// The upper edge of the search domain in every dimension.
    pub xmax: Float,
    /// The function to minimize.
    pub objective: Objective,
    /// The seed of the swarm's random number generator.
    pub random_seed: u64,
    /// Whether positions are clamped to `[xmin, xmax]` after every move.
    pub clamp_to_domain: bool,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            dimensions: DEFAULT_DIMENSIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            inertia_weight: 0.7,
            cognitive_coefficient: 2.0,
            social_coefficient: 2.0,
            xmin: -5.12,
            xmax: 5.12,
            objective: Objective::default(),
            random_seed: DEFAULT_RANDOM_SEED,
            clamp_to_domain: false,
        }
    }
}

impl SwarmConfig {
    /// Create a configuration for `swarm_size` particles in a `dimensions`-dimensional space which
    /// runs for `max_iterations` steps. All other fields take their default values.
    pub fn new(swarm_size: usize, dimensions: usize, max_iterations: usize) -> Self {
        Self {
            swarm_size,
            dimensions,
            max_iterations,
            ..Default::default()
        }
    }
    /// Sets the number of particles (default = `20`).
    pub const fn with_swarm_size(mut self, value: usize) -> Self {
        self.swarm_size = value;
        self
    }
    /// Sets the dimension of the search space (default = `2`).
    pub const fn with_dimensions(mut self, value: usize) -> Self {
        self.dimensions = value;
        self
    }
    /// Sets the default number of iterations (default = `100`).
    pub const fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.7`).
    pub const fn with_inertia_weight(mut self, value: Float) -> Self {
        self.inertia_weight = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ (default = `2.0`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.cognitive_coefficient = value;
        self
    }
    /// Sets the social weight $`c_2`$ (default = `2.0`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.social_coefficient = value;
        self
    }
    /// Sets the search domain `[xmin, xmax]` (default = `[-5.12, 5.12]`).
    pub const fn with_bounds(mut self, xmin: Float, xmax: Float) -> Self {
        self.xmin = xmin;
        self.xmax = xmax;
        self
    }
    /// Sets the function to minimize (default = [`Objective::Rastrigin`]).
    pub const fn with_objective(mut self, value: Objective) -> Self {
        self.objective = value;
        self
    }
    /// Sets the seed of the random number generator (default = `42`).
    pub const fn with_random_seed(mut self, value: u64) -> Self {
        self.random_seed = value;
        self
    }
    /// Enables or disables clamping positions to the search domain after each move
    /// (default = `false`).
    pub const fn with_clamp_to_domain(mut self, value: bool) -> Self {
        self.clamp_to_domain = value;
        self
    }
    /// Check that the configuration describes a swarm which can be built.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if there are no particles, no dimensions, or
    /// the domain bounds are not finite with `xmin < xmax` and a finite width `xmax - xmin`.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.swarm_size == 0 {
            return Err(SwarmError::invalid("swarm_size", "must be at least 1"));
        }
        if self.dimensions == 0 {
            return Err(SwarmError::invalid("dimensions", "must be at least 1"));
        }
        if !self.xmin.is_finite() || !self.xmax.is_finite() {
            return Err(SwarmError::invalid(
                "xmin/xmax",
                format!("must be finite, got [{}, {}]", self.xmin, self.xmax),
            ));
        }
        if self.xmin >= self.xmax {
            return Err(SwarmError::invalid(
                "xmin/xmax",
                format!("xmin must be below xmax, got [{}, {}]", self.xmin, self.xmax),
            ));
        }
        if !(self.xmax - self.xmin).is_finite() {
            return Err(SwarmError::invalid(
                "xmin/xmax",
                format!(
                    "domain width must be finite, got [{}, {}]",
                    self.xmin, self.xmax
                ),
            ));
        }
        Ok(())
    }
}
