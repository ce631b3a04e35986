use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{test_functions::Objective, Float};

/// A snapshot of a swarm's configuration and current result, meant for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmSummary {
    /// The number of particles.
    pub swarm_size: usize,
    /// The dimension of the search space.
    pub dimensions: usize,
    /// The configured default number of iterations.
    pub max_iterations: usize,
    /// The inertial weight.
    pub inertia_weight: Float,
    /// The cognitive weight.
    pub cognitive_coefficient: Float,
    /// The social weight.
    pub social_coefficient: Float,
    /// The search domain `(xmin, xmax)`.
    pub domain: (Float, Float),
    /// The function being minimized.
    pub objective: Objective,
    /// Whether positions are clamped to the domain.
    pub clamp_to_domain: bool,
    /// The number of iterations performed so far.
    pub iterations: usize,
    /// The number of objective function evaluations performed so far.
    pub cost_evals: usize,
    /// The global best position.
    pub x: Vec<Float>,
    /// The global best fitness.
    pub fx: Float,
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SWARM SUMMARY")?;
        writeln!(f, "Function:              {}", self.objective)?;
        writeln!(f, "Size:                  {}", self.swarm_size)?;
        writeln!(f, "Dimensions:            {}", self.dimensions)?;
        writeln!(f, "Max iterations:        {}", self.max_iterations)?;
        writeln!(f, "Inertia weight:        {}", self.inertia_weight)?;
        writeln!(f, "Cognitive coefficient: {}", self.cognitive_coefficient)?;
        writeln!(f, "Social coefficient:    {}", self.social_coefficient)?;
        writeln!(
            f,
            "Search domain:         [{}, {}]{}",
            self.domain.0,
            self.domain.1,
            if self.clamp_to_domain {
                " (clamped)"
            } else {
                ""
            }
        )?;
        writeln!(f, "Iterations:            {}", self.iterations)?;
        writeln!(f, "#f(x):                 {}", self.cost_evals)?;
        writeln!(f, "f(x):                  {:.5}", self.fx)?;
        write!(f, "x:                     ")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, "\n                       ")?;
            }
            write!(f, "{:+.5}", xi)?;
        }
        Ok(())
    }
}

/// One entry of a swarm's convergence history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The zero-based index of the iteration which recorded this entry.
    pub iteration: usize,
    /// The global best fitness after that iteration's evaluation phase.
    pub global_best_fitness: Float,
}

impl From<HistoryEntry> for (usize, Float) {
    fn from(value: HistoryEntry) -> Self {
        (value.iteration, value.global_best_fitness)
    }
}
