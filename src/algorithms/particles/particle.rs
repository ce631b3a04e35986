use crate::{core::Point, traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::trace;

/// The coefficients of the velocity update, bundled so they can be passed around together.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Coefficients {
    pub omega: Float,
    pub c1: Float,
    pub c2: Float,
}

/// A particle with a position, velocity, and best known position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle {
    /// The index of the particle in its swarm
    pub id: usize,
    /// The current position of the particle
    pub position: DVector<Float>,
    /// The current velocity of the particle
    pub velocity: DVector<Float>,
    /// The best position visited by the particle (as measured by the minimum value of `fx`)
    pub best: Point,
}
impl Particle {
    /// Create a new particle at `position` moving with `velocity`. The position is evaluated with
    /// `func` and a copy of it becomes the particle's personal best.
    pub fn new(
        id: usize,
        position: DVector<Float>,
        velocity: DVector<Float>,
        func: &dyn CostFunction,
    ) -> Self {
        let best = Point::evaluate(func, position.clone());
        Self {
            id,
            position,
            velocity,
            best,
        }
    }
    /// The best position visited by the particle.
    pub const fn personal_best_position(&self) -> &DVector<Float> {
        &self.best.x
    }
    /// The fitness of [`Particle::personal_best_position`].
    pub const fn personal_best_fitness(&self) -> Float {
        self.best.fx
    }
    /// Evaluate `func` at the particle's current position, replacing the personal best if the
    /// current position is strictly better. Returns the fitness of the current position.
    pub fn evaluate(&mut self, func: &dyn CostFunction) -> Float {
        let fx = func.evaluate(&self.position);
        if fx < self.best.fx {
            trace!(
                particle = self.id,
                from = self.best.fx,
                to = fx,
                "personal best improved"
            );
            self.best = Point::new(self.position.clone(), fx);
        }
        fx
    }
    /// Update the velocity with the canonical PSO rule using one pair of random scalars
    /// `(r1, r2)` for every dimension.
    pub(crate) fn accelerate(
        &mut self,
        gbest: &DVector<Float>,
        coefficients: Coefficients,
        r1: Float,
        r2: Float,
    ) {
        let Coefficients { omega, c1, c2 } = coefficients;
        self.velocity = self.velocity.scale(omega)
            + (&self.best.x - &self.position).scale(c1 * r1)
            + (gbest - &self.position).scale(c2 * r2);
    }
    /// Move the particle along its velocity, optionally clamping the result to `[lower, upper]`
    /// in every dimension.
    pub(crate) fn advance(&mut self, domain: Option<(Float, Float)>) {
        self.position += &self.velocity;
        if let Some((lower, upper)) = domain {
            self.position.apply(|x| *x = x.clamp(lower, upper));
        }
    }
}

impl Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} | position: [", self.id)?;
        for (i, xi) in self.position.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+.5}", xi)?;
        }
        write!(f, "] velocity: [")?;
        for (i, vi) in self.velocity.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+.5}", vi)?;
        }
        write!(f, "] best: {}", self.best)
    }
}
