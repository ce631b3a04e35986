/// [`Particle`] type, the members of a swarm.
pub mod particle;
pub use particle::Particle;

/// [`Swarm`] type implementing particle swarm optimization.
pub mod swarm;
pub use swarm::Swarm;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<Particle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl Observer for TrackingSwarmObserver {
    fn observe(&mut self, _iteration: usize, swarm: &Swarm) {
        self.history.push(swarm.particles().to_vec());
        self.best_history.push(swarm.global_best().clone());
    }
}
