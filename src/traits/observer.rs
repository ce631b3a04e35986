use std::sync::Arc;

use parking_lot::RwLock;

use crate::algorithms::particles::Swarm;

/// A trait which holds an [`observe`](`Observer::observe`) function that is called after every
/// iteration of a [`Swarm`].
///
/// Observers only ever see a shared reference to the swarm, so they can report on it but never
/// change its state.
pub trait Observer {
    /// A function that is called after the `iteration`-th (zero-based) iteration has completed
    /// both its evaluation and its movement phase.
    fn observe(&mut self, iteration: usize, swarm: &Swarm);
}

/// A debugging observer which emits a `tracing` debug event with the global best at every
/// iteration.
///
/// # Usage:
///
/// ```rust
/// use std::sync::Arc;
/// use parking_lot::RwLock;
/// use flocking::prelude::*;
///
/// let mut swarm = Swarm::new(SwarmConfig::new(5, 2, 10)).unwrap();
/// let obs: Arc<RwLock<dyn Observer>> = DebugObserver::build();
/// swarm.run_with_observers(None, &[obs]);
/// // ^ This will emit debug events for each step when a subscriber is installed
/// assert_eq!(swarm.iterations_completed(), 10);
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl Observer for DebugObserver {
    fn observe(&mut self, iteration: usize, swarm: &Swarm) {
        tracing::debug!(
            iteration,
            global_best_fitness = swarm.global_best_fitness(),
            global_best_position = ?swarm.global_best_position().as_slice(),
            "swarm step"
        );
    }
}
