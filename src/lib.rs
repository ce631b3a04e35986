//! `flocking` is a small particle swarm optimization (PSO) engine for experimenting with
//! benchmark functions like [Rastrigin](`test_functions::Rastrigin`) and
//! [Sphere](`test_functions::Sphere`) over a bounded box $`[x_\text{min}, x_\text{max}]^n`$.
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [The Update Rule](#the-update-rule)
//! - [Bounds](#bounds)
//! - [Reporting](#reporting)
//!
//! # Quick Start
//!
//! A [`Swarm`](algorithms::particles::Swarm) is built once from a
//! [`SwarmConfig`](core::SwarmConfig). All randomness comes from a generator seeded with
//! [`SwarmConfig::random_seed`](core::SwarmConfig), so two swarms built from the same
//! configuration follow identical trajectories.
//!
//! ```rust
//! use flocking::prelude::*;
//!
//! fn main() -> Result<(), SwarmError> {
//!     let config = SwarmConfig::new(5, 2, 100)
//!         .with_objective(Objective::Rastrigin)
//!         .with_random_seed(3);
//!     let mut swarm = Swarm::new(config)?;
//!     let initial = swarm.global_best_fitness();
//!     swarm.run(None);
//!     assert!(swarm.global_best_fitness() <= initial);
//!     assert_eq!(swarm.history().len(), 100);
//!     println!("{}", swarm.summary());
//!     Ok(())
//! }
//! ```
//!
//! # The Update Rule
//!
//! Each iteration first evaluates every particle and refreshes the personal and global bests,
//! then moves every particle:
//!
//! ```math
//! v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}(p_i - x_i^t) + c_2 r_{2,i}(g - x_i^t)
//! ```
//! ```math
//! x_i^{t+1} = x_i^t + v_i^{t+1}
//! ```
//! where $`r_{1,i}`$ and $`r_{2,i}`$ are scalars drawn uniformly from $`[0, 1)`$ once per particle
//! per iteration and shared by every dimension.
//!
//! # Bounds
//!
//! The domain bounds only constrain the initial positions and velocities. Particles are free to
//! leave the box afterwards unless [`SwarmConfig::with_clamp_to_domain`](core::SwarmConfig::with_clamp_to_domain)
//! is enabled, in which case positions are clamped back into the box after every move.
//!
//! # Reporting
//!
//! Plotting and printing live outside the swarm. They can read the
//! [`history`](algorithms::particles::Swarm::history) of `(iteration, global best fitness)`
//! pairs after a run, or attach an [`Observer`](traits::Observer) which is handed a shared
//! reference to the swarm after every iteration.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the particle swarm itself
pub mod algorithms;
/// Module containing core types like [`Point`](core::Point) and [`SwarmConfig`](core::SwarmConfig)
pub mod core;
/// Module containing the crate's error type
pub mod error;
/// Module containing standard functions for testing algorithms
pub mod test_functions;
/// Module containing the traits used at the edges of the swarm
pub mod traits;

pub use error::SwarmError;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// Re-export of [`nalgebra::DVector`], the vector type used for positions and velocities.
pub use nalgebra::DVector;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        algorithms::particles::{Particle, Swarm, TrackingSwarmObserver},
        core::{HistoryEntry, Point, SwarmConfig, SwarmSummary},
        test_functions::Objective,
        traits::{CostFunction, DebugObserver, Observer},
        DVector, Float, SwarmError,
    };
}
