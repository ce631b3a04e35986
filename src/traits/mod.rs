/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Observer`] trait and its implementations.
pub mod observer;

pub use cost_function::CostFunction;
pub use observer::{DebugObserver, Observer};
