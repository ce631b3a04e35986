/// [`SwarmConfig`] type holding every construction parameter of a swarm.
pub mod config;
/// [`Point`] type for defining an evaluated point in the parameter space.
pub mod point;
/// [`SwarmSummary`] and [`HistoryEntry`] types for reporting on a swarm.
pub mod summary;
/// Random sampling helpers.
pub mod utils;

pub use config::SwarmConfig;
pub use point::Point;
pub use summary::{HistoryEntry, SwarmSummary};
