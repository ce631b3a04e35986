use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use flocking::prelude::*;
use parking_lot::RwLock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Log swarm progress (set RUST_LOG=debug to see every iteration)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The objective can be picked on the command line
    let objective = match std::env::args().nth(1) {
        Some(name) => name.parse::<Objective>()?,
        None => Objective::Rastrigin,
    };

    // Construct a small swarm
    let config = SwarmConfig::new(5, 2, 100)
        .with_objective(objective)
        .with_random_seed(42);
    let mut swarm = Swarm::new(config)?;
    println!("{}\n", swarm);

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();
    let observer: Arc<RwLock<dyn Observer>> = tracker.clone();

    // Run the particle swarm optimizer
    swarm.run_with_observers(None, &[observer]);

    println!("{}\n", swarm);
    println!("{}", swarm.summary());

    // Export the convergence history and the swarm trajectory to Python .pkl files to visualize
    // via matplotlib
    let history: Vec<(usize, Float)> = swarm.history().iter().copied().map(Into::into).collect();
    let mut writer = BufWriter::new(File::create(Path::new("history.pkl"))?);
    serde_pickle::to_writer(&mut writer, &history, Default::default())?;
    let mut writer = BufWriter::new(File::create(Path::new("data.pkl"))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}
