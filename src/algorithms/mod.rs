/// Particle swarm optimization
pub mod particles;
