use crate::{
    algorithms::particles::{particle::Coefficients, Particle},
    core::{
        utils::{generate_random_vector, SampleFloat},
        HistoryEntry, Point, SwarmConfig, SwarmSummary,
    },
    traits::Observer,
    DVector, Float, SwarmError,
};
use fastrand::Rng;
use parking_lot::RwLock;
use std::{fmt::Display, sync::Arc};
use tracing::{debug, info, trace};

/// Particle Swarm Optimizer
///
/// A swarm owns a fixed set of [`Particle`]s which search for the minimum of the configured
/// [`Objective`](crate::test_functions::Objective). Each call to [`Swarm::step`] runs two phases
/// in sequence:
///
/// 1. Every particle (in index order) evaluates its current position. A strictly better value
///    replaces the particle's personal best, and a value strictly better than the global best
///    replaces the global best. The global best fitness is then appended to the
///    [`history`](Swarm::history).
/// 2. Every particle draws two scalars $`r_1, r_2 \sim U[0, 1)`$ and moves:
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_1 (p_i - x_i^t) + c_2 r_2 (g - x_i^t)
/// ```
/// ```math
/// x_i^{t+1} = x_i^t + v_i^{t+1}
/// ```
///
/// Positions are only clamped to `[xmin, xmax]` if
/// [`SwarmConfig::clamp_to_domain`] is set.
///
/// See [^1] for more information.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
#[derive(Clone, Debug)]
pub struct Swarm {
    config: SwarmConfig,
    particles: Vec<Particle>,
    gbest: Point,
    history: Vec<HistoryEntry>,
    iterations: usize,
    cost_evals: usize,
    rng: Rng,
}

impl Swarm {
    /// Build a new swarm from `config`.
    ///
    /// The random number generator is seeded with [`SwarmConfig::random_seed`]. For each particle
    /// in turn, `dimensions` uniform samples from `[xmin, xmax)` are drawn for its position, then
    /// `dimensions` more for its velocity. The global best is the best initial particle, with
    /// ties going to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if `config` fails
    /// [`SwarmConfig::validate`].
    pub fn new(config: SwarmConfig) -> Result<Self, SwarmError> {
        config.validate()?;
        let mut rng = Rng::with_seed(config.random_seed);
        let particles: Vec<Particle> = (0..config.swarm_size)
            .map(|id| {
                let position =
                    generate_random_vector(config.dimensions, config.xmin, config.xmax, &mut rng);
                let velocity =
                    generate_random_vector(config.dimensions, config.xmin, config.xmax, &mut rng);
                Particle::new(id, position, velocity, &config.objective)
            })
            .collect();
        let mut gbest = particles[0].best.clone();
        for particle in &particles[1..] {
            if particle.best.fx < gbest.fx {
                gbest = particle.best.clone();
            }
        }
        info!(
            swarm_size = config.swarm_size,
            dimensions = config.dimensions,
            objective = %config.objective,
            seed = config.random_seed,
            global_best_fitness = gbest.fx,
            "initialized swarm"
        );
        Ok(Self {
            cost_evals: config.swarm_size,
            config,
            particles,
            gbest,
            history: Vec::new(),
            iterations: 0,
            rng,
        })
    }

    /// Perform a single iteration: the evaluation and best-tracking phase for every particle,
    /// followed by the velocity and position update for every particle.
    pub fn step(&mut self) {
        let iteration = self.iterations;
        for particle in &mut self.particles {
            let fx = particle.evaluate(&self.config.objective);
            self.cost_evals += 1;
            if fx < self.gbest.fx {
                trace!(
                    iteration,
                    particle = particle.id,
                    from = self.gbest.fx,
                    to = fx,
                    "global best improved"
                );
                self.gbest = Point::new(particle.position.clone(), fx);
            }
        }
        self.history.push(HistoryEntry {
            iteration,
            global_best_fitness: self.gbest.fx,
        });

        let coefficients = Coefficients {
            omega: self.config.inertia_weight,
            c1: self.config.cognitive_coefficient,
            c2: self.config.social_coefficient,
        };
        let domain = self
            .config
            .clamp_to_domain
            .then_some((self.config.xmin, self.config.xmax));
        for particle in &mut self.particles {
            let r1 = self.rng.float();
            let r2 = self.rng.float();
            particle.accelerate(&self.gbest.x, coefficients, r1, r2);
            particle.advance(domain);
        }
        self.iterations += 1;
        debug!(
            iteration,
            global_best_fitness = self.gbest.fx,
            "completed iteration"
        );
    }

    /// Run [`Swarm::step`] exactly `iterations` times, or [`SwarmConfig::max_iterations`] times if
    /// `iterations` is `None`.
    pub fn run(&mut self, iterations: Option<usize>) {
        self.run_with_observers(iterations, &[]);
    }

    /// Same as [`Swarm::run`], but every observer is handed the swarm after each iteration.
    pub fn run_with_observers(
        &mut self,
        iterations: Option<usize>,
        observers: &[Arc<RwLock<dyn Observer>>],
    ) {
        let n_steps = iterations.unwrap_or(self.config.max_iterations);
        for _ in 0..n_steps {
            let iteration = self.iterations;
            self.step();
            for observer in observers {
                observer.write().observe(iteration, self);
            }
        }
        info!(
            steps = n_steps,
            iterations = self.iterations,
            global_best_fitness = self.gbest.fx,
            "swarm run finished"
        );
    }

    /// The particles of the swarm, in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    /// The particle with the given index, if there is one.
    pub fn particle(&self, id: usize) -> Option<&Particle> {
        self.particles.get(id)
    }
    /// The configuration the swarm was built with.
    pub const fn config(&self) -> &SwarmConfig {
        &self.config
    }
    /// The best point found by any particle.
    pub const fn global_best(&self) -> &Point {
        &self.gbest
    }
    /// The position of [`Swarm::global_best`].
    pub const fn global_best_position(&self) -> &DVector<Float> {
        &self.gbest.x
    }
    /// The fitness of [`Swarm::global_best`].
    pub const fn global_best_fitness(&self) -> Float {
        self.gbest.fx
    }
    /// The global best fitness recorded after the evaluation phase of every iteration so far.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
    /// The number of iterations performed so far.
    pub const fn iterations_completed(&self) -> usize {
        self.iterations
    }
    /// The number of objective function evaluations performed so far.
    pub const fn cost_evals(&self) -> usize {
        self.cost_evals
    }
    /// A summary of the configuration and the current global best.
    pub fn summary(&self) -> SwarmSummary {
        SwarmSummary {
            swarm_size: self.config.swarm_size,
            dimensions: self.config.dimensions,
            max_iterations: self.config.max_iterations,
            inertia_weight: self.config.inertia_weight,
            cognitive_coefficient: self.config.cognitive_coefficient,
            social_coefficient: self.config.social_coefficient,
            domain: (self.config.xmin, self.config.xmax),
            objective: self.config.objective,
            clamp_to_domain: self.config.clamp_to_domain,
            iterations: self.iterations,
            cost_evals: self.cost_evals,
            x: self.gbest.x.iter().copied().collect(),
            fx: self.gbest.fx,
        }
    }
}

impl Display for Swarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for particle in &self.particles {
            writeln!(f, "{}", particle)?;
        }
        write!(f, "gbest | {}", self.gbest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_functions::Objective, traits::CostFunction};
    use approx::assert_relative_eq;

    fn rastrigin_swarm() -> Swarm {
        Swarm::new(
            SwarmConfig::new(5, 2, 100)
                .with_objective(Objective::Rastrigin)
                .with_random_seed(3),
        )
        .unwrap()
    }

    fn bits(v: &DVector<Float>) -> Vec<u64> {
        v.iter().map(|x| (*x as f64).to_bits()).collect()
    }

    fn assert_invariants(swarm: &Swarm) {
        let dimensions = swarm.config().dimensions;
        for particle in swarm.particles() {
            assert_eq!(particle.position.len(), dimensions);
            assert_eq!(particle.velocity.len(), dimensions);
            assert_eq!(particle.personal_best_position().len(), dimensions);
            assert_eq!(
                particle.personal_best_fitness(),
                swarm
                    .config()
                    .objective
                    .evaluate(particle.personal_best_position())
            );
            assert!(swarm.global_best_fitness() <= particle.personal_best_fitness());
        }
        assert_eq!(swarm.global_best_position().len(), dimensions);
    }

    #[test]
    fn test_initialization() {
        let swarm = rastrigin_swarm();
        assert_eq!(swarm.particles().len(), 5);
        for (i, particle) in swarm.particles().iter().enumerate() {
            assert_eq!(particle.id, i);
            assert!(particle.position.iter().all(|x| (-5.12..5.12).contains(x)));
            assert!(particle.velocity.iter().all(|v| (-5.12..5.12).contains(v)));
            assert_eq!(particle.personal_best_position(), &particle.position);
        }
        let best = swarm
            .particles()
            .iter()
            .map(|p| p.personal_best_fitness())
            .fold(Float::INFINITY, Float::min);
        assert_eq!(swarm.global_best_fitness(), best);
        assert!(swarm.history().is_empty());
        assert_eq!(swarm.iterations_completed(), 0);
        assert_eq!(swarm.cost_evals(), 5);
        assert_invariants(&swarm);
    }

    #[test]
    #[cfg(not(feature = "f32"))]
    fn test_initial_global_best_tie_goes_to_lowest_index() {
        // Squares of values this small underflow to zero, so every particle ties.
        let swarm = Swarm::new(
            SwarmConfig::new(4, 3, 1)
                .with_objective(Objective::Sphere)
                .with_bounds(0.0, 1e-300),
        )
        .unwrap();
        let first = swarm.particle(0).unwrap();
        assert!(swarm
            .particles()
            .iter()
            .all(|p| p.personal_best_fitness() == 0.0));
        assert_eq!(
            bits(swarm.global_best_position()),
            bits(first.personal_best_position())
        );
    }

    #[test]
    fn test_construction_validation() {
        for config in [
            SwarmConfig::new(0, 2, 100),
            SwarmConfig::new(5, 0, 100),
            SwarmConfig::new(5, 2, 100).with_bounds(1.0, 1.0),
            SwarmConfig::new(5, 2, 100).with_bounds(5.12, -5.12),
        ] {
            assert!(matches!(
                Swarm::new(config),
                Err(SwarmError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = rastrigin_swarm();
        let mut b = rastrigin_swarm();
        for _ in 0..5 {
            a.run(Some(7));
            b.run(Some(7));
            for (pa, pb) in a.particles().iter().zip(b.particles()) {
                assert_eq!(bits(&pa.position), bits(&pb.position));
                assert_eq!(bits(&pa.velocity), bits(&pb.velocity));
                assert_eq!(
                    bits(pa.personal_best_position()),
                    bits(pb.personal_best_position())
                );
            }
            assert_eq!(
                bits(a.global_best_position()),
                bits(b.global_best_position())
            );
            assert_eq!(a.history(), b.history());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = rastrigin_swarm();
        let b = Swarm::new(a.config().clone().with_random_seed(4)).unwrap();
        assert_ne!(
            bits(&a.particle(0).unwrap().position),
            bits(&b.particle(0).unwrap().position)
        );
    }

    #[test]
    fn test_invariants_hold_every_iteration() {
        for objective in [Objective::Rastrigin, Objective::Sphere] {
            let mut swarm = Swarm::new(
                SwarmConfig::new(10, 3, 50)
                    .with_objective(objective)
                    .with_random_seed(17),
            )
            .unwrap();
            let mut previous = swarm.global_best_fitness();
            for _ in 0..50 {
                swarm.step();
                assert_invariants(&swarm);
                assert!(swarm.global_best_fitness() <= previous);
                previous = swarm.global_best_fitness();
            }
        }
    }

    #[test]
    fn test_history_is_monotonic_and_indexed() {
        let mut swarm = rastrigin_swarm();
        swarm.run(Some(30));
        swarm.run(Some(20));
        let history = swarm.history();
        assert_eq!(history.len(), 50);
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.iteration, i);
        }
        assert!(history
            .windows(2)
            .all(|w| w[1].global_best_fitness <= w[0].global_best_fitness));
        assert_eq!(
            history.last().unwrap().global_best_fitness,
            swarm.global_best_fitness()
        );
    }

    #[test]
    fn test_run_defaults_to_max_iterations() {
        let mut swarm = rastrigin_swarm();
        swarm.run(None);
        assert_eq!(swarm.iterations_completed(), 100);
        assert_eq!(swarm.cost_evals(), 5 + 5 * 100);
        swarm.run(Some(0));
        assert_eq!(swarm.iterations_completed(), 100);
    }

    #[test]
    fn test_end_to_end_rastrigin() {
        let mut swarm = rastrigin_swarm();
        let worst_initial = swarm
            .particles()
            .iter()
            .map(|p| p.personal_best_fitness())
            .fold(Float::NEG_INFINITY, Float::max);
        swarm.run(None);
        let first = swarm.history()[0].global_best_fitness;
        assert!(swarm.global_best_fitness() <= first);
        assert!(swarm.global_best_fitness() < worst_initial);
    }

    #[test]
    fn test_sphere_converges() {
        let mut swarm = Swarm::new(
            SwarmConfig::new(30, 2, 200)
                .with_objective(Objective::Sphere)
                .with_inertia_weight(0.5)
                .with_c1(1.5)
                .with_c2(1.5)
                .with_random_seed(0),
        )
        .unwrap();
        swarm.run(None);
        assert!(
            swarm.global_best_fitness() < 1e-3,
            "Sphere not minimized: {}",
            swarm.global_best_fitness()
        );
    }

    #[test]
    fn test_unclamped_particles_may_leave_domain_but_clamped_do_not() {
        let inside = |swarm: &Swarm| {
            swarm
                .particles()
                .iter()
                .flat_map(|p| p.position.iter())
                .all(|x| (-5.12..=5.12).contains(x))
        };
        let config = SwarmConfig::new(20, 2, 1).with_random_seed(5);
        let mut clamped = Swarm::new(config.clone().with_clamp_to_domain(true)).unwrap();
        let mut free = Swarm::new(config).unwrap();
        let mut free_escaped = false;
        for _ in 0..20 {
            clamped.step();
            free.step();
            assert!(inside(&clamped));
            free_escaped |= !inside(&free);
        }
        assert!(free_escaped);
    }

    #[test]
    fn test_draws_replay_from_seed() {
        // Positions then velocities per particle at construction, then one (r1, r2) pair per
        // particle per iteration shared by every dimension.
        let config = SwarmConfig::new(3, 4, 3).with_random_seed(9);
        let (w, c1, c2) = (
            config.inertia_weight,
            config.cognitive_coefficient,
            config.social_coefficient,
        );
        let mut swarm = Swarm::new(config.clone()).unwrap();
        let mut rng = Rng::with_seed(config.random_seed);
        let mut positions = Vec::new();
        let mut velocities = Vec::new();
        let mut bests = Vec::new();
        for particle in swarm.particles() {
            let position = generate_random_vector(4, config.xmin, config.xmax, &mut rng);
            let velocity = generate_random_vector(4, config.xmin, config.xmax, &mut rng);
            assert_eq!(bits(&particle.position), bits(&position));
            assert_eq!(bits(&particle.velocity), bits(&velocity));
            let fx = config.objective.evaluate(&position);
            bests.push((position.clone(), fx));
            positions.push(position);
            velocities.push(velocity);
        }
        let mut gbest = bests[0].clone();
        for best in &bests[1..] {
            if best.1 < gbest.1 {
                gbest = best.clone();
            }
        }

        for _ in 0..3 {
            for i in 0..3 {
                let fx = config.objective.evaluate(&positions[i]);
                if fx < bests[i].1 {
                    bests[i] = (positions[i].clone(), fx);
                }
                if fx < gbest.1 {
                    gbest = (positions[i].clone(), fx);
                }
            }
            for i in 0..3 {
                let r1 = rng.float();
                let r2 = rng.float();
                for j in 0..4 {
                    let v = w * velocities[i][j]
                        + c1 * r1 * (bests[i].0[j] - positions[i][j])
                        + c2 * r2 * (gbest.0[j] - positions[i][j]);
                    velocities[i][j] = v;
                    positions[i][j] += v;
                }
            }
            swarm.step();

            for (i, particle) in swarm.particles().iter().enumerate() {
                assert_eq!(bits(&particle.position), bits(&positions[i]));
                assert_eq!(bits(&particle.velocity), bits(&velocities[i]));
                assert_eq!(bits(particle.personal_best_position()), bits(&bests[i].0));
            }
            assert_eq!(bits(swarm.global_best_position()), bits(&gbest.0));
            assert_eq!(swarm.global_best_fitness(), gbest.1);
        }
    }

    #[test]
    fn test_first_step_moves_by_initial_velocity_scaled() {
        // With c1 = c2 = 0 the update reduces to v <- w v, x <- x + v.
        let mut swarm = Swarm::new(
            SwarmConfig::new(3, 2, 1)
                .with_c1(0.0)
                .with_c2(0.0)
                .with_inertia_weight(0.5),
        )
        .unwrap();
        let before: Vec<Particle> = swarm.particles().to_vec();
        swarm.step();
        for (old, new) in before.iter().zip(swarm.particles()) {
            for j in 0..2 {
                assert_relative_eq!(new.velocity[j], 0.5 * old.velocity[j]);
                assert_relative_eq!(new.position[j], old.position[j] + 0.5 * old.velocity[j]);
            }
        }
    }

    #[test]
    fn test_accessors_and_summary() {
        let mut swarm = rastrigin_swarm();
        assert!(swarm.particle(4).is_some());
        assert!(swarm.particle(5).is_none());
        swarm.run(Some(10));
        let summary = swarm.summary();
        assert_eq!(summary.swarm_size, 5);
        assert_eq!(summary.dimensions, 2);
        assert_eq!(summary.max_iterations, 100);
        assert_eq!(summary.domain, (-5.12, 5.12));
        assert_eq!(summary.objective, Objective::Rastrigin);
        assert_eq!(summary.iterations, 10);
        assert_eq!(summary.cost_evals, 55);
        assert_eq!(summary.fx, swarm.global_best_fitness());
        assert_eq!(summary.x, swarm.global_best_position().as_slice());
    }

    #[test]
    fn test_display_lists_every_particle() {
        let swarm = rastrigin_swarm();
        let s = swarm.to_string();
        assert_eq!(s.lines().count(), 6);
        assert!(s.lines().last().unwrap().starts_with("gbest"));
    }

    #[test]
    fn test_observers_see_every_iteration() {
        struct Recorder(Vec<(usize, Float)>);
        impl Observer for Recorder {
            fn observe(&mut self, iteration: usize, swarm: &Swarm) {
                self.0.push((iteration, swarm.global_best_fitness()));
            }
        }
        let recorder = Arc::new(RwLock::new(Recorder(Vec::new())));
        let observer: Arc<RwLock<dyn Observer>> = recorder.clone();
        let mut swarm = rastrigin_swarm();
        swarm.run(Some(3));
        swarm.run_with_observers(Some(4), &[observer]);
        let guard = recorder.read();
        let seen = &guard.0;
        assert_eq!(seen.len(), 4);
        assert_eq!(
            seen.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![3, 4, 5, 6]
        );
        assert_eq!(seen[3].1, swarm.global_best_fitness());
    }
}
