//! Parallel stepping of a seeker population.
//!
//! The swarm owns the simulation side of a population: spawning seekers and
//! advancing them in parallel with rayon. Selection, fitness scoring, and
//! generation bookkeeping belong to the caller, which drives them through
//! the brain's genetic operators.

use rand::Rng;
use rayon::prelude::*;

use super::brain::BrainError;
use super::params::Params;
use super::seeker::{Perception, Seeker};
use super::world::WorldGrid;

/// A population of seekers stepped in lockstep.
pub struct Swarm {
    /// All seekers, dead ones included so callers can score them.
    pub seekers: Vec<Seeker>,
    /// Total simulation time elapsed.
    pub time: f32,
    /// Shared sense set; every seeker perceives the same way.
    perception: Perception,
}

impl Swarm {
    /// Spawns `params.n_seeker` seekers at the world center with random
    /// headings and freshly initialized brains.
    pub fn new(params: &Params, world: &WorldGrid, rng: &mut impl Rng) -> Result<Self, BrainError> {
        let perception = Perception::default();
        let input_count = perception.total_input_size(params);
        let spawn = world.center();

        let mut seekers = Vec::with_capacity(params.n_seeker);
        for id in 0..params.n_seeker {
            seekers.push(Seeker::new_random(id, &spawn, input_count, params, rng)?);
        }

        log::info!(
            "spawned {} seekers with {} brain inputs",
            seekers.len(),
            input_count
        );

        Ok(Self {
            seekers,
            time: 0.0,
            perception,
        })
    }

    /// Advances every living seeker by one timestep in parallel.
    ///
    /// Each seeker is exclusively owned by one worker for the duration of
    /// its step. Seekers never read each other, so no cross-thread event
    /// handling is needed.
    pub fn step(&mut self, world: &WorldGrid, params: &Params, dt: f32) {
        self.time += dt;

        let perception = &self.perception;
        self.seekers.par_iter_mut().for_each(|seeker| {
            seeker
                .step(world, perception, params, dt)
                .expect("stimulus length matches brain input layer");
        });
    }

    /// Number of seekers still alive.
    pub fn alive_count(&self) -> usize {
        self.seekers.iter().filter(|s| s.is_alive()).count()
    }

    /// The shared perception system.
    pub fn perception(&self) -> &Perception {
        &self.perception
    }
}
