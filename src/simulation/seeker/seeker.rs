//! Seeker behavior, state, and lifecycle.
//!
//! Seekers have neural network brains, perceive the obstacle grid through
//! their senses, and steer from their brain's outputs. Hitting an obstacle
//! kills a seeker.

use ndarray::Array1;
use rand::Rng;

use super::super::brain::{BrainError, NeuralNetwork};
use super::super::params::Params;
use super::super::world::WorldGrid;
use super::perception::Perception;

/// A simulated agent with a neural network brain.
///
/// Seekers can:
/// - Sense obstacles through ray-marched vision
/// - Turn and move based on brain outputs
/// - Die by running into an obstacle or leaving the world
///
/// Fitness scoring and breeding are owned by the caller; the
/// `distance_travelled` field is raw material for such scoring.
#[derive(Debug, Clone)]
pub struct Seeker {
    /// Unique identifier for this seeker.
    pub id: usize,
    /// Time alive in simulation seconds.
    pub age: f32,
    /// Position in 2D world space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub rot: f32,
    /// Total forward distance covered while alive.
    pub distance_travelled: f32,
    /// Cleared when the seeker runs into an obstacle.
    pub alive: bool,
    /// Neural network that controls steering.
    pub brain: NeuralNetwork,
}

impl Seeker {
    /// Creates a new seeker at `spawn` with a random heading and brain.
    ///
    /// The brain takes `input_count` stimulus values (the owning
    /// perception's total input size) and produces two outputs: turn and
    /// thrust.
    pub fn new_random(
        id: usize,
        spawn: &Array1<f32>,
        input_count: usize,
        params: &Params,
        rng: &mut impl Rng,
    ) -> Result<Self, BrainError> {
        Ok(Self {
            id,
            age: 0.0,
            pos: spawn.clone(),
            rot: rng.random_range(0.0..std::f32::consts::TAU),
            distance_travelled: 0.0,
            alive: true,
            brain: NeuralNetwork::new(input_count, &params.hidden_layer_sizes, 2, rng)?,
        })
    }

    /// Checks if the seeker is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Kills the seeker.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Increments the seeker's age.
    pub fn age_by(&mut self, dt: f32) {
        self.age += dt;
    }

    /// Calculates unit vision ray directions from the current heading.
    ///
    /// Rays fan evenly across `field_of_view`, centered on the heading. A
    /// single ray points straight ahead.
    pub fn vision_directions(
        &self,
        field_of_view: f32,
        num_vision_directions: usize,
    ) -> Vec<Array1<f32>> {
        let angle_step = if num_vision_directions > 1 {
            field_of_view / (num_vision_directions as f32 - 1.0)
        } else {
            0.0
        };
        let start = if num_vision_directions > 1 {
            -field_of_view / 2.0
        } else {
            0.0
        };

        (0..num_vision_directions)
            .map(|i| {
                let angle_rad = self.rot + start + i as f32 * angle_step;
                Array1::from_vec(vec![angle_rad.cos(), angle_rad.sin()])
            })
            .collect()
    }

    /// Advances the seeker by one timestep: sense the world, run the brain,
    /// then steer from its outputs.
    ///
    /// Brain output 0 is remapped from (0, 1) to a signed turn rate; output
    /// 1 is the forward thrust. A seeker whose new position is not passable
    /// dies. Dead seekers do not move.
    pub fn step(
        &mut self,
        world: &WorldGrid,
        perception: &Perception,
        params: &Params,
        dt: f32,
    ) -> Result<(), BrainError> {
        if !self.alive {
            return Ok(());
        }

        let stimulus = perception.perceive(self, world, params);
        let outputs = self.brain.think(&stimulus)?;

        let turn = (outputs[0] as f32 - 0.5) * 2.0;
        let thrust = outputs[1] as f32;

        self.rot += turn * params.turn_multiplier * dt;

        let travelled = thrust * params.move_multiplier * dt;
        let step = Array1::from_vec(vec![self.rot.cos(), self.rot.sin()]) * travelled;
        self.pos += &step;
        self.distance_travelled += travelled;

        self.age_by(dt);

        if !world.is_passable(&self.pos) {
            self.kill();
        }
        Ok(())
    }
}
