//! # Seeker - Neuro-Evolution in a Grid World
//!
//! A simulation of seeker agents with feedforward neural network brains whose
//! weights evolve through genetic operators (copy, crossover, weight shaking)
//! rather than gradient descent.
//!
//! ## Features
//!
//! - Neural network brains (sigmoid activation, per-neuron weight vectors)
//! - Genetic operators: deep copy, positional crossover, stochastic weight shaking
//! - Injectable random source for deterministic runs
//! - Obstacle grid world with a stable passability contract
//! - Ray-marched vision and proprioception senses
//! - Parallel swarm stepping with rayon
//!
//! An external training loop owns selection, fitness scoring, and generation
//! bookkeeping; this crate exposes the primitives such a loop calls.
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::world`] - Obstacle grid and passability classification
//! - [`simulation::seeker`] - Seeker agents and their senses
//! - [`simulation::swarm`] - Parallel stepping of a seeker population

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural network implementation for seeker brains.
    pub mod brain;
    /// Simulation parameters.
    pub mod params;
    /// Seeker behavior, state, and perception systems.
    pub mod seeker;
    /// Parallel stepping of a seeker population.
    pub mod swarm;
    /// Obstacle grid world and passability classification.
    pub mod world;
}
