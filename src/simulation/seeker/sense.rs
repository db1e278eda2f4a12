//! Abstract sense trait for seeker perception.
//!
//! Senses collect information from the world and convert it into neural
//! network inputs for the seeker's brain.

use ndarray::Array1;

use super::super::params::Params;
use super::super::world::WorldGrid;
use super::Seeker;

/// Trait for sensory modalities seekers use to perceive their surroundings.
///
/// Each sense processes environmental information and returns a vector of
/// stimulus values fed as inputs to the seeker's brain.
pub trait Sense: Sync {
    /// Process sensory information and return neural network inputs.
    ///
    /// # Arguments
    ///
    /// * `seeker` - The seeker doing the sensing
    /// * `world` - The obstacle grid being sensed
    /// * `params` - Simulation parameters
    ///
    /// # Returns
    ///
    /// A 1D array of stimulus values to be used as brain inputs.
    fn sense(&self, seeker: &Seeker, world: &WorldGrid, params: &Params) -> Array1<f64>;

    /// Returns the number of neural network inputs this sense produces.
    fn input_size(&self, params: &Params) -> usize;

    /// Returns a human-readable name for this sense.
    fn name(&self) -> &str;
}
