//! Perception system that combines multiple senses into brain inputs.
//!
//! The perception system manages different sensory modalities and combines
//! their outputs into a single stimulus vector for the seeker's brain.

use ndarray::Array1;

use super::super::params::Params;
use super::super::world::WorldGrid;
use super::Seeker;
use super::sense::Sense;

/// Manages multiple senses and combines them into brain inputs.
///
/// The perception system:
/// 1. Queries each sense for its outputs
/// 2. Concatenates all sensory outputs in order
/// 3. Returns a single stimulus vector for the brain
pub struct Perception {
    /// Ordered list of senses that contribute to perception
    senses: Vec<Box<dyn Sense>>,
}

impl Perception {
    /// Creates a new perception system with the given senses.
    ///
    /// Senses are queried in the order given; their outputs occupy the
    /// corresponding segments of the stimulus vector.
    pub fn new(senses: Vec<Box<dyn Sense>>) -> Self {
        Self { senses }
    }

    /// Process all senses and return the combined brain inputs.
    pub fn perceive(&self, seeker: &Seeker, world: &WorldGrid, params: &Params) -> Array1<f64> {
        let total_size = self.total_input_size(params);
        let mut combined_inputs = Array1::zeros(total_size);

        let mut offset = 0;
        for sense in &self.senses {
            let sense_outputs = sense.sense(seeker, world, params);
            let sense_size = sense.input_size(params);

            // Copy sense outputs into the combined array
            for (i, &value) in sense_outputs.iter().enumerate() {
                combined_inputs[offset + i] = value;
            }

            offset += sense_size;
        }

        combined_inputs
    }

    /// Returns the total number of brain inputs produced by all senses.
    pub fn total_input_size(&self, params: &Params) -> usize {
        self.senses.iter().map(|s| s.input_size(params)).sum()
    }

    /// Returns a reference to the senses in this perception system.
    pub fn senses(&self) -> &[Box<dyn Sense>] {
        &self.senses
    }
}

impl Default for Perception {
    fn default() -> Self {
        use super::proprioception::Proprioception;
        use super::vision::Vision;

        Self::new(vec![Box::new(Vision::new()), Box::new(Proprioception::new())])
    }
}
