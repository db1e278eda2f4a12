//! Proprioception sense - a seeker's awareness of its own pose.

use ndarray::Array1;

use super::super::params::Params;
use super::super::world::WorldGrid;
use super::Seeker;
use super::sense::Sense;

/// Proprioception sense for pose awareness.
///
/// Outputs:
/// - Heading (sin and cos components for continuous encoding)
/// - Position encoding (sin and cos of the normalized x and y coordinates)
pub struct Proprioception;

impl Proprioception {
    /// Creates a new proprioception sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Proprioception {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Proprioception {
    fn sense(&self, seeker: &Seeker, world: &WorldGrid, _params: &Params) -> Array1<f64> {
        let mut proprio_outputs = Array1::zeros(6);

        proprio_outputs[0] = f64::from(seeker.rot.sin());
        proprio_outputs[1] = f64::from(seeker.rot.cos());

        // Normalize position to [0, 2π] for periodic encoding
        let norm_x = (seeker.pos[0] / world.world_width()) * 2.0 * std::f32::consts::PI;
        let norm_y = (seeker.pos[1] / world.world_height()) * 2.0 * std::f32::consts::PI;

        proprio_outputs[2] = f64::from(norm_x.sin());
        proprio_outputs[3] = f64::from(norm_x.cos());
        proprio_outputs[4] = f64::from(norm_y.sin());
        proprio_outputs[5] = f64::from(norm_y.cos());

        proprio_outputs
    }

    fn input_size(&self, _params: &Params) -> usize {
        // heading(sin,cos) + position(sin_x, cos_x, sin_y, cos_y)
        6
    }

    fn name(&self) -> &'static str {
        "Proprioception"
    }
}
