//! Vision sense - lets seekers see nearby obstacles.
//!
//! Vision marches rays across the field of view and reports how close the
//! first blocked cell is along each ray.

use ndarray::Array1;

use super::super::params::Params;
use super::super::world::{Ground, WorldGrid};
use super::Seeker;
use super::sense::Sense;

/// Vision sense that detects obstacles by ray marching over the world grid.
///
/// For each vision direction the sense outputs the proximity of the nearest
/// obstacle (1.0 = touching, 0.0 = nothing blocked within range).
pub struct Vision;

impl Vision {
    /// Creates a new vision sense.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Vision {
    fn default() -> Self {
        Self::new()
    }
}

impl Sense for Vision {
    fn sense(&self, seeker: &Seeker, world: &WorldGrid, params: &Params) -> Array1<f64> {
        let directions = seeker.vision_directions(params.fov, params.num_vision_directions);
        let mut vision_outputs = Array1::zeros(directions.len());

        for (i, direction) in directions.iter().enumerate() {
            let mut travelled = params.ray_step;
            while travelled <= params.vision_range {
                let probe = &seeker.pos + &(direction * travelled);
                if world.classify(&probe) == Ground::Obstacle {
                    // Invert distance: closer = higher value
                    let proximity = 1.0 - (travelled / params.vision_range).min(1.0);
                    vision_outputs[i] = f64::from(proximity);
                    break;
                }
                travelled += params.ray_step;
            }
        }

        vision_outputs
    }

    fn input_size(&self, params: &Params) -> usize {
        params.num_vision_directions
    }

    fn name(&self) -> &'static str {
        "Vision"
    }
}
