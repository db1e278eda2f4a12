//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Simulation parameters that control world scale, senses, movement, and
/// brain topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// World units covered by one grid cell.
    pub map_scale: f32,
    /// Number of vision rays per seeker.
    pub num_vision_directions: usize,
    /// Field of view angle in radians.
    pub fov: f32,
    /// Maximum distance a vision ray probes, in world units.
    pub vision_range: f32,
    /// Distance between successive probes along a vision ray.
    pub ray_step: f32,
    /// Movement speed multiplier.
    pub move_multiplier: f32,
    /// Turn rate multiplier, in radians per second at full deflection.
    pub turn_multiplier: f32,
    /// Hidden layer sizes of every seeker brain, in order.
    pub hidden_layer_sizes: Vec<usize>,
    /// Per-weight probability of resampling during mutation.
    pub shaking_rate: f64,
    /// Number of seekers in a swarm.
    pub n_seeker: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            map_scale: 10.0,
            num_vision_directions: 5,
            fov: std::f32::consts::PI / 2.0,
            vision_range: 60.0,
            ray_step: 2.0,
            move_multiplier: 40.0,
            turn_multiplier: 4.0,
            hidden_layer_sizes: vec![8],
            shaking_rate: 0.05,
            n_seeker: 50,
        }
    }
}

impl Params {
    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        log::info!("parameters loaded from {path}");
        Ok(params)
    }
}
