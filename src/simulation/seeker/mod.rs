//! Seeker module containing agent behavior and perception systems.

mod perception;
mod proprioception;
mod seeker;
mod sense;
mod vision;

// Re-export everything from the seeker module
pub use seeker::*;

// Re-export perception system components
pub use perception::Perception;
pub use proprioception::Proprioception;
pub use sense::Sense;
pub use vision::Vision;
