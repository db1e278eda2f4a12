//! Neuron value type: one activation scalar plus incoming weights.

use ndarray::Array1;
use rand::Rng;

/// Position of a neuron within the network's layer groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronKind {
    /// Holds an externally supplied stimulus value; no incoming weights.
    Input,
    /// Member of one of the hidden layers.
    Hidden,
    /// Member of the output layer; its activation is the decision vector.
    Output,
}

/// Smallest unit of a seeker brain.
///
/// The `activation` field is dual-purpose: input neurons store the stimulus
/// value assigned to them, while hidden and output neurons store their
/// post-activation output, overwritten in place on every forward pass. There
/// is no separate persisted bias term.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    /// Layer group this neuron belongs to.
    pub kind: NeuronKind,
    /// Current signal value (stimulus for inputs, sigmoid output otherwise).
    pub activation: f64,
    /// One weight per neuron in the previous layer; empty for input neurons.
    pub weights: Array1<f64>,
}

impl Neuron {
    /// Creates an input neuron with no incoming weights.
    pub fn input() -> Self {
        Self {
            kind: NeuronKind::Input,
            activation: 0.0,
            weights: Array1::zeros(0),
        }
    }

    /// Creates a hidden or output neuron with `fan_in` incoming weights,
    /// each drawn independently and uniformly from [-1, 1).
    pub fn new(activation: f64, kind: NeuronKind, fan_in: usize, rng: &mut impl Rng) -> Self {
        Self {
            kind,
            activation,
            weights: Array1::from_shape_fn(fan_in, |_| rng.random_range(-1.0..1.0)),
        }
    }

    /// Number of incoming weights, which equals the previous layer's size.
    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }
}
