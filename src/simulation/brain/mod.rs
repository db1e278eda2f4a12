//! Neural network implementation for seeker brains.
//!
//! Networks support forward inference and genetic-style weight perturbation
//! only; there is no gradient training. All randomized operations draw from
//! an injected random source so runs can be made deterministic.

use std::fmt;

use ndarray::Array1;
use rand::Rng;

pub mod neuron;

pub use neuron::{Neuron, NeuronKind};

/// Errors from brain construction and genetic operators.
///
/// These are programming or configuration errors, not transient conditions;
/// no operation retries.
#[derive(Debug, Clone, PartialEq)]
pub enum BrainError {
    /// A stimulus vector or crossover partner does not match this network's
    /// shape. Reports the first differing dimension.
    ShapeMismatch {
        /// Size this network requires.
        expected: usize,
        /// Size that was supplied.
        actual: usize,
    },
    /// Construction requires at least one hidden layer, since the output
    /// layer's weights are sized to the last hidden layer.
    EmptyTopology,
    /// Shaking rate must be a probability in [0, 1].
    InvalidShakingRate(f64),
}

impl fmt::Display for BrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            Self::EmptyTopology => write!(f, "at least one hidden layer is required"),
            Self::InvalidShakingRate(rate) => {
                write!(f, "shaking rate {rate} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for BrainError {}

/// The sigmoid squashing function, mapping any real sum into (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Collects a layer's current activations into a dense vector.
fn activations(layer: &[Neuron]) -> Array1<f64> {
    layer.iter().map(|n| n.activation).collect()
}

/// Overwrites each neuron's activation with sigmoid of the dot product
/// against the previous layer. The dot product alone is squashed; no bias
/// term is added.
fn feed_layer(prev: &Array1<f64>, layer: &mut [Neuron]) {
    for neuron in layer.iter_mut() {
        neuron.activation = sigmoid(neuron.weights.dot(prev));
    }
}

/// A feedforward neural network evolved by genetic operators.
///
/// Owns an input layer, an ordered sequence of hidden layers, and an output
/// layer. The topology is fixed at construction; only activation and weight
/// values change afterwards. Cloning produces a fully independent deep copy
/// with no shared storage.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    /// Stimulus holders; no incoming weights.
    pub input_layer: Vec<Neuron>,
    /// Zero-indexed hidden layers, each sized independently.
    pub hidden_layers: Vec<Vec<Neuron>>,
    /// Decision neurons; their activations are the network's output vector.
    pub output_layer: Vec<Neuron>,
}

impl NeuralNetwork {
    /// Creates a network with freshly initialized neurons.
    ///
    /// Input neurons start at activation 0 with no weights. Each hidden
    /// neuron draws a random initial activation in [-1, 1) followed by a
    /// weight vector sized to the previous layer. Output neurons start at
    /// activation 0 with weights sized to the last hidden layer.
    ///
    /// `input_count` and `output_count` may be zero; `hidden_layer_sizes`
    /// must name at least one layer.
    pub fn new(
        input_count: usize,
        hidden_layer_sizes: &[usize],
        output_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, BrainError> {
        if hidden_layer_sizes.is_empty() {
            return Err(BrainError::EmptyTopology);
        }

        let input_layer: Vec<Neuron> = (0..input_count).map(|_| Neuron::input()).collect();

        let mut hidden_layers: Vec<Vec<Neuron>> = Vec::with_capacity(hidden_layer_sizes.len());
        let mut fan_in = input_count;
        for &size in hidden_layer_sizes {
            let layer = (0..size)
                .map(|_| {
                    // Activation is drawn before the neuron's weights.
                    let activation = rng.random_range(-1.0..1.0);
                    Neuron::new(activation, NeuronKind::Hidden, fan_in, rng)
                })
                .collect();
            hidden_layers.push(layer);
            fan_in = size;
        }

        let output_layer = (0..output_count)
            .map(|_| Neuron::new(0.0, NeuronKind::Output, fan_in, rng))
            .collect();

        Ok(Self {
            input_layer,
            hidden_layers,
            output_layer,
        })
    }

    /// Runs a forward pass and returns the output activations.
    ///
    /// Assigns the stimulus to the input layer, then propagates layer by
    /// layer: every hidden and output neuron's activation is overwritten
    /// with `sigmoid(prev · weights)`. Each source layer is fully finalized
    /// before the next layer reads it. Fails with
    /// [`BrainError::ShapeMismatch`] when the stimulus length differs from
    /// the input layer size; the stimulus is never truncated or padded.
    pub fn think(&mut self, stimulus: &Array1<f64>) -> Result<Array1<f64>, BrainError> {
        if stimulus.len() != self.input_layer.len() {
            return Err(BrainError::ShapeMismatch {
                expected: self.input_layer.len(),
                actual: stimulus.len(),
            });
        }

        for (neuron, &value) in self.input_layer.iter_mut().zip(stimulus.iter()) {
            neuron.activation = value;
        }

        let mut prev = activations(&self.input_layer);
        for layer in &mut self.hidden_layers {
            feed_layer(&prev, layer);
            prev = activations(layer);
        }
        feed_layer(&prev, &mut self.output_layer);

        Ok(self.outputs())
    }

    /// Returns the output layer's current activations, each in (0, 1) after
    /// a forward pass.
    pub fn outputs(&self) -> Array1<f64> {
        activations(&self.output_layer)
    }

    /// Crosses genetic material in from another network of identical
    /// topology.
    ///
    /// Each hidden and output neuron is independently replaced by a deep
    /// copy of `other`'s neuron at the same position with probability 0.5.
    /// The input layer is never crossed. Mutates `self` in place and leaves
    /// `other` unmodified. Fails fast with [`BrainError::ShapeMismatch`]
    /// when the topologies differ at any level.
    pub fn cross(&mut self, other: &NeuralNetwork, rng: &mut impl Rng) -> Result<(), BrainError> {
        self.check_same_topology(other)?;

        for (mine, theirs) in self.hidden_layers.iter_mut().zip(&other.hidden_layers) {
            for (neuron, donor) in mine.iter_mut().zip(theirs) {
                if rng.random::<f64>() < 0.5 {
                    *neuron = donor.clone();
                }
            }
        }
        for (neuron, donor) in self.output_layer.iter_mut().zip(&other.output_layer) {
            if rng.random::<f64>() < 0.5 {
                *neuron = donor.clone();
            }
        }
        Ok(())
    }

    /// Shakes the network's weights for mutation.
    ///
    /// Every weight of every hidden and output neuron is independently
    /// resampled uniformly from [-1, 1) with probability `shaking_rate`.
    /// Activations and the (weightless) input layer are untouched. A rate
    /// of 0.0 is a no-op; 1.0 resamples every weight.
    pub fn shake_weights(
        &mut self,
        shaking_rate: f64,
        rng: &mut impl Rng,
    ) -> Result<(), BrainError> {
        if !(0.0..=1.0).contains(&shaking_rate) {
            return Err(BrainError::InvalidShakingRate(shaking_rate));
        }

        for neuron in self
            .hidden_layers
            .iter_mut()
            .flatten()
            .chain(self.output_layer.iter_mut())
        {
            for weight in neuron.weights.iter_mut() {
                if rng.random::<f64>() < shaking_rate {
                    *weight = rng.random_range(-1.0..1.0);
                }
            }
        }
        Ok(())
    }

    /// Number of input neurons.
    pub fn input_size(&self) -> usize {
        self.input_layer.len()
    }

    /// Number of output neurons.
    pub fn output_size(&self) -> usize {
        self.output_layer.len()
    }

    /// Hidden layer sizes in order.
    pub fn hidden_layer_sizes(&self) -> Vec<usize> {
        self.hidden_layers.iter().map(Vec::len).collect()
    }

    /// Verifies layer counts match at every level, reporting the first
    /// differing dimension.
    fn check_same_topology(&self, other: &NeuralNetwork) -> Result<(), BrainError> {
        let mismatch =
            |expected: usize, actual: usize| BrainError::ShapeMismatch { expected, actual };

        if self.input_layer.len() != other.input_layer.len() {
            return Err(mismatch(self.input_layer.len(), other.input_layer.len()));
        }
        if self.hidden_layers.len() != other.hidden_layers.len() {
            return Err(mismatch(
                self.hidden_layers.len(),
                other.hidden_layers.len(),
            ));
        }
        for (mine, theirs) in self.hidden_layers.iter().zip(&other.hidden_layers) {
            if mine.len() != theirs.len() {
                return Err(mismatch(mine.len(), theirs.len()));
            }
        }
        if self.output_layer.len() != other.output_layer.len() {
            return Err(mismatch(self.output_layer.len(), other.output_layer.len()));
        }
        Ok(())
    }
}
