//! Neural network module.
//!
//! Binary-threshold perceptron networks:
//! - Topology descriptors and weight-sharing modes
//! - Neurons and layers with explicit arity checks
//! - Construction from explicit lists, genotypes, bitstrings or a random source
//! - Layer-synchronous forward propagation

mod evaluator;
mod layer;
mod network;
mod neuron;
mod topology;

pub use evaluator::Evaluator;
pub use layer::Layer;
pub use network::{Network, NetworkBuilder, Source};
pub use neuron::Neuron;
pub use topology::{Topology, WeightMode};
