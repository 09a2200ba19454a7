//! A layer of neurons sharing one input arity.

use super::neuron::Neuron;
use crate::error::{NetError, Result};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Layer {
    input_arity: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Build a layer, checking every neuron takes `input_arity` inputs
    pub fn new(input_arity: usize, neurons: Vec<Neuron>) -> Result<Self> {
        if let Some(bad) = neurons.iter().find(|n| n.arity() != input_arity) {
            return Err(NetError::ArityMismatch {
                context: "neuron weights",
                expected: input_arity,
                found: bad.arity(),
            });
        }
        Ok(Self {
            input_arity,
            neurons,
        })
    }

    pub fn input_arity(&self) -> usize {
        self.input_arity
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Activate every neuron against the same input vector
    pub fn activate(&self, inputs: &[i32]) -> Result<Vec<i32>> {
        if inputs.len() != self.input_arity {
            return Err(NetError::ArityMismatch {
                context: "layer inputs",
                expected: self.input_arity,
                found: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    /// Thresholds plus weights held by this layer
    pub fn parameter_count(&self) -> usize {
        self.neurons.iter().map(|n| 1 + n.arity()).sum()
    }
}
