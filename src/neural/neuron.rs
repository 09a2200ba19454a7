//! Binary-threshold neuron.

use crate::error::{NetError, Result};
use serde::Serialize;

/// Step unit: fires when the weighted input sum reaches the threshold
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Neuron {
    threshold: i32,
    weights: Vec<i32>,
}

impl Neuron {
    pub fn new(threshold: i32, weights: Vec<i32>) -> Self {
        Self { threshold, weights }
    }

    #[inline]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    #[inline]
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Number of inputs this neuron expects
    #[inline]
    pub fn arity(&self) -> usize {
        self.weights.len()
    }

    /// Exact weighted sum of `inputs`
    pub fn weighted_sum(&self, inputs: &[i32]) -> Result<i64> {
        if inputs.len() != self.weights.len() {
            return Err(NetError::ArityMismatch {
                context: "neuron inputs",
                expected: self.weights.len(),
                found: inputs.len(),
            });
        }

        Ok(self
            .weights
            .iter()
            .zip(inputs)
            .map(|(&w, &x)| i64::from(w) * i64::from(x))
            .sum())
    }

    /// Returns 1 when the weighted sum is at or above the threshold, else 0
    #[inline]
    pub fn activate(&self, inputs: &[i32]) -> Result<i32> {
        let sum = self.weighted_sum(inputs)?;
        Ok(i32::from(sum >= i64::from(self.threshold)))
    }

    /// Append `threshold` then `weights` in genotype order
    pub(crate) fn write_genes(&self, out: &mut Vec<i32>) {
        out.push(self.threshold);
        out.extend_from_slice(&self.weights);
    }
}

impl std::fmt::Display for Neuron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NEURON[Threshold = {}, Weights = {:?}]",
            self.threshold, self.weights
        )
    }
}
