//! Forward signal propagation.

use super::network::Network;
use crate::error::{NetError, Result};

/// Drives an input signal through a network, one layer at a time.
///
/// Holds only a shared borrow, so any number of evaluators may run against the
/// same network concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    network: &'a Network,
}

impl<'a> Evaluator<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    fn check_input(&self, input: &[i32]) -> Result<()> {
        let expected = self.network.topology().input_arity();
        if input.len() != expected {
            return Err(NetError::ArityMismatch {
                context: "input signal",
                expected,
                found: input.len(),
            });
        }
        Ok(())
    }

    /// Output signal of the last layer
    pub fn propagate(&self, input: &[i32]) -> Result<Vec<i32>> {
        self.check_input(input)?;

        let mut signal = input.to_vec();
        for layer in self.network.layers() {
            signal = layer.activate(&signal)?;
        }
        Ok(signal)
    }

    /// Output signal of every layer, in order
    pub fn trace(&self, input: &[i32]) -> Result<Vec<Vec<i32>>> {
        self.check_input(input)?;

        let mut outputs: Vec<Vec<i32>> = Vec::with_capacity(self.network.layers().len());
        for layer in self.network.layers() {
            let signal = match outputs.last() {
                Some(previous) => layer.activate(previous)?,
                None => layer.activate(input)?,
            };
            outputs.push(signal);
        }
        Ok(outputs)
    }
}
