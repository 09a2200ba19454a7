//! Layer-count descriptors.

use crate::error::{NetError, Result};
use serde::{Deserialize, Serialize};

/// How explicit construction hands weights to the neurons of a layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMode {
    /// One weight vector per layer, copied into every neuron of that layer
    #[default]
    Shared,
    /// Every neuron draws its own weight vector
    Independent,
}

/// Ordered neuron counts: `counts[0]` is the input arity, the rest are the
/// sizes of the layers in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    counts: Vec<usize>,
    #[serde(skip)]
    genotype_len: usize,
}

impl Topology {
    /// Validate and wrap a list of counts
    pub fn new(counts: Vec<usize>) -> Result<Self> {
        if counts.len() < 2 {
            return Err(NetError::InvalidTopology(format!(
                "need an input arity and at least one layer, got {} count(s)",
                counts.len()
            )));
        }
        if let Some(pos) = counts.iter().position(|&c| c == 0) {
            return Err(NetError::InvalidTopology(format!(
                "count at position {} must be positive",
                pos
            )));
        }
        let genotype_len = counts
            .windows(2)
            .try_fold(0usize, |total, w| {
                w[0].checked_add(1)
                    .and_then(|per_neuron| per_neuron.checked_mul(w[1]))
                    .and_then(|layer| total.checked_add(layer))
            })
            .ok_or_else(|| {
                NetError::InvalidTopology("genotype length does not fit in usize".to_string())
            })?;
        Ok(Self {
            counts,
            genotype_len,
        })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Length of the input signal
    #[inline]
    pub fn input_arity(&self) -> usize {
        self.counts[0]
    }

    /// Neuron count of every layer, in order
    pub fn layer_sizes(&self) -> &[usize] {
        &self.counts[1..]
    }

    pub fn layer_count(&self) -> usize {
        self.counts.len() - 1
    }

    /// Length of the final output signal
    pub fn output_arity(&self) -> usize {
        self.counts[self.counts.len() - 1]
    }

    /// `(input arity, neuron count)` for each layer
    pub fn layer_shapes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.windows(2).map(|w| (w[0], w[1]))
    }

    /// One threshold per neuron
    pub fn threshold_count(&self) -> usize {
        self.layer_sizes().iter().sum()
    }

    /// Weights consumed by explicit construction in the given mode.
    /// Never larger than `genotype_len`, so the sums cannot overflow.
    pub fn weight_count(&self, mode: WeightMode) -> usize {
        match mode {
            WeightMode::Shared => self.layer_shapes().map(|(inputs, _)| inputs).sum(),
            WeightMode::Independent => self
                .layer_shapes()
                .map(|(inputs, neurons)| inputs * neurons)
                .sum(),
        }
    }

    /// Integers in the canonical genotype: a threshold plus one weight per
    /// input, for every neuron
    pub fn genotype_len(&self) -> usize {
        self.genotype_len
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetError;

    fn try_from(counts: Vec<usize>) -> Result<Self> {
        Self::new(counts)
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TopologyData {
            counts: Vec<usize>,
        }

        let data = TopologyData::deserialize(deserializer)?;
        Topology::new(data.counts).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
