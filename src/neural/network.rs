//! Network structure, construction paths and genotype serialization.

use super::evaluator::Evaluator;
use super::layer::Layer;
use super::neuron::Neuron;
use super::topology::{Topology, WeightMode};
use crate::error::{NetError, Result};
use crate::genetics::codec;
use crate::genetics::{GeneCursor, GenerationRange, NumericSource, UniformSource};
use serde::Serialize;

/// Where the numeric state of a new network comes from
pub enum Source<'a> {
    /// Caller-supplied lists; omitted lists are drawn from the default
    /// uniform source
    Explicit {
        thresholds: Option<&'a [i32]>,
        weights: Option<&'a [i32]>,
    },
    /// Flat integers in canonical order
    Genotype(&'a [i32]),
    /// Concatenated 5-bit codes in canonical order
    Bitstring(&'a str),
    /// Every threshold and weight drawn from the given source
    Random(&'a mut dyn NumericSource),
}

/// Layered binary-threshold network. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Network {
    topology: Topology,
    layers: Vec<Layer>,
}

impl Network {
    /// Build a network from any supported source
    pub fn build(topology: Topology, source: Source<'_>) -> Result<Self> {
        match source {
            Source::Explicit {
                thresholds,
                weights,
            } => {
                let mut builder = NetworkBuilder::new(topology);
                if let Some(t) = thresholds {
                    builder = builder.thresholds(t.to_vec());
                }
                if let Some(w) = weights {
                    builder = builder.weights(w.to_vec());
                }
                builder.build()
            }
            Source::Genotype(genes) => Self::from_genotype(topology, genes),
            Source::Bitstring(bits) => Self::from_bitstring(topology, bits),
            Source::Random(source) => NetworkBuilder::new(topology).build_with(source),
        }
    }

    /// Build from a flat genotype: per neuron, one threshold then one weight
    /// per input. Each neuron gets its own weight slice.
    pub fn from_genotype(topology: Topology, genes: &[i32]) -> Result<Self> {
        Self::from_genotype_with_surplus(topology, genes).map(|(net, _)| net)
    }

    /// Like `from_genotype`, also returning how many trailing values were
    /// left unconsumed. A non-zero surplus is logged as a warning.
    pub fn from_genotype_with_surplus(
        topology: Topology,
        genes: &[i32],
    ) -> Result<(Self, usize)> {
        let required = topology.genotype_len();
        if genes.len() < required {
            return Err(NetError::InsufficientData {
                required,
                supplied: genes.len(),
            });
        }

        let mut cursor = GeneCursor::new(genes);
        let mut layers = Vec::with_capacity(topology.layer_count());

        for (inputs, size) in topology.layer_shapes() {
            let mut neurons = Vec::with_capacity(size);
            for _ in 0..size {
                let threshold = codec::check_range(cursor.next_gene()?)?;
                let weights = checked(cursor.take(inputs)?)?;
                neurons.push(Neuron::new(threshold, weights.to_vec()));
            }
            layers.push(Layer::new(inputs, neurons)?);
        }

        let surplus = cursor.remaining();
        if surplus > 0 {
            log::warn!(
                "Genotype has {} unused value(s) after building topology {}",
                surplus,
                topology
            );
        }

        Ok((Self::assemble(topology, layers), surplus))
    }

    /// Build from a bitstring of concatenated 5-bit codes
    pub fn from_bitstring(topology: Topology, bits: &str) -> Result<Self> {
        let genes = codec::decode_sequence(bits)?;
        Self::from_genotype(topology, &genes)
    }

    /// Build with every value drawn from `source`
    pub fn random(topology: Topology, source: &mut dyn NumericSource) -> Result<Self> {
        NetworkBuilder::new(topology).build_with(source)
    }

    fn assemble(topology: Topology, layers: Vec<Layer>) -> Self {
        let net = Self { topology, layers };
        log::debug!(
            "Built network {}: {} neurons, {} parameters",
            net.topology,
            net.neuron_count(),
            net.parameter_count()
        );
        net
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of neurons
    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Total number of thresholds plus weights (the genotype length)
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }

    /// Canonical genotype: threshold then weights, neuron by neuron
    pub fn to_genotype(&self) -> Vec<i32> {
        let mut genes = Vec::with_capacity(self.parameter_count());
        for neuron in self.layers.iter().flat_map(|l| l.neurons()) {
            neuron.write_genes(&mut genes);
        }
        genes
    }

    /// Genotype rendered as 5-bit codes
    pub fn to_bitstring(&self) -> Result<String> {
        codec::encode_sequence(&self.to_genotype())
    }

    /// Run a forward pass
    pub fn propagate(&self, input: &[i32]) -> Result<Vec<i32>> {
        Evaluator::new(self).propagate(input)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Network {}", self.topology)?;
        for (i, layer) in self.layers.iter().enumerate() {
            write!(f, "\nLayer {} [", i)?;
            for neuron in layer.neurons() {
                write!(f, "\n\t{}", neuron)?;
            }
            write!(f, "\n]")?;
        }
        Ok(())
    }
}

fn checked(values: &[i32]) -> Result<&[i32]> {
    for &v in values {
        codec::check_range(v)?;
    }
    Ok(values)
}

/// Explicit construction with optional thresholds and weights.
///
/// Omitted thresholds are drawn first (one per neuron, layer by layer), then
/// omitted weights, both in the order construction consumes them.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    topology: Topology,
    thresholds: Option<Vec<i32>>,
    weights: Option<Vec<i32>>,
    mode: WeightMode,
}

impl NetworkBuilder {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            thresholds: None,
            weights: None,
            mode: WeightMode::default(),
        }
    }

    pub fn thresholds(mut self, thresholds: Vec<i32>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    pub fn weights(mut self, weights: Vec<i32>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn weight_mode(mut self, mode: WeightMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build, drawing omitted values from an entropy-seeded default source
    pub fn build(self) -> Result<Network> {
        if self.thresholds.is_some() && self.weights.is_some() {
            return self.build_with(&mut || 0);
        }
        let mut source = UniformSource::from_entropy(GenerationRange::default())?;
        log::debug!("Filling omitted values with seed {}", source.seed());
        self.build_with(&mut source)
    }

    /// Build, drawing omitted values from `source`
    pub fn build_with(self, source: &mut dyn NumericSource) -> Result<Network> {
        let topology = self.topology;
        let mode = self.mode;

        let threshold_count = topology.threshold_count();
        let weight_count = topology.weight_count(mode);

        let thresholds = match self.thresholds {
            Some(thresholds) => thresholds,
            None => draw(source, threshold_count),
        };
        let weights = match self.weights {
            Some(weights) => weights,
            None => draw(source, weight_count),
        };

        require("thresholds", threshold_count, &thresholds)?;
        require("weights", weight_count, &weights)?;

        let mut threshold_cursor = GeneCursor::new(&thresholds);
        let mut weight_cursor = GeneCursor::new(&weights);
        let mut layers = Vec::with_capacity(topology.layer_count());

        for (inputs, size) in topology.layer_shapes() {
            let shared = match mode {
                WeightMode::Shared => Some(checked(weight_cursor.take(inputs)?)?),
                WeightMode::Independent => None,
            };

            let mut neurons = Vec::with_capacity(size);
            for _ in 0..size {
                let threshold = codec::check_range(threshold_cursor.next_gene()?)?;
                let own = match shared {
                    Some(w) => w,
                    None => checked(weight_cursor.take(inputs)?)?,
                };
                // Each neuron owns its copy, shared or not
                neurons.push(Neuron::new(threshold, own.to_vec()));
            }
            layers.push(Layer::new(inputs, neurons)?);
        }

        Ok(Network::assemble(topology, layers))
    }
}

fn draw(source: &mut dyn NumericSource, count: usize) -> Vec<i32> {
    (0..count).map(|_| source.next_value()).collect()
}

fn require(what: &str, required: usize, values: &[i32]) -> Result<()> {
    if values.len() < required {
        return Err(NetError::InsufficientData {
            required,
            supplied: values.len(),
        });
    }
    if values.len() > required {
        log::warn!(
            "{} unused {} after explicit construction",
            values.len() - required,
            what
        );
    }
    Ok(())
}
