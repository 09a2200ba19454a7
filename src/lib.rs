//! # stepnet
//!
//! Feed-forward networks of binary-threshold neurons with a compact genotype
//! codec.
//!
//! ## Features
//!
//! - **Exact**: integer weights and thresholds, step activation, no floats
//! - **Encodable**: every threshold and weight packs into a 5-bit
//!   sign-magnitude code
//! - **Lossless**: structured network, flat genotype and bitstring convert
//!   into each other without loss
//! - **Reproducible**: random generation through an injected, seeded source
//!
//! ## Quick Start
//!
//! ```rust
//! use stepnet::{Network, Topology};
//!
//! let topology = Topology::new(vec![2, 1]).unwrap();
//! let net = Network::from_genotype(topology, &[1, 1, 1]).unwrap();
//!
//! assert_eq!(net.propagate(&[1, 0]).unwrap(), vec![1]);
//! assert_eq!(net.to_bitstring().unwrap(), "000010000100001");
//! ```
//!
//! ## Random networks
//!
//! ```rust
//! use stepnet::genetics::{GenerationRange, UniformSource};
//! use stepnet::{Network, Topology};
//!
//! let mut source = UniformSource::new(GenerationRange::default(), 42).unwrap();
//! let topology = Topology::new(vec![2, 2, 3, 3, 2]).unwrap();
//! let net = Network::random(topology.clone(), &mut source).unwrap();
//!
//! let bits = net.to_bitstring().unwrap();
//! let rebuilt = Network::from_bitstring(topology, &bits).unwrap();
//! assert_eq!(rebuilt.to_genotype(), net.to_genotype());
//! ```

pub mod config;
pub mod error;
pub mod genetics;
pub mod genome_file;
pub mod neural;

// Re-export main types
pub use config::Config;
pub use error::{NetError, Result};
pub use neural::{Evaluator, Network, NetworkBuilder, Neuron, Source, Topology, WeightMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
