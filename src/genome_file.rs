//! Genome files for saving and loading networks.
//!
//! A file holds the topology and canonical genotype; loading rebuilds the
//! network through genotype construction so every invariant is rechecked.

use crate::error::NetError;
use crate::neural::{Network, Topology};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 4] = b"GNOM";

/// Stored network state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeRecord {
    /// Version for compatibility checking
    pub version: u32,
    /// Input arity followed by layer sizes
    pub topology: Vec<usize>,
    /// Canonical genotype
    pub genotype: Vec<i32>,
    /// Seed the genotype was generated from, if random
    pub seed: Option<u64>,
}

impl GenomeRecord {
    /// Current file version
    pub const VERSION: u32 = 1;

    /// Capture a network
    pub fn from_network(network: &Network, seed: Option<u64>) -> Self {
        Self {
            version: Self::VERSION,
            topology: network.topology().counts().to_vec(),
            genotype: network.to_genotype(),
            seed,
        }
    }

    /// Rebuild the stored network
    pub fn to_network(&self) -> Result<Network, GenomeFileError> {
        let topology = Topology::new(self.topology.clone())?;
        Ok(Network::from_genotype(topology, &self.genotype)?)
    }

    /// Save record to binary file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GenomeFileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        let encoded = bincode::serialize(self)?;
        writer.write_all(&encoded)?;
        writer.flush()?;

        Ok(())
    }

    /// Load record from binary file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GenomeFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(GenomeFileError::InvalidFormat(
                "Invalid magic bytes".to_string(),
            ));
        }

        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        let record: GenomeRecord = bincode::deserialize(&buffer)?;

        if record.version != Self::VERSION {
            return Err(GenomeFileError::VersionMismatch {
                expected: Self::VERSION,
                found: record.version,
            });
        }

        Ok(record)
    }
}

/// Errors that can occur during genome file operations
#[derive(Debug)]
pub enum GenomeFileError {
    Io(std::io::Error),
    Serialization(bincode::Error),
    InvalidFormat(String),
    VersionMismatch { expected: u32, found: u32 },
    Network(NetError),
}

impl std::fmt::Display for GenomeFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            Self::VersionMismatch { expected, found } => {
                write!(f, "Version mismatch: expected {}, found {}", expected, found)
            }
            Self::Network(e) => write!(f, "Stored network is invalid: {}", e),
        }
    }
}

impl std::error::Error for GenomeFileError {}

impl From<std::io::Error> for GenomeFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<bincode::Error> for GenomeFileError {
    fn from(e: bincode::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<NetError> for GenomeFileError {
    fn from(e: NetError) -> Self {
        Self::Network(e)
    }
}
