//! Error type shared by the codec, construction and evaluation paths.

/// Errors raised while building, encoding or evaluating a network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    /// Topology is empty, has no layers, or contains a zero count
    InvalidTopology(String),
    /// A vector length does not match the arity it is fed into
    ArityMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// Genotype, bitstring or explicit list is shorter than the topology needs
    InsufficientData { required: usize, supplied: usize },
    /// Value lies outside the representable codec domain
    OutOfRange { value: i64, min: i32, max: i32 },
    /// Bitstring has a bad length, a bad character or a non-canonical code
    MalformedBitstring(String),
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTopology(msg) => write!(f, "Invalid topology: {}", msg),
            Self::ArityMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "Arity mismatch in {}: expected {}, found {}",
                context, expected, found
            ),
            Self::InsufficientData { required, supplied } => write!(
                f,
                "Insufficient data: {} values required, {} supplied",
                required, supplied
            ),
            Self::OutOfRange { value, min, max } => {
                write!(f, "Value {} out of range [{}, {}]", value, min, max)
            }
            Self::MalformedBitstring(msg) => write!(f, "Malformed bitstring: {}", msg),
        }
    }
}

impl std::error::Error for NetError {}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, NetError>;
