//! Genetics module - genotype codec, gene cursor and numeric sources.

pub mod codec;
pub mod genotype;
pub mod source;

pub use codec::{decode_int, decode_sequence, encode_int, encode_sequence};
pub use genotype::GeneCursor;
pub use source::{GenerationRange, NumericSource, UniformSource};
