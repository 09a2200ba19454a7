//! Cursor-based consumption of flat integer genotypes.

use crate::error::{NetError, Result};

/// Read cursor over an immutable slice of genes.
///
/// Values are taken front to back without mutating the underlying slice, so
/// the caller's genotype is still available after construction.
#[derive(Debug, Clone)]
pub struct GeneCursor<'a> {
    genes: &'a [i32],
    position: usize,
}

impl<'a> GeneCursor<'a> {
    pub fn new(genes: &'a [i32]) -> Self {
        Self { genes, position: 0 }
    }

    /// Take the next value
    #[inline]
    pub fn next_gene(&mut self) -> Result<i32> {
        Ok(self.take(1)?[0])
    }

    /// Take the next `n` values as a slice
    pub fn take(&mut self, n: usize) -> Result<&'a [i32]> {
        let end = self.position + n;
        if end > self.genes.len() {
            return Err(NetError::InsufficientData {
                required: end,
                supplied: self.genes.len(),
            });
        }
        let slice = &self.genes[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Number of values consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of values not yet consumed
    pub fn remaining(&self) -> usize {
        self.genes.len() - self.position
    }
}
