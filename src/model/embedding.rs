use half::f16;
use serde::{Deserialize, Serialize};

use super::error::EmbeddingCodecError;
use crate::vector::l2_norm;

/// Semantic vector of one content chunk.
///
/// Immutable once built. The storage collaborator keeps embeddings as little-endian f16
/// bytes; [`Embedding::from_f16_bytes`] and [`Embedding::to_f16_bytes`] convert between the
/// two forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn norm(&self) -> f32 {
        l2_norm(&self.0)
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Decodes little-endian f16 bytes.
    pub fn from_f16_bytes(bytes: &[u8]) -> Result<Self, EmbeddingCodecError> {
        if !bytes.len().is_multiple_of(2) {
            return Err(EmbeddingCodecError::OddByteLength { len: bytes.len() });
        }

        Ok(Self(
            bytes
                .chunks_exact(2)
                .map(|chunk| f16::from_le_bytes([chunk[0], chunk[1]]).to_f32())
                .collect(),
        ))
    }

    /// Decodes little-endian f16 bytes and checks the resulting dimension.
    pub fn from_f16_bytes_with_dim(
        bytes: &[u8],
        expected_dim: usize,
    ) -> Result<Self, EmbeddingCodecError> {
        if bytes.len() != expected_dim * 2 {
            return Err(EmbeddingCodecError::UnexpectedLength {
                expected: expected_dim * 2,
                actual: bytes.len(),
            });
        }
        Self::from_f16_bytes(bytes)
    }

    /// Encodes to little-endian f16 bytes (lossy).
    pub fn to_f16_bytes(&self) -> Vec<u8> {
        self.0
            .iter()
            .flat_map(|&v| f16::from_f32(v).to_le_bytes())
            .collect()
    }
}

impl AsRef<[f32]> for Embedding {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl From<&[f32]> for Embedding {
    fn from(values: &[f32]) -> Self {
        Self(values.to_vec())
    }
}
