use super::error::{VectorError, VectorResult};

/// Elementwise mean of `vectors`.
///
/// Empty input is an error rather than a zero vector: a zero vector is numerically valid and
/// would pass for a real centroid downstream.
pub fn centroid<V: AsRef<[f32]>>(vectors: &[V]) -> VectorResult<Vec<f32>> {
    let first = vectors.first().ok_or(VectorError::EmptyInput)?.as_ref();
    let dim = first.len();

    let mut acc = vec![0.0f64; dim];
    for vector in vectors {
        let vector = vector.as_ref();
        if vector.len() != dim {
            return Err(VectorError::DimensionMismatch {
                expected: dim,
                actual: vector.len(),
            });
        }
        for (sum, &value) in acc.iter_mut().zip(vector) {
            *sum += f64::from(value);
        }
    }

    let n = vectors.len() as f64;
    Ok(acc.into_iter().map(|sum| (sum / n) as f32).collect())
}

/// Cosine similarity in `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero norm. Lengths must match. A NaN or infinite
/// component yields [`VectorError::NonFinite`] instead of a NaN similarity.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> VectorResult<f32> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let similarity = dot / (norm_a * norm_b);
    if !similarity.is_finite() {
        return Err(VectorError::NonFinite { value: similarity });
    }
    Ok(similarity.clamp(-1.0, 1.0))
}

/// Euclidean norm.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Counts `values` per bucket.
///
/// `edges` holds `N + 1` ascending boundaries for `N` buckets. Interior boundaries are
/// right-open split points; the first and last buckets absorb everything below and above, so
/// the last bucket is closed at `edges[N]` and the counts always sum to `values.len()`.
/// NaN lands in the first bucket.
pub fn bucketize(values: &[f32], edges: &[f32]) -> VectorResult<Vec<usize>> {
    if edges.len() < 2 {
        return Err(VectorError::InvalidBucketEdges {
            reason: format!("need at least 2 edges, got {}", edges.len()),
        });
    }
    if edges.iter().any(|e| !e.is_finite()) {
        return Err(VectorError::InvalidBucketEdges {
            reason: "edges must be finite".to_string(),
        });
    }
    if !edges.windows(2).all(|w| w[0] < w[1]) {
        return Err(VectorError::InvalidBucketEdges {
            reason: "edges must be strictly ascending".to_string(),
        });
    }

    Ok(bucket_counts(values, edges))
}

/// [`bucketize`] without edge validation. `edges` must hold at least two ascending values.
pub(crate) fn bucket_counts(values: &[f32], edges: &[f32]) -> Vec<usize> {
    let buckets = edges.len().saturating_sub(1).max(1);
    let interior = edges.get(1..buckets).unwrap_or(&[]);
    let mut counts = vec![0usize; buckets];

    for &value in values {
        let idx = interior.partition_point(|&edge| edge <= value);
        counts[idx] += 1;
    }

    counts
}
