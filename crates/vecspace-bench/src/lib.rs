//! Shared fixtures for vecspace benchmarks.
//!
//! Run with: `cargo bench -p vecspace-bench`

use vecspace_math::{Vector3D, VectorND};

/// Deterministic N-component vector with mixed signs and some zeros.
pub fn sample_nd(len: usize) -> VectorND {
    (0..len)
        .map(|i| match i % 4 {
            0 => 0.0,
            1 => i as f64 * 0.5,
            2 => -(i as f64) / 3.0,
            _ => 1.0 / (i as f64 + 1.0),
        })
        .collect()
}

/// Deterministic batch of 3D vectors.
pub fn sample_3d(count: usize) -> Vec<Vector3D> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Vector3D::new(t.sin(), t.cos(), t * 0.01 - 1.0)
        })
        .collect()
}
