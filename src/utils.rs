use crate::{vector::Vector, Result};
use rand::Rng;

/// Free-standing form of [`Vector::dot`].
pub fn dot_product(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.dot(v2)
}

/// Free-standing form of [`Vector::cross`], with the same two failure kinds.
pub fn cross_product(v1: &Vector, v2: &Vector) -> Result<Vector> {
    v1.cross(v2)
}

pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let dot_product = v1.dot(v2)?;
    let norm1 = v1.magnitude();
    let norm2 = v2.magnitude();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm1 * norm2))
    }
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = v1.sub(v2)?;
    Ok(diff.magnitude())
}

pub fn manhattan_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = v1.sub(v2)?;
    diff.norm(1.0)
}

/// `count` vectors of dimension `dim` with components uniform in `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, count: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0_f64..1.0)).collect::<Vector>())
        .collect()
}
