pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Unsupported Dimension: {operation} is not defined for dimension {dimension}")]
    UnsupportedDimension {
        operation: &'static str,
        dimension: usize,
    },
    #[error("Out Of Bounds: index {index} is outside dimension {dimension}")]
    OutOfBounds { index: usize, dimension: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{Operand, Product};
pub use utils::{
    cosine_similarity, cross_product, dot_product, euclidean_distance, generate_random_vectors,
    manhattan_distance,
};
pub use vector::Vector;
