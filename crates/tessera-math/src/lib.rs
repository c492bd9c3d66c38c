//! Transform kernel.
//!
//! Conventions used throughout:
//! - Row-major storage, `m[row][col]`
//! - Row vectors, transformed by right-multiplication: `v' = v * M`
//! - "First A, then B" composes as `A * B`
//! - Left-handed clip space with depth in [0, 1]
//!
//! Every operation is a pure function of its inputs. Nothing here allocates,
//! blocks, or keeps state between calls.

mod matrix;
mod transform;
mod vector;

pub use matrix::Matrix4x4;
pub use transform::Transform;
pub use vector::{Vector2, Vector3, Vector4};
