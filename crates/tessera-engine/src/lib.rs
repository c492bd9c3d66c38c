//! Tessera engine crate.
//!
//! This crate turns scene placements into the matrices a renderer uploads
//! each frame. Device, swapchain and pipeline management live elsewhere; the
//! engine stops at host-side byte buffers ready to be copied to the GPU.

pub mod camera;
pub mod error;
pub mod frame;
pub mod logging;
pub mod projection;

pub use camera::Camera;
pub use error::{FrameError, ProjectionError};
pub use frame::{DirectionalLight, FrameMatrices, Material, TransformationMatrix};
pub use projection::{OrthographicConfig, PerspectiveConfig, Projection};
