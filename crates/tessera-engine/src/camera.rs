use tessera_math::{Matrix4x4, Transform, Vector3};

use crate::error::FrameError;
use crate::projection::Projection;

/// A camera: where it sits in the world plus how it projects.
///
/// The view matrix is the inverse of the camera's own placement, so moving
/// the camera right moves the world left on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub transform: Transform,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::from_translation(Vector3::new(0.0, 0.0, -10.0)),
            projection: Projection::default(),
        }
    }
}

impl Camera {
    #[inline]
    pub const fn new(transform: Transform, projection: Projection) -> Self {
        Self { transform, projection }
    }

    /// World-to-camera matrix. Zero when the placement is singular.
    #[inline]
    pub fn view_matrix(&self) -> Matrix4x4 {
        self.transform.to_view_matrix()
    }

    /// World-to-camera matrix, failing on a singular placement instead of
    /// returning the zero matrix.
    pub fn try_view_matrix(&self) -> Result<Matrix4x4, FrameError> {
        self.transform
            .to_matrix()
            .try_inverse()
            .ok_or(FrameError::DegenerateCamera)
    }

    #[inline]
    pub fn projection_matrix(&self) -> Matrix4x4 {
        self.projection.matrix()
    }

    /// `view * projection`: world space straight to clip space.
    pub fn view_projection(&self) -> Matrix4x4 {
        self.view_matrix() * self.projection_matrix()
    }
}
