//! Projection parameters.
//!
//! The kernel factories accept any input and let invalid parameters surface
//! as infinities or NaNs. These config types carry sensible defaults and an
//! opt-in `validate()` for callers that want the preconditions checked.

use core::f32::consts::PI;

use tessera_math::Matrix4x4;

use crate::error::ProjectionError;

/// Perspective camera lens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveConfig {
    /// Full vertical field of view, radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveConfig {
    fn default() -> Self {
        Self {
            fov_y: 0.45,
            aspect: 1280.0 / 720.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl PerspectiveConfig {
    /// Default lens with the aspect ratio of a `width × height` viewport.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            aspect: width / height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ProjectionError::ClipPlanes { near: self.near, far: self.far });
        }
        if !(self.fov_y > 0.0 && self.fov_y < PI) {
            return Err(ProjectionError::FieldOfView(self.fov_y));
        }
        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            return Err(ProjectionError::AspectRatio(self.aspect));
        }
        Ok(())
    }

    #[inline]
    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::perspective_fov(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Orthographic box, typically in screen pixels with `top = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicConfig {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthographicConfig {
    fn default() -> Self {
        Self::screen(1280.0, 720.0)
    }
}

impl OrthographicConfig {
    /// Pixel space for a `width × height` viewport, origin top-left, +Y down.
    pub const fn screen(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
            near: 0.0,
            far: 100.0,
        }
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.right == self.left || self.top == self.bottom {
            return Err(ProjectionError::EmptyVolume);
        }
        if !(self.near < self.far) {
            return Err(ProjectionError::ClipPlanes { near: self.near, far: self.far });
        }
        Ok(())
    }

    #[inline]
    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::orthographic(self.left, self.top, self.right, self.bottom, self.near, self.far)
    }
}

/// Either kind of camera projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Projection {
    Perspective(PerspectiveConfig),
    Orthographic(OrthographicConfig),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective(PerspectiveConfig::default())
    }
}

impl Projection {
    pub fn validate(&self) -> Result<(), ProjectionError> {
        match self {
            Self::Perspective(p) => p.validate(),
            Self::Orthographic(o) => o.validate(),
        }
    }

    pub fn matrix(&self) -> Matrix4x4 {
        match self {
            Self::Perspective(p) => p.matrix(),
            Self::Orthographic(o) => o.matrix(),
        }
    }
}
