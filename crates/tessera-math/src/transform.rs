use crate::{Matrix4x4, Vector3};

/// Scale / rotate / translate triple describing an object's placement.
///
/// `rotate` holds per-axis Euler angles in radians, applied X, then Y, then Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::one(),
            rotate: Vector3::zero(),
            translate: Vector3::zero(),
        }
    }
}

impl Transform {
    #[inline]
    pub const fn new(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        Self { scale, rotate, translate }
    }

    /// Unit scale and no rotation, placed at `translate`.
    #[inline]
    pub const fn from_translation(translate: Vector3) -> Self {
        Self {
            scale: Vector3::one(),
            rotate: Vector3::zero(),
            translate,
        }
    }

    /// Object-to-world matrix.
    #[inline]
    pub fn to_matrix(&self) -> Matrix4x4 {
        Matrix4x4::affine(self.scale, self.rotate, self.translate)
    }

    /// World-to-camera matrix for a camera placed by this transform.
    ///
    /// Zero scale on any axis makes the placement singular and the result is
    /// the zero matrix.
    #[inline]
    pub fn to_view_matrix(&self) -> Matrix4x4 {
        self.to_matrix().inverse()
    }

    /// Texture-coordinate matrix: scale, spin about Z, then offset.
    ///
    /// Only `rotate.z` participates; UVs live in the XY plane.
    pub fn to_uv_matrix(&self) -> Matrix4x4 {
        Matrix4x4::scale(self.scale)
            .multiply(&Matrix4x4::rotate_z(self.rotate.z))
            .multiply(&Matrix4x4::translate(self.translate))
    }
}
