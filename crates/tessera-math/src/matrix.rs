use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::{Vector3, Vector4};

/// 4×4 matrix, row-major (`m[row][col]`).
///
/// Points are row vectors multiplied on the left: `v' = v * M`. Translation
/// therefore lives in row 3, and "apply `a`, then `b`" is `a * b`.
///
/// The layout is 16 contiguous `f32`s in row order, which is the payload
/// copied verbatim into GPU constant buffers.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn rows(&self) -> &[[f32; 4]; 4] {
        &self.m
    }

    // ── factories ─────────────────────────────────────────────────────────

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Diagonal scale matrix.
    pub const fn scale(s: Vector3) -> Self {
        Self::from_rows([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Identity with the offset in row 3.
    pub const fn translate(t: Vector3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// Rotation about +X by `radians`.
    pub fn rotate_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, sin, 0.0],
            [0.0, -sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about +Y by `radians`.
    pub fn rotate_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, 0.0, -sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about +Z by `radians`.
    pub fn rotate_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, sin, 0.0, 0.0],
            [-sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Left-handed perspective projection with depth mapped to [0, 1].
    ///
    /// `fov_y` is the full vertical field of view in radians.
    ///
    /// Preconditions (not checked): `0 < near < far` and `0 < fov_y < π`.
    /// Violations produce infinities or NaNs in the result.
    pub fn perspective_fov(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let range = far / (far - near);

        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, range, 1.0],
            [0.0, 0.0, -range * near, 0.0],
        ])
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] × [near, far]`.
    ///
    /// Screen-space setups usually pass `top = 0` and `bottom = height`, which
    /// flips Y so that +Y points down the screen.
    pub fn orthographic(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far - near), 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                -near / (far - near),
                1.0,
            ],
        ])
    }

    /// Scale, then rotate about X, Y, Z in that order, then translate.
    ///
    /// Equivalent to `scale(s) * rotate_x(r.x) * rotate_y(r.y) * rotate_z(r.z) * translate(t)`.
    pub fn affine(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        let rotation = Self::rotate_x(rotate.x)
            .multiply(&Self::rotate_y(rotate.y))
            .multiply(&Self::rotate_z(rotate.z));

        Self::scale(scale)
            .multiply(&rotation)
            .multiply(&Self::translate(translate))
    }

    // ── algebra ───────────────────────────────────────────────────────────

    /// Full 4×4 product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.m[row][k] * rhs.m[k][col];
                }
                out.m[row][col] = acc;
            }
        }
        out
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[col][row] = self.m[row][col];
            }
        }
        out
    }

    /// Exactly `0.0` whenever two rows or two columns are equal.
    pub fn determinant(&self) -> f32 {
        self.determinant_from(&Minors::of(self))
    }

    fn determinant_from(&self, minors: &Minors) -> f32 {
        // The minor expansion only cancels exactly for repeats inside the
        // 0/1 or 2/3 row pairs; other repeats leave rounding residue.
        if self.has_repeated_line() {
            0.0
        } else {
            minors.determinant()
        }
    }

    /// True when any two rows, or any two columns, compare equal.
    fn has_repeated_line(&self) -> bool {
        let t = self.transpose();
        [&self.m, &t.m].into_iter().any(|lines| {
            (0..4).any(|i| (i + 1..4).any(|j| lines[i] == lines[j]))
        })
    }

    /// Adjugate inverse.
    ///
    /// A matrix whose determinant is exactly zero yields [`Matrix4x4::ZERO`]
    /// rather than an error. Using that result as a world or view matrix
    /// collapses all geometry onto the origin, so callers that cannot rule
    /// out singular input should prefer [`Matrix4x4::try_inverse`].
    ///
    /// Near-singular matrices are inverted as-is; no pivoting or conditioning
    /// check is performed.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            log::trace!("inverse of singular matrix requested; returning zero matrix");
            Self::ZERO
        })
    }

    /// Adjugate inverse, or `None` when the determinant is exactly zero
    /// (including any matrix with two equal rows or columns).
    pub fn try_inverse(&self) -> Option<Self> {
        let minors = Minors::of(self);
        let det = self.determinant_from(&minors);
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0 / det;
        let a = &self.m;
        let Minors { s, c } = minors;

        // Transposed cofactors, expanded through the shared 2×2 minors.
        let adj = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];

        let mut out = Self::from_rows(adj);
        for row in out.m.iter_mut() {
            for v in row.iter_mut() {
                *v *= inv_det;
            }
        }
        Some(out)
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// True for the all-zero matrix, e.g. the result of inverting a singular matrix.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.iter().flatten().all(|&v| v == 0.0)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Row-major bytes, 64 in total.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// 2×2 minors of the upper (`s`) and lower (`c`) row pairs.
///
/// `s[i]` pairs rows 0/1 and `c[i]` pairs rows 2/3. Both take columns in the
/// order (0,1) (0,2) (0,3) (1,2) (1,3) (2,3), so `s[i]` and `c[5 - i]` cover
/// complementary columns.
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn of(mat: &Matrix4x4) -> Self {
        let a = &mat.m;
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        Self { s, c }
    }

    /// Laplace expansion over the complementary minor pairs.
    #[inline]
    fn determinant(&self) -> f32 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;
    #[inline]
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        self.multiply(&rhs)
    }
}

/// Row vector times matrix.
impl Mul<Matrix4x4> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Matrix4x4) -> Vector4 {
        let v = [self.x, self.y, self.z, self.w];
        let mut out = [0.0f32; 4];
        for (col, o) in out.iter_mut().enumerate() {
            for (k, vk) in v.iter().enumerate() {
                *o += vk * rhs.m[k][col];
            }
        }
        Vector4::new(out[0], out[1], out[2], out[3])
    }
}
