use core::cmp::Ordering;

use bytemuck::{Pod, Zeroable};

/// Component ordering used by the vector `Ord` and `PartialEq` impls.
///
/// Finite values order by `<`, so `-0.0` and `0.0` compare equal. Pairs that
/// `<` cannot order (NaN) fall back to `total_cmp`, which keeps `Ord` total
/// and makes equality reflexive even for NaN components.
#[inline]
fn cmp_component(a: f32, b: f32) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Two-component vector, typically a texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Vector2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Vector2 {}

impl Ord for Vector2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_component(self.x, other.x).then_with(|| cmp_component(self.y, other.y))
    }
}

impl PartialOrd for Vector2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Three-component vector: positions, normals, Euler angles, scale factors.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy. A zero vector is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            Self::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

impl PartialEq for Vector3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Vector3 {}

impl Ord for Vector3 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_component(self.x, other.x)
            .then_with(|| cmp_component(self.y, other.y))
            .then_with(|| cmp_component(self.z, other.z))
    }
}

impl PartialOrd for Vector3 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Four-component vector: homogeneous positions and RGBA colors.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Homogeneous point (`w = 1`), affected by translation.
    #[inline]
    pub const fn point(p: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Homogeneous direction (`w = 0`), unaffected by translation.
    #[inline]
    pub const fn direction(d: Vector3) -> Self {
        Self::new(d.x, d.y, d.z, 0.0)
    }

    /// Drops `w` without dividing by it.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl PartialEq for Vector4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Vector4 {}

impl Ord for Vector4 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_component(self.x, other.x)
            .then_with(|| cmp_component(self.y, other.y))
            .then_with(|| cmp_component(self.z, other.z))
            .then_with(|| cmp_component(self.w, other.w))
    }
}

impl PartialOrd for Vector4 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
