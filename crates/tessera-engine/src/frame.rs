//! Per-frame matrix assembly.
//!
//! Produces the constant-buffer records a renderer copies to the GPU once per
//! object per frame. Records are plain `Pod` data; their bytes are exactly the
//! row-major floats the shaders read.

use bytemuck::{Pod, Zeroable};
use tessera_math::{Matrix4x4, Transform, Vector3, Vector4};

use crate::camera::Camera;
use crate::error::FrameError;
use crate::projection::OrthographicConfig;

/// Per-object constant-buffer record.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformationMatrix {
    /// Object space to clip space.
    pub wvp: Matrix4x4,
    /// Object space to world space, for lighting.
    pub world: Matrix4x4,
}

impl TransformationMatrix {
    pub const IDENTITY: Self = Self {
        wvp: Matrix4x4::IDENTITY,
        world: Matrix4x4::IDENTITY,
    };
}

/// Per-material constant-buffer record.
///
/// Layout is 96 bytes: color, the lighting flag padded out to 16 bytes, then
/// the texture-coordinate matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub color: Vector4,
    /// Non-zero enables lighting in the shader (HLSL `int`).
    pub enable_lighting: i32,
    pub _pad: [f32; 3],
    pub uv_transform: Matrix4x4,
}

impl Default for Material {
    fn default() -> Self {
        Self::lit(Vector4::new(1.0, 1.0, 1.0, 1.0))
    }
}

impl Material {
    #[inline]
    pub const fn lit(color: Vector4) -> Self {
        Self {
            color,
            enable_lighting: 1,
            _pad: [0.0; 3],
            uv_transform: Matrix4x4::IDENTITY,
        }
    }

    /// Flat-shaded material, as used for screen-space sprites.
    #[inline]
    pub const fn unlit(color: Vector4) -> Self {
        Self { enable_lighting: 0, ..Self::lit(color) }
    }

    #[inline]
    pub fn lighting_enabled(&self) -> bool {
        self.enable_lighting != 0
    }

    #[inline]
    pub fn with_uv_transform(self, uv: &Transform) -> Self {
        Self { uv_transform: uv.to_uv_matrix(), ..self }
    }
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Directional light constant-buffer record, 32 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    pub color: Vector4,
    /// Direction the light travels. Shaders expect unit length.
    pub direction: Vector3,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vector4::new(1.0, 1.0, 1.0, 1.0),
            direction: Vector3::new(0.0, 0.0, -1.0),
            intensity: 1.0,
        }
    }
}

impl DirectionalLight {
    /// Copy with a unit-length direction. A zero direction is left as-is.
    #[inline]
    pub fn normalized(self) -> Self {
        Self { direction: self.direction.normalized(), ..self }
    }
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// `world * (view * projection)`.
#[inline]
pub fn world_view_projection(world: &Matrix4x4, view: &Matrix4x4, projection: &Matrix4x4) -> Matrix4x4 {
    world.multiply(&view.multiply(projection))
}

/// Clip-space matrix for a screen-space sprite: identity view, orthographic
/// projection.
pub fn sprite_matrix(sprite: &Transform, screen: &OrthographicConfig) -> Matrix4x4 {
    world_view_projection(&sprite.to_matrix(), &Matrix4x4::IDENTITY, &screen.matrix())
}

/// Transformation records for one frame, in object order.
///
/// `rebuild()` reuses the record buffer, so steady-state frames do not
/// allocate once the object count stops growing.
#[derive(Debug, Default, Clone)]
pub struct FrameMatrices {
    records: Vec<TransformationMatrix>,
}

impl FrameMatrices {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a fresh frame.
    pub fn build(camera: &Camera, objects: &[Transform]) -> Result<Self, FrameError> {
        let mut frame = Self::new();
        frame.rebuild(camera, objects)?;
        Ok(frame)
    }

    /// Replaces the recorded matrices with those for `objects` seen through `camera`.
    ///
    /// On error the previous contents are left untouched.
    pub fn rebuild(&mut self, camera: &Camera, objects: &[Transform]) -> Result<(), FrameError> {
        camera.projection.validate()?;
        let view = camera.try_view_matrix()?;
        let view_projection = view * camera.projection_matrix();

        self.records.clear();
        self.records.extend(objects.iter().map(|object| {
            let world = object.to_matrix();
            TransformationMatrix {
                wvp: world * view_projection,
                world,
            }
        }));

        log::trace!("frame matrices rebuilt: {} objects", self.records.len());
        Ok(())
    }

    /// Drops all records. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn records(&self) -> &[TransformationMatrix] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contiguous record bytes, `128 * len()` in total.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::projection::{PerspectiveConfig, Projection};

    fn assert_near(a: &Matrix4x4, b: &Matrix4x4, eps: f32) {
        let close = a
            .m
            .iter()
            .flatten()
            .zip(b.m.iter().flatten())
            .all(|(x, y)| (x - y).abs() <= eps);
        assert!(close, "\nleft:  {a:?}\nright: {b:?}");
    }

    fn sphere() -> Transform {
        Transform::new(
            Vector3::one(),
            Vector3::new(0.0, 0.75, 0.0),
            Vector3::new(1.0, 0.0, 2.0),
        )
    }

    // ── records ───────────────────────────────────────────────────────────

    #[test]
    fn record_is_two_matrices() {
        assert_eq!(core::mem::size_of::<TransformationMatrix>(), 128);
        let bytes = bytemuck::bytes_of(&TransformationMatrix::IDENTITY);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[16], 1.0);
        assert_eq!(floats[31], 1.0);
    }

    #[test]
    fn material_is_padded_to_96_bytes() {
        assert_eq!(core::mem::size_of::<Material>(), 96);

        let uv = Transform::from_translation(Vector3::new(0.25, 0.5, 0.0));
        let material = Material::unlit(Vector4::new(0.1, 0.2, 0.3, 0.4)).with_uv_transform(&uv);
        let bytes = material.as_bytes();
        let floats: &[f32] = bytemuck::cast_slice(bytes);

        assert_eq!(&floats[..4], &[0.1, 0.2, 0.3, 0.4]);
        let flag: &[i32] = bytemuck::cast_slice(&bytes[16..20]);
        assert_eq!(flag[0], 0);
        assert_eq!(&floats[5..8], &[0.0; 3]);
        // uv matrix starts at byte 32; its translation row is floats 20..24.
        assert_eq!(floats[8], 1.0);
        assert_eq!(&floats[20..24], &[0.25, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn material_lighting_flag() {
        assert!(Material::default().lighting_enabled());
        assert!(!Material::unlit(Vector4::zero()).lighting_enabled());
        assert_eq!(Material::default().uv_transform, Matrix4x4::identity());
    }

    #[test]
    fn light_is_32_bytes() {
        assert_eq!(core::mem::size_of::<DirectionalLight>(), 32);
        let light = DirectionalLight::default();
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&light));
        assert_eq!(&floats[4..8], &[0.0, 0.0, -1.0, 1.0]);
    }

    #[test]
    fn light_direction_normalizes() {
        let light = DirectionalLight { direction: Vector3::new(0.0, 3.0, -4.0), ..Default::default() };
        let n = light.normalized();
        assert!((n.direction.length() - 1.0).abs() < 1e-6);
        assert!((n.direction.y - 0.6).abs() < 1e-6 && (n.direction.z + 0.8).abs() < 1e-6);
        assert_eq!(n.intensity, light.intensity);

        let dark = DirectionalLight { direction: Vector3::zero(), ..Default::default() };
        assert_eq!(dark.normalized().direction, Vector3::zero());
    }

    // ── world-view-projection ─────────────────────────────────────────────

    #[test]
    fn wvp_applies_world_then_view_then_projection() {
        let world = sphere().to_matrix();
        let view = Camera::default().view_matrix();
        let proj = PerspectiveConfig::default().matrix();

        let v = Vector4::point(Vector3::new(0.5, -0.5, 0.25));
        let staged = ((v * world) * view) * proj;
        let direct = v * world_view_projection(&world, &view, &proj);
        for (a, b) in [(staged.x, direct.x), (staged.y, direct.y), (staged.z, direct.z), (staged.w, direct.w)] {
            assert!((a - b).abs() < 1e-4, "{staged:?} vs {direct:?}");
        }
    }

    #[test]
    fn build_produces_one_record_per_object() {
        let camera = Camera::default();
        let objects = [Transform::default(), sphere()];
        let frame = FrameMatrices::build(&camera, &objects).unwrap();

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.records()[0].world, Matrix4x4::identity());
        assert_eq!(frame.records()[1].world, sphere().to_matrix());

        let expected = world_view_projection(
            &sphere().to_matrix(),
            &camera.view_matrix(),
            &camera.projection_matrix(),
        );
        assert_near(&frame.records()[1].wvp, &expected, 1e-6);
    }

    #[test]
    fn bytes_cover_all_records() {
        let frame = FrameMatrices::build(&Camera::default(), &[sphere(), sphere(), sphere()]).unwrap();
        assert_eq!(frame.as_bytes().len(), 3 * 128);
    }

    #[test]
    fn rebuild_replaces_previous_records() {
        let camera = Camera::default();
        let mut frame = FrameMatrices::build(&camera, &[sphere(), sphere()]).unwrap();
        frame.rebuild(&camera, &[Transform::default()]).unwrap();
        assert_eq!(frame.len(), 1);

        frame.clear();
        assert!(frame.is_empty());
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[test]
    fn degenerate_camera_fails_and_keeps_previous_frame() {
        let mut frame = FrameMatrices::build(&Camera::default(), &[sphere()]).unwrap();
        let broken = Camera {
            transform: Transform { scale: Vector3::zero(), ..Transform::default() },
            ..Camera::default()
        };
        assert_eq!(frame.rebuild(&broken, &[sphere()]), Err(FrameError::DegenerateCamera));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn invalid_projection_is_rejected() {
        let camera = Camera {
            projection: Projection::Perspective(PerspectiveConfig { near: 5.0, far: 5.0, ..Default::default() }),
            ..Camera::default()
        };
        let err = FrameMatrices::build(&camera, &[sphere()]).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidProjection(ProjectionError::ClipPlanes { near: 5.0, far: 5.0 })
        );
    }

    // ── sprites ───────────────────────────────────────────────────────────

    #[test]
    fn sprite_at_origin_maps_to_top_left_of_ndc() {
        let m = sprite_matrix(&Transform::default(), &OrthographicConfig::default());
        let corner = Vector4::point(Vector3::zero()) * m;
        assert!((corner.x + 1.0).abs() < 1e-6 && (corner.y - 1.0).abs() < 1e-6, "{corner:?}");
    }

    #[test]
    fn sprite_translation_is_in_pixels() {
        let sprite = Transform::from_translation(Vector3::new(640.0, 360.0, 0.0));
        let m = sprite_matrix(&sprite, &OrthographicConfig::default());
        let center = Vector4::point(Vector3::zero()) * m;
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5, "{center:?}");
    }
}
