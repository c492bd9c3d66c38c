use tessera_engine::frame::sprite_matrix;
use tessera_engine::{
    Camera, DirectionalLight, FrameError, FrameMatrices, Material, OrthographicConfig, PerspectiveConfig, Projection,
};
use tessera_math::{Matrix4x4, Transform, Vector3, Vector4};

/// Viewport the demo scene is laid out for.
pub const VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// Y spin applied to the sphere each frame, radians.
const SPIN_PER_FRAME: f32 = 0.01;

/// Host-side stand-ins for the GPU constant buffers the renderer would map.
#[derive(Debug, Default)]
pub struct ConstantBuffers {
    pub objects: Vec<u8>,
    pub sprite: Vec<u8>,
    pub sphere_material: Vec<u8>,
    pub sprite_material: Vec<u8>,
    pub light: Vec<u8>,
}

impl ConstantBuffers {
    fn upload(dst: &mut Vec<u8>, bytes: &[u8]) {
        dst.clear();
        dst.extend_from_slice(bytes);
    }

    /// Total bytes currently staged across all buffers.
    pub fn total_len(&self) -> usize {
        self.objects.len() + self.sprite.len() + self.sphere_material.len() + self.sprite_material.len() + self.light.len()
    }
}

/// A lit sphere seen through a perspective camera, plus a screen-space sprite.
#[derive(Debug)]
pub struct DemoScene {
    pub camera: Camera,
    pub sphere: Transform,
    pub sprite: Transform,
    pub sprite_uv: Transform,
    pub screen: OrthographicConfig,
    pub sphere_material: Material,
    pub sprite_material: Material,
    pub light: DirectionalLight,
    frame: FrameMatrices,
}

impl Default for DemoScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoScene {
    pub fn new() -> Self {
        let (width, height) = VIEWPORT;
        Self {
            camera: Camera::new(
                Transform::from_translation(Vector3::new(0.0, 0.0, -10.0)),
                Projection::Perspective(PerspectiveConfig::for_viewport(width, height)),
            ),
            sphere: Transform::default(),
            sprite: Transform::default(),
            sprite_uv: Transform::default(),
            screen: OrthographicConfig::screen(width, height),
            sphere_material: Material::default(),
            sprite_material: Material::unlit(Vector4::new(1.0, 1.0, 1.0, 1.0)),
            light: DirectionalLight::default(),
            frame: FrameMatrices::new(),
        }
    }

    /// Advances the animation by one frame.
    pub fn update(&mut self) {
        self.sphere.rotate.y += SPIN_PER_FRAME;
    }

    /// Assembles this frame's matrices and copies them into `buffers`.
    pub fn render(&mut self, buffers: &mut ConstantBuffers) -> Result<(), FrameError> {
        self.frame.rebuild(&self.camera, &[self.sphere])?;
        ConstantBuffers::upload(&mut buffers.objects, self.frame.as_bytes());

        let sprite = sprite_matrix(&self.sprite, &self.screen);
        ConstantBuffers::upload(&mut buffers.sprite, sprite.as_bytes());

        self.sprite_material = self.sprite_material.with_uv_transform(&self.sprite_uv);
        ConstantBuffers::upload(&mut buffers.sphere_material, self.sphere_material.as_bytes());
        ConstantBuffers::upload(&mut buffers.sprite_material, self.sprite_material.as_bytes());

        self.light = self.light.normalized();
        ConstantBuffers::upload(&mut buffers.light, self.light.as_bytes());
        Ok(())
    }

    /// The sphere's most recent world-view-projection matrix.
    pub fn sphere_wvp(&self) -> Option<Matrix4x4> {
        self.frame.records().first().map(|r| r.wvp)
    }
}
