use glam::{IVec2, Mat4, Vec2, Vec3};

use crate::input::{ActionMap, Direction, InputState, held_direction};

/// Camera uniform uploaded to the GPU. Holds the combined view-projection matrix.
///
/// Column-major, matching WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Plain orthographic projection (no camera transform).
    /// Maps pixel coords [0..w] × [0..h] directly to clip space.
    /// Used for the screen-space layer (background, debug strip).
    pub fn identity_ortho(width: f32, height: f32) -> Self {
        let sx = 2.0 / width;
        let sy = -2.0 / height;
        Self {
            view_proj: [
                [sx,   0.0,  0.0, 0.0], // col0
                [0.0,  sy,   0.0, 0.0], // col1
                [0.0,  0.0,  1.0, 0.0], // col2
                [-1.0, 1.0,  0.0, 1.0], // col3
            ],
        }
    }

    /// Transform a pixel-space point to normalised device coordinates.
    pub fn project(&self, point: Vec2) -> Vec2 {
        let m = Mat4::from_cols_array_2d(&self.view_proj);
        let p = m.project_point3(point.extend(0.0));
        Vec2::new(p.x, p.y)
    }
}

// ── CameraState ─────────────────────────────────────────────────────────────

/// Logical camera position, advanced once per update tick from input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CameraState {
    /// World-space pixel position driven by the arrow keys.
    pub position: IVec2,
}

impl CameraState {
    /// Distance from `position` to the point the camera looks at.
    pub const TARGET_OFFSET: IVec2 = IVec2::new(20, 20);

    pub fn new(x: i32, y: i32) -> Self {
        Self { position: IVec2::new(x, y) }
    }

    /// Apply at most one movement step.
    pub fn step(self, direction: Option<Direction>) -> Self {
        match direction {
            Some(d) => Self { position: self.position + d.delta() },
            None => self,
        }
    }

    /// One frame of movement from whatever is held in `input`.
    pub fn update(self, bindings: &ActionMap<Direction>, input: &InputState) -> Self {
        self.step(held_direction(bindings, input))
    }

    /// World point the camera is centred on.
    pub fn target(&self) -> Vec2 {
        (self.position + Self::TARGET_OFFSET).as_vec2()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

// ── Camera2D ────────────────────────────────────────────────────────────────

/// 2D camera: the world point `target` is drawn at the screen point `offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera2D {
    /// Screen-space pixel position the target maps to (usually the window centre).
    pub offset: Vec2,
    /// World-space pixel position the camera looks at.
    pub target: Vec2,
    /// Rotation in radians around the target.
    pub rotation: f32,
    /// Zoom level (1.0 = 1:1, >1 zooms in, <1 zooms out).
    pub zoom: f32,
}

impl Camera2D {
    /// Camera centred on a `width × height` window, following `state`.
    pub fn centered(width: u32, height: u32, state: &CameraState) -> Self {
        Self {
            offset: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            target: state.target(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }

    /// Re-point the camera at `state`.  Called every frame whether or not
    /// the state moved.
    pub fn follow(&mut self, state: &CameraState) {
        self.target = state.target();
    }

    /// World-to-screen transform in pixel space:
    /// `screen = offset + rotate(zoom * (world - target))`.
    pub fn world_to_screen(&self) -> Mat4 {
        let z = self.zoom.max(0.01);
        Mat4::from_translation(self.offset.extend(0.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_scale(Vec3::new(z, z, 1.0))
            * Mat4::from_translation((-self.target).extend(0.0))
    }

    /// Build the GPU-ready `CameraUniform` for the given viewport dimensions.
    pub fn build_view_proj(&self, width: f32, height: f32) -> CameraUniform {
        let ortho = Mat4::from_cols_array_2d(&CameraUniform::identity_ortho(width, height).view_proj);
        CameraUniform {
            view_proj: (ortho * self.world_to_screen()).to_cols_array_2d(),
        }
    }
}
