use super::constants::{
    CAMERA_BASE_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_SHRINK_DISTANCE,
};
use super::scroll::ScrollProgress;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Dolly along +Z that closes in on the ornament as the page scrolls.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub base_distance: f32,
    pub shrink: f32,
    distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CAMERA_BASE_DISTANCE, CAMERA_SHRINK_DISTANCE)
    }
}

impl CameraRig {
    pub fn new(base_distance: f32, shrink: f32) -> Self {
        Self {
            base_distance,
            shrink,
            distance: base_distance,
        }
    }

    #[inline]
    pub fn distance_for(&self, progress: ScrollProgress) -> f32 {
        self.base_distance - progress.get() * self.shrink
    }

    /// Recompute and remember the distance for a new scroll sample.
    pub fn update(&mut self, progress: ScrollProgress) -> f32 {
        self.distance = self.distance_for(progress);
        self.distance
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::looking_at_origin(self.eye(), aspect)
    }
}
