use glam::{Mat4, Vec3};

pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(3.0, 2.0, 10.0),
            target: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    pub color: Vec3,
    pub intensity: f32,
    /// `None` for ambient light.
    pub position: Option<Vec3>,
}

/// Orbit-style camera controls; the controls library owns the per-frame update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.01,
        }
    }
}

pub struct SceneConfig {
    pub camera: CameraConfig,
    pub ambient: LightConfig,
    pub directional: LightConfig,
    pub orbit: OrbitConfig,
    /// Texture URL loaded as the scene background.
    pub background: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            ambient: LightConfig {
                color: Vec3::ONE,
                intensity: 1.0,
                position: None,
            },
            directional: LightConfig {
                color: Vec3::ONE,
                intensity: 6.0,
                position: Some(Vec3::new(0.0, 2.0, 10.0)),
            },
            orbit: OrbitConfig::default(),
            background: Some("sky.jpg".to_string()),
        }
    }
}

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Perspective camera tracking the viewport aspect.
pub struct Camera {
    pub config: CameraConfig,
    aspect: f32,
}

impl Camera {
    pub fn new(config: CameraConfig, viewport: Viewport) -> Self {
        Self {
            config,
            aspect: viewport.aspect(),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.config.fov_y_degrees.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.config.position, self.config.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Per-frame tick driven by the host's animation callback.
#[derive(Default)]
pub struct FrameClock {
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    pub fn tick(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.frames += 1;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_aspect() {
        let mut cam = Camera::new(CameraConfig::default(), Viewport::new(800.0, 600.0));
        assert!((cam.aspect() - 4.0 / 3.0).abs() < 1e-6);
        cam.resize(Viewport::new(1920.0, 1080.0));
        assert!((cam.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_scene_defaults() {
        let scene = SceneConfig::default();
        assert_eq!(scene.background.as_deref(), Some("sky.jpg"));
        assert!(scene.orbit.enable_damping);
        assert_eq!(scene.orbit.damping_factor, 0.01);
        assert_eq!(scene.directional.intensity, 6.0);
        assert_eq!(scene.ambient.position, None);
    }

    #[test]
    fn test_zero_height_viewport() {
        assert_eq!(Viewport::new(640.0, 0.0).aspect(), 1.0);
    }

    #[test]
    fn test_origin_projects_inside_clip_volume() {
        let cam = Camera::new(CameraConfig::default(), Viewport::new(800.0, 600.0));
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "origin should be centred: {:?}", ndc);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_frame_clock_ignores_bad_dt() {
        let mut clock = FrameClock::default();
        clock.tick(0.016);
        clock.tick(f64::NAN);
        clock.tick(-1.0);
        assert_eq!(clock.frames(), 3);
        assert!((clock.elapsed() - 0.016).abs() < 1e-12);
    }
}
