//! Damped orbit camera.
//!
//! Mouse drags orbit around a fixed look target and the wheel zooms. Every
//! input moves a goal value; the actual pose approaches its goals with
//! exponential damping each frame, so the camera glides the way the rest of
//! the scene does.

use garland_core::Vec3;

/// Radians of yaw and pitch per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// World units of radius per scroll line.
const ZOOM_STEP: f32 = 1.0;
/// Fraction of the remaining distance closed per frame at 60 fps.
const DAMPING: f32 = 0.05;
/// Keeps the camera just above the floor plane.
const MIN_PITCH: f32 = 0.02;
/// Stops short of the zenith singularity.
const MAX_PITCH: f32 = 1.5;
const MIN_RADIUS: f32 = 8.0;
const MAX_RADIUS: f32 = 25.0;

/// Vertical field of view in radians.
const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Orbit camera state. Angles in radians, pitch measured up from the
/// horizontal plane through the target.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_radius: f32,
}

impl OrbitCamera {
    /// Creates a camera at the reference viewing pose, orbiting `target`.
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 0.26,
            radius: 15.5,
            goal_yaw: 0.0,
            goal_pitch: 0.26,
            goal_radius: 15.5,
        }
    }

    /// Applies a drag of `(dx, dy)` pixels. Dragging up raises the camera.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * ORBIT_SENSITIVITY;
        self.goal_pitch = (self.goal_pitch - dy * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Applies `lines` of scroll. Positive scroll moves in.
    pub fn zoom(&mut self, lines: f32) {
        self.goal_radius = (self.goal_radius - lines * ZOOM_STEP).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Glides the pose toward its goals. `delta` is the frame time in
    /// seconds; the damping fraction is frame-rate compensated.
    pub fn update(&mut self, delta: f32) {
        let blend = 1.0 - (1.0 - DAMPING).powf(delta.max(0.0) * 60.0);
        self.yaw += (self.goal_yaw - self.yaw) * blend;
        self.pitch += (self.goal_pitch - self.pitch) * blend;
        self.radius += (self.goal_radius - self.radius) * blend;
    }

    /// Camera position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.target.x + self.radius * cos_pitch * sin_yaw,
            self.target.y + self.radius * sin_pitch,
            self.target.z + self.radius * cos_pitch * cos_yaw,
        )
    }

    /// View matrix, column-major.
    #[must_use]
    pub fn view(&self) -> [[f32; 4]; 4] {
        look_at(self.eye(), self.target)
    }

    /// Projection matrix for the current window aspect, column-major.
    /// Depth maps to `[0, 1]`.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> [[f32; 4]; 4] {
        let f = 1.0 / (FOV_Y / 2.0).tan();
        let a = FAR / (NEAR - FAR);
        let b = (NEAR * FAR) / (NEAR - FAR);
        [
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, a, -1.0],
            [0.0, 0.0, b, 0.0],
        ]
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 4.0, 0.0))
    }
}

fn normalize(v: Vec3) -> Vec3 {
    let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    if len > 1e-6 {
        Vec3::new(v.x / len, v.y / len, v.z / len)
    } else {
        Vec3::new(0.0, 0.0, 0.0)
    }
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

fn look_at(eye: Vec3, target: Vec3) -> [[f32; 4]; 4] {
    let up = Vec3::new(0.0, 1.0, 0.0);
    let forward = normalize(Vec3::new(
        target.x - eye.x,
        target.y - eye.y,
        target.z - eye.z,
    ));
    let right = normalize(cross(forward, up));
    let true_up = cross(right, forward);
    [
        [right.x, true_up.x, -forward.x, 0.0],
        [right.y, true_up.y, -forward.y, 0.0],
        [right.z, true_up.z, -forward.z, 0.0],
        [-dot(right, eye), -dot(true_up, eye), dot(forward, eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(m: [[f32; 4]; 4], v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        for (k, column) in m.iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                out[row] += value * v[k];
            }
        }
        out
    }

    #[test]
    fn test_view_sends_eye_to_origin() {
        let camera = OrbitCamera::default();
        let eye = camera.eye();
        let mapped = transform(camera.view(), [eye.x, eye.y, eye.z, 1.0]);
        for component in &mapped[..3] {
            assert!(component.abs() < 1e-4);
        }
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let camera = OrbitCamera::default();
        let t = camera.target;
        let mapped = transform(camera.view(), [t.x, t.y, t.z, 1.0]);
        assert!(mapped[0].abs() < 1e-4);
        assert!(mapped[1].abs() < 1e-4);
        assert!(mapped[2] < 0.0, "target must sit in front of the camera");
        assert!((-mapped[2] - camera.radius).abs() < 1e-3);
    }

    #[test]
    fn test_projection_depth_range() {
        let camera = OrbitCamera::default();
        let proj = camera.projection(16.0 / 9.0);

        let near_clip = transform(proj, [0.0, 0.0, -NEAR, 1.0]);
        assert!((near_clip[2] / near_clip[3]).abs() < 1e-5);

        let far_clip = transform(proj, [0.0, 0.0, -FAR, 1.0]);
        assert!((far_clip[2] / far_clip[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_goals_respect_clamps() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 1e6);
        camera.zoom(1e6);
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!(camera.pitch >= MIN_PITCH - 1e-4);
        assert!(camera.radius >= MIN_RADIUS - 1e-3);

        camera.orbit(0.0, -1e6);
        camera.zoom(-1e6);
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!(camera.pitch <= MAX_PITCH + 1e-4);
        assert!(camera.radius <= MAX_RADIUS + 1e-3);
    }

    #[test]
    fn test_damping_converges_on_goal() {
        let mut camera = OrbitCamera::default();
        camera.orbit(120.0, 0.0);
        let goal = camera.goal_yaw;
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!((camera.yaw - goal).abs() < 1e-3);
    }
}
