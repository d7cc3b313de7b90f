use super::constants::*;
use glam::Vec3;

/// Orbit controls around a fixed target: drag to rotate, wheel to zoom.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl OrbitCamera {
    /// Orbit that initially reproduces the `eye -> target` framing.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-3);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            yaw,
            pitch,
            distance,
        }
    }

    pub fn studio() -> Self {
        Self::from_eye(CAMERA_EYE, CAMERA_TARGET)
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotate by a pointer drag measured in CSS pixels.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        if !dx_px.is_finite() || !dy_px.is_finite() {
            return;
        }
        self.yaw -= dx_px * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy_px * ORBIT_RADIANS_PER_PX).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
    }

    /// Zoom by a wheel delta (positive moves away).
    pub fn zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }
        self.distance = (self.distance * (wheel_delta * ZOOM_PER_WHEEL_UNIT).exp())
            .clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX);
    }
}
