//! Camera, pointer rays and nearest-hit picking against the scene registry.

use super::constants::*;
use super::layout::EntityTransform;
use super::scene::{Aabb, PartRef, SceneRegistry};
use glam::{Mat4, Vec2, Vec3, Vec4};

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
    pub fn studio(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both in `[-1, 1]` over the viewport).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Where a pointer ray first meets the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub part: PartRef,
    /// Distance along the world ray.
    pub t: f32,
}

/// Map a position inside a `width` x `height` box (origin top-left, y down)
/// to normalized device coordinates. Degenerate boxes yield `None`.
///
/// Positions outside the box are returned as-is (|x| or |y| > 1); callers
/// treat those as off-canvas.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0))
}

#[inline]
pub fn ndc_in_viewport(ndc: Vec2) -> bool {
    ndc.x.is_finite() && ndc.y.is_finite() && ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
}

/// Slab test. Returns the entry distance `t >= 0` (0 when the origin is
/// inside the box). `dir` need not be normalized; `t` is in units of `dir`.
pub fn ray_aabb(origin: Vec3, dir: Vec3, bounds: &Aabb) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);
        if d.abs() < 1e-9 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Nearest part hit by `ray` across all entities placed at `transforms`.
///
/// The ray is carried into each entity's local space without renormalizing,
/// so distances stay comparable across entities.
pub fn hit_test(registry: &SceneRegistry, transforms: &[EntityTransform], ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (ei, (entity, xf)) in registry.iter().zip(transforms.iter()).enumerate() {
        let inv = xf.matrix().inverse();
        let local_origin = inv.transform_point3(ray.origin);
        let local_dir = inv.transform_vector3(ray.dir);
        if ray_aabb(local_origin, local_dir, &entity.bounds()).is_none() {
            continue;
        }
        for (pi, part) in entity.parts.iter().enumerate() {
            if let Some(t) = ray_aabb(local_origin, local_dir, &part.bounds) {
                match best {
                    Some(b) if t >= b.t => {}
                    _ => {
                        best = Some(Hit {
                            part: PartRef::new(ei, pi),
                            t,
                        })
                    }
                }
            }
        }
    }
    best
}
