//! Carousel slot layout and smoothed transitions between slots.
//!
//! Slot assignment is a pure function of an entity's rank relative to the
//! active entity, the entity count and the viewport aspect ratio.

use super::constants::*;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityTransform {
    pub position: Vec3,
    pub scale: f32,
    /// Rotation about +Y in radians.
    pub yaw: f32,
    /// Brightness multiplier; background entities are visually demoted.
    pub emphasis: f32,
}

impl EntityTransform {
    pub const CENTER: EntityTransform = EntityTransform {
        position: Vec3::ZERO,
        scale: 1.0,
        yaw: 0.0,
        emphasis: ACTIVE_EMPHASIS,
    };

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }

    pub fn lerp(&self, to: &EntityTransform, t: f32) -> EntityTransform {
        EntityTransform {
            position: self.position.lerp(to.position, t),
            scale: self.scale + (to.scale - self.scale) * t,
            yaw: self.yaw + (to.yaw - self.yaw) * t,
            emphasis: self.emphasis + (to.emphasis - self.emphasis) * t,
        }
    }
}

/// Slot for an entity `rank` places after the active one.
///
/// Rank 0 is the canonical centre. The first half of the remaining ranks go
/// to the right, the rest to the left (so rank `count - 1` is the nearest
/// left slot); each further tier on a side recedes and shrinks. Viewports
/// narrower than square pull the side slots inwards.
pub fn transform_for_rank(rank: usize, count: usize, aspect: f32) -> EntityTransform {
    let count = count.max(1);
    let rank = rank % count;
    if rank == 0 {
        return EntityTransform::CENTER;
    }
    let right = rank <= count / 2;
    let tier = if right { rank } else { count - rank };
    let side = if right { 1.0 } else { -1.0 };
    let steps = (tier - 1) as f32;
    let squeeze = if aspect.is_finite() {
        aspect.clamp(NARROW_ASPECT_MIN, 1.0)
    } else {
        1.0
    };
    EntityTransform {
        position: Vec3::new(
            side * (SIDE_SLOT_X + FAR_SLOT_STEP_X * steps) * squeeze,
            0.0,
            SIDE_SLOT_Z + FAR_SLOT_STEP_Z * steps,
        ),
        scale: SIDE_SLOT_SCALE * FAR_SLOT_SCALE_FALLOFF.powi(tier as i32 - 1),
        yaw: -side * SIDE_SLOT_YAW,
        emphasis: BACKGROUND_EMPHASIS,
    }
}

/// Target transforms for all entities given the active index.
pub fn stage_layout(active: usize, count: usize, aspect: f32) -> Vec<EntityTransform> {
    let count = count.max(1);
    (0..count)
        .map(|i| transform_for_rank((i + count - active % count) % count, count, aspect))
        .collect()
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Eased interpolation from one transform to another over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween {
    from: EntityTransform,
    to: EntityTransform,
    start_sec: f64,
    duration_sec: f64,
}

impl Tween {
    /// A tween already resting at `at`.
    pub fn resting(at: EntityTransform, duration_sec: f64) -> Self {
        Self {
            from: at,
            to: at,
            start_sec: 0.0,
            duration_sec,
        }
    }

    /// Head for `to`, starting from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: EntityTransform, now_sec: f64) {
        self.from = self.sample(now_sec);
        self.to = to;
        self.start_sec = now_sec;
    }

    pub fn sample(&self, now_sec: f64) -> EntityTransform {
        if self.is_settled(now_sec) {
            return self.to;
        }
        let t = smoothstep((now_sec - self.start_sec) / self.duration_sec);
        self.from.lerp(&self.to, t as f32)
    }

    #[inline]
    pub fn target(&self) -> EntityTransform {
        self.to
    }

    pub fn is_settled(&self, now_sec: f64) -> bool {
        self.duration_sec <= 0.0 || now_sec - self.start_sec >= self.duration_sec
    }
}
