use glam::Vec3;

// Shared scene/layout constants used by the stage and the web frontend.

// Camera: studio framing, looking down at the keyboard
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 8.0, 12.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit limits
pub const ORBIT_RADIANS_PER_PX: f32 = 0.006;
pub const ORBIT_PITCH_MIN: f32 = 0.05;
pub const ORBIT_PITCH_MAX: f32 = 1.45;
pub const ORBIT_DISTANCE_MIN: f32 = 6.0;
pub const ORBIT_DISTANCE_MAX: f32 = 30.0;
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.001;

// Carousel slot presets
pub const SIDE_SLOT_X: f32 = 5.2; // lateral offset of the nearest background slots
pub const SIDE_SLOT_Z: f32 = -4.0; // depth of the nearest background slots
pub const SIDE_SLOT_SCALE: f32 = 0.55;
pub const SIDE_SLOT_YAW: f32 = 0.5; // background instruments turn towards centre
pub const FAR_SLOT_STEP_X: f32 = 1.6; // extra spread per additional rank tier
pub const FAR_SLOT_STEP_Z: f32 = -3.0;
pub const FAR_SLOT_SCALE_FALLOFF: f32 = 0.8;
pub const NARROW_ASPECT_MIN: f32 = 0.5; // narrowest aspect used to squeeze side slots

// Visual emphasis
pub const ACTIVE_EMPHASIS: f32 = 1.0;
pub const BACKGROUND_EMPHASIS: f32 = 0.45;

// Key press feedback
pub const PRESS_DEPTH: f32 = 0.06; // how far a struck part dips at full highlight
pub const PRESS_GLOW: f32 = 0.6;

// Scene colors
pub const BACKGROUND_RGB: [f32; 3] = [0.008, 0.008, 0.008]; // #020202
pub const FOG_DENSITY: f32 = 0.03;
