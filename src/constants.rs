/// Frame, audio and interaction tuning constants.
///
/// These express intended behavior (durations, clamp limits, mix levels)
/// and keep magic numbers out of the wiring code.

// Transient highlight lifetime after a note is struck (seconds)
pub const HIGHLIGHT_SEC: f64 = 0.15;

// Carousel transition length (seconds)
pub const LAYOUT_TWEEN_SEC: f64 = 0.6;

// Velocity humanisation: +/- this much around the patch velocity
pub const VELOCITY_JITTER: f32 = 0.08;
pub const DEFAULT_SEED: u64 = 42;

// Pointer travel (CSS px) beyond which a press counts as an orbit drag, not a click
pub const DRAG_CLICK_SLOP_PX: f32 = 4.0;

// Master bus
pub const MASTER_GAIN: f32 = 0.6;

// Reverb ("grand hall")
pub const REVERB_DECAY_SEC: f32 = 4.0;
pub const REVERB_WET: f32 = 0.4;

// Envelope scheduling
pub const NOTE_START_LEAD_SEC: f64 = 0.005; // schedule slightly ahead of currentTime
pub const NOTE_STOP_PAD_SEC: f64 = 0.05; // keep the source alive past the release tail

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_THRESHOLD: f32 = 0.75;
pub const EXPOSURE: f32 = 1.1;

// Scene lighting
pub const AMBIENT_LIGHT: f32 = 0.28;
pub const LIGHT_DIR: [f32; 3] = [0.45, 1.0, 0.55];

// Upper bound for instanced parts drawn per frame
pub const MAX_INSTANCES: usize = 512;
