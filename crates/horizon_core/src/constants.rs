// Simulation constants (screen-scaled units)
// World units map 1:1 to logical pixels of the working area.
// Mass is in solar masses for the body and in arbitrary units for particles.
// The integrator is frame-scaled: one draw tick is one unit of time,
// multiplied by the user's simulation speed.

/// Gravitational constant in simulation units
pub const G: f32 = 0.1;

/// Softening floor on d² so the radial force stays bounded near the body
pub const MIN_DISTANCE_SQ: f32 = 25.0;

/// Tangential acceleration per unit of spin (frame-dragging)
pub const SPIN_COEFFICIENT: f32 = 0.12;

/// Absorption radius as a multiple of the body radius
pub const EVENT_HORIZON_FACTOR: f32 = 1.8;

/// Life lost per tick at simulation speed 1.0
pub const LIFE_DECAY_RATE: f32 = 0.0008;

/// How far outside the working area a particle may drift before it is culled
pub const BOUNDS_MARGIN: f32 = 50.0;

/// Spawn points sit this far outside the working area edge
pub const SPAWN_EDGE_OFFSET: f32 = 10.0;

/// Replenishment kicks in below this fraction of the effective cap
pub const REPLENISH_THRESHOLD: f32 = 0.8;

/// Effective particle cap never drops below this
pub const MIN_EFFECTIVE_CAP: u32 = 100;

/// Upper bound accepted for the configured particle cap
pub const MAX_PARTICLE_CAP: u32 = 5_000;

/// Weight of the previous average in the frame-time EMA
pub const FRAME_EMA_DECAY: f64 = 0.9;

/// Weight of the newest sample in the frame-time EMA
pub const FRAME_EMA_SAMPLE_WEIGHT: f64 = 0.1;

/// Initial smoothed frame time (one 60 Hz frame)
pub const INITIAL_FRAME_TIME_MS: f64 = 16.7;

/// Smoothed frame time above which the tier steps down
pub const TIER_DOWN_MS: f64 = 22.0;

/// Smoothed frame time below which the tier steps up
pub const TIER_UP_MS: f64 = 15.0;

/// Smallest frame time accepted from the host
pub const MIN_FRAME_MS: f64 = 0.1;

/// Minimum display scale change that triggers a cache rebuild
pub const DISPLAY_SCALE_EPSILON: f32 = 0.05;

/// Keyboard nudge step for the body
pub const NUDGE_STEP: f32 = 10.0;
