//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds per tick.
pub const TICK_MILLIS: u64 = 1000 / TICK_RATE as u64;

// --- Control points ---

/// Range within which a unit contests a control point.
pub const CAPTURE_RADIUS: f64 = 384.0;

/// Radius of fog-of-war cleared by a held control point.
pub const VIEW_RADIUS: f64 = 500.0;

/// Capture progress added per tick per contesting unit.
pub const DEFAULT_CAPTURE_RATE: f64 = 0.25;

/// Upper bound of the capture accumulator; reaching it flips ownership.
pub const CAPTURE_COMPLETE: f64 = 100.0;

/// Tint applied to unowned points.
pub const NEUTRAL_TINT: u32 = 0xFF_FF_FF;

// --- Unit generation ---

/// Period of the unit generation timer (milliseconds).
pub const SPAWN_INTERVAL_MS: u64 = 5000;

/// Unit type requested by the generation timer.
pub const SPAWN_UNIT_TYPE: &str = "Ship";

/// Offset of generated units from the point center.
pub const SPAWN_OFFSET_X: f64 = 0.0;
pub const SPAWN_OFFSET_Y: f64 = 40.0;

// --- Cosmetic rotation ---

/// Period of the ring and halo rotation timers (milliseconds).
pub const ROTATION_INTERVAL_MS: u64 = 100;

/// Ring rotation per firing (degrees).
pub const RING_ROTATION_STEP: f64 = -0.5;

/// Halo rotation per firing (degrees).
pub const HALO_ROTATION_STEP: f64 = 0.05;

// --- Map ---

/// Default map dimensions.
pub const MAP_WIDTH: f64 = 4000.0;
pub const MAP_HEIGHT: f64 = 4000.0;
