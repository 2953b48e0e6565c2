/// Constants for terrain generation and movement
/// Hex geometry
pub const SQRT_3: f32 = 1.732_050_8;
pub const HEX_WIDTH_FACTOR: f32 = 1.5;

/// Noise field defaults
pub const DEFAULT_NOISE_AMPLITUDE: f32 = 5.0;
pub const DEFAULT_NOISE_PERSISTENCE: f32 = 0.25;
pub const DEFAULT_NOISE_OCTAVES: u32 = 8;
pub const DEFAULT_NOISE_LEVELS: u32 = 5;

/// Elevation shaping
pub const LOGARITHMIC_CLAMP_THRESHOLD: f32 = 1.0;
pub const LOGARITHMIC_CLAMP_INTENSITY: f32 = 1.0;
pub const LOGISTIC_GROWTH_RATE: f32 = 5.0;
pub const SQUARED_PRESET_FACTOR: f32 = 2.0;
pub const HALF_SPHERE_INTENSITY: f32 = 1.0;
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Erosion simulation
pub const MIN_WATER_THRESHOLD: f32 = 1e-3;
pub const VELOCITY_ELEVATION_WEIGHT: f32 = 0.95;
pub const VELOCITY_PROXIMITY_WEIGHT: f32 = 0.05;
pub const VELOCITY_PROXIMITY_TERM: f32 = 0.25;
pub const DEFAULT_DEPOSIT_PROBABILITY: f32 = 0.2;
pub const DEFAULT_DEPOSIT_RADIUS: u32 = 4;

/// Pathfinding
pub const UP_ELEVATION_PER_POINT: f32 = 0.6;
pub const DOWN_ELEVATION_PER_POINT: f32 = 0.7;
pub const HEURISTIC_DEPTH_INFLUENCE: f32 = 1e-3;
pub const DIAGONAL_STEP_COST: f32 = std::f32::consts::SQRT_2;
pub const LONG_DISTANCE_MAX_DEPTH: u32 = 50;
pub const LONG_DISTANCE_MAX_COST: f32 = 500.0;
pub const DEFAULT_ACTION_POINTS: f32 = 5.0;
