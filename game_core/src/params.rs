use glam::Vec3;

/// Game tuning parameters for cornhole
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Launch
    pub const LAUNCH_ORIGIN: Vec3 = Vec3::new(0.0, 10.0, 0.0);
    pub const ANGLE_LIMIT: f32 = 0.73; // radians either side of straight ahead
    pub const ANGLE_INITIAL: f32 = 0.0;
    pub const POWER_MIN: f32 = 18.0;
    pub const POWER_MAX: f32 = 38.0;
    pub const POWER_INITIAL: f32 = 24.0;
    pub const VELOCITY_Y_OFFSET: f32 = 10.0; // vy = power - offset

    // Physics
    pub const GRAVITY: Vec3 = Vec3::new(0.0, -32.17, 0.0); // ft/s^2
    pub const FLOOR_Y: f32 = 0.0;
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    // Aim preview
    pub const PREVIEW_STEP: f32 = 0.05;
    pub const PREVIEW_MAX_SAMPLES: usize = 200;

    // Scoring
    pub const HOLE_RADIUS: f32 = 1.0;
    pub const HOLE_BAND_MIN_Y: f32 = 0.8;
    pub const HOLE_BAND_MAX_Y: f32 = 1.5;
    pub const HOLE_POINTS: u32 = 3;
    pub const BOARD_POINTS: u32 = 1;

    // Round
    pub const ROUND_LENGTH: f32 = 60.0;

    // Target placement draws
    pub const TARGET_X_MIN: i32 = -10;
    pub const TARGET_X_MAX: i32 = 10;
    pub const TARGET_DEPTH_MIN: i32 = 18;
    pub const TARGET_DEPTH_MAX: i32 = 30;
    /// Depth used instead of the draw when the board sits on either horizontal bound
    pub const TARGET_EDGE_DEPTH: f32 = 18.0;

    // Board template
    pub const BOARD_BASE_Y: f32 = 0.6;
    pub const BOARD_TILT: f32 = 0.2; // back end raised
    pub const BOARD_YAW_PER_UNIT: f32 = -0.04; // yaw = k * x
    pub const BOARD_CELL_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.25, 1.0);
    /// 2 x 3 lattice of cell centres in board space, front row first.
    /// The last slot is left open for the hole.
    pub const BOARD_LATTICE: [[f32; 2]; 6] = [
        [-1.0, 2.0],
        [1.0, 2.0],
        [-1.0, 0.0],
        [1.0, 0.0],
        [-1.0, -2.0],
        [1.0, -2.0],
    ];
    pub const BOARD_HOLE_SLOT: usize = 5;

    // Hole calibration: hole_x = x + a + b * x, hole_z = -depth + c + d * x
    pub const HOLE_Y: f32 = 1.242;
    pub const HOLE_X_LEFT: [f32; 2] = [1.012, 0.083];
    pub const HOLE_X_RIGHT: [f32; 2] = [1.016, 0.067];
    pub const HOLE_Z_LEFT: [f32; 2] = [-1.946, 0.022];
    pub const HOLE_Z_RIGHT: [f32; 2] = [-1.931, 0.054];

    // Hole disc yaw correction on top of the board yaw, per unit of x
    pub const HOLE_YAW_LEFT: f32 = 0.011;
    pub const HOLE_YAW_RIGHT: f32 = 0.014;
    pub const HOLE_FAR_DEPTH: f32 = 28.0;
    pub const HOLE_YAW_FAR: f32 = 0.0;
}
