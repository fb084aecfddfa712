/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 6.0; // units per tick
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4; // 45° at paddle edge

    // Difficulty ramp
    pub const SPEED_RAMP_DELAY: f32 = 30.0; // seconds of match time
    pub const SPEED_RAMP_STEP: f32 = 0.02; // added per tick, not per second

    // AI
    pub const AI_STEP: f32 = 5.0; // units per tick
    pub const AI_DEAD_ZONE: f32 = 20.0;
}
