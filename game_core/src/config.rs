use crate::{ConfigError, Params, Side};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration
///
/// Field dimensions are injected here rather than read from a display
/// surface, so the engine runs the same headless as it does in a browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub max_deflection: f32,
    pub speed_ramp_delay: f32,
    pub speed_ramp_step: f32,
    pub ai_step: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            max_deflection: Params::MAX_DEFLECTION,
            speed_ramp_delay: Params::SPEED_RAMP_DELAY,
            speed_ramp_step: Params::SPEED_RAMP_STEP,
            ai_step: Params::AI_STEP,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a field of the given size
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed_base", self.ball_speed_base),
            ("ball_speed_max", self.ball_speed_max),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let non_negative = [
            ("max_deflection", self.max_deflection),
            ("speed_ramp_delay", self.speed_ramp_delay),
            ("speed_ramp_step", self.speed_ramp_step),
            ("ai_step", self.ai_step),
            ("ai_dead_zone", self.ai_dead_zone),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_width || diameter >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                width: self.field_width,
                height: self.field_height,
            });
        }

        if self.ball_speed_max < self.ball_speed_base {
            return Err(ConfigError::SpeedRange {
                base: self.ball_speed_base,
                max: self.ball_speed_max,
            });
        }

        Ok(())
    }

    /// Get X of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Ai => self.field_width - self.paddle_width,
        }
    }

    /// Top edge that centers a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Clamp a paddle's top edge to the field
    ///
    /// The lower bound is applied first so the bottom bound wins if the two
    /// ever cross. Never panics, unlike `f32::clamp`.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(0.0).min(self.field_height - self.paddle_height)
    }
}
