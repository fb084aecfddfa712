use thiserror::Error;

/// Reasons a `Config` cannot drive a game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("ball diameter {diameter} does not fit in field of {width}x{height}")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },

    #[error("max ball speed {max} is below base speed {base}")]
    SpeedRange { base: f32, max: f32 },
}
