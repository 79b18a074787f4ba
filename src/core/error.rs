use thiserror::Error;

/// Errors raised while preparing or exporting a flight.
#[derive(Debug, Error)]
pub enum SimError {
    /// A form field did not contain a number.
    #[error("invalid {field}: '{value}'. Expected a number.")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("speed cannot be negative ({0} m/s)")]
    NegativeSpeed(f64),

    /// Flights start at or above the ground line.
    #[error("launch height cannot be below ground ({0} m)")]
    BelowGround(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame-by-frame playback would take more frames than the limit allows.
    #[error("playback needs {frames} frames, more than the limit of {limit}")]
    PlaybackTooLong { frames: f64, limit: u64 },

    #[error("plot error: {0}")]
    Plot(String),
}
