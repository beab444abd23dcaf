use thiserror::Error;

/// Why a sample could not be made playable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The request itself failed (network, CORS, no window).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The server answered, but not with a success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The bytes arrived but the audio engine could not decode them.
    #[error("decode failed: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("playback failed: {0}")]
pub struct PlaybackError(pub String);

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale factor must be finite and non-negative, got {0}")]
    InvalidScale(f64),

    #[error("{name} must lie within [0, 1], got {value}")]
    VolumeOutOfRange { name: &'static str, value: f32 },

    #[error("min volume {min} exceeds max volume {max}")]
    InvertedVolumeBounds { min: f32, max: f32 },

    #[error("minimum sampling interval must be finite and non-negative, got {0}")]
    InvalidInterval(f64),

    #[error("unknown tuning preset {0:?}")]
    UnknownPreset(String),

    #[error("cannot parse {key} = {value:?}")]
    Unparseable { key: &'static str, value: String },
}
