use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up the sketchpad.
///
/// Stroke operations themselves never fail: undoing an empty history or
/// extending a stroke that isn't there is a no-op, not an error.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The host could not hand us anything to draw on. Fatal.
    #[error("Drawing surface not available: {0}")]
    SurfaceUnavailable(String),

    #[error("Marker thickness must be at least 1 pixel")]
    ZeroThickness,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid colour {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for sketchpad setup
pub type SketchResult<T> = Result<T, SketchError>;
