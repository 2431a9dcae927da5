/// Scene setup errors.
///
/// Only configuration and startup can fail. Once a scene is running, frame
/// updates and draw calls are infallible.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The drawing surface has no usable area.
    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: f64, height: f64 },

    /// A cluster config has a bad radius or velocity.
    #[error("invalid cluster: {0}")]
    InvalidCluster(String),

    /// The ship size is not a positive finite number.
    #[error("invalid ship: {0}")]
    InvalidShip(String),
}

/// Type alias for Results using SceneError
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_names_dimensions() {
        let err = SceneError::SurfaceUnavailable {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(err.to_string(), "drawing surface unavailable (0x600)");
    }

    #[test]
    fn cluster_error_carries_reason() {
        let err = SceneError::InvalidCluster("radius must be positive".into());
        assert_eq!(err.to_string(), "invalid cluster: radius must be positive");
    }
}
