use thiserror::Error;

/// Fatal errors while bringing the app up
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("2D rendering context could not be initialized")]
    MissingRenderContext,

    #[error("canvas element `{0}` not found")]
    CanvasNotFound(String),

    #[error("platform error: {0}")]
    Platform(String),
}
