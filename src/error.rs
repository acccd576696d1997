use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The pixel-to-camera mapping divides by `width - 1` and `height - 1`.
    #[error("image must be at least 2x2, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
