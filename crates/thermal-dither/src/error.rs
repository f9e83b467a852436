//! Error types for the processing pipeline.

/// Errors that can occur while turning an image into a monochrome grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("Unsupported dither method: {0}")]
    UnsupportedDitherMethod(String),

    #[error("Parameter {name} out of range: {value} (expected {min}..={max})")]
    ParameterOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Result type alias for processing operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
