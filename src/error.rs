use alloc::string::String;
use enough::StopReason;

/// Errors from BMP scaling. All of them abort the operation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScaleError {
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    #[error("source unreadable: {0}")]
    SourceUnreadable(String),

    #[error("destination unwritable: {0}")]
    DestinationUnwritable(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("source truncated: needed {needed} bytes at offset {offset}")]
    TruncatedSource { offset: u64, needed: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i64, height: i64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for ScaleError {
    fn from(r: StopReason) -> Self {
        ScaleError::Cancelled(r)
    }
}
