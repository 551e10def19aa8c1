use thiserror::Error;

/// Result type for zone operations
pub type Result<T> = std::result::Result<T, ZoneError>;

/// Errors that can occur when interacting with the receiver
///
/// The controller never constructs these itself; they originate in the
/// [`DeviceControl`](crate::DeviceControl) implementation and are propagated
/// to the caller unchanged.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// Underlying device communication failure
    #[error("device communication failed: {0}")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connection was closed unexpectedly
    #[error("connection closed")]
    ConnectionClosed,

    /// Request timed out waiting for the receiver to acknowledge
    #[error("request timeout")]
    Timeout,

    /// Invalid or unexpected response from the receiver
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ZoneError {
    /// Wrap an arbitrary transport error as a device-communication failure
    pub fn device(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ZoneError::Device(Box::new(err))
    }
}
