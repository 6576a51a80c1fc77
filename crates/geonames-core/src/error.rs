// crates/geonames-core/src/error.rs

//! Error types for geonames service operations.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoNamesError>;

/// Error returned by geonames service operations.
///
/// Two of the variants reject bad input before any network traffic happens
/// ([`InvalidArgument`](GeoNamesError::InvalidArgument)); the rest report a
/// failed round trip. A request that completes but matches zero records is
/// not an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoNamesError {
    /// The caller passed input the service would reject (zero id, empty
    /// search term, unusable base URL). Raised before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP round trip itself failed (unreachable host, connection
    /// reset, timeout).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("service returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body could not be read as XML.
    #[error("malformed response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The response parsed as XML but lacks the expected structure.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl GeoNamesError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeoNamesError::InvalidArgument(msg.into())
    }

    pub(crate) fn unexpected(msg: impl Into<String>) -> Self {
        GeoNamesError::UnexpectedResponse(msg.into())
    }

    /// True for errors the caller can fix by correcting the input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GeoNamesError::InvalidArgument(_))
    }

    /// True for failures of the remote service or the transport to it.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            GeoNamesError::Http(_)
                | GeoNamesError::Status { .. }
                | GeoNamesError::Xml(_)
                | GeoNamesError::UnexpectedResponse(_)
        )
    }
}
