/// Error types for the e-Boekhouden SDK.
///
/// Separates transport failures (which the call executor retries) from
/// service-reported business errors, missing payloads, and authentication
/// failures (which surface immediately).
use thiserror::Error;

/// The primary error type for the e-Boekhouden SDK.
#[derive(Error, Debug)]
pub enum EboekhoudenError {
    /// Network or protocol failure from the underlying SOAP call.
    /// The only error class the retry loop acts on.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service executed the call but reported a business error via the
    /// ErrorMsg descriptor embedded in the result envelope.
    #[error("Error [executing: {operation}]:{code}: {description}")]
    RemoteOperation {
        operation: String,
        code: String,
        description: String,
    },

    /// The call succeeded at transport level but returned no payload.
    #[error("No result returned for method {operation}")]
    MissingResult { operation: String },

    /// Login succeeded at transport level but neither expected response
    /// shape yielded a session token.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The response body could not be parsed as a SOAP envelope, or a typed
    /// result failed to decode.
    #[error("XML error: {0}")]
    Xml(String),

    /// The configured service URL is not a valid URL.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl EboekhoudenError {
    /// Returns true for transport-class failures, the class the call
    /// executor retries up to the configured ceiling.
    pub fn is_transport(&self) -> bool {
        matches!(self, EboekhoudenError::Transport(_))
    }

    /// The embedded error code for service-reported failures, e.g. "EB001".
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            EboekhoudenError::RemoteOperation { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EboekhoudenError {
    fn from(err: reqwest::Error) -> Self {
        EboekhoudenError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for EboekhoudenError {
    fn from(err: url::ParseError) -> Self {
        EboekhoudenError::InvalidUrl(err.to_string())
    }
}

impl From<quick_xml::Error> for EboekhoudenError {
    fn from(err: quick_xml::Error) -> Self {
        EboekhoudenError::Xml(err.to_string())
    }
}
