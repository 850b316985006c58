//! Error Types
//!
//! Failures of backend calls and of page bootstrap.

use thiserror::Error;

/// A failed request against the storefront backend.
///
/// Every variant is terminal for the user action that triggered it; nothing
/// is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// The server answered 2xx with `success: false`
    #[error("{0}")]
    Application(String),

    /// The body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast.
    ///
    /// Application messages come from the backend and are shown verbatim;
    /// transport-level failures get a generic text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(msg) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Http(status) if *status == 403 => {
                "Tu sesión expiró, recarga la página".to_string()
            }
            _ => "No se pudo completar la operación".to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A failure to start the UI on the current page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window object")]
    MissingWindow,

    #[error("required element #{0} not found")]
    MissingElement(String),

    #[error("invalid page config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_message_passes_through() {
        let err = ApiError::Application("Sin existencias".to_string());
        assert_eq!(err.user_message(), "Sin existencias");
    }

    #[test]
    fn test_transport_errors_use_generic_message() {
        let generic = "No se pudo completar la operación";
        assert_eq!(ApiError::Network("offline".into()).user_message(), generic);
        assert_eq!(ApiError::Http(500).user_message(), generic);
        assert_eq!(ApiError::Decode("eof".into()).user_message(), generic);
        assert_eq!(ApiError::Application("  ".into()).user_message(), generic);
    }

    #[test]
    fn test_forbidden_hints_at_session() {
        assert!(ApiError::Http(403).user_message().contains("sesión"));
    }
}
