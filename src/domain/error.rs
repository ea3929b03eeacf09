use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Transport error{}: {message}", status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Upstream format error: {message}")]
    UpstreamFormat { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Transport failure where no HTTP status was received (connect error,
    /// timeout, body read failure).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Transport failure carrying the upstream HTTP status.
    pub fn transport_status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn upstream_format(message: impl Into<String>) -> Self {
        Self::UpstreamFormat {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
