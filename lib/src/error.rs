//! The errors returned by the client operations

/// All the possible errors returned by the client and the API
///
/// The variants fall in three tiers: [`Error::Auth`], [`Error::NotFound`] and
/// everything else, which is considered a general failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credentials were rejected (401 or 403)
    #[error("authentication failed with status {status}: {message}")]
    Auth { status: u16, message: String },
    /// The referenced folder, key or project does not exist
    #[error("not found: {0}")]
    NotFound(String),
    /// Server side error with any other unsuccessful status
    #[error("request failed with status {status}: {message}")]
    Protocol { status: u16, message: String },
    /// Transport failure, including timeouts and refused connections
    #[error("network error")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to decode response")]
    SerdeJson(#[from] serde_json::Error),
    /// The server did not include a value that was requested
    #[error("the value of key {0:?} was not returned")]
    MissingValue(String),
    /// The arguments of the operation are not usable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Any error that is neither an authentication nor a not found error
    pub fn is_general(&self) -> bool {
        !self.is_auth() && !self.is_not_found()
    }

    /// Maps an unsuccessful status to its tier.
    pub(crate) fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Self::Auth {
                status: status.as_u16(),
                message,
            },
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Protocol {
                status: status.as_u16(),
                message,
            },
        }
    }
}
