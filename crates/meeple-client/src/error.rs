use std::fmt;

/// Result type for meeple-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure
    Http(reqwest::Error),

    /// Response body did not match the expected XML schema
    Xml(quick_xml::DeError),

    /// The service rejected the credentials, or a write was attempted
    /// without a logged-in session
    AuthRequired,

    /// The service acknowledged the request but refused to apply it
    Rejected(String),

    /// The user referenced by the request does not exist
    UnknownUser(String),

    /// Collection export stayed queued past the retry limit
    QueueTimeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Xml(err) => write!(f, "Unexpected response format: {}", err),
            Error::AuthRequired => write!(f, "Login required: run `meeple login` first"),
            Error::Rejected(reason) => write!(f, "Request rejected by the service: {}", reason),
            Error::UnknownUser(username) => write!(f, "No such user: {}", username),
            Error::QueueTimeout => {
                write!(f, "Collection export is still queued; try again shortly")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Xml(err) => Some(err),
            Error::AuthRequired
            | Error::Rejected(_)
            | Error::UnknownUser(_)
            | Error::QueueTimeout => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::Xml(err)
    }
}
