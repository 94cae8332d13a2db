use std::fmt::Display;

/// The positional arguments didn't make sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    MissingHandle,
    EmptyHandle,
    MissingKeywords,
}

impl Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHandle => write!(f, "No account handle argument was given"),
            Self::EmptyHandle => write!(f, "Account handle is empty"),
            Self::MissingKeywords => write!(f, "No keywords argument was given"),
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Anything that stops an invocation before it gets to talk to the API.
///
/// Trouble with the API itself is not in here. That just means no posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    Argument(ArgumentError),
    /// A required secret is missing. Holds the name of it.
    Configuration(String),
}

impl InvokeError {
    pub fn is_argument_error(&self) -> bool {
        matches!(self, InvokeError::Argument(_))
    }
}

impl From<ArgumentError> for InvokeError {
    fn from(value: ArgumentError) -> Self {
        Self::Argument(value)
    }
}

impl Display for InvokeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "Bad arguments: {}", e),
            Self::Configuration(name) => write!(f, "Secret {} is not set", name),
        }
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Argument(e) => Some(e),
            Self::Configuration(_) => None,
        }
    }
}
