/// An error of the planner core: a human readable message.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericError(String);

/// A result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors into one message with the given separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.as_str()).collect::<Vec<_>>().join(separator)
    }

    /// Prepends context to the error message.
    pub fn with_context(self, context: &str) -> Self {
        Self(format!("{context}: {}", self.0))
    }
}

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl From<&str> for GenericError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        Self(format!("io error: {err}"))
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}
