use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntrospectError {
    #[error("introspection failure reading {target}: {reason}")]
    IntrospectionFailure {
        /// What was being read, e.g. `Mutex<T>` or `RefCell<T>`.
        target: &'static str,
        reason: String,
    },
}

impl IntrospectError {
    /// Wrap a failed child read. The whole check aborts; there is no
    /// partial-result mode.
    pub fn failure(target: &'static str, reason: impl Into<String>) -> Self {
        IntrospectError::IntrospectionFailure {
            target,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntrospectError>;
