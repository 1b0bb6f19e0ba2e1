use ldapglue_codes::{ErrorCategory, ErrorKind, ResultCode};

/// A classified session failure.
///
/// `messages` holds one line per diagnostic source, in order: the static
/// per-code description first, then the connection-specific diagnostic
/// message when one was available.
#[derive(Debug, PartialEq)]
pub struct SessionError {
    pub kind: ErrorKind,
    pub messages: Vec<String>,
}

impl SessionError {
    pub fn code(&self) -> ResultCode {
        self.kind.code()
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn message(&self) -> String {
        self.messages.join("\n  ")
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
