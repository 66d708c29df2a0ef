use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatusError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, StatusError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, StatusError::Decode(_))
    }
}

pub type StatusResult<T> = Result<T, StatusError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> StatusResult<T>;
    fn with_context<F>(self, f: F) -> StatusResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> StatusResult<T> {
        self.map_err(|e| StatusError::Config(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> StatusResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StatusError::Config(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> StatusResult<T> {
        self.ok_or_else(|| StatusError::Config(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> StatusResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| StatusError::Config(f()))
    }
}

#[macro_export]
macro_rules! status_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::StatusError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::StatusError::$error_type(format!($fmt, $($arg)*))
    };
}
