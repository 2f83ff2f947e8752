//! Adapter that gives fallible functions one uniform error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Uniform failure produced by [`wrap`]; keeps the original error as source.
#[derive(Debug)]
pub struct WrappedError {
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl WrappedError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.source
    }
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "wrapped failure: {}", self.source)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = &*self.source;
        Some(source)
    }
}

/// Re-signals any failure of `f` as a [`WrappedError`].
pub fn wrap<T, R, E, F>(f: F) -> impl Fn(T) -> Result<R, WrappedError>
where
    F: Fn(T) -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    move |value| f(value).map_err(WrappedError::new)
}
