use axerrno::AxError;

/// Errors reported by the TMON core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmonError {
    /// The sensor has not completed a conversion yet. Transient, retry later.
    NotReady,
    /// The SoC does not let software program the trip interrupts.
    Unsupported,
}

pub type TmonResult<T = ()> = Result<T, TmonError>;

impl core::fmt::Display for TmonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TmonError::NotReady => write!(f, "reading not valid"),
            TmonError::Unsupported => write!(f, "trip points not supported"),
        }
    }
}

impl From<TmonError> for AxError {
    fn from(err: TmonError) -> Self {
        match err {
            TmonError::NotReady => AxError::Io,
            TmonError::Unsupported => AxError::Unsupported,
        }
    }
}
