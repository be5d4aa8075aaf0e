use derive_more::{Display, Error};

/// Failure of a pet editor model load.
///
/// Carries the error of whichever branch failed first, unchanged.
#[derive(Debug, Display, Error)]
pub enum EditorError {
    #[display("pet editor model load failed: {_0:#}")]
    LoadFailed(#[error(not(source))] anyhow::Error),
}

impl EditorError {
    /// Error produced by the failing branch
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            EditorError::LoadFailed(err) => err,
        }
    }

    pub fn into_cause(self) -> anyhow::Error {
        match self {
            EditorError::LoadFailed(err) => err,
        }
    }
}
