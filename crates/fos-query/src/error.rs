//! Query error types

use fos_dom::DomError;
use fos_html::ParseError;

/// Verb failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A single-element target matched nothing
    #[error("no element matches {target}")]
    Resolution { target: String },

    /// The document rejected the operation
    #[error(transparent)]
    Host(#[from] DomError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Host(err.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
