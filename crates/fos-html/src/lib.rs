//! fOS HTML Parser
//!
//! HTML5 parsing built on html5ever, producing `fos-dom` trees.

mod parser;

pub use fos_dom::Document;
pub use parser::{HtmlParser, ParserConfig};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("markup produced no <body> to take a fragment from")]
    MissingBody,

    #[error(transparent)]
    Dom(#[from] fos_dom::DomError),
}

impl From<ParseError> for fos_dom::DomError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Dom(err) => err,
            other => fos_dom::DomError::Markup(other.to_string()),
        }
    }
}
