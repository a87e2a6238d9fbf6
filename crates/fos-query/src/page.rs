//! Page - the document the verbs operate on

use fos_dom::Document;
use fos_html::HtmlParser;

use crate::{Config, Result};

/// A document plus the configuration verbs read from it
///
/// Holds `Rc` listeners, so a page stays on the thread that built it.
#[derive(Debug, Default)]
pub struct Page {
    document: Document,
    config: Config,
}

impl Page {
    /// Create a page with an empty `<html><head><body>` document
    pub fn new(url: &str) -> Self {
        Self::with_config(url, Config::default())
    }

    pub fn with_config(url: &str, config: Config) -> Self {
        Self::from_document(Document::new(url), config)
    }

    /// Wrap an existing document
    pub fn from_document(document: Document, config: Config) -> Self {
        Self { document, config }
    }

    /// Parse a full HTML document into a page
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_config(html, Config::default())
    }

    pub fn from_html_with_config(html: &str, config: Config) -> Result<Self> {
        let document = HtmlParser::with_config(config.markup.clone()).parse(html)?;
        tracing::debug!("Page loaded: {} nodes", document.tree().len());
        Ok(Self { document, config })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parser configured for this page's markup
    pub fn parser(&self) -> HtmlParser {
        HtmlParser::with_config(self.config.markup.clone())
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
