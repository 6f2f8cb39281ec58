//! PubMed EFetch XML parser
//!
//! Decodes a `PubmedArticleSet` document into [`PubMedArticle`] records.
//!
//! # Module Organization
//!
//! - `preprocessing` - XML cleaning before deserialization
//! - `deserializers` - Custom serde deserializers for mixed-content fields
//! - `xml_types` - Internal XML schema deserialization types
//! - `converters` - Conversion from XML types to public API models

mod converters;
mod deserializers;
mod preprocessing;
mod xml_types;

use crate::error::{FetchError, Result};
use crate::pubmed::models::PubMedArticle;
use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use std::str;
use tracing::{instrument, warn};
use xml_types::PubmedArticleSet;

const ARTICLE_SET_ELEMENT: &[u8] = b"PubmedArticleSet";

/// Decode a raw EFetch response body
///
/// The body must be UTF-8 and hold a `PubmedArticleSet` document.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not UTF-8, is empty, or is
/// not a well-formed `PubmedArticleSet` document.
pub fn parse_articles(raw: &[u8]) -> Result<Vec<PubMedArticle>> {
    let xml = str::from_utf8(raw)
        .map_err(|e| FetchError::decode(format!("response body is not UTF-8: {}", e)))?;
    parse_articles_from_xml(xml)
}

/// Parse every `<PubmedArticle>` in an EFetch XML document
///
/// Articles come back in document order. Entries without a PMID are
/// skipped with a warning, and other set members such as
/// `<PubmedBookArticle>` or `<DeleteCitation>` are ignored.
///
/// # Example
///
/// ```
/// use pubmed_fetch::pubmed::parser::parse_articles_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///         <Journal><Title>Example Journal</Title></Journal>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles_from_xml(xml)?;
/// assert_eq!(articles[0].title, "Example Article");
/// # Ok::<(), pubmed_fetch::FetchError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<PubMedArticle>> {
    if xml.trim().is_empty() {
        return Err(FetchError::decode("empty response body"));
    }

    match root_element(xml)? {
        None => {
            return Err(FetchError::decode("document has no root element"));
        }
        Some(name) if name.as_slice() != ARTICLE_SET_ELEMENT => {
            return Err(FetchError::decode(format!(
                "unexpected root element <{}>, expected <PubmedArticleSet>",
                String::from_utf8_lossy(&name)
            )));
        }
        Some(_) => {}
    }

    let cleaned_xml = preprocessing::strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| FetchError::decode(format!("Failed to deserialize XML: {}", e)))?;

    let articles: Vec<PubMedArticle> = article_set
        .articles
        .into_iter()
        .filter_map(|article_xml| match article_xml.pmid() {
            Some(pmid) => {
                let pmid = pmid.to_string();
                Some(article_xml.into_article(pmid))
            }
            None => {
                warn!("PubmedArticle without PMID, skipping");
                None
            }
        })
        .collect();

    Ok(articles)
}

/// Name of the first element in the document, or `None` if there is none
fn root_element(xml: &str) -> Result<Option<Vec<u8>>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(Some(e.name().as_ref().to_vec()));
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {}
            Err(e) => {
                return Err(FetchError::decode(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }
}
