//! Retrieved documents and identity recovery

use linkrank_corpus::DocumentId;

use crate::error::SearchError;

/// A document body as handed back by the relevance provider.
///
/// The index stores bodies only, so the corpus embeds each document's id as
/// the first line of its body. That line is the join key between retrieval
/// results and authority scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: String,
}

impl Document {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Recover the embedded id from the first line of the body.
    pub fn doc_id(&self) -> Result<DocumentId, SearchError> {
        let first_line = self.body.lines().next().unwrap_or("").trim();
        first_line
            .parse()
            .map_err(|_| SearchError::MissingDocumentId {
                first_line: first_line.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_id_from_first_line() {
        let doc = Document::new("42\nsome page text\nmore text");
        assert_eq!(doc.doc_id().unwrap(), 42);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let doc = Document::new("  7  \nbody");
        assert_eq!(doc.doc_id().unwrap(), 7);
    }

    #[test]
    fn missing_id_is_a_malformed_input_error() {
        let doc = Document::new("no id here\n42");
        assert!(matches!(
            doc.doc_id(),
            Err(SearchError::MissingDocumentId { .. })
        ));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Document::new("").doc_id().is_err());
    }
}
