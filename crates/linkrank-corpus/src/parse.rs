use crate::error::{CorpusError, Result};
use crate::DocumentId;

pub(crate) fn malformed(name: &str, line: usize, content: &str, reason: &str) -> CorpusError {
    CorpusError::MalformedRecord {
        name: name.to_string(),
        line,
        content: content.to_string(),
        reason: reason.to_string(),
    }
}

pub(crate) fn doc_id(field: &str, name: &str, line: usize, content: &str) -> Result<DocumentId> {
    field
        .parse()
        .map_err(|_| malformed(name, line, content, &format!("not a document id: {field:?}")))
}
