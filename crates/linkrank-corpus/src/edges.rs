//! The link edge list (`id-graph.tsv`)

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::debug;

use crate::error::{CorpusError, Result};
use crate::{parse, DocumentId, LINK_FILE};

/// A single directed link between two documents.
///
/// Duplicates of the same `(from, to)` pair are legitimate records and are
/// preserved downstream, where they count multiply toward out-degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord {
    pub from: DocumentId,
    pub to: DocumentId,
}

/// Streaming iterator over link records.
///
/// Yields one parsed record per non-blank line and stops the caller at the
/// first malformed one. Consumed once, typically straight into
/// `LinkGraph::build`.
pub struct LinkRecords<R> {
    lines: Lines<R>,
    name: String,
    line_no: usize,
}

/// Stream link records from a reader. `name` labels errors (usually the file
/// path).
pub fn link_records<R: BufRead>(reader: R, name: &str) -> LinkRecords<R> {
    LinkRecords {
        lines: reader.lines(),
        name: name.to_string(),
        line_no: 0,
    }
}

/// Read the conventional `id-graph.tsv` under a corpus directory into a
/// record list.
pub fn load_link_records(dir: &Path) -> Result<Vec<LinkRecord>> {
    let path = dir.join(LINK_FILE);
    let name = path.display().to_string();
    let file = File::open(&path).map_err(|source| CorpusError::Io {
        name: name.clone(),
        source,
    })?;
    let records = link_records(BufReader::new(file), &name).collect::<Result<Vec<_>>>()?;
    debug!(edges = records.len(), "loaded link edge list");
    Ok(records)
}

impl<R: BufRead> LinkRecords<R> {
    fn parse_line(&self, line: &str) -> Result<LinkRecord> {
        let mut fields = line.split_whitespace();
        let (Some(from), Some(to), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(parse::malformed(
                &self.name,
                self.line_no,
                line,
                "expected `<from> <to>`",
            ));
        };
        Ok(LinkRecord {
            from: parse::doc_id(from, &self.name, self.line_no, line)?,
            to: parse::doc_id(to, &self.name, self.line_no, line)?,
        })
    }
}

impl<R: BufRead> Iterator for LinkRecords<R> {
    type Item = Result<LinkRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(CorpusError::Io {
                        name: self.name.clone(),
                        source,
                    }))
                }
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}
