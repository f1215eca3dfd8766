//! Parser of `ListObjectsV2` response bodies.
//!
//! The body is walked event by event. Object keys come back byte for byte,
//! surrounding spaces included, and `<Contents>` blocks may sit between any
//! other elements of the document.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqs3_core::time::{parse_rfc3339, DateTime};
use reqs3_core::{Error, Result};

const LIST_BUCKET_RESULT: &str = "ListBucketResult";
const IS_TRUNCATED: &str = "IsTruncated";
const NEXT_CONTINUATION_TOKEN: &str = "NextContinuationToken";
const CONTENTS: &str = "Contents";
const KEY: &str = "Key";
const SIZE: &str = "Size";
const LAST_MODIFIED: &str = "LastModified";

/// One object returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedObject {
    /// Object key, exactly as the service sent it.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last modified time.
    pub last_modified: DateTime,
}

/// One parsed page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Complete entries of this page, in document order.
    pub objects: Vec<ListedObject>,
    /// Whether the service holds more pages.
    pub is_truncated: bool,
    /// Token to request the next page with.
    pub next_continuation_token: Option<String>,
}

#[derive(Default, Debug)]
struct ListEntry {
    key: Option<String>,
    size: Option<String>,
    last_modified: Option<String>,
}

impl ListEntry {
    /// Entries missing key, size or last modified are dropped, as are
    /// entries whose size or time does not parse.
    fn into_object(self) -> Option<ListedObject> {
        let (Some(key), Some(size), Some(last_modified)) =
            (self.key, self.size, self.last_modified)
        else {
            return None;
        };

        let size = size.trim().parse::<u64>().ok()?;
        let last_modified = parse_rfc3339(last_modified.trim()).ok()?;

        Some(ListedObject {
            key,
            size,
            last_modified,
        })
    }
}

/// Walks the element tree and collects what a page needs.
#[derive(Default)]
struct PageBuilder {
    /// Local names of the open elements, root first.
    path: Vec<String>,
    text: String,
    entry: Option<ListEntry>,
    entries: Vec<ListEntry>,
    is_truncated: bool,
    next_continuation_token: Option<String>,
}

impl PageBuilder {
    fn open(&mut self, start: &BytesStart) -> Result<()> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        if self.path.is_empty() && name != LIST_BUCKET_RESULT {
            return Err(Error::unexpected(format!(
                "list objects response has root element {name}"
            )));
        }
        if self.path.len() == 1 && name == CONTENTS {
            self.entry = Some(ListEntry::default());
        }

        self.path.push(name);
        self.text.clear();
        Ok(())
    }

    fn close(&mut self) {
        let text = std::mem::take(&mut self.text);
        let Some(name) = self.path.pop() else {
            return;
        };

        match (self.path.len(), name.as_str()) {
            (1, IS_TRUNCATED) => self.is_truncated = text.trim() == "true",
            (1, NEXT_CONTINUATION_TOKEN) => self.next_continuation_token = Some(text),
            (1, CONTENTS) => self.entries.extend(self.entry.take()),
            (2, field) => {
                let Some(entry) = self.entry.as_mut() else {
                    return;
                };
                match field {
                    KEY => entry.key = Some(text),
                    SIZE => entry.size = Some(text),
                    LAST_MODIFIED => entry.last_modified = Some(text),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Result<ListPage> {
        if !self.path.is_empty() {
            return Err(Error::unexpected(format!(
                "list objects response ends inside <{}>",
                self.path.join("><")
            )));
        }

        let total = self.entries.len();
        let objects = self
            .entries
            .into_iter()
            .filter_map(ListEntry::into_object)
            .collect::<Vec<_>>();
        if objects.len() != total {
            debug!(
                "skipped {} incomplete entries of {total} in list page",
                total - objects.len()
            );
        }

        Ok(ListPage {
            objects,
            is_truncated: self.is_truncated,
            next_continuation_token: self.next_continuation_token,
        })
    }
}

/// Parse one listing response body.
///
/// Incomplete entries are skipped silently. A body that is not a listing
/// document at all is an error.
pub fn parse_list_page(body: &str) -> Result<ListPage> {
    let xml_error = |e: quick_xml::Error| {
        Error::unexpected("failed to parse list objects response")
            .with_source(e)
            .with_context(format!("response_length: {}", body.len()))
    };

    // Text is never trimmed, keys keep their leading and trailing spaces.
    let mut reader = Reader::from_str(body);
    let mut builder = PageBuilder::default();
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                builder.open(&e)?;
                seen_root = true;
            }
            Event::Empty(e) => {
                builder.open(&e)?;
                builder.close();
                seen_root = true;
            }
            Event::End(_) => builder.close(),
            Event::Text(e) => {
                if !builder.path.is_empty() {
                    let text = e.unescape().map_err(xml_error)?;
                    builder.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                builder
                    .text
                    .push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::unexpected("list objects response is empty")
            .with_context(format!("response_length: {}", body.len())));
    }
    builder.finish()
}
