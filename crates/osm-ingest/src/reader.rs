//! Pull-based streaming reader for OSM XML.
//!
//! The reader yields each child of the document root (`node`, `way`,
//! `relation`, `bounds`, ...) as a complete [`RawElement`] subtree, in
//! document order. Only one top-level subtree is buffered at a time, so
//! memory stays bounded by the largest single element rather than by the
//! document. The sequence is single-pass and cannot be rewound.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use osm_model::RawElement;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Streaming OSM document reader.
pub struct OsmReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Root element (attributes only, children are streamed).
    root: Option<RawElement>,
    root_open: bool,
    /// Open elements below the root.
    stack: Vec<RawElement>,
    finished: bool,
}

impl OsmReader<BufReader<File>> {
    /// Open an OSM file for streaming.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
        debug!(path = %path.display(), "opened OSM document");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> OsmReader<&'a [u8]> {
    /// Stream an in-memory document.
    pub fn from_xml(xml: &'a str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            root: None,
            root_open: false,
            stack: Vec::new(),
            finished: false,
        }
    }

    /// The document root, once its start tag has been read.
    pub fn root(&self) -> Option<&RawElement> {
        self.root.as_ref()
    }

    fn read_next(&mut self) -> Result<Option<RawElement>> {
        loop {
            self.buf.clear();
            let position = self.reader.buffer_position();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(start)) => {
                    let element = element_from_start(&start, self.reader.decoder(), position)?;
                    if self.root.is_none() {
                        self.root = Some(element);
                        self.root_open = true;
                    } else {
                        self.stack.push(element);
                    }
                }
                Ok(Event::Empty(start)) => {
                    let element = element_from_start(&start, self.reader.decoder(), position)?;
                    if self.root.is_none() {
                        self.root = Some(element);
                    } else if let Some(parent) = self.stack.last_mut() {
                        parent.children.push(element);
                    } else {
                        return Ok(Some(element));
                    }
                }
                Ok(Event::End(_)) => match self.stack.pop() {
                    Some(element) => match self.stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(Some(element)),
                    },
                    None => self.root_open = false,
                },
                Ok(Event::Eof) => {
                    if let Some(open) = self.stack.last() {
                        return Err(IngestError::UnexpectedEof {
                            open: open.tag.clone(),
                        });
                    }
                    return match &self.root {
                        None => Err(IngestError::EmptyDocument),
                        Some(root) if self.root_open => Err(IngestError::UnexpectedEof {
                            open: root.tag.clone(),
                        }),
                        Some(_) => Ok(None),
                    };
                }
                // Text, comments, declarations and processing instructions
                Ok(_) => {}
                Err(err) => {
                    return Err(IngestError::Xml {
                        position: self.reader.error_position(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_next() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

fn element_from_start(
    start: &BytesStart<'_>,
    decoder: Decoder,
    position: u64,
) -> Result<RawElement> {
    let mut element = RawElement::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|err| IngestError::Xml {
            position,
            message: err.to_string(),
        })?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = decoder.decode(&attr.value).map_err(|err| IngestError::Xml {
            position,
            message: err.to_string(),
        })?;
        let value = unescape(&normalize_attribute_whitespace(&raw))
            .map_err(|err| IngestError::Xml {
                position,
                message: err.to_string(),
            })?
            .into_owned();
        element.attributes.insert(name, value);
    }
    Ok(element)
}

/// Attribute-value normalization: every literal tab, CR, LF or CRLF becomes
/// one space. Runs before unescaping, so character references such as
/// `&#10;` keep their character.
fn normalize_attribute_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\r', '\n']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\r', '\n'], " "))
}
