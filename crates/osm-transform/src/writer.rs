//! JSON-lines output for shaped records.

use std::io::Write;

use osm_model::ShapedRecord;

use crate::error::Result;

/// Writes one JSON document per record, each followed by a newline.
///
/// In pretty mode every record is indented over several lines; the output is
/// then no longer strictly line-delimited but stays readable.
pub struct RecordWriter<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            written: 0,
        }
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write(&mut self, record: &ShapedRecord) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, record)?;
        } else {
            serde_json::to_writer(&mut self.writer, record)?;
        }
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
