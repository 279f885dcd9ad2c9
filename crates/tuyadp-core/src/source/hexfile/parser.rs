use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use super::error::HexSourceError;
use super::reader::{decode_hex_frame, frame_text};
use crate::source::{FrameEvent, FrameSource, SourceError};

/// Frame source over a text capture with one hex-encoded frame per line.
pub struct HexFileSource {
    reader: BufReader<File>,
    line: u64,
    buf: String,
}

impl HexFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line: 0,
            buf: String::new(),
        })
    }

    fn read_frame(&mut self) -> Result<Option<FrameEvent>, HexSourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let Some(text) = frame_text(&self.buf) else {
                continue;
            };
            let data = decode_hex_frame(text, self.line)?;
            trace!(line = self.line, bytes = data.len(), "read frame");
            return Ok(Some(FrameEvent {
                line: self.line,
                data,
            }));
        }
    }
}

impl FrameSource for HexFileSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        Ok(self.read_frame()?)
    }
}
