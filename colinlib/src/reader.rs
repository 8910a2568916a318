//! Line-oriented reading.
//!
//! Lines are yielded without their terminator (`\n` or `\r\n`). Invalid
//! UTF-8 is replaced rather than rejected, and a UTF-8 byte order mark at
//! the start of the input is dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ColinError;
use crate::Result;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Iterator over the lines of a buffered reader.
pub struct LineReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    first: bool,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ColinError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            first: true,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }

                let mut line = String::from_utf8_lossy(&self.buf).into_owned();
                if std::mem::take(&mut self.first) && line.starts_with(BYTE_ORDER_MARK) {
                    line.remove(0);
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
