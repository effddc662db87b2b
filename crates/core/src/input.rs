//! Line-oriented input buffer for the REPL.
//!
//! Wraps any buffered reader and hands out one line at a time, keeping the
//! most recently read line around for callers that want to re-inspect it.
//!
//! EOF is only observed after a read past the last line: a stream ending in
//! a final newline still yields that last line as a normal read, and the
//! following read returns empty and flips the EOF flag.

use std::io::{self, BufRead};

/// Buffered line reader over any input stream.
#[derive(Debug)]
pub struct InputBuffer<R> {
  reader: R,
  buffer: String,
  eof: bool,
}

impl<R: BufRead> InputBuffer<R> {
  /// Create an input buffer over the given reader
  pub fn new(reader: R) -> Self {
    Self {
      reader,
      buffer: String::new(),
      eof: false,
    }
  }

  /// Read the next line, without its trailing newline.
  ///
  /// Returns an empty string once the stream is exhausted; [`is_eof`]
  /// distinguishes that from a genuinely empty line.
  ///
  /// [`is_eof`]: InputBuffer::is_eof
  pub fn read_line(&mut self) -> io::Result<&str> {
    self.buffer.clear();
    if self.eof {
      return Ok(&self.buffer);
    }

    let read = self.reader.read_line(&mut self.buffer)?;
    if read == 0 {
      self.eof = true;
      return Ok(&self.buffer);
    }

    if self.buffer.ends_with('\n') {
      self.buffer.pop();
      if self.buffer.ends_with('\r') {
        self.buffer.pop();
      }
    }
    Ok(&self.buffer)
  }

  /// Whether the end of the stream has been reached
  pub fn is_eof(&self) -> bool {
    self.eof
  }

  /// The most recently read line
  pub fn buffer(&self) -> &str {
    &self.buffer
  }

  /// Clear the retained line
  pub fn clear_buffer(&mut self) {
    self.buffer.clear();
  }
}
