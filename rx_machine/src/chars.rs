/**
 * Incremental UTF-8 decoding of a byte stream.
 */

use std::io::{self, BufRead, BufReader, Read};

/// Decodes characters from the buffered window of the reader. A sequence split
/// between two refills is carried over to the next window.
pub(crate) struct Chars<R> {
    reader: BufReader<R>,
    window: Vec<u8>,
    pos: usize,
}

impl <R> Chars<R> where R : Read {
    pub(crate) fn new(reader: R) -> Self {
        Self{ reader: BufReader::new(reader), window: Vec::new(), pos: 0 }
    }

    /// Drops the consumed part of the window and appends the next buffer of
    /// the reader. Returns the number of bytes appended, 0 at the end.
    fn refill(&mut self) -> io::Result<usize> {
        self.window.drain(..self.pos);
        self.pos = 0;
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let n = buf.len();
                    self.window.extend_from_slice(buf);
                    self.reader.consume(n);
                    return Ok(n);
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn invalid_data(&mut self) -> io::Error {
        self.window.clear();
        self.pos = 0;
        io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
    }
}

impl <R> Iterator for Chars<R> where R : Read {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.window.len() - self.pos;
            if rest > 0 {
                let (decoded, size) = bstr::decode_utf8(&self.window[self.pos..]);
                if let Some(c) = decoded {
                    self.pos += size;
                    return Some(Ok(c));
                }
                // Only a valid prefix cut short by the window can still complete
                if size < rest || rest >= 4 {
                    return Some(Err(self.invalid_data()));
                }
            }

            match self.refill() {
                Ok(0) if self.window.is_empty() => return None,
                Ok(0) => return Some(Err(self.invalid_data())),
                Ok(_) => {},
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
