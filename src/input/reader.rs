use std::io::{self, BufRead};

use log::warn;

/// Reads one command line at a time, capped at `max_len` characters.
pub struct LineReader<R> {
    inner: R,
    max_len: usize,
    discarding: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self {
            inner,
            max_len,
            discarding: false,
        }
    }

    /// Returns `None` once the input is closed. At most `4 * max_len` bytes
    /// are buffered; an overlong line is cut at `max_len` characters and the
    /// rest of that physical line is skipped on the next call.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.discarding {
            self.skip_rest_of_line()?;
        }

        let byte_cap = self.max_len.saturating_mul(4);
        let mut buf = Vec::new();
        let mut seen_input = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            seen_input = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let line_part = newline.unwrap_or(available.len());
            let take = line_part.min(byte_cap - buf.len());
            buf.extend_from_slice(&available[..take]);

            if let Some(pos) = newline.filter(|&pos| pos == take) {
                self.inner.consume(pos + 1);
                break;
            }
            self.inner.consume(take);
            if buf.len() == byte_cap {
                self.discarding = true;
                break;
            }
        }

        if !seen_input {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if let Some((cut, _)) = line.char_indices().nth(self.max_len) {
            warn!("input line truncated to {} chars", self.max_len);
            line.truncate(cut);
        }

        Ok(Some(line))
    }

    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.inner.consume(pos + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    self.inner.consume(len);
                }
            }
        }
        self.discarding = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str, max_len: usize) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.as_bytes().to_vec()), max_len)
    }

    #[test]
    fn test_reads_lines_then_eof() -> io::Result<()> {
        let mut lines = reader("ls -l\necho hi\n", 1024);
        assert_eq!(lines.read_line()?.as_deref(), Some("ls -l"));
        assert_eq!(lines.read_line()?.as_deref(), Some("echo hi"));
        assert_eq!(lines.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_last_line_without_newline() -> io::Result<()> {
        let mut lines = reader("exit", 1024);
        assert_eq!(lines.read_line()?.as_deref(), Some("exit"));
        assert_eq!(lines.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_empty_input_is_eof() -> io::Result<()> {
        assert_eq!(reader("", 1024).read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_blank_line_is_not_eof() -> io::Result<()> {
        let mut lines = reader("\n", 1024);
        assert_eq!(lines.read_line()?.as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn test_overlong_line_truncated_without_leaking() -> io::Result<()> {
        let mut lines = reader("abcdefgh\nnext\n", 4);
        assert_eq!(lines.read_line()?.as_deref(), Some("abcd"));
        assert_eq!(lines.read_line()?.as_deref(), Some("next"));
        Ok(())
    }

    #[test]
    fn test_truncation_respects_char_boundaries() -> io::Result<()> {
        let mut lines = reader("ééééé\n", 3);
        assert_eq!(lines.read_line()?.as_deref(), Some("ééé"));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_lossy() -> io::Result<()> {
        let mut lines = LineReader::new(Cursor::new(vec![b'l', b's', 0xff, b'\n']), 1024);
        assert_eq!(lines.read_line()?.as_deref(), Some("ls\u{fffd}"));
        Ok(())
    }

    /// Serves `a` forever and fails once far more than a line was pulled.
    struct Endless {
        chunk: [u8; 512],
        consumed: usize,
    }

    impl io::Read for Endless {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            let n = out.len().min(self.chunk.len());
            out[..n].copy_from_slice(&self.chunk[..n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Endless {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.consumed > 8 * 1024 * 1024 {
                return Err(io::Error::new(io::ErrorKind::Other, "unbounded read"));
            }
            Ok(&self.chunk)
        }

        fn consume(&mut self, amt: usize) {
            self.consumed += amt;
        }
    }

    #[test]
    fn test_endless_line_returns_after_cap() -> io::Result<()> {
        let source = Endless {
            chunk: [b'a'; 512],
            consumed: 0,
        };
        let mut lines = LineReader::new(source, 1024);
        let line = lines.read_line()?.unwrap_or_default();
        assert_eq!(line.len(), 1024);
        assert!(line.bytes().all(|b| b == b'a'));
        assert!(lines.inner.consumed <= 4 * 1024);
        Ok(())
    }

    #[test]
    fn test_overflow_past_buffer_is_skipped_next_call() -> io::Result<()> {
        let input = format!("{}\nls\n", "x".repeat(100));
        let mut lines = reader(&input, 2);
        assert_eq!(lines.read_line()?.as_deref(), Some("xx"));
        assert_eq!(lines.read_line()?.as_deref(), Some("ls"));
        assert_eq!(lines.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_overflow_then_eof() -> io::Result<()> {
        let mut lines = reader(&"y".repeat(50), 2);
        assert_eq!(lines.read_line()?.as_deref(), Some("yy"));
        assert_eq!(lines.read_line()?, None);
        Ok(())
    }
}
