use std::io::BufRead;

/// Line-oriented record reader with one record of lookahead.
///
/// Records are raw bytes split on `\n` only, so input that is not UTF-8 is
/// carried through untouched. A trailing `\r` stays part of the record, so
/// writing a record back followed by `\n` reproduces the input line.
pub struct RecordReader<R> {
    inner: R,
    peeked: Option<Vec<u8>>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Look at the next record without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn peek_record(&mut self) -> std::io::Result<Option<&[u8]>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Consume the next record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn next_record(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        match self.peeked.take() {
            Some(record) => Ok(Some(record)),
            None => self.read_line(),
        }
    }

    fn read_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.inner.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_peek_does_not_consume() {
        let mut reader = RecordReader::new(Cursor::new("a\nb\n"));
        assert_eq!(reader.peek_record().unwrap(), Some(b"a".as_slice()));
        assert_eq!(reader.peek_record().unwrap(), Some(b"a".as_slice()));
        assert_eq!(reader.next_record().unwrap(), Some(b"a".to_vec()));
        assert_eq!(reader.next_record().unwrap(), Some(b"b".to_vec()));
        assert_eq!(reader.peek_record().unwrap(), None);
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_keeps_carriage_return_and_last_unterminated_line() {
        let mut reader = RecordReader::new(Cursor::new("a\r\n\nlast"));
        assert_eq!(reader.next_record().unwrap(), Some(b"a\r".to_vec()));
        assert_eq!(reader.next_record().unwrap(), Some(Vec::new()));
        assert_eq!(reader.next_record().unwrap(), Some(b"last".to_vec()));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_reads_invalid_utf8() {
        let mut reader = RecordReader::new(Cursor::new(b"caf\xE9\n\xFF\xFE".to_vec()));
        assert_eq!(reader.peek_record().unwrap(), Some(b"caf\xE9".as_slice()));
        assert_eq!(reader.next_record().unwrap(), Some(b"caf\xE9".to_vec()));
        assert_eq!(reader.next_record().unwrap(), Some(b"\xFF\xFE".to_vec()));
        assert_eq!(reader.next_record().unwrap(), None);
    }
}
