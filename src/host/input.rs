//! Opening record input from a file or stdin.
//!
//! Gzip (and bgzip) input is recognised by its magic bytes rather than by
//! extension, so `zcat`-style pipes and misnamed files both work.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open `path` for reading records. `-` reads stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its first bytes cannot be read.
pub fn open_input(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        wrap(Box::new(std::io::stdin().lock()))
    } else {
        wrap(Box::new(File::open(path)?))
    }
}

/// Buffer `reader`, transparently decompressing it if it starts with the gzip magic.
///
/// # Errors
///
/// Returns an error if the first bytes cannot be read.
pub fn wrap(reader: Box<dyn Read>) -> std::io::Result<Box<dyn BufRead>> {
    let mut buffered = BufReader::new(reader);
    let is_gzipped = buffered.fill_buf()?.starts_with(&GZIP_MAGIC);
    if is_gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(buffered))))
    } else {
        Ok(Box::new(buffered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    fn read_all(mut reader: Box<dyn BufRead>) -> String {
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_plain_input() {
        let reader = wrap(Box::new(Cursor::new(b"a\tb\n".to_vec()))).unwrap();
        assert_eq!(read_all(reader), "a\tb\n");
    }

    #[test]
    fn test_gzip_input() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"#h\nx\n").unwrap();
        let bytes = encoder.finish().unwrap();

        let reader = wrap(Box::new(Cursor::new(bytes))).unwrap();
        assert_eq!(read_all(reader), "#h\nx\n");
    }

    #[test]
    fn test_empty_input() {
        let reader = wrap(Box::new(Cursor::new(Vec::new()))).unwrap();
        assert_eq!(read_all(reader), "");
    }
}
