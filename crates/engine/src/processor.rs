use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Count the lines of a single regular file.
///
/// The handle is dropped before returning, on success and on error.
///
/// # Errors
/// Returns [`EngineError::Read`] if the file cannot be opened or read.
pub fn count_file_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    count_lines_in(BufReader::new(file)).map_err(|e| EngineError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Count lines in a stream.
///
/// `\n`, `\r\n` and a lone `\r` each end one line, including a `\r\n` pair
/// split across two reads. An unterminated final line still counts; empty
/// input yields zero.
pub fn count_lines_in<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut lines = 0;
    let mut last_byte: Option<u8> = None;
    // A `\r` ended the previous chunk; a leading `\n` here belongs to it.
    let mut pending_cr = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n');
        let cr_count = bytecount::count(buf, b'\r');
        if cr_count > 0 {
            let crlf_pairs = buf.windows(2).filter(|w| w[0] == b'\r' && w[1] == b'\n').count();
            lines += cr_count - crlf_pairs;
        }
        if pending_cr && buf[0] == b'\n' {
            lines -= 1;
        }
        pending_cr = buf.last() == Some(&b'\r');
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    // 末尾に改行がない場合の行カウント補正
    if let Some(b) = last_byte
        && b != b'\n'
        && b != b'\r'
    {
        lines += 1;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_terminated_and_unterminated_lines() {
        assert_eq!(count_lines_in(Cursor::new("a\nb\nc\n")).unwrap(), 3);
        assert_eq!(count_lines_in(Cursor::new("a\nb\nc")).unwrap(), 3);
        assert_eq!(count_lines_in(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines_in(Cursor::new("\n\n")).unwrap(), 2);
    }

    #[test]
    fn test_crlf_counts_once_per_line() {
        assert_eq!(count_lines_in(Cursor::new("a\r\nb\r\n")).unwrap(), 2);
        assert_eq!(count_lines_in(Cursor::new("a\r\nb")).unwrap(), 2);
    }

    #[test]
    fn test_lone_cr_ends_a_line() {
        assert_eq!(count_lines_in(Cursor::new("a\rb\rc")).unwrap(), 3);
        assert_eq!(count_lines_in(Cursor::new("a\rb\r")).unwrap(), 2);
        assert_eq!(count_lines_in(Cursor::new("\r")).unwrap(), 1);
        assert_eq!(count_lines_in(Cursor::new("a\r\rb")).unwrap(), 3);
        assert_eq!(count_lines_in(Cursor::new("a\n\rb\r\n\nc")).unwrap(), 5);
    }

    #[test]
    fn test_lines_spanning_buffer_boundaries() {
        let text = "0123456789\n".repeat(1000);
        let reader = BufReader::with_capacity(7, Cursor::new(text.into_bytes()));
        assert_eq!(count_lines_in(reader).unwrap(), 1000);

        // 11-byte lines put the `\r` of every other pair at a chunk boundary.
        let text = "012345678\r\n".repeat(100);
        for capacity in [1, 2, 3, 10, 11] {
            let reader = BufReader::with_capacity(capacity, Cursor::new(text.clone().into_bytes()));
            assert_eq!(count_lines_in(reader).unwrap(), 100, "capacity {capacity}");
        }

        let text = "ab\rcd\r".repeat(50);
        let reader = BufReader::with_capacity(3, Cursor::new(text.into_bytes()));
        assert_eq!(count_lines_in(reader).unwrap(), 100);
    }

    #[test]
    fn test_non_utf8_content_is_counted() {
        let bytes = vec![0xff, 0xfe, b'\n', 0x00, 0x80];
        assert_eq!(count_lines_in(Cursor::new(bytes)).unwrap(), 2);
    }

    #[test]
    fn test_count_file_lines_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "abc \nde \r\nfg ").unwrap();
        assert_eq!(count_file_lines(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");
        let err = count_file_lines(&missing).unwrap_err();
        assert!(matches!(err, EngineError::Read { .. }));
        assert_eq!(err.path(), Some(missing.as_path()));
    }
}
