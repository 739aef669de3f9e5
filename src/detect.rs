//! Input format detection from leading bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// What kind of input a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// An already-exported snapshot (JSON object)
    SnapshotJson,
    /// A ZIP package (IDML and friends), to be handed to the engine
    ZipPackage,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::SnapshotJson => write!(f, "AST snapshot (JSON)"),
            InputFormat::ZipPackage => write!(f, "ZIP package"),
        }
    }
}

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";
const SNIFF_LEN: usize = 64;

/// Detect the input format of a file.
///
/// # Example
/// ```no_run
/// use astscope::detect::{detect_format_from_path, InputFormat};
///
/// let format = detect_format_from_path("book.idml").unwrap();
/// assert_eq!(format, InputFormat::ZipPackage);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from the first bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(InputFormat::ZipPackage);
    }

    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputFormat::SnapshotJson),
        Some(_) => Err(Error::UnknownFormat(describe(body))),
        None => Err(Error::UnknownFormat("empty input".to_string())),
    }
}

/// Check if a file is an exported snapshot.
pub fn is_snapshot<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(InputFormat::SnapshotJson))
}

fn describe(data: &[u8]) -> String {
    let head: String = String::from_utf8_lossy(&data[..data.len().min(8)])
        .chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect();
    format!("unrecognized header {:?}", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format_from_bytes(b"{\"sections\":[]}").unwrap(),
            InputFormat::SnapshotJson
        );
        assert_eq!(
            detect_format_from_bytes(b"\xef\xbb\xbf  \n{").unwrap(),
            InputFormat::SnapshotJson
        );
    }

    #[test]
    fn test_detect_zip() {
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        assert_eq!(detect_format_from_bytes(data).unwrap(), InputFormat::ZipPackage);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"%PDF-1.7"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"[1,2]"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"   "),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_detect_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(detect_format_from_path(&path).unwrap(), InputFormat::SnapshotJson);
        assert!(is_snapshot(&path));
    }
}
