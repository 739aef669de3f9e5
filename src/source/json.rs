//! Snapshots that were already exported to JSON.

use crate::error::Result;
use crate::model::Document;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Parse a snapshot from a JSON string.
///
/// # Example
/// ```
/// let doc = astscope::parse_str(r#"{"sections":[{"pageNumber":1}]}"#).unwrap();
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json.trim_start_matches('\u{feff}'))?)
}

/// Parse a snapshot from JSON bytes (a leading UTF-8 BOM is ignored).
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    Ok(serde_json::from_slice(data)?)
}

/// Read and parse a snapshot file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path.as_ref())?;
    log::debug!(
        "read {} bytes of snapshot from {}",
        data.len(),
        path.as_ref().display()
    );
    parse_bytes(&data)
}

#[cfg(feature = "async")]
pub use self::source::JsonFileSource;

#[cfg(feature = "async")]
mod source {
    use super::parse_bytes;
    use crate::error::Result;
    use crate::model::Document;
    use crate::source::TreeSource;
    use async_trait::async_trait;
    use std::path::Path;

    /// Reads snapshots exported earlier with `--export-ast`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JsonFileSource;

    impl JsonFileSource {
        pub fn new() -> Self {
            Self
        }
    }

    #[async_trait]
    impl TreeSource for JsonFileSource {
        fn name(&self) -> &str {
            "json"
        }

        fn supported_extensions(&self) -> &[&str] {
            &["json"]
        }

        async fn request(&self, artifact: &Path) -> Result<Document> {
            let data = tokio::fs::read(artifact).await?;
            parse_bytes(&data)
        }
    }
}
