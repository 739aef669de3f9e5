//! Snapshot sources: where document trees come from.
//!
//! A snapshot is either read from a JSON file exported earlier or produced by
//! running the external engine on a source artifact. With the `async` feature
//! both are available as [`TreeSource`]s and dispatched by extension through
//! a [`SourceRegistry`].
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> astscope::Result<()> {
//! use astscope::source::{EngineConfig, SourceRegistry};
//! use std::path::Path;
//!
//! let registry = SourceRegistry::with_defaults(EngineConfig::from_env());
//! let doc = registry.request(Path::new("book.idml")).await?;
//! println!("{} sections", doc.section_count());
//! # Ok(())
//! # }
//! ```

mod engine;
mod json;

pub use engine::{find_java, EngineConfig, ENGINE_JAR_ENV, EXPORT_FLAG, JAVA_ENV};
pub use json::{load_file, parse_bytes, parse_str};

#[cfg(feature = "async")]
pub use engine::EngineSource;
#[cfg(feature = "async")]
pub use json::JsonFileSource;
#[cfg(feature = "async")]
pub use registry::{SourceRegistry, TreeSource};

#[cfg(feature = "async")]
mod registry {
    use super::{EngineConfig, EngineSource, JsonFileSource};
    use crate::detect::{detect_format_from_path, InputFormat};
    use crate::error::{Error, Result};
    use crate::model::Document;
    use async_trait::async_trait;
    use log::debug;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Arc;

    /// Something that can produce a snapshot for a source artifact.
    ///
    /// Implement this trait to plug in another producer.
    #[async_trait]
    pub trait TreeSource: Send + Sync {
        /// Get the name of this source.
        fn name(&self) -> &str;

        /// File extensions this source handles, lowercase without the dot.
        fn supported_extensions(&self) -> &[&str];

        /// Produce the snapshot for `artifact`.
        async fn request(&self, artifact: &Path) -> Result<Document>;

        /// Check if this source handles the given extension.
        fn supports_extension(&self, ext: &str) -> bool {
            let ext_lower = ext.to_lowercase();
            self.supported_extensions().iter().any(|e| *e == ext_lower)
        }
    }

    /// Maps file extensions to tree sources.
    pub struct SourceRegistry {
        sources: HashMap<String, Arc<dyn TreeSource>>,
        by_name: HashMap<String, Arc<dyn TreeSource>>,
    }

    impl SourceRegistry {
        /// Create a new empty registry.
        pub fn new() -> Self {
            Self {
                sources: HashMap::new(),
                by_name: HashMap::new(),
            }
        }

        /// Create a registry with the JSON file source and the engine source.
        pub fn with_defaults(engine: EngineConfig) -> Self {
            let mut registry = Self::new();
            registry.register(Arc::new(JsonFileSource::new()));
            registry.register(Arc::new(EngineSource::new(engine)));
            registry
        }

        /// Register a source for all its extensions.
        pub fn register(&mut self, source: Arc<dyn TreeSource>) {
            for ext in source.supported_extensions() {
                self.sources.insert(ext.to_lowercase(), source.clone());
            }
            self.by_name.insert(source.name().to_lowercase(), source);
        }

        /// Get the source for an extension.
        pub fn get_for_extension(&self, ext: &str) -> Option<Arc<dyn TreeSource>> {
            self.sources.get(&ext.to_lowercase()).cloned()
        }

        /// Get a source by name.
        pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TreeSource>> {
            self.by_name.get(&name.to_lowercase()).cloned()
        }

        /// Pick the source for a path: by extension, else by sniffing its header.
        pub fn get_for_path(&self, path: &Path) -> Result<Arc<dyn TreeSource>> {
            if let Some(source) = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(|ext| self.get_for_extension(ext))
            {
                return Ok(source);
            }

            let name = match detect_format_from_path(path)? {
                InputFormat::SnapshotJson => "json",
                InputFormat::ZipPackage => "engine",
            };
            self.get_by_name(name)
                .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))
        }

        /// Produce the snapshot for `path` with the matching source.
        pub async fn request(&self, path: &Path) -> Result<Document> {
            let source = self.get_for_path(path)?;
            debug!("loading {} via {}", path.display(), source.name());
            source.request(path).await
        }

        /// All registered extensions, sorted.
        pub fn extensions(&self) -> Vec<&str> {
            let mut exts: Vec<&str> = self.sources.keys().map(String::as_str).collect();
            exts.sort_unstable();
            exts
        }

        /// All registered source names, sorted.
        pub fn names(&self) -> Vec<&str> {
            let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
            names.sort_unstable();
            names
        }
    }

    impl Default for SourceRegistry {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let registry = SourceRegistry::with_defaults(EngineConfig::new());
            assert_eq!(registry.extensions(), vec!["idml", "json"]);
            assert_eq!(registry.names(), vec!["engine", "json"]);
            assert_eq!(registry.get_for_extension("IDML").map(|s| s.name().to_string()).as_deref(), Some("engine"));
        }

        #[test]
        fn test_sniff_unknown_extension() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("snapshot.ast");
            std::fs::write(&path, r#"{"sections":[]}"#).unwrap();

            let registry = SourceRegistry::with_defaults(EngineConfig::new());
            let source = registry.get_for_path(&path).unwrap();
            assert_eq!(source.name(), "json");
        }

        #[tokio::test]
        async fn test_request_json() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("snapshot.json");
            std::fs::write(&path, r#"{"sections":[{"pageNumber":4}]}"#).unwrap();

            let registry = SourceRegistry::with_defaults(EngineConfig::new());
            let doc = registry.request(&path).await.unwrap();
            assert_eq!(doc.sections[0].page_number, 4);
        }

        #[tokio::test]
        async fn test_engine_launch_failure() {
            let config = EngineConfig::new()
                .with_java("/nonexistent/bin/java")
                .with_jar("/nonexistent/engine.jar");
            let source = EngineSource::new(config);
            let err = source.request(Path::new("book.idml")).await.unwrap_err();
            assert!(matches!(err, Error::EngineLaunch(_)));
        }
    }
}
