//! The external conversion engine.
//!
//! The engine is a Java program invoked as
//! `<java> -jar <engine.jar> --export-ast <artifact>`; it writes the snapshot
//! to stdout and diagnostics to stderr.

use super::json::parse_bytes;
use crate::error::{Error, Result};
use crate::model::Document;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Flag that makes the engine print the snapshot instead of converting.
pub const EXPORT_FLAG: &str = "--export-ast";

/// Environment variable naming the engine jar.
pub const ENGINE_JAR_ENV: &str = "ASTSCOPE_ENGINE_JAR";

/// Environment variable naming the Java executable.
pub const JAVA_ENV: &str = "ASTSCOPE_JAVA";

const JAVA_CANDIDATES: &[&str] = &[
    "/opt/homebrew/opt/java/bin/java",
    "/opt/homebrew/opt/openjdk/bin/java",
    "/opt/homebrew/opt/openjdk@21/bin/java",
    "/opt/homebrew/opt/openjdk@17/bin/java",
    "/usr/local/bin/java",
    "/usr/bin/java",
];

/// How to launch the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Java executable; discovered when unset
    pub java: Option<PathBuf>,

    /// Engine jar
    pub jar: Option<PathBuf>,

    /// Extra arguments placed before the artifact path
    pub extra_args: Vec<String>,
}

impl EngineConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `ASTSCOPE_JAVA` and `ASTSCOPE_ENGINE_JAR`.
    pub fn from_env() -> Self {
        Self {
            java: env::var_os(JAVA_ENV).map(PathBuf::from),
            jar: env::var_os(ENGINE_JAR_ENV).map(PathBuf::from),
            extra_args: Vec::new(),
        }
    }

    /// Set the Java executable.
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = Some(java.into());
        self
    }

    /// Set the engine jar.
    pub fn with_jar(mut self, jar: impl Into<PathBuf>) -> Self {
        self.jar = Some(jar.into());
        self
    }

    /// Add an extra engine argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Check if a jar is configured.
    pub fn is_configured(&self) -> bool {
        self.jar.is_some()
    }

    /// The Java executable that will be run.
    pub fn java_path(&self) -> PathBuf {
        self.java.clone().unwrap_or_else(find_java)
    }

    /// Arguments passed to Java for exporting `artifact`.
    pub fn command_args(&self, artifact: &Path) -> Result<Vec<OsString>> {
        let jar = self.jar.as_ref().ok_or_else(|| {
            Error::EngineLaunch(format!("engine jar not configured (set {})", ENGINE_JAR_ENV))
        })?;

        let mut args: Vec<OsString> = vec!["-jar".into(), jar.into(), EXPORT_FLAG.into()];
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(artifact.into());
        Ok(args)
    }
}

/// Locate a Java executable: `JAVA_HOME`, then well-known locations, then `PATH`.
pub fn find_java() -> PathBuf {
    let exe = if cfg!(windows) { "java.exe" } else { "java" };

    if let Some(home) = env::var_os("JAVA_HOME") {
        let candidate = PathBuf::from(home).join("bin").join(exe);
        if candidate.exists() {
            return candidate;
        }
    }

    JAVA_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from(exe))
}

/// Turn the engine's exit status and output into a snapshot.
pub(crate) fn interpret_output(
    success: bool,
    code: Option<i32>,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<Document> {
    if !success {
        let stderr = String::from_utf8_lossy(stderr).trim().to_string();
        let message = if stderr.is_empty() {
            match code {
                Some(code) => format!("engine exited with status {}", code),
                None => "engine terminated by signal".to_string(),
            }
        } else {
            stderr
        };
        return Err(Error::Engine(message));
    }
    parse_bytes(stdout)
}

#[cfg(feature = "async")]
pub use self::source::EngineSource;

#[cfg(feature = "async")]
mod source {
    use super::{interpret_output, EngineConfig};
    use crate::error::{Error, Result};
    use crate::model::Document;
    use crate::source::TreeSource;
    use async_trait::async_trait;
    use log::debug;
    use std::path::Path;

    /// Produces snapshots by running the engine on a source artifact.
    #[derive(Debug, Clone, Default)]
    pub struct EngineSource {
        config: EngineConfig,
    }

    impl EngineSource {
        pub fn new(config: EngineConfig) -> Self {
            Self { config }
        }

        /// Get the engine configuration.
        pub fn config(&self) -> &EngineConfig {
            &self.config
        }
    }

    #[async_trait]
    impl TreeSource for EngineSource {
        fn name(&self) -> &str {
            "engine"
        }

        fn supported_extensions(&self) -> &[&str] {
            &["idml"]
        }

        async fn request(&self, artifact: &Path) -> Result<Document> {
            let java = self.config.java_path();
            let args = self.config.command_args(artifact)?;
            debug!("running {} {:?}", java.display(), args);

            let output = tokio::process::Command::new(&java)
                .args(&args)
                .output()
                .await
                .map_err(|e| Error::EngineLaunch(format!("{}: {}", java.display(), e)))?;

            debug!(
                "engine exited with {:?}, {} bytes on stdout",
                output.status.code(),
                output.stdout.len()
            );
            interpret_output(
                output.status.success(),
                output.status.code(),
                &output.stdout,
                &output.stderr,
            )
        }
    }
}
