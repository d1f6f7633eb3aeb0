//! Rendering collaborator boundary.
//!
//! The pipeline hands the renderer a complete document plus a stylesheet
//! and trusts it to paginate. Failures come back as
//! [`Error::Renderer`](crate::Error::Renderer) unchanged and are never
//! retried: they are typically environmental (renderer not installed)
//! rather than transient.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// A print renderer: takes a full HTML document and a stylesheet,
/// produces a paginated file at `output`.
pub trait Renderer {
    fn render(&self, document: &str, stylesheet: &str, output: &Path) -> Result<PathBuf>;
}

/// Renders through the external `weasyprint` executable: document over
/// stdin, stylesheet via a scratch file.
pub struct WeasyPrint {
    executable: String,
}

impl WeasyPrint {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new("weasyprint")
    }
}

impl Renderer for WeasyPrint {
    fn render(&self, document: &str, stylesheet: &str, output: &Path) -> Result<PathBuf> {
        // The scratch file must outlive the child process.
        let mut style_file = tempfile::Builder::new().suffix(".css").tempfile()?;
        style_file.write_all(stylesheet.as_bytes())?;
        style_file.flush()?;

        let mut child = Command::new(&self.executable)
            .arg("--stylesheet")
            .arg(style_file.path())
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Renderer(format!("failed to start {}: {e}", self.executable)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(document.as_bytes())
                .map_err(|e| Error::Renderer(format!("failed to feed document: {e}")))?;
        }
        drop(child.stdin.take());

        let result = child
            .wait_with_output()
            .map_err(|e| Error::Renderer(e.to_string()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Renderer(format!(
                "{} exited with {}: {}",
                self.executable,
                result.status,
                stderr.trim()
            )));
        }

        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_renderer_error() {
        let renderer = WeasyPrint::new("ficpress-no-such-renderer");
        let err = renderer
            .render("<html></html>", "p {}", Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(err, Error::Renderer(_)));
    }
}
