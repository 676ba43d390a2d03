//! Export artifacts and the host collaborators that receive them.

use crate::EditorError;
use pagecraft_compiler_html::{export_with, ExportOptions, EXPORT_FILENAME};
use pagecraft_model::{to_config_string, Document};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILENAME: &str = "config.json";
pub const HTML_MIME: &str = "text/html";
pub const JSON_MIME: &str = "application/json";

/// Bytes ready to hand to a download mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub suggested_filename: String,
    pub mime_type: String,
}

impl Artifact {
    /// Standalone page, copyright year from the current date
    pub fn html(document: &Document) -> Self {
        Self::html_with(document, &ExportOptions::default())
    }

    pub fn html_with(document: &Document, options: &ExportOptions) -> Self {
        Self {
            bytes: export_with(document, options).into_bytes(),
            suggested_filename: EXPORT_FILENAME.to_string(),
            mime_type: HTML_MIME.to_string(),
        }
    }

    /// Pretty-printed config record the viewer loads at startup
    pub fn config(document: &Document) -> Result<Self, EditorError> {
        Ok(Self {
            bytes: to_config_string(document)?.into_bytes(),
            suggested_filename: CONFIG_FILENAME.to_string(),
            mime_type: JSON_MIME.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Receives finished artifacts (a browser save dialog, a directory, ...)
pub trait Downloader {
    fn save(&mut self, artifact: &Artifact) -> Result<(), EditorError>;
}

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Writes each artifact into a directory under its suggested name
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in save order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Downloader for DirectoryDownloader {
    fn save(&mut self, artifact: &Artifact) -> Result<(), EditorError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.suggested_filename);
        std::fs::write(&path, &artifact.bytes)?;
        info!(path = %path.display(), bytes = artifact.len(), mime = %artifact.mime_type, "Saved artifact");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_metadata() {
        let doc = Document::default();

        let html = Artifact::html_with(&doc, &ExportOptions::new(2024));
        assert_eq!(html.suggested_filename, "index.html");
        assert_eq!(html.mime_type, "text/html");
        assert!(String::from_utf8(html.bytes).unwrap().starts_with("<!DOCTYPE html>"));

        let config = Artifact::config(&doc).unwrap();
        assert_eq!(config.suggested_filename, "config.json");
        assert_eq!(config.mime_type, "application/json");
        let text = String::from_utf8(config.bytes).unwrap();
        assert!(text.starts_with("{\n  \"siteTitle\""));
    }

    #[test]
    fn test_closure_confirm() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm("delete?"));
        assert!(!no.confirm("delete?"));
    }
}
