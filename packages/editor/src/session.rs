//! # Edit Session
//!
//! Holds the document being edited as a shared snapshot, the active
//! (focused) section and a version counter.
//!
//! Each applied mutation swaps in a new `Arc<Document>`. Renderers that
//! took a [`EditSession::snapshot`] keep reading the document they were
//! given.

use crate::artifact::{Artifact, Confirm, Downloader};
use crate::{Applied, EditorError, Mutation};
use pagecraft_compiler_html::ExportOptions;
use pagecraft_model::Document;
use std::sync::Arc;
use tracing::{debug, info};

pub const DELETE_SECTION_PROMPT: &str = "Are you sure you want to delete this section?";

#[derive(Debug, Clone)]
pub struct EditSession {
    document: Arc<Document>,

    /// Incremented once per mutation that changed the document
    version: u64,

    /// Section the editor is focused on
    active_section: Option<u64>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document: Arc::new(document),
            version: 0,
            active_section: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Shared handle to the current document
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn active_section(&self) -> Option<u64> {
        self.active_section
    }

    pub fn set_active_section(&mut self, section_id: Option<u64>) {
        self.active_section = section_id;
    }

    /// Apply a mutation. Returns whether the document changed.
    pub fn apply(&mut self, mutation: &Mutation) -> bool {
        self.commit(mutation.apply(&self.document))
    }

    /// Apply a mutation, failing when it could not apply
    pub fn try_apply(&mut self, mutation: &Mutation) -> Result<(), EditorError> {
        let applied = mutation.try_apply(&self.document)?;
        self.commit(applied);
        Ok(())
    }

    fn commit(&mut self, applied: Applied) -> bool {
        if !applied.changed {
            return false;
        }

        if let Some(focus) = applied.focus {
            self.active_section = Some(focus);
        }
        if let Some(active) = self.active_section {
            if applied.document.section(active).is_none() {
                self.active_section = None;
            }
        }

        self.document = Arc::new(applied.document);
        self.version += 1;
        debug!(version = self.version, active_section = ?self.active_section, "Applied mutation");
        true
    }

    /// Deletion is always permitted; the confirmation gate is separate
    pub fn can_delete(&self) -> bool {
        true
    }

    /// Delete a section once the user confirms
    pub fn request_delete(&mut self, section_id: u64, confirm: &dyn Confirm) -> Result<(), EditorError> {
        if !confirm.confirm(DELETE_SECTION_PROMPT) {
            debug!(section_id, "Section deletion cancelled");
            return Err(EditorError::NotConfirmed(section_id));
        }
        self.try_apply(&Mutation::DeleteSection { id: section_id })
    }

    /// Build the static page and hand it to the downloader
    pub fn export_html(
        &self,
        options: &ExportOptions,
        downloader: &mut dyn Downloader,
    ) -> Result<Artifact, EditorError> {
        let artifact = Artifact::html_with(&self.document, options);
        downloader.save(&artifact)?;
        info!(bytes = artifact.len(), "Exported HTML");
        Ok(artifact)
    }

    /// Build the config record and hand it to the downloader
    pub fn export_config(&self, downloader: &mut dyn Downloader) -> Result<Artifact, EditorError> {
        let artifact = Artifact::config(&self.document)?;
        downloader.save(&artifact)?;
        info!(bytes = artifact.len(), "Exported config");
        Ok(artifact)
    }
}
