//! # Pagecraft Editor
//!
//! Editing engine for page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document, sections, config boundary  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session + mutations                 │
//! │  - Copy-on-write document snapshots         │
//! │  - Focus tracking for added sections        │
//! │  - Confirmation gate for deletes            │
//! │  - Export artifacts for a downloader        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview / compiler-html: render a snapshot  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, Mutation};
//! use pagecraft_model::SectionKind;
//!
//! let mut session = EditSession::default();
//! session.apply(&Mutation::AddSection { kind: SectionKind::Columns });
//! let snapshot = session.snapshot();
//! ```

mod artifact;
mod errors;
mod mutations;
mod session;

pub use artifact::{
    Artifact, Confirm, DirectoryDownloader, Downloader, CONFIG_FILENAME, HTML_MIME, JSON_MIME,
};
pub use errors::EditorError;
pub use mutations::{Applied, Direction, Mutation, MutationError, MutationResult};
pub use session::{EditSession, DELETE_SECTION_PROMPT};
