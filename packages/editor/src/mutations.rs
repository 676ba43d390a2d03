//! # Document Mutations
//!
//! Structural edits to a page [`Document`].
//!
//! ## Mutation Semantics
//!
//! Every mutation reads the current document and builds a new one; the
//! input is never touched, so snapshots held elsewhere stay valid.
//!
//! ### AddSection
//! - Appends a seeded section with id `max + 1`
//! - The new id becomes the focus target
//!
//! ### MoveSection
//! - Swaps the section at `index` with its neighbour
//! - No-op at either boundary; never rotates
//!
//! ### UpdateSectionField
//! - Replaces one field, then re-normalizes the section
//! - `id` and `type` are identity and cannot be replaced
//! - Names outside the section type's schema are rejected
//!
//! ## Failure
//!
//! [`Mutation::try_apply`] reports why a mutation could not apply.
//! [`Mutation::apply`] is total: a mutation that cannot apply leaves the
//! document unchanged and is logged.

use pagecraft_model::{Document, MenuLink, ModelError, Section, SectionKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Label and url for a freshly added menu entry
const NEW_MENU_LABEL: &str = "Menu";
const NEW_MENU_URL: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Structural edits on a page document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a seeded section of `kind`
    AddSection { kind: SectionKind },

    DeleteSection { id: u64 },

    /// Swap the section at `index` with its neighbour in `direction`
    MoveSection { index: usize, direction: Direction },

    /// Replace one field of one section
    UpdateSectionField {
        id: u64,
        field: String,
        value: Value,
    },

    AddMenuItem,

    DeleteMenuItem { id: u64 },

    UpdateMenuItem { id: u64, label: String, url: String },

    /// Replace one top-level page setting
    UpdateSetting { field: String, value: Value },

    /// Append a seeded entry to a section's item list
    AddSectionItem { section_id: u64 },

    DeleteSectionItem { section_id: u64, item_id: u64 },

    UpdateSectionItem {
        section_id: u64,
        item_id: u64,
        field: String,
        value: Value,
    },
}

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("Section not found: {0}")]
    SectionNotFound(u64),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(u64),

    #[error("Item {item_id} not found in section {section_id}")]
    ItemNotFound { section_id: u64, item_id: u64 },

    #[error("Section {0} has no item list")]
    NoItemList(u64),

    #[error("Cannot move section {index} {direction}")]
    AtBoundary { index: usize, direction: Direction },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MutationError {
    /// Boundary moves are expected no-ops, not mistakes
    pub fn is_boundary(&self) -> bool {
        matches!(self, MutationError::AtBoundary { .. })
    }
}

pub type MutationResult<T> = Result<T, MutationError>;

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub document: Document,
    /// Section to bring into view after this edit
    pub focus: Option<u64>,
    /// False when the mutation was a no-op
    pub changed: bool,
}

impl Applied {
    fn changed(document: Document) -> Self {
        Self {
            document,
            focus: None,
            changed: true,
        }
    }

    fn focused(document: Document, focus: u64) -> Self {
        Self {
            document,
            focus: Some(focus),
            changed: true,
        }
    }
}

impl Mutation {
    /// Apply the mutation, leaving the document unchanged when it cannot apply
    pub fn apply(&self, document: &Document) -> Applied {
        match self.try_apply(document) {
            Ok(applied) => applied,
            Err(err) => {
                if err.is_boundary() {
                    debug!(error = %err, "Mutation is a no-op");
                } else {
                    warn!(error = %err, mutation = ?self, "Mutation skipped");
                }
                Applied {
                    document: document.clone(),
                    focus: None,
                    changed: false,
                }
            }
        }
    }

    pub fn try_apply(&self, document: &Document) -> MutationResult<Applied> {
        match self {
            Mutation::AddSection { kind } => Ok(Self::apply_add_section(document, *kind)),

            Mutation::DeleteSection { id } => Self::apply_delete_section(document, *id),

            Mutation::MoveSection { index, direction } => {
                Self::apply_move_section(document, *index, *direction)
            }

            Mutation::UpdateSectionField { id, field, value } => {
                Self::apply_update_section_field(document, *id, field, value)
            }

            Mutation::AddMenuItem => Ok(Self::apply_add_menu_item(document)),

            Mutation::DeleteMenuItem { id } => Self::apply_delete_menu_item(document, *id),

            Mutation::UpdateMenuItem { id, label, url } => {
                Self::apply_update_menu_item(document, *id, label, url)
            }

            Mutation::UpdateSetting { field, value } => {
                let next = document.with_setting(field, value.clone())?;
                Ok(Applied::changed(next))
            }

            Mutation::AddSectionItem { section_id } => {
                Self::with_section(document, *section_id, |section| {
                    section
                        .push_item()
                        .map(|_| ())
                        .ok_or(MutationError::NoItemList(*section_id))
                })
            }

            Mutation::DeleteSectionItem {
                section_id,
                item_id,
            } => Self::with_section(document, *section_id, |section| {
                if section.remove_item(*item_id) {
                    Ok(())
                } else {
                    Err(MutationError::ItemNotFound {
                        section_id: *section_id,
                        item_id: *item_id,
                    })
                }
            }),

            Mutation::UpdateSectionItem {
                section_id,
                item_id,
                field,
                value,
            } => Self::with_section(document, *section_id, |section| {
                if section.update_item(*item_id, field, value.clone())? {
                    Ok(())
                } else {
                    Err(MutationError::ItemNotFound {
                        section_id: *section_id,
                        item_id: *item_id,
                    })
                }
            }),
        }
    }

    fn apply_add_section(document: &Document, kind: SectionKind) -> Applied {
        let id = document.next_section_id();
        let mut next = document.clone();
        next.sections.push(Section {
            id,
            ..pagecraft_model::defaults_for(kind)
        });
        debug!(section_id = id, section_type = %kind, "Added section");
        Applied::focused(next, id)
    }

    fn apply_delete_section(document: &Document, id: u64) -> MutationResult<Applied> {
        let index = document
            .section_index(id)
            .ok_or(MutationError::SectionNotFound(id))?;
        let mut next = document.clone();
        next.sections.remove(index);
        debug!(section_id = id, "Deleted section");
        Ok(Applied::changed(next))
    }

    fn apply_move_section(
        document: &Document,
        index: usize,
        direction: Direction,
    ) -> MutationResult<Applied> {
        let len = document.sections.len();
        let neighbour = match direction {
            Direction::Up if index > 0 && index < len => index - 1,
            Direction::Down if index + 1 < len => index + 1,
            _ => return Err(MutationError::AtBoundary { index, direction }),
        };
        let mut next = document.clone();
        next.sections.swap(index, neighbour);
        Ok(Applied::changed(next))
    }

    fn apply_update_section_field(
        document: &Document,
        id: u64,
        field: &str,
        value: &Value,
    ) -> MutationResult<Applied> {
        let index = document
            .section_index(id)
            .ok_or(MutationError::SectionNotFound(id))?;
        let updated = document.sections[index].with_field(field, value.clone())?;
        let mut next = document.clone();
        next.sections[index] = updated;
        Ok(Applied::changed(next))
    }

    fn apply_add_menu_item(document: &Document) -> Applied {
        let mut next = document.clone();
        next.menu_items.push(MenuLink {
            id: document.next_menu_id(),
            label: NEW_MENU_LABEL.to_string(),
            url: NEW_MENU_URL.to_string(),
        });
        Applied::changed(next)
    }

    fn apply_delete_menu_item(document: &Document, id: u64) -> MutationResult<Applied> {
        if document.menu_item(id).is_none() {
            return Err(MutationError::MenuItemNotFound(id));
        }
        let mut next = document.clone();
        next.menu_items.retain(|item| item.id != id);
        Ok(Applied::changed(next))
    }

    fn apply_update_menu_item(
        document: &Document,
        id: u64,
        label: &str,
        url: &str,
    ) -> MutationResult<Applied> {
        let mut next = document.clone();
        let item = next
            .menu_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(MutationError::MenuItemNotFound(id))?;
        item.label = label.to_string();
        item.url = url.to_string();
        Ok(Applied::changed(next))
    }

    /// Edit a copy of one section in place and focus it
    fn with_section<F>(document: &Document, section_id: u64, edit: F) -> MutationResult<Applied>
    where
        F: FnOnce(&mut Section) -> MutationResult<()>,
    {
        let index = document
            .section_index(section_id)
            .ok_or(MutationError::SectionNotFound(section_id))?;
        let mut section = document.sections[index].clone();
        edit(&mut section)?;
        let mut next = document.clone();
        next.sections[index] = section;
        Ok(Applied::focused(next, section_id))
    }
}
