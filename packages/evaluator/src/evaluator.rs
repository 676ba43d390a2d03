//! # Pagecraft Evaluator
//!
//! Evaluates a page [`Document`] to a virtual DOM.
//!
//! ## Purpose
//!
//! The evaluated tree is the single render description both renderers
//! consume. The interactive preview frames and diffs it; the static
//! exporter serializes it. Decoration, the per-type dispatch table and the
//! divider paths therefore exist exactly once.
//!
//! ## Determinism Contract
//!
//! For a given `Document` and [`RenderContext`], `evaluate()` produces the
//! same tree on every call:
//!
//! - attributes and styles live in ordered maps
//! - element keys derive from section, item and menu ids
//! - the copyright year is an input, never read from the clock here
//!
//! **Tests**: see `tests/test_determinism.rs`.
//!
//! ## Error Recovery
//!
//! Evaluation never fails. A section whose type is unknown renders a
//! [`VNode::Error`] body inside its normal decoration shell, so it keeps its
//! position and stays visibly marked.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_evaluator::{Evaluator, RenderContext};
//! use pagecraft_model::Document;
//!
//! let vdom = Evaluator::new(RenderContext::new(2024)).evaluate(&Document::default());
//! ```

use crate::page::page;
use crate::vdom::{EmbedScript, VNode, VirtualDomDocument};
use pagecraft_model::{BackgroundKind, Document, SocialPlatform};
use tracing::{info, instrument};

/// Inputs to evaluation that do not live in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl RenderContext {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Context for the current local year
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Default)]
pub struct Evaluator {
    pub context: RenderContext,
}

impl Evaluator {
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    /// Evaluate a document to virtual DOM
    #[instrument(skip(self, document), fields(sections = document.sections.len(), menu_items = document.menu_items.len()))]
    pub fn evaluate(&self, document: &Document) -> VirtualDomDocument {
        info!("Starting document evaluation");

        let mut vdoc = VirtualDomDocument::new(&document.site_title);
        for (key, value) in page_styles(document) {
            vdoc.add_page_style(key, value);
        }
        vdoc.add_node(page(document, self.context.year));

        if document.embeds(SocialPlatform::Twitter) {
            vdoc.embeds.push(EmbedScript::Twitter);
        }
        if document.embeds(SocialPlatform::Instagram) {
            vdoc.embeds.push(EmbedScript::Instagram);
        }

        info!(nodes = vdoc.nodes.len(), embeds = vdoc.embeds.len(), "Document evaluation complete");
        vdoc
    }
}

/// Evaluate with an explicit context
pub fn evaluate(document: &Document, context: RenderContext) -> VirtualDomDocument {
    Evaluator::new(context).evaluate(document)
}

/// Page-surface styles: text color, page background and font stack
pub fn page_styles(document: &Document) -> Vec<(&'static str, String)> {
    let mut styles = vec![("color", document.text_color.clone())];
    match document.page_bg_type {
        BackgroundKind::Color => styles.push(("background-color", document.page_bg_value.clone())),
        BackgroundKind::Image => {
            styles.push(("background-image", format!("url('{}')", document.page_bg_value)));
            styles.push(("background-size", "cover".to_string()));
        }
    }
    styles.push(("font-family", document.font_family.stack().to_string()));
    styles
}

/// The decorated section element for `section_id`, if present in `vdoc`
pub fn section_node<'a>(vdoc: &'a VirtualDomDocument, section_id: u64) -> Option<&'a VNode> {
    vdoc.find_by_id(&format!("section-{}", section_id))
}
