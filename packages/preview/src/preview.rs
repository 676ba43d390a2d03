use crate::frame::{error_view, screen};
use crate::types::{Effect, PreviewFrame, PreviewOptions, ScrollBlock};
use pagecraft_evaluator::{
    diff_page_meta, diff_vnode, section_node, Evaluator, RenderContext, VDocPatch, VNode,
    VirtualDomDocument,
};
use pagecraft_model::Document;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, info};

/// The last frame a host mounted
#[derive(Debug)]
struct Mounted {
    tree: VNode,
    /// `None` while the error view is mounted
    page: Option<VirtualDomDocument>,
}

/// Stateful interactive renderer.
///
/// Holds the previously mounted frame so each new frame carries patches
/// against it, and the previous focus so scrolling only happens when
/// focus moves.
///
/// Patch paths address [`PreviewFrame::tree`]; the empty path is the tree
/// root itself.
#[derive(Debug, Default)]
pub struct Preview {
    context: RenderContext,
    mounted: Option<Mounted>,
    last_focus: Option<u64>,
}

impl Preview {
    pub fn new(context: RenderContext) -> Self {
        Self {
            context,
            mounted: None,
            last_focus: None,
        }
    }

    pub fn render(&mut self, document: &Document, options: &PreviewOptions) -> PreviewFrame {
        let context = self.context;
        self.render_with(document, options, |document| {
            Evaluator::new(context).evaluate(document)
        })
    }

    /// Render with a custom page builder, inside the error boundary
    pub fn render_with<F>(
        &mut self,
        document: &Document,
        options: &PreviewOptions,
        build: F,
    ) -> PreviewFrame
    where
        F: FnOnce(&Document) -> VirtualDomDocument,
    {
        let focus_changed = options.focus_section != self.last_focus;
        self.last_focus = options.focus_section;

        let vdoc = match catch_unwind(AssertUnwindSafe(|| build(document))) {
            Ok(vdoc) => vdoc,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(error = %message, "Preview crashed, showing error view");
                let tree = error_view(&message);
                let patches = self.mount(tree.clone(), None);
                return PreviewFrame {
                    tree,
                    patches,
                    effects: Vec::new(),
                    error: Some(message),
                };
            }
        };

        let mut effects = Vec::new();
        if focus_changed {
            if let Some(id) = options.focus_section {
                if section_node(&vdoc, id).is_some() {
                    effects.push(Effect::ScrollIntoView {
                        element_id: format!("section-{}", id),
                        block: ScrollBlock::Center,
                        smooth: true,
                    });
                } else {
                    debug!(section_id = id, "Focused section not in page, skipping scroll");
                }
            }
        }

        let tree = screen(&vdoc, options.view_mode, options.diagnostic.as_deref());
        let patches = self.mount(tree.clone(), Some(vdoc));

        info!(
            view_mode = %options.view_mode,
            patches = patches.len(),
            effects = effects.len(),
            "Rendered preview frame"
        );

        PreviewFrame {
            tree,
            patches,
            effects,
            error: None,
        }
    }

    /// Forget the mounted frame; the next frame re-creates it
    pub fn reset(&mut self) {
        self.mounted = None;
        self.last_focus = None;
    }

    /// Record `tree` as mounted and return the patches that turn the
    /// previous frame into it
    fn mount(&mut self, tree: VNode, page: Option<VirtualDomDocument>) -> Vec<VDocPatch> {
        let blank = VirtualDomDocument::default();
        let mut patches = match (&self.mounted, &page) {
            (Some(Mounted { page: Some(old), .. }), Some(new)) => diff_page_meta(old, new),
            (_, Some(new)) => diff_page_meta(&blank, new),
            (_, None) => Vec::new(),
        };

        match &self.mounted {
            None => patches.push(VDocPatch::CreateNode {
                path: Vec::new(),
                node: tree.clone(),
            }),
            Some(Mounted {
                tree: old_tree,
                page: Some(_),
            }) if page.is_some() => patches.extend(diff_vnode(old_tree, &tree, Vec::new())),
            Some(_) => patches.push(VDocPatch::ReplaceNode {
                path: Vec::new(),
                node: tree.clone(),
            }),
        }

        self.mounted = Some(Mounted { tree, page });
        patches
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown rendering error".to_string()
    }
}
