//! Host-facing views wrapped around the evaluated page.

use crate::types::ViewMode;
use pagecraft_evaluator::{VNode, VirtualDomDocument};

pub const VIEWPORT_ID: &str = "preview-viewport";
pub const BANNER_ID: &str = "preview-diagnostic";

const VIEWPORT_CLASS: &str =
    "relative shadow-2xl overflow-y-auto overflow-x-hidden transition-all duration-500 ease-in-out border border-gray-800/20";

/// Device frame carrying the page-surface styles, with the page inside
pub fn viewport(vdoc: &VirtualDomDocument, view_mode: ViewMode) -> VNode {
    let mut frame = VNode::element("div")
        .with_attr("id", VIEWPORT_ID)
        .with_attr("data-view-mode", view_mode.to_string())
        .with_key(VIEWPORT_ID)
        .with_class(format!("{} {}", VIEWPORT_CLASS, view_mode.frame_class()));
    for (key, value) in &vdoc.page_styles {
        frame = frame.with_style(key.as_str(), value.as_str());
    }
    frame.with_children(vdoc.nodes.iter().cloned())
}

/// Screen root: optional diagnostic banner above the framed page.
/// Both children are keyed so toggling the banner leaves the page mounted.
pub fn screen(vdoc: &VirtualDomDocument, view_mode: ViewMode, diagnostic: Option<&str>) -> VNode {
    VNode::element("div")
        .with_class("w-full min-h-screen bg-white")
        .with_optional_child(diagnostic.map(banner))
        .with_child(viewport(vdoc, view_mode))
}

/// Quiet, non-blocking notice pinned to the top-left corner
pub fn banner(message: &str) -> VNode {
    VNode::element("div")
        .with_attr("id", BANNER_ID)
        .with_attr("role", "status")
        .with_key(BANNER_ID)
        .with_class("fixed top-0 left-0 bg-yellow-100 text-yellow-800 text-xs p-1 z-50 opacity-75 hover:opacity-100")
        .with_child(VNode::text(message))
}

/// Whole-preview replacement shown when rendering failed
pub fn error_view(message: &str) -> VNode {
    VNode::element("div")
        .with_attr("role", "alert")
        .with_class("p-10 text-red-600 bg-white")
        .with_child(
            VNode::element("h1")
                .with_class("text-2xl font-bold mb-4")
                .with_child(VNode::text("Something went wrong.")),
        )
        .with_child(
            VNode::element("pre")
                .with_class("bg-gray-100 p-4 rounded text-sm overflow-auto")
                .with_child(VNode::text(message)),
        )
}

/// Placeholder while a host is still resolving its document
pub fn loading_view() -> VNode {
    VNode::element("div")
        .with_class("flex flex-col items-center justify-center h-screen bg-white text-gray-800")
        .with_child(
            VNode::element("div")
                .with_class("animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mb-4"),
        )
        .with_child(VNode::element("p").with_child(VNode::text("Loading Viewer...")))
}
