//! Decoration rendering: the section shell around every body.
//!
//! ```text
//! div#section-{id}.relative.{pt}.{pb}.animate-fadeInUp   background, delay
//! ├─ divider (top, rotated)        when dividerTop != none
//! ├─ overlay                       when bgType = image
//! ├─ wrapper                       box frame or plain z-10 layer
//! │  └─ inner                      content width
//! │     └─ body
//! └─ divider (bottom)              when dividerBottom != none
//! ```

use crate::vdom::VNode;
use pagecraft_model::{BackgroundKind, Decoration, Divider, Edge, BOX_PADDING, DIVIDER_VIEW_BOX};

pub const SECTION_CLASS: &str = "relative";
pub const ENTER_ANIMATION_CLASS: &str = "animate-fadeInUp";
pub const CONTENT_WIDTH_CLASS: &str = "w-full max-w-5xl mx-auto px-6";

/// Entry animation delay for the section at `index`
pub fn animation_delay(index: usize) -> String {
    format!("{:.1}s", 0.2 + index as f64 * 0.1)
}

/// Wrap `body` in the decoration shell for section `anchor`
pub fn decorate(anchor: &str, index: usize, decoration: &Decoration, body: VNode) -> VNode {
    let mut shell = VNode::element("div")
        .with_attr("id", anchor)
        .with_class(format!(
            "{} {} {} {}",
            SECTION_CLASS,
            decoration.pt.top_class(),
            decoration.pb.bottom_class(),
            ENTER_ANIMATION_CLASS
        ))
        .with_style("animation-delay", animation_delay(index))
        .with_key(anchor);

    shell = match decoration.bg_type {
        BackgroundKind::Color => shell.with_style("background-color", decoration.bg_value.as_str()),
        BackgroundKind::Image => shell
            .with_style("background-image", format!("url('{}')", decoration.bg_value))
            .with_style("background-size", "cover")
            .with_style("background-position", "center"),
    };

    shell
        .with_optional_child(divider(decoration, Edge::Top))
        .with_optional_child(overlay(decoration))
        .with_child(wrapper(decoration, body))
        .with_optional_child(divider(decoration, Edge::Bottom))
}

/// Black layer over an image background
pub fn overlay(decoration: &Decoration) -> Option<VNode> {
    if decoration.bg_type != BackgroundKind::Image {
        return None;
    }
    Some(
        VNode::element("div")
            .with_class("absolute inset-0 bg-black z-0 pointer-events-none")
            .with_style("opacity", decoration.bg_overlay.to_string()),
    )
}

/// Divider overlay for one edge, `None` when the edge has no divider
pub fn divider(decoration: &Decoration, edge: Edge) -> Option<VNode> {
    let (shape, color) = decoration.divider(edge);
    divider_svg(shape, color).map(|svg| {
        let position = match edge {
            Edge::Top => "top-0 translate-y-[-1px] rotate-180",
            Edge::Bottom => "bottom-0 translate-y-[1px]",
        };
        VNode::element("div")
            .with_class(format!(
                "absolute left-0 w-full overflow-hidden leading-[0] z-20 {}",
                position
            ))
            .with_child(svg)
    })
}

/// The SVG for a divider shape filled with `color`
pub fn divider_svg(shape: Divider, color: &str) -> Option<VNode> {
    let path = shape.path()?;
    Some(
        VNode::element("svg")
            .with_attr("viewBox", DIVIDER_VIEW_BOX)
            .with_attr("fill", color)
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("preserveAspectRatio", "none")
            .with_child(VNode::element("path").with_attr("d", path)),
    )
}

/// Box frame (or plain layer) plus the content-width inner div
pub fn wrapper(decoration: &Decoration, body: VNode) -> VNode {
    match decoration.box_style.classes() {
        Some(box_classes) => VNode::element("div")
            .with_class(format!("{} relative z-10", CONTENT_WIDTH_CLASS))
            .with_child(
                VNode::element("div")
                    .with_class(format!("{} {}", box_classes, BOX_PADDING))
                    .with_child(VNode::element("div").with_class("w-full").with_child(body)),
            ),
        None => VNode::element("div").with_class("relative z-10").with_child(
            VNode::element("div")
                .with_class(CONTENT_WIDTH_CLASS)
                .with_child(body),
        ),
    }
}
