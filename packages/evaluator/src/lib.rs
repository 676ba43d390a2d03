pub mod decoration;
pub mod evaluator;
pub mod page;
pub mod sections;
pub mod vdom;
pub mod vdom_differ;
pub mod video;

#[cfg(test)]
mod tests_sections;

#[cfg(test)]
mod tests_page;

pub use evaluator::{evaluate, page_styles, section_node, Evaluator, RenderContext};
pub use page::{FOOTER_ID, HERO_ID, MENU_BUTTON_ID, MOBILE_MENU_ID, SECTIONS_ID};
pub use sections::render_body;
pub use vdom::{EmbedScript, VNode, VirtualDomDocument, ERROR_MARKER_CLASS};
pub use vdom_differ::{diff_page_meta, diff_vdocument, diff_vnode, VDocPatch};
pub use video::{youtube_id, VideoSource};
