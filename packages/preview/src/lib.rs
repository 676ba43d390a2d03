//! Interactive renderer: frames the evaluated page for a live host, diffs
//! it against the previous frame and emits scroll effects for focus.

pub mod frame;
pub mod preview;
pub mod types;

pub use frame::{loading_view, BANNER_ID, VIEWPORT_ID};
pub use preview::Preview;
pub use types::{Effect, PreviewError, PreviewFrame, PreviewOptions, ScrollBlock, ViewMode};
