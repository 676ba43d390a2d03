//! Core types for the interactive preview

use pagecraft_evaluator::{VDocPatch, VNode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PreviewError {
    #[error("Unknown view mode `{0}` (expected desktop or mobile)")]
    UnknownViewMode(String),
}

/// Device frame the page is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Fills the host area
    #[default]
    Desktop,

    /// 390x800 phone frame
    Mobile,
}

impl ViewMode {
    /// Frame size in px, `None` when the frame fills its host
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            ViewMode::Desktop => None,
            ViewMode::Mobile => Some((390, 800)),
        }
    }

    pub fn frame_class(self) -> &'static str {
        match self {
            ViewMode::Desktop => "w-full h-full rounded-md",
            ViewMode::Mobile => "w-[390px] h-[800px] rounded-[3rem] border-8 border-gray-900",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Desktop => "desktop",
            ViewMode::Mobile => "mobile",
        })
    }
}

impl FromStr for ViewMode {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(ViewMode::Desktop),
            "mobile" => Ok(ViewMode::Mobile),
            other => Err(PreviewError::UnknownViewMode(other.to_string())),
        }
    }
}

/// Per-render inputs that are not part of the document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewOptions {
    pub view_mode: ViewMode,
    /// Section to bring into view
    pub focus_section: Option<u64>,
    /// Non-blocking message shown above the page
    pub diagnostic: Option<String>,
}

impl PreviewOptions {
    pub fn desktop() -> Self {
        Self::default()
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_focus(mut self, section_id: u64) -> Self {
        self.focus_section = Some(section_id);
        self
    }

    pub fn with_diagnostic(mut self, message: impl Into<String>) -> Self {
        self.diagnostic = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

/// Presentation side effect for the host to perform after mounting a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    ScrollIntoView {
        element_id: String,
        block: ScrollBlock,
        smooth: bool,
    },
}

/// Output of one preview render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewFrame {
    /// Full tree to mount
    pub tree: VNode,
    /// Changes that turn the previously mounted tree into `tree`.
    /// Paths are relative to `tree`; the first frame is one root `CreateNode`.
    pub patches: Vec<VDocPatch>,
    pub effects: Vec<Effect>,
    /// Set when the error boundary replaced the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
