//! # Decoration
//!
//! Presentation fields shared by every section: vertical padding, background,
//! overlay, top/bottom dividers and the content box.
//!
//! [`DIVIDER_PATHS`] is the only place divider geometry lives. Both renderers
//! read it through [`Divider::path`].

use serde::{Deserialize, Serialize};

/// Vertical padding token. Each token maps to one utility spacing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    #[serde(alias = "pt-0", alias = "pb-0")]
    None,
    #[serde(alias = "pt-4", alias = "pb-4")]
    Small,
    #[serde(alias = "pt-12", alias = "pb-12")]
    Normal,
    #[default]
    #[serde(alias = "pt-16", alias = "pb-16")]
    Medium,
    #[serde(alias = "pt-20", alias = "pb-20")]
    Wide,
    #[serde(alias = "pt-24", alias = "pb-24")]
    Large,
}

impl Padding {
    pub const ALL: [Padding; 6] = [
        Padding::None,
        Padding::Small,
        Padding::Normal,
        Padding::Medium,
        Padding::Wide,
        Padding::Large,
    ];

    pub fn step(self) -> u8 {
        match self {
            Padding::None => 0,
            Padding::Small => 4,
            Padding::Normal => 12,
            Padding::Medium => 16,
            Padding::Wide => 20,
            Padding::Large => 24,
        }
    }

    pub fn top_class(self) -> String {
        format!("pt-{}", self.step())
    }

    pub fn bottom_class(self) -> String {
        format!("pb-{}", self.step())
    }
}

/// Fill kind for a section or page background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
}

/// Divider shape drawn at a section edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Divider {
    #[default]
    None,
    Wave,
    TiltRight,
    TiltLeft,
    Triangle,
    Curve,
}

/// SVG path data for every drawable divider, on a 1440x120 view box.
pub const DIVIDER_PATHS: [(Divider, &str); 5] = [
    (
        Divider::Wave,
        "M0,64L48,69.3C96,75,192,85,288,80C384,75,480,53,576,48C672,43,768,53,864,64C960,75,1056,85,1152,80C1248,75,1344,53,1392,42.7L1440,32L1440,120L1392,120C1344,120,1248,120,1152,120C1056,120,960,120,864,120C768,120,672,120,576,120C480,120,384,120,288,120C192,120,96,120,48,120L0,120Z",
    ),
    (Divider::TiltRight, "M0,120L1440,0L1440,120L0,120Z"),
    (Divider::TiltLeft, "M0,0L1440,120L0,120Z"),
    (Divider::Triangle, "M720,0L1440,120L0,120Z"),
    (
        Divider::Curve,
        "M0,0 C480,120 960,120 1440,0 L1440,120 L0,120 Z",
    ),
];

pub const DIVIDER_VIEW_BOX: &str = "0 0 1440 120";

impl Divider {
    pub const ALL: [Divider; 6] = [
        Divider::None,
        Divider::Wave,
        Divider::TiltRight,
        Divider::TiltLeft,
        Divider::Triangle,
        Divider::Curve,
    ];

    /// Path data for this divider, `None` when nothing is drawn
    pub fn path(self) -> Option<&'static str> {
        DIVIDER_PATHS
            .iter()
            .find(|(divider, _)| *divider == self)
            .map(|(_, path)| *path)
    }

    pub fn name(self) -> &'static str {
        match self {
            Divider::None => "none",
            Divider::Wave => "wave",
            Divider::TiltRight => "tilt-right",
            Divider::TiltLeft => "tilt-left",
            Divider::Triangle => "triangle",
            Divider::Curve => "curve",
        }
    }
}

/// Which edge a divider sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Framing applied around a section's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxStyle {
    #[default]
    None,
    Shadow,
    Border,
    Fill,
    Stitch,
}

/// Padding and rounding shared by every framed box
pub const BOX_PADDING: &str = "p-8 md:p-12 rounded-xl";

impl BoxStyle {
    pub const ALL: [BoxStyle; 5] = [
        BoxStyle::None,
        BoxStyle::Shadow,
        BoxStyle::Border,
        BoxStyle::Fill,
        BoxStyle::Stitch,
    ];

    /// Visual treatment classes, `None` when the section is unframed
    pub fn classes(self) -> Option<&'static str> {
        match self {
            BoxStyle::None => None,
            BoxStyle::Shadow => Some("bg-white shadow-xl text-gray-800"),
            BoxStyle::Border => Some("border border-current/20"),
            BoxStyle::Fill => Some("bg-gray-100/50"),
            BoxStyle::Stitch => Some("border-2 border-dashed border-current/30"),
        }
    }

    pub fn is_framed(self) -> bool {
        self != BoxStyle::None
    }
}

pub const MAX_OVERLAY: f64 = 0.9;

/// Presentation fields embedded in every section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Decoration {
    pub pt: Padding,
    pub pb: Padding,
    pub bg_type: BackgroundKind,
    pub bg_value: String,
    /// Darkness of the black layer over an image background, 0..=0.9
    pub bg_overlay: f64,
    pub divider_top: Divider,
    pub divider_top_color: String,
    pub divider_bottom: Divider,
    pub divider_bottom_color: String,
    pub box_style: BoxStyle,
}

impl Decoration {
    /// Config keys owned by the decoration, in serialization order
    pub const FIELDS: [&'static str; 10] = [
        "pt",
        "pb",
        "bgType",
        "bgValue",
        "bgOverlay",
        "dividerTop",
        "dividerTopColor",
        "dividerBottom",
        "dividerBottomColor",
        "boxStyle",
    ];

    /// Decoration given to a freshly added section
    pub fn seeded() -> Self {
        Self {
            pt: Padding::Large,
            pb: Padding::Large,
            ..Self::default()
        }
    }

    pub fn normalize(&mut self) {
        if !self.bg_overlay.is_finite() {
            self.bg_overlay = 0.0;
        }
        self.bg_overlay = self.bg_overlay.clamp(0.0, MAX_OVERLAY);
    }

    pub fn divider(&self, edge: Edge) -> (Divider, &str) {
        match edge {
            Edge::Top => (self.divider_top, &self.divider_top_color),
            Edge::Bottom => (self.divider_bottom, &self.divider_bottom_color),
        }
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            pt: Padding::Medium,
            pb: Padding::Medium,
            bg_type: BackgroundKind::Color,
            bg_value: "transparent".to_string(),
            bg_overlay: 0.0,
            divider_top: Divider::None,
            divider_top_color: "#ffffff".to_string(),
            divider_bottom: Divider::None,
            divider_bottom_color: "#ffffff".to_string(),
            box_style: BoxStyle::None,
        }
    }
}
