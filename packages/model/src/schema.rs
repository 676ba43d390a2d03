//! # Section Schema Registry
//!
//! The closed set of section types, the fields each one exposes to the
//! editor, and the seed content a freshly added section starts with.
//!
//! `fields_for` is descriptive only. Renderers never consult it; they work
//! from normalized [`Section`] values.

use crate::decoration::{BoxStyle, Decoration};
use crate::error::ModelError;
use crate::section::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=2070&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Text,
    Image,
    ImageText,
    Heading,
    Video,
    Button,
    Social,
    Accordion,
    PostCard,
    Columns,
    Links,
    Box,
}

impl SectionKind {
    pub const ALL: [SectionKind; 12] = [
        SectionKind::Text,
        SectionKind::Image,
        SectionKind::ImageText,
        SectionKind::Heading,
        SectionKind::Video,
        SectionKind::Button,
        SectionKind::Social,
        SectionKind::Accordion,
        SectionKind::PostCard,
        SectionKind::Columns,
        SectionKind::Links,
        SectionKind::Box,
    ];

    pub fn as_str(self) -> &'static str {
        self.descriptor().name
    }

    pub fn descriptor(self) -> &'static SectionDescriptor {
        // SECTION_DESCRIPTORS is laid out in `ALL` order
        &SECTION_DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTION_DESCRIPTORS
            .iter()
            .find(|descriptor| descriptor.name == s)
            .map(|descriptor| descriptor.kind)
            .ok_or_else(|| ModelError::InvalidSectionType(s.to_string()))
    }
}

/// Canonical per-type description
#[derive(Debug)]
pub struct SectionDescriptor {
    pub kind: SectionKind,
    /// `type` tag in config records
    pub name: &'static str,
    /// Human-readable label for add-section menus
    pub label: &'static str,
    /// Type-specific config keys, in serialization order
    pub fields: &'static [&'static str],
}

pub static SECTION_DESCRIPTORS: [SectionDescriptor; 12] = [
    SectionDescriptor {
        kind: SectionKind::Text,
        name: "text",
        label: "Text",
        fields: &["title", "content", "align"],
    },
    SectionDescriptor {
        kind: SectionKind::Image,
        name: "image",
        label: "Image",
        fields: &["url", "caption", "width", "align"],
    },
    SectionDescriptor {
        kind: SectionKind::ImageText,
        name: "image_text",
        label: "Image & Text",
        fields: &["title", "content", "image", "imagePosition"],
    },
    SectionDescriptor {
        kind: SectionKind::Heading,
        name: "heading",
        label: "Heading",
        fields: &["text", "subText", "style", "design"],
    },
    SectionDescriptor {
        kind: SectionKind::Video,
        name: "video",
        label: "Video",
        fields: &["url", "caption", "width", "align"],
    },
    SectionDescriptor {
        kind: SectionKind::Button,
        name: "button",
        label: "Button",
        fields: &["label", "url", "align", "style"],
    },
    SectionDescriptor {
        kind: SectionKind::Social,
        name: "social",
        label: "Social Post",
        fields: &["platform", "url"],
    },
    SectionDescriptor {
        kind: SectionKind::Accordion,
        name: "accordion",
        label: "Q&A",
        fields: &["items"],
    },
    SectionDescriptor {
        kind: SectionKind::PostCard,
        name: "post_card",
        label: "Article",
        fields: &["title", "date", "excerpt", "image", "url"],
    },
    SectionDescriptor {
        kind: SectionKind::Columns,
        name: "columns",
        label: "Columns",
        fields: &["columnCount", "colType", "items"],
    },
    SectionDescriptor {
        kind: SectionKind::Links,
        name: "links",
        label: "Link List",
        fields: &["links"],
    },
    SectionDescriptor {
        kind: SectionKind::Box,
        name: "box",
        label: "Box",
        fields: &["title", "content"],
    },
];

/// Type-specific fields the editor shows for `kind`.
/// Decoration fields are common to every type, see [`Decoration::FIELDS`].
pub fn fields_for(kind: SectionKind) -> &'static [&'static str] {
    kind.descriptor().fields
}

/// A new section of `kind` with seed content and id placeholder 0
pub fn defaults_for(kind: SectionKind) -> Section {
    let mut decoration = Decoration::seeded();
    let body = match kind {
        SectionKind::Text => SectionBody::Text(TextBody {
            title: "New Section".to_string(),
            content: "Enter your content here.".to_string(),
            align: Align::Center,
        }),
        SectionKind::Image => SectionBody::Image(ImageBody {
            url: PLACEHOLDER_IMAGE.to_string(),
            ..ImageBody::default()
        }),
        SectionKind::ImageText => SectionBody::ImageText(ImageTextBody {
            title: "Title".to_string(),
            content: "Text here...".to_string(),
            image: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=2073&auto=format&fit=crop".to_string(),
            image_position: ImagePosition::Left,
        }),
        SectionKind::Heading => SectionBody::Heading(HeadingBody {
            text: "Heading".to_string(),
            sub_text: "Subtitle".to_string(),
            style: Align::Center,
            design: HeadingDesign::Simple,
        }),
        SectionKind::Video => SectionBody::Video(VideoBody {
            url: "https://www.youtube.com/watch?v=LXb3EKWsInQ".to_string(),
            ..VideoBody::default()
        }),
        SectionKind::Button => SectionBody::Button(ButtonBody {
            label: "Click Me".to_string(),
            url: "#".to_string(),
            align: Align::Center,
            style: ButtonStyle::Fill,
        }),
        SectionKind::Social => SectionBody::Social(SocialBody {
            platform: SocialPlatform::Twitter,
            url: "https://twitter.com/SpaceX/status/1856890374974914755".to_string(),
        }),
        SectionKind::Accordion => SectionBody::Accordion(AccordionBody {
            items: vec![
                AccordionItem {
                    id: 1,
                    title: "Question 1".to_string(),
                    content: "Answer 1".to_string(),
                },
                AccordionItem {
                    id: 2,
                    title: "Question 2".to_string(),
                    content: "Answer 2".to_string(),
                },
            ],
        }),
        SectionKind::PostCard => SectionBody::PostCard(PostCardBody {
            title: "Article Title".to_string(),
            date: "2023.01.01".to_string(),
            excerpt: "Article summary...".to_string(),
            image: "https://images.unsplash.com/photo-1491438590914-bc09fcaaf77a?q=80&w=2070&auto=format&fit=crop".to_string(),
            url: "#".to_string(),
        }),
        SectionKind::Columns => SectionBody::Columns(ColumnsBody {
            column_count: 3,
            col_type: ColumnType::Card,
            items: [
                "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=988&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1064&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1517841905240-472988babdf9?q=80&w=987&auto=format&fit=crop",
            ]
            .iter()
            .zip(1u64..)
            .map(|(image, id)| ColumnItem {
                id,
                image: image.to_string(),
                title: format!("Card {}", id),
                text: "Text".to_string(),
                url: "#".to_string(),
                platform: SocialPlatform::Twitter,
            })
            .collect(),
        }),
        SectionKind::Links => SectionBody::Links(LinksBody {
            links: vec![LinkItem {
                id: 1,
                label: "Button".to_string(),
                url: "#".to_string(),
                subtext: String::new(),
            }],
        }),
        SectionKind::Box => {
            decoration.box_style = BoxStyle::Border;
            SectionBody::Box(BoxBody {
                title: "Box Title".to_string(),
                content: "Content here...".to_string(),
            })
        }
    };

    Section {
        id: 0,
        decoration,
        body,
    }
}
