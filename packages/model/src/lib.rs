//! Page document model: section schema registry, shared decoration fields,
//! the `Document` aggregate and its JSON config boundary.

pub mod config;
pub mod decoration;
pub mod document;
pub mod error;
pub mod lenient;
pub mod schema;
pub mod section;

pub use config::{from_config, load_document, parse_config, to_config, to_config_string, Loaded};
pub use decoration::{
    BackgroundKind, BoxStyle, Decoration, Divider, Edge, Padding, BOX_PADDING, DIVIDER_PATHS,
    DIVIDER_VIEW_BOX, MAX_OVERLAY,
};
pub use document::{Document, FontFamily, FontSizes, HeroType, MenuLink};
pub use error::{ModelError, ModelResult};
pub use schema::{defaults_for, fields_for, SectionDescriptor, SectionKind, SECTION_DESCRIPTORS};
pub use section::{
    next_id, AccordionBody, AccordionItem, Align, BoxBody, ButtonBody, ButtonStyle, ColumnItem,
    ColumnType, ColumnsBody, HeadingBody, HeadingDesign, ImageBody, ImagePosition, ImageTextBody,
    LinkItem, LinksBody, PostCardBody, Section, SectionBody, SocialBody, SocialPlatform, TextBody,
    VideoBody,
};
