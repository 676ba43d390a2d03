//! # Document
//!
//! The whole-page aggregate: global settings, navigation menu and the
//! ordered section list. Section order is the render order.
//!
//! A `Document` is a plain value. Editing code never mutates one that a
//! renderer may be reading; it builds a new one (see `pagecraft-editor`).

use crate::decoration::BackgroundKind;
use crate::error::{ModelError, ModelResult};
use crate::schema::{defaults_for, SectionKind};
use crate::section::{next_id, repair_ids, Section, SectionBody};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroType {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
}

impl FontFamily {
    pub fn class(self) -> &'static str {
        match self {
            FontFamily::Sans => "font-sans",
            FontFamily::Serif => "font-serif",
        }
    }

    pub fn stack(self) -> &'static str {
        match self {
            FontFamily::Sans => "'Noto Sans JP', sans-serif",
            FontFamily::Serif => "'Cormorant Garamond', 'Noto Sans JP', serif",
        }
    }
}

/// Named type scale, in rem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub hero_title: f64,
    pub hero_subtitle: f64,
    pub section_title: f64,
    pub body: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            hero_title: 3.5,
            hero_subtitle: 0.9,
            section_title: 1.5,
            body: 1.0,
        }
    }
}

/// Navigation entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLink {
    #[serde(deserialize_with = "crate::section::lenient_id")]
    pub id: u64,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub site_title: String,
    pub menu_items: Vec<MenuLink>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_type: HeroType,
    pub hero_url: String,
    /// Shown when `heroUrl` is empty
    pub hero_image_fallback: String,
    /// Percent of the page width
    pub hero_width: f64,
    /// Percent of the viewport height
    pub hero_height: f64,
    /// Blur radius in px
    pub hero_blur: f64,
    pub hero_position_x: f64,
    pub hero_position_y: f64,
    pub hero_overlay_opacity: f64,
    pub page_bg_type: BackgroundKind,
    pub page_bg_value: String,
    pub text_color: String,
    pub font_family: FontFamily,
    pub font_size: FontSizes,
    pub sections: Vec<Section>,
}

impl Document {
    /// A document with no sections and no menu, otherwise default settings
    pub fn empty() -> Self {
        Self {
            menu_items: Vec::new(),
            sections: Vec::new(),
            ..Self::default()
        }
    }

    pub fn section(&self, id: u64) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn section_index(&self, id: u64) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn menu_item(&self, id: u64) -> Option<&MenuLink> {
        self.menu_items.iter().find(|item| item.id == id)
    }

    pub fn next_section_id(&self) -> u64 {
        next_id(self.sections.iter().map(|section| section.id))
    }

    pub fn next_menu_id(&self) -> u64 {
        next_id(self.menu_items.iter().map(|item| item.id))
    }

    /// Copy of this document with one top-level setting replaced.
    ///
    /// `sections` and `menuItems` are owned by their own operations and
    /// cannot be replaced through this path.
    pub fn with_setting(&self, field: &str, value: Value) -> ModelResult<Self> {
        if field == "sections" || field == "menuItems" {
            return Err(ModelError::ImmutableField(field.to_string()));
        }
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(fields) => fields,
            _ => return Err(ModelError::InvalidConfig("document is not an object".into())),
        };
        if !fields.contains_key(field) {
            return Err(ModelError::InvalidConfig(format!("unknown setting `{}`", field)));
        }
        fields.insert(field.to_string(), value);
        let mut document: Document = serde_json::from_value(Value::Object(fields))?;
        document.normalize();
        Ok(document)
    }

    /// Clamp section values and give missing or duplicated section and
    /// menu ids fresh ones
    pub fn normalize(&mut self) {
        for section in &mut self.sections {
            section.normalize();
        }
        repair_ids(
            &mut self.sections,
            |section: &Section| section.id,
            |section: &mut Section, id| section.id = id,
        );
        repair_ids(
            &mut self.menu_items,
            |item: &MenuLink| item.id,
            |item: &mut MenuLink, id| item.id = id,
        );
    }

    /// Whether any section embeds a post from `platform`
    pub fn embeds(&self, platform: crate::SocialPlatform) -> bool {
        use crate::section::ColumnType;

        self.sections.iter().any(|section| match &section.body {
            SectionBody::Social(body) => body.platform == platform,
            SectionBody::Columns(body) => {
                body.col_type == ColumnType::Social
                    && body.items.iter().any(|item| item.platform == platform)
            }
            _ => false,
        })
    }
}

impl Default for Document {
    /// The documented default page used when no config is supplied
    fn default() -> Self {
        let mut sections: Vec<Section> = [SectionKind::Text, SectionKind::ImageText, SectionKind::Button]
            .into_iter()
            .zip(1u64..)
            .map(|(kind, id)| Section {
                id,
                ..defaults_for(kind)
            })
            .collect();
        if let Some(SectionBody::Text(body)) = sections.first_mut().map(|s| &mut s.body) {
            body.title = "ABOUT".to_string();
            body.content =
                "A quiet place for slow mornings.\nFreshly roasted coffee, seasonal plates and good light."
                    .to_string();
        }

        Self {
            site_title: "AURORA".to_string(),
            menu_items: vec![
                MenuLink {
                    id: 1,
                    label: "About".to_string(),
                    url: "#section-1".to_string(),
                },
                MenuLink {
                    id: 2,
                    label: "Contact".to_string(),
                    url: "#section-3".to_string(),
                },
            ],
            hero_title: "Light, Slowly".to_string(),
            hero_subtitle: "Cafe & Gallery".to_string(),
            hero_type: HeroType::Image,
            hero_url: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?q=80&w=2070&auto=format&fit=crop".to_string(),
            hero_image_fallback: crate::schema::PLACEHOLDER_IMAGE.to_string(),
            hero_width: 100.0,
            hero_height: 100.0,
            hero_blur: 0.0,
            hero_position_x: 50.0,
            hero_position_y: 50.0,
            hero_overlay_opacity: 0.3,
            page_bg_type: BackgroundKind::Color,
            page_bg_value: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
            font_family: FontFamily::Serif,
            font_size: FontSizes::default(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_document_ids_are_sequential() {
        let doc = Document::default();
        let ids: Vec<u64> = doc.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(doc.next_section_id(), 4);
        assert_eq!(doc.next_menu_id(), 3);
    }

    #[test]
    fn test_empty_document_mints_id_one() {
        let doc = Document::empty();
        assert_eq!(doc.next_section_id(), 1);
        assert_eq!(doc.next_menu_id(), 1);
    }

    #[test]
    fn test_with_setting() {
        let doc = Document::default();
        let updated = doc.with_setting("siteTitle", json!("NORTH")).unwrap();
        assert_eq!(updated.site_title, "NORTH");
        assert_eq!(updated.sections, doc.sections);
        assert_eq!(doc.site_title, "AURORA");

        assert!(doc.with_setting("sections", json!([])).is_err());
        assert!(doc.with_setting("noSuchField", json!(1)).is_err());
        assert!(doc.with_setting("fontFamily", json!("comic")).is_err());
    }

    #[test]
    fn test_embeds() {
        let mut doc = Document::empty();
        assert!(!doc.embeds(crate::SocialPlatform::Twitter));
        doc.sections.push(defaults_for(SectionKind::Social));
        assert!(doc.embeds(crate::SocialPlatform::Twitter));
        assert!(!doc.embeds(crate::SocialPlatform::Instagram));
    }
}
