//! # Sections
//!
//! A section is a tagged variant: identity (`id`, `type`), the shared
//! [`Decoration`], and one type-specific body. In a config record all of
//! these live flat in one JSON object.
//!
//! Sections whose `type` is not a known [`SectionKind`] are kept as
//! [`SectionBody::Unknown`] with their raw fields, so they survive a
//! load/save cycle and render a visible fallback instead of vanishing.

use crate::decoration::Decoration;
use crate::error::{ModelError, ModelResult};
use crate::lenient::{decode_lenient, lenient_list};
use crate::schema::{fields_for, SectionKind};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// How a flat record is read back into a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decode {
    /// Any unreadable field fails the whole record. Used for edits.
    Strict,
    /// Unreadable fields fall back to their defaults. Used for loading.
    Lenient,
}

impl Decode {
    fn read<T: Default + DeserializeOwned>(self, fields: Map<String, Value>) -> ModelResult<T> {
        match self {
            Decode::Strict => Ok(serde_json::from_value(Value::Object(fields))?),
            Decode::Lenient => Ok(decode_lenient(Map::new(), fields, "section")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingDesign {
    #[default]
    Simple,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Fill,
    #[default]
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[default]
    Twitter,
    Instagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Card,
    Text,
    Image,
    Video,
    Social,
}

pub const MIN_MEDIA_WIDTH: f64 = 20.0;
pub const MAX_MEDIA_WIDTH: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBody {
    pub title: String,
    pub content: String,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageBody {
    pub url: String,
    pub caption: String,
    /// Percent of the content column
    pub width: f64,
    pub align: Align,
}

impl Default for ImageBody {
    fn default() -> Self {
        Self {
            url: String::new(),
            caption: String::new(),
            width: MAX_MEDIA_WIDTH,
            align: Align::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageTextBody {
    pub title: String,
    pub content: String,
    pub image: String,
    pub image_position: ImagePosition,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingBody {
    pub text: String,
    pub sub_text: String,
    /// Alignment of the heading block
    pub style: Align,
    pub design: HeadingDesign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoBody {
    pub url: String,
    pub caption: String,
    pub width: f64,
    pub align: Align,
}

impl Default for VideoBody {
    fn default() -> Self {
        Self {
            url: String::new(),
            caption: String::new(),
            width: MAX_MEDIA_WIDTH,
            align: Align::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBody {
    pub label: String,
    pub url: String,
    pub align: Align,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialBody {
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionBody {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<AccordionItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostCardBody {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub image: String,
    pub title: String,
    pub text: String,
    pub url: String,
    pub platform: SocialPlatform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnsBody {
    /// 1, 2 or 3
    pub column_count: u8,
    pub col_type: ColumnType,
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<ColumnItem>,
}

impl Default for ColumnsBody {
    fn default() -> Self {
        Self {
            column_count: 3,
            col_type: ColumnType::Card,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub label: String,
    pub url: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinksBody {
    #[serde(deserialize_with = "lenient_list")]
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxBody {
    pub title: String,
    pub content: String,
}

/// Type-specific content of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Text(TextBody),
    Image(ImageBody),
    ImageText(ImageTextBody),
    Heading(HeadingBody),
    Video(VideoBody),
    Button(ButtonBody),
    Social(SocialBody),
    Accordion(AccordionBody),
    PostCard(PostCardBody),
    Columns(ColumnsBody),
    Links(LinksBody),
    Box(BoxBody),
    /// A persisted type this build does not know. Raw fields are kept.
    Unknown {
        kind: String,
        fields: Map<String, Value>,
    },
}

impl SectionBody {
    pub fn kind(&self) -> Option<SectionKind> {
        Some(match self {
            SectionBody::Text(_) => SectionKind::Text,
            SectionBody::Image(_) => SectionKind::Image,
            SectionBody::ImageText(_) => SectionKind::ImageText,
            SectionBody::Heading(_) => SectionKind::Heading,
            SectionBody::Video(_) => SectionKind::Video,
            SectionBody::Button(_) => SectionKind::Button,
            SectionBody::Social(_) => SectionKind::Social,
            SectionBody::Accordion(_) => SectionKind::Accordion,
            SectionBody::PostCard(_) => SectionKind::PostCard,
            SectionBody::Columns(_) => SectionKind::Columns,
            SectionBody::Links(_) => SectionKind::Links,
            SectionBody::Box(_) => SectionKind::Box,
            SectionBody::Unknown { .. } => return None,
        })
    }

    fn from_fields(kind: &str, fields: Map<String, Value>, decode: Decode) -> ModelResult<Self> {
        let Ok(known) = kind.parse::<SectionKind>() else {
            return Ok(SectionBody::Unknown {
                kind: kind.to_string(),
                fields,
            });
        };
        Ok(match known {
            SectionKind::Text => SectionBody::Text(decode.read(fields)?),
            SectionKind::Image => SectionBody::Image(decode.read(fields)?),
            SectionKind::ImageText => SectionBody::ImageText(decode.read(fields)?),
            SectionKind::Heading => SectionBody::Heading(decode.read(fields)?),
            SectionKind::Video => SectionBody::Video(decode.read(fields)?),
            SectionKind::Button => SectionBody::Button(decode.read(fields)?),
            SectionKind::Social => SectionBody::Social(decode.read(fields)?),
            SectionKind::Accordion => SectionBody::Accordion(decode.read(fields)?),
            SectionKind::PostCard => SectionBody::PostCard(decode.read(fields)?),
            SectionKind::Columns => SectionBody::Columns(decode.read(fields)?),
            SectionKind::Links => SectionBody::Links(decode.read(fields)?),
            SectionKind::Box => SectionBody::Box(decode.read(fields)?),
        })
    }

    fn to_fields(&self) -> ModelResult<Map<String, Value>> {
        let value = match self {
            SectionBody::Text(body) => serde_json::to_value(body)?,
            SectionBody::Image(body) => serde_json::to_value(body)?,
            SectionBody::ImageText(body) => serde_json::to_value(body)?,
            SectionBody::Heading(body) => serde_json::to_value(body)?,
            SectionBody::Video(body) => serde_json::to_value(body)?,
            SectionBody::Button(body) => serde_json::to_value(body)?,
            SectionBody::Social(body) => serde_json::to_value(body)?,
            SectionBody::Accordion(body) => serde_json::to_value(body)?,
            SectionBody::PostCard(body) => serde_json::to_value(body)?,
            SectionBody::Columns(body) => serde_json::to_value(body)?,
            SectionBody::Links(body) => serde_json::to_value(body)?,
            SectionBody::Box(body) => serde_json::to_value(body)?,
            SectionBody::Unknown { fields, .. } => return Ok(fields.clone()),
        };
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::InvalidConfig(format!(
                "section body serialized to {}",
                other
            ))),
        }
    }

    fn normalize(&mut self) {
        match self {
            SectionBody::Image(body) => body.width = clamp_width(body.width),
            SectionBody::Video(body) => body.width = clamp_width(body.width),
            SectionBody::Columns(body) => {
                body.column_count = body.column_count.clamp(1, 3);
                repair_item_ids(&mut body.items);
            }
            SectionBody::Accordion(body) => repair_item_ids(&mut body.items),
            SectionBody::Links(body) => repair_item_ids(&mut body.links),
            _ => {}
        }
    }
}

fn clamp_width(width: f64) -> f64 {
    if width.is_finite() {
        width.clamp(MIN_MEDIA_WIDTH, MAX_MEDIA_WIDTH)
    } else {
        MAX_MEDIA_WIDTH
    }
}

/// One content block of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: u64,
    pub decoration: Decoration,
    pub body: SectionBody,
}

impl Section {
    /// Build a freshly seeded section of the named type.
    ///
    /// Names outside the registry are rejected; only persisted documents
    /// may carry unknown types.
    pub fn new(type_name: &str) -> ModelResult<Self> {
        let kind: SectionKind = type_name.parse()?;
        Ok(crate::schema::defaults_for(kind))
    }

    pub fn kind(&self) -> Option<SectionKind> {
        self.body.kind()
    }

    /// The `type` tag as it appears in config records
    pub fn type_name(&self) -> &str {
        match &self.body {
            SectionBody::Unknown { kind, .. } => kind,
            body => body.kind().map(SectionKind::as_str).unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.kind().is_some()
    }

    /// Element id used for anchors and scroll targets
    pub fn anchor(&self) -> String {
        format!("section-{}", self.id)
    }

    /// Rebuild a section from its flat record. Every field must decode.
    pub fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        Self::decode(fields, Decode::Strict)
    }

    /// Rebuild a section from a persisted record.
    ///
    /// Only `type` is required; any other field that does not decode
    /// falls back to its default.
    pub fn from_record(fields: Map<String, Value>) -> ModelResult<Self> {
        Self::decode(fields, Decode::Lenient)
    }

    fn decode(mut fields: Map<String, Value>, decode: Decode) -> ModelResult<Self> {
        // A persisted record without a usable id gets 0, which document
        // normalization replaces with a fresh one.
        let id = match (fields.remove("id").as_ref().and_then(id_from_value), decode) {
            (Some(id), _) => id,
            (None, Decode::Lenient) => 0,
            (None, Decode::Strict) => {
                return Err(ModelError::InvalidConfig(
                    "section is missing an integer `id`".into(),
                ))
            }
        };
        let kind = match fields.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => {
                return Err(ModelError::InvalidConfig(format!(
                    "section {} is missing a `type`",
                    id
                )))
            }
        };

        let mut own = Map::new();
        for key in Decoration::FIELDS {
            if let Some(value) = fields.remove(key) {
                own.insert(key.to_string(), value);
            }
        }
        let decoration: Decoration = decode.read(own)?;
        let body = SectionBody::from_fields(&kind, fields, decode)?;

        let mut section = Section {
            id,
            decoration,
            body,
        };
        section.normalize();
        Ok(section)
    }

    /// Flatten to the config record shape: `id`, `type`, decoration, body
    pub fn to_fields(&self) -> ModelResult<Map<String, Value>> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("type".to_string(), Value::from(self.type_name()));
        if let Value::Object(decoration) = serde_json::to_value(&self.decoration)? {
            fields.extend(decoration);
        }
        fields.extend(self.body.to_fields()?);
        Ok(fields)
    }

    /// Copy of this section with one field replaced.
    ///
    /// `id` and `type` are identity and cannot be replaced.
    pub fn with_field(&self, field: &str, value: Value) -> ModelResult<Self> {
        if field == "id" || field == "type" {
            return Err(ModelError::ImmutableField(field.to_string()));
        }
        if let Some(kind) = self.kind() {
            let known = fields_for(kind)
                .iter()
                .chain(Decoration::FIELDS.iter())
                .any(|name| *name == field);
            if !known {
                return Err(ModelError::UnknownField {
                    kind: kind.to_string(),
                    field: field.to_string(),
                });
            }
        }
        let mut fields = self.to_fields()?;
        fields.insert(field.to_string(), value);
        Section::from_fields(fields)
    }

    pub fn normalize(&mut self) {
        self.decoration.normalize();
        self.body.normalize();
    }

    /// Append a seeded sub-item, returning its id.
    /// `None` when the section type has no item list.
    pub fn push_item(&mut self) -> Option<u64> {
        match &mut self.body {
            SectionBody::Accordion(body) => Some(push_item(&mut body.items)),
            SectionBody::Columns(body) => Some(push_item(&mut body.items)),
            SectionBody::Links(body) => Some(push_item(&mut body.links)),
            _ => None,
        }
    }

    /// Remove a sub-item. Returns whether anything was removed.
    pub fn remove_item(&mut self, item_id: u64) -> bool {
        match &mut self.body {
            SectionBody::Accordion(body) => remove_item(&mut body.items, item_id),
            SectionBody::Columns(body) => remove_item(&mut body.items, item_id),
            SectionBody::Links(body) => remove_item(&mut body.links, item_id),
            _ => false,
        }
    }

    /// Replace one field of one sub-item. Returns whether the item exists.
    pub fn update_item(&mut self, item_id: u64, field: &str, value: Value) -> ModelResult<bool> {
        match &mut self.body {
            SectionBody::Accordion(body) => update_item(&mut body.items, item_id, field, value),
            SectionBody::Columns(body) => update_item(&mut body.items, item_id, field, value),
            SectionBody::Links(body) => update_item(&mut body.links, item_id, field, value),
            _ => Ok(false),
        }
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.to_fields().map_err(ser::Error::custom)?;
        fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Section::from_record(fields).map_err(|err| match err {
            ModelError::Json(inner) => de::Error::custom(inner),
            other => de::Error::custom(other),
        })
    }
}

/// A record owned by a section's item list
pub trait SectionItem: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    /// Placeholder content for a newly added item
    fn seed() -> Self;
}

impl SectionItem for AccordionItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn seed() -> Self {
        Self {
            id: 0,
            title: "Q".to_string(),
            content: "A".to_string(),
        }
    }
}

impl SectionItem for ColumnItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn seed() -> Self {
        Self {
            id: 0,
            image: crate::schema::PLACEHOLDER_IMAGE.to_string(),
            title: "New Item".to_string(),
            text: "Text".to_string(),
            url: "#".to_string(),
            platform: SocialPlatform::Twitter,
        }
    }
}

impl SectionItem for LinkItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn seed() -> Self {
        Self {
            id: 0,
            label: "Button".to_string(),
            url: "#".to_string(),
            subtext: String::new(),
        }
    }
}

/// `max(existing) + 1`, or 1 for an empty collection. Ids are never reused
/// while a larger one is still present.
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> u64 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

fn push_item<T: SectionItem>(items: &mut Vec<T>) -> u64 {
    let id = next_id(items.iter().map(SectionItem::id));
    let mut item = T::seed();
    item.set_id(id);
    items.push(item);
    id
}

fn remove_item<T: SectionItem>(items: &mut Vec<T>, item_id: u64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != item_id);
    items.len() != before
}

fn update_item<T: SectionItem>(
    items: &mut [T],
    item_id: u64,
    field: &str,
    value: Value,
) -> ModelResult<bool> {
    if field == "id" {
        return Err(ModelError::ImmutableField(field.to_string()));
    }
    let Some(item) = items.iter_mut().find(|item| item.id() == item_id) else {
        return Ok(false);
    };
    let mut fields = match serde_json::to_value(&*item)? {
        Value::Object(fields) => fields,
        _ => return Ok(false),
    };
    fields.insert(field.to_string(), value);
    let mut updated: T = serde_json::from_value(Value::Object(fields))?;
    updated.set_id(item_id);
    *item = updated;
    Ok(true)
}

fn repair_item_ids<T: SectionItem>(items: &mut [T]) {
    repair_ids(items, T::id, T::set_id);
}

/// Give unassigned (0) or duplicated ids a fresh `max + 1` id,
/// keeping list order.
pub(crate) fn repair_ids<T>(
    items: &mut [T],
    id: impl Fn(&T) -> u64,
    mut set_id: impl FnMut(&mut T, u64),
) {
    let mut seen = HashSet::new();
    let mut needs_id = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let current = id(item);
        if current == 0 || !seen.insert(current) {
            needs_id.push(index);
        }
    }
    let mut next = next_id(seen.iter().copied());
    for index in needs_id {
        set_id(&mut items[index], next);
        next += 1;
    }
}

/// Accept any positive integral JSON number as an id
pub(crate) fn id_from_value(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().filter(|id| *id > 0).or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// Item ids from older configs may be random fractions; those become 0 and
/// are reassigned during normalization.
pub(crate) fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(&value).unwrap_or(0))
}
