use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute names shared across block variants.
///
/// The names are the keys of the persisted record, so they follow the host
/// store's camelCase convention rather than Rust naming.
pub mod fields {
    pub const CONTAINER_MAX_WIDTH: &str = "containerMaxWidth";
    pub const CONTAINER_PADDING: &str = "containerPadding";
    pub const CONTAINER_SIDE_PADDING: &str = "containerSidePadding";
    pub const AUTO_PADDING: &str = "autoPadding";
    pub const WIDTH_100: &str = "width100";
    pub const PARALLAX: &str = "parallax";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const BACKGROUND_IMAGE: &str = "backgroundImage";
    pub const BACKGROUND_IMAGE_ID: &str = "backgroundImageId";
    pub const BACKGROUND_STYLE: &str = "backgroundStyle";
    pub const BACKGROUND_POSITION: &str = "backgroundPosition";
    pub const ALIGNMENT: &str = "alignment";
    pub const NESTED_BLOCKS: &str = "nestedBlocks";
    pub const UNIQUE_ID: &str = "uniqueID";
    pub const TESTIMONIAL_SIZE: &str = "testimonialSize";
    pub const AUTHOR_SIZE: &str = "authorSize";
    pub const TEXT_COLOR: &str = "textColor";
    pub const TESTIMONIAL_COLOR: &str = "testimonialColor";
    pub const AUTHOR_COLOR: &str = "authorColor";
    pub const IMG_HEIGHT: &str = "imgHeight";
    pub const ICON: &str = "icon";
    pub const TYPOGRAPHY: &str = "typography";
    pub const ITEMS: &str = "items";
    pub const IS_FIRST_LOAD: &str = "isFirstLoad";
    pub const BLOCK_UNIQ_ID: &str = "blockUniqId";
}

/// One testimonial entry: a rich-text quote, a rich-text attribution and an
/// optional image reference supplied by the host media picker.
///
/// `key` is local list identity only. It is never persisted; normalization
/// regenerates missing keys after a record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub testimonial: String,
    pub author: String,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(skip)]
    pub key: u64,
}

impl TestimonialItem {
    pub fn new(testimonial: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            testimonial: testimonial.into(),
            author: author.into(),
            image_id: String::new(),
            image_url: String::new(),
            key: 0,
        }
    }

    pub fn with_image(mut self, id: impl Into<String>, url: impl Into<String>) -> Self {
        self.image_id = id.into();
        self.image_url = url.into();
        self
    }

    pub fn with_key(mut self, key: u64) -> Self {
        self.key = key;
        self
    }

    /// Read one editable text field.
    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Testimonial => &self.testimonial,
            ItemField::Author => &self.author,
            ItemField::ImageId => &self.image_id,
            ItemField::ImageUrl => &self.image_url,
        }
    }

    /// Copy-on-write style update of one editable text field.
    pub fn with_field(mut self, field: ItemField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ItemField::Testimonial => self.testimonial = value,
            ItemField::Author => self.author = value,
            ItemField::ImageId => self.image_id = value,
            ItemField::ImageUrl => self.image_url = value,
        }
        self
    }
}

/// Editable text fields of a [`TestimonialItem`].
///
/// Which of these a variant actually carries is declared by
/// [`BlockVariant::item_fields`](crate::BlockVariant::item_fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Testimonial,
    Author,
    ImageId,
    ImageUrl,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Testimonial => "testimonial",
            ItemField::Author => "author",
            ItemField::ImageId => "imageId",
            ItemField::ImageUrl => "imageUrl",
        }
    }
}

/// One role record of the list-4 ordered typography sequence.
///
/// Key names mirror the persisted record (CSS-flavored kebab-case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypographyRole {
    pub title: String,
    pub font_size: f64,
    pub font_weight: f64,
    pub line_height: f64,
    pub margin_bottom: f64,
    pub color: String,
}

/// Shared quote icon of list-2, as supplied by the host media picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRef {
    pub icon_media_id: String,
    pub icon_media_url: String,
}

/// One persisted attribute value.
///
/// Untagged on purpose: the serialized shape must be the host store's plain
/// JSON (`"containerPadding": 58`, `"items": [...]`), not a tagged union.
/// Empty lists deserialize as the first list-bearing variant; normalization
/// re-types them to the schema's declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    String(String),
    Items(Vec<TestimonialItem>),
    Typography(Vec<TypographyRole>),
    Icon(IconRef),
}

impl AttrValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            AttrValue::Bool(_) => FieldKind::Bool,
            AttrValue::Number(_) => FieldKind::Number,
            AttrValue::String(_) => FieldKind::String,
            AttrValue::Items(_) => FieldKind::Items,
            AttrValue::Typography(_) => FieldKind::Typography,
            AttrValue::Icon(_) => FieldKind::Icon,
        }
    }

    /// True for the empty sequence of either list kind. Used by
    /// normalization to resolve the untagged-deserialization ambiguity.
    pub fn is_empty_list(&self) -> bool {
        match self {
            AttrValue::Items(v) => v.is_empty(),
            AttrValue::Typography(v) => v.is_empty(),
            _ => false,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Number(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

/// Semantic type of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Number,
    String,
    Items,
    Typography,
    Icon,
}

/// Container max width: a raw pixel number or the `100%` sentinel.
///
/// Anything non-numeric behaves as unrestricted, which is also how the
/// responsive class selection treats it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxWidth {
    Px(f64),
    Full,
}

impl MaxWidth {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "100%" {
            return MaxWidth::Full;
        }
        match raw.parse::<f64>() {
            Ok(px) => MaxWidth::Px(px),
            Err(_) => MaxWidth::Full,
        }
    }
}

/// Background image fit, selected by the `backgroundStyle` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundStyle {
    Default,
    Contain,
    Cover,
    Repeat,
}

impl BackgroundStyle {
    /// Empty or unknown values mean "emit no repeat/size declarations".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(BackgroundStyle::Default),
            "contain" => Some(BackgroundStyle::Contain),
            "cover" => Some(BackgroundStyle::Cover),
            "repeat" => Some(BackgroundStyle::Repeat),
            _ => None,
        }
    }

    pub fn repeat(&self) -> &'static str {
        match self {
            BackgroundStyle::Repeat => "repeat",
            _ => "no-repeat",
        }
    }

    pub fn size(&self) -> &'static str {
        match self {
            BackgroundStyle::Default | BackgroundStyle::Repeat => "auto",
            BackgroundStyle::Contain => "contain",
            BackgroundStyle::Cover => "cover",
        }
    }
}

/// Placement of host-nested content relative to the item list (list-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedSlot {
    Hidden,
    Top,
    Bottom,
}

impl NestedSlot {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "top" => NestedSlot::Top,
            "bottom" => NestedSlot::Bottom,
            _ => NestedSlot::Hidden,
        }
    }
}

/// The full persisted configuration state of one block instance: a flat
/// mapping from option name to value, with a fixed per-variant schema.
///
/// The record is replaced wholesale by every editing operation and is the
/// only state the host stores for a block. Serialization is transparent, so
/// the JSON shape is exactly the flat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BlockAttributes {
    values: BTreeMap<String, AttrValue>,
}

impl BlockAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// String accessor; missing or differently-typed fields read as `""`.
    pub fn string(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(AttrValue::String(s)) => s,
            _ => "",
        }
    }

    /// Number accessor; missing or differently-typed fields read as `0`.
    pub fn number(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(AttrValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Bool accessor; missing or differently-typed fields read as `false`.
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(AttrValue::Bool(true)))
    }

    pub fn items(&self) -> &[TestimonialItem] {
        match self.values.get(fields::ITEMS) {
            Some(AttrValue::Items(items)) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> &mut Vec<TestimonialItem> {
        let entry = self
            .values
            .entry(fields::ITEMS.to_string())
            .or_insert_with(|| AttrValue::Items(Vec::new()));
        if !matches!(entry, AttrValue::Items(_)) {
            *entry = AttrValue::Items(Vec::new());
        }
        match entry {
            AttrValue::Items(items) => items,
            _ => unreachable!(),
        }
    }

    pub fn set_items(&mut self, items: Vec<TestimonialItem>) {
        self.set(fields::ITEMS, AttrValue::Items(items));
    }

    pub fn typography(&self) -> &[TypographyRole] {
        match self.values.get(fields::TYPOGRAPHY) {
            Some(AttrValue::Typography(roles)) => roles,
            _ => &[],
        }
    }

    pub fn icon(&self) -> Option<&IconRef> {
        match self.values.get(fields::ICON) {
            Some(AttrValue::Icon(icon)) => Some(icon),
            _ => None,
        }
    }

    pub fn max_width(&self) -> MaxWidth {
        MaxWidth::parse(self.string(fields::CONTAINER_MAX_WIDTH))
    }

    pub fn background_style(&self) -> Option<BackgroundStyle> {
        BackgroundStyle::parse(self.string(fields::BACKGROUND_STYLE))
    }

    pub fn nested_slot(&self) -> NestedSlot {
        NestedSlot::parse(self.string(fields::NESTED_BLOCKS))
    }

    pub fn is_first_load(&self) -> bool {
        self.bool(fields::IS_FIRST_LOAD)
    }

    /// Instance id scoping generated CSS classes; 0 means not yet assigned.
    pub fn instance_id(&self) -> u64 {
        self.number(fields::BLOCK_UNIQ_ID) as u64
    }

    pub fn set_instance_id(&mut self, id: u64) {
        self.set(fields::BLOCK_UNIQ_ID, AttrValue::Number(id as f64));
    }
}
