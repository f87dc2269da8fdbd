use crate::attributes::{
    fields, AttrValue, BlockAttributes, IconRef, ItemField, TestimonialItem, TypographyRole,
};
use crate::error::{SchemaError, SchemaResult};
use crate::schema::{FieldSpec, Schema};
use serde::{Deserialize, Serialize};

/// Which container inspector surfaces a variant exposes. The render path
/// consults `background` and `padding`; `width100` and `auto_padding` gate
/// the host-side controls only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub background: bool,
    pub padding: bool,
    pub width100: bool,
    pub auto_padding: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        background: true,
        padding: true,
        width100: true,
        auto_padding: true,
    };
}

/// Host registration metadata for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub anchor: bool,
    pub align: &'static [&'static str],
}

/// The two text roles every variant renders per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Testimonial,
    Author,
}

impl TextRole {
    /// Index into the ordered typography-role records (list-4).
    pub fn index(&self) -> usize {
        match self {
            TextRole::Testimonial => 0,
            TextRole::Author => 1,
        }
    }
}

/// Where variant asset files (seed images, background photos) are served
/// from. Records store paths relative to this base; absolute URLs and the
/// `none` sentinel pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct AssetPaths {
    pub base: String,
}

impl AssetPaths {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() || path == "none" || path.contains("://") || path.starts_with('/') {
            return path.to_string();
        }
        format!("{}{}", self.base, path)
    }
}

/// The three testimonial layouts. A variant declares everything that
/// parameterizes the shared engine: the attribute schema and its defaults,
/// the seed sequence shown on first load, the container capabilities, text
/// sizing rules and the host registration metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockVariant {
    ListTwo,
    ListThree,
    ListFour,
}

impl BlockVariant {
    pub const ALL: [BlockVariant; 3] = [
        BlockVariant::ListTwo,
        BlockVariant::ListThree,
        BlockVariant::ListFour,
    ];

    /// Directory slug used for variant asset paths.
    pub fn slug(&self) -> &'static str {
        match self {
            BlockVariant::ListTwo => "testimonials-list-2",
            BlockVariant::ListThree => "testimonials-list-3",
            BlockVariant::ListFour => "testimonials-list-4",
        }
    }

    pub fn block_name(&self) -> &'static str {
        self.meta().name
    }

    pub fn from_block_name(name: &str) -> SchemaResult<Self> {
        BlockVariant::ALL
            .iter()
            .copied()
            .find(|v| v.block_name() == name)
            .ok_or_else(|| SchemaError::unknown_variant(name))
    }

    /// Root CSS class scoping the variant's stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            BlockVariant::ListTwo => "qd-testimonials-2",
            BlockVariant::ListThree => "qd-testimonials-3",
            BlockVariant::ListFour => "qd-testimonials-4",
        }
    }

    pub fn meta(&self) -> BlockMeta {
        match self {
            BlockVariant::ListTwo => BlockMeta {
                name: "quotedeck/testimonials-list-2",
                title: "Quotedeck Testimonials List 2",
                icon: "yes",
                category: "layout",
                keywords: &["Testimonials"],
                anchor: true,
                align: &[],
            },
            BlockVariant::ListThree => BlockMeta {
                name: "quotedeck/testimonials-list-3",
                title: "Quotedeck Testimonials List 3",
                icon: "yes",
                category: "layout",
                keywords: &["Testimonials"],
                anchor: true,
                align: &[],
            },
            BlockVariant::ListFour => BlockMeta {
                name: "quotedeck/testimonials-list-4",
                title: "Quotedeck Testimonials List 4",
                icon: "yes",
                category: "layout",
                keywords: &["Testimonials"],
                anchor: true,
                align: &["full", "wide"],
            },
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    /// Editable item fields. List-2 items carry no image.
    pub fn item_fields(&self) -> &'static [ItemField] {
        match self {
            BlockVariant::ListTwo => &[ItemField::Testimonial, ItemField::Author],
            _ => &[
                ItemField::Testimonial,
                ItemField::Author,
                ItemField::ImageId,
                ItemField::ImageUrl,
            ],
        }
    }

    /// Fixed line-height multiplier per text role; list-4 sizes come from
    /// its typography records instead.
    pub fn line_height_ratio(&self, _role: TextRole) -> Option<f64> {
        match self {
            BlockVariant::ListTwo => Some(1.4),
            BlockVariant::ListThree => Some(1.2),
            BlockVariant::ListFour => None,
        }
    }

    /// Sample image path for the item at `position`, cycling through the
    /// variant's three bundled photos.
    pub fn sample_image_path(&self, position: usize) -> String {
        format!("{}/testimonial-img-{}.png", self.slug(), (position % 3) + 1)
    }

    /// The placeholder entry appended by AddItem and used to refill an
    /// emptied list.
    pub fn default_item(&self) -> TestimonialItem {
        match self {
            BlockVariant::ListTwo => TestimonialItem::new("New testimonial", "John Doe"),
            BlockVariant::ListThree => TestimonialItem::new("New testimonial", "John Doe"),
            BlockVariant::ListFour => TestimonialItem::new(
                "<em>Sagittis nisl rhoncus vitae nunc sed velit dignissim, rhoncus urna curabitur</em>",
                "Karl Thomas / Photographer",
            ),
        }
    }

    /// The three entries seeded into a fresh block on first load, keyed
    /// 1, 2, 3.
    pub fn seed_items(&self) -> Vec<TestimonialItem> {
        let items = match self {
            BlockVariant::ListTwo => vec![
                TestimonialItem::new(
                    "Duis mollis, est non commodo luctus, nisi erat porttitor ligula, eget \
                     lacinia odio sem nec elit. Cras justo odio, dapibus ac facilisis in, \
                     egestas eget quam integer. Curabitur blandit tempus.",
                    "- Barclay Widerski",
                ),
                TestimonialItem::new(
                    "Vivamus sagittis lacus vel augue laoreet rutrum faucibus dolor auctor. \
                     Vestibulum id ligula porta felis euismod semper. Cras justo odio, dapibus \
                     ac facilisis in, egestas eget quam aenean lacinia.",
                    "- Coriss Ambady",
                ),
                TestimonialItem::new(
                    "Sed posuere consectetur est at lobortis. Lorem ipsum dolor sit amet, \
                     consectetur adipiscing elit. Duis mollis, est non commodo luctus, nisi \
                     erat porttitor ligula lacinia odio sem nec elit.",
                    "- Conor Gibson",
                ),
            ],
            BlockVariant::ListThree => vec![
                TestimonialItem::new(
                    "Nulla ante eros, venenatis vel male suada sit amet.",
                    "Nicolas Brown, Instructor",
                )
                .with_image("", self.sample_image_path(0)),
                TestimonialItem::new(
                    "Consectetur adipisci ngel it lorem ipsum dolor sit.",
                    "Ema Ducon, Student",
                )
                .with_image("", self.sample_image_path(1)),
                TestimonialItem::new(
                    "Lorem ip sum dolor sit ameti co nse ctetur adipi scing.",
                    "Maria Jonson, Student",
                )
                .with_image("", self.sample_image_path(2)),
            ],
            BlockVariant::ListFour => vec![
                TestimonialItem::new(
                    "<em>Sagittis nisl rhoncus vitae nunc sed velit dignissim, rhoncus urna curabitur</em>",
                    "Nicolas Brown, Instructor",
                )
                .with_image("", self.sample_image_path(0)),
                TestimonialItem::new(
                    "<em>Sagittis nisl rhoncus rhoncus urna curabitur vitae nunc sed velit dignissim</em>",
                    "Agnes Gibbs / Designer",
                )
                .with_image("", self.sample_image_path(1)),
                TestimonialItem::new(
                    "<em>Curabitur vitae nunc sed velit dignissim, sagittis nisl rhoncus rhoncus urna</em>",
                    "Frank Cardenas / Senior Designer",
                )
                .with_image("", self.sample_image_path(2)),
            ],
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.with_key(i as u64 + 1))
            .collect()
    }

    /// Ordered typography-role defaults (list-4 only).
    pub fn default_typography(&self) -> Vec<TypographyRole> {
        match self {
            BlockVariant::ListFour => vec![
                TypographyRole {
                    title: "- Testimonial".to_string(),
                    font_size: 30.0,
                    font_weight: 4.0,
                    line_height: 43.0,
                    margin_bottom: 30.0,
                    color: "#333333".to_string(),
                },
                TypographyRole {
                    title: "- Author".to_string(),
                    font_size: 16.0,
                    font_weight: 4.0,
                    line_height: 20.0,
                    margin_bottom: 30.0,
                    color: "#9c9c9c".to_string(),
                },
            ],
            _ => Vec::new(),
        }
    }

    fn default_icon(&self) -> Option<IconRef> {
        match self {
            BlockVariant::ListTwo => Some(IconRef {
                icon_media_id: String::new(),
                icon_media_url: format!("{}/quote-icon.svg", self.slug()),
            }),
            _ => None,
        }
    }

    /// The variant's attribute schema: container options shared by every
    /// variant plus its own sizing, color and list fields.
    pub fn schema(&self) -> Schema {
        let mut specs = vec![
            FieldSpec::new(fields::CONTAINER_MAX_WIDTH, "1170".into()),
            FieldSpec::new(fields::CONTAINER_PADDING, 58.0.into()),
            FieldSpec::new(fields::CONTAINER_SIDE_PADDING, 0.0.into()),
            FieldSpec::new(fields::AUTO_PADDING, "".into()),
            FieldSpec::new(fields::WIDTH_100, false.into()),
            FieldSpec::new(fields::PARALLAX, false.into()),
            FieldSpec::new(
                fields::BACKGROUND_COLOR,
                match self {
                    BlockVariant::ListFour => "#fff".into(),
                    _ => "".into(),
                },
            ),
            FieldSpec::new(
                fields::BACKGROUND_IMAGE,
                match self {
                    BlockVariant::ListTwo => "testimonials-list-2/testimonials-bg.jpg".into(),
                    BlockVariant::ListThree => "testimonials-list-3/testimonials-bg.jpg".into(),
                    BlockVariant::ListFour => "none".into(),
                },
            ),
            FieldSpec::new(fields::BACKGROUND_IMAGE_ID, "".into()),
            FieldSpec::new(fields::BACKGROUND_STYLE, "".into()),
            FieldSpec::new(fields::BACKGROUND_POSITION, "center center".into()),
            FieldSpec::new(fields::ALIGNMENT, "".into()),
            FieldSpec::new(fields::NESTED_BLOCKS, "".into()),
            FieldSpec::new(fields::UNIQUE_ID, "".into()),
            FieldSpec::new(
                fields::TESTIMONIAL_SIZE,
                match self {
                    BlockVariant::ListTwo => 22.0.into(),
                    _ => 30.0.into(),
                },
            ),
            FieldSpec::new(
                fields::AUTHOR_SIZE,
                match self {
                    BlockVariant::ListTwo => 14.0.into(),
                    _ => 16.0.into(),
                },
            ),
        ];

        match self {
            BlockVariant::ListTwo => {
                specs.push(FieldSpec::new(fields::TEXT_COLOR, "#fff".into()));
                if let Some(icon) = self.default_icon() {
                    specs.push(FieldSpec::new(fields::ICON, AttrValue::Icon(icon)));
                }
            }
            BlockVariant::ListThree => {
                specs.push(FieldSpec::new(fields::TEXT_COLOR, "#fff".into()));
            }
            BlockVariant::ListFour => {
                specs.push(FieldSpec::new(fields::IMG_HEIGHT, 509.0.into()));
                specs.push(FieldSpec::new(fields::TESTIMONIAL_COLOR, "#000".into()));
                specs.push(FieldSpec::new(fields::AUTHOR_COLOR, "#9c9c9c".into()));
                specs.push(FieldSpec::new(
                    fields::TYPOGRAPHY,
                    AttrValue::Typography(Vec::new()),
                ));
            }
        }

        specs.push(FieldSpec::new(fields::ITEMS, AttrValue::Items(Vec::new())));
        specs.push(FieldSpec::new(fields::IS_FIRST_LOAD, true.into()));
        specs.push(FieldSpec::new(fields::BLOCK_UNIQ_ID, 0.0.into()));

        Schema::new(specs)
    }

    /// A fresh record for a newly inserted block instance.
    pub fn default_record(&self) -> BlockAttributes {
        self.schema().default_record()
    }
}

impl std::fmt::Display for BlockVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_name_round_trip() {
        for variant in BlockVariant::ALL {
            let name = variant.block_name();
            assert_eq!(BlockVariant::from_block_name(name).unwrap(), variant);
        }
        assert!(BlockVariant::from_block_name("quotedeck/unknown").is_err());
    }

    #[test]
    fn test_default_records_differ_where_variants_do() {
        let two = BlockVariant::ListTwo.default_record();
        let three = BlockVariant::ListThree.default_record();
        let four = BlockVariant::ListFour.default_record();

        assert_eq!(two.number(fields::TESTIMONIAL_SIZE), 22.0);
        assert_eq!(three.number(fields::TESTIMONIAL_SIZE), 30.0);
        assert_eq!(four.number(fields::TESTIMONIAL_SIZE), 30.0);

        assert_eq!(two.number(fields::CONTAINER_PADDING), 58.0);
        assert_eq!(four.string(fields::BACKGROUND_COLOR), "#fff");
        assert_eq!(four.string(fields::BACKGROUND_IMAGE), "none");
        assert_eq!(four.number(fields::IMG_HEIGHT), 509.0);

        assert!(two.icon().is_some());
        assert!(three.icon().is_none());
    }

    #[test]
    fn test_every_variant_shares_the_container_options() {
        for variant in BlockVariant::ALL {
            let record = variant.default_record();
            assert_eq!(record.string(fields::CONTAINER_MAX_WIDTH), "1170");
            assert_eq!(record.string(fields::BACKGROUND_POSITION), "center center");
            assert!(!record.bool(fields::WIDTH_100));
            assert!(record.is_first_load());
            assert_eq!(record.instance_id(), 0);
            assert!(record.items().is_empty());
        }
    }

    #[test]
    fn test_seed_items_are_keyed_in_order() {
        for variant in BlockVariant::ALL {
            let seeds = variant.seed_items();
            assert_eq!(seeds.len(), 3);
            let keys: Vec<u64> = seeds.iter().map(|i| i.key).collect();
            assert_eq!(keys, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_list_three_seed_authors() {
        let seeds = BlockVariant::ListThree.seed_items();
        let authors: Vec<&str> = seeds.iter().map(|i| i.author.as_str()).collect();
        assert_eq!(
            authors,
            vec![
                "Nicolas Brown, Instructor",
                "Ema Ducon, Student",
                "Maria Jonson, Student"
            ]
        );
        assert!(seeds[0].image_url.ends_with("testimonial-img-1.png"));
        assert!(seeds[2].image_url.ends_with("testimonial-img-3.png"));
    }

    #[test]
    fn test_sample_images_cycle() {
        let v = BlockVariant::ListThree;
        assert_eq!(
            v.sample_image_path(0),
            "testimonials-list-3/testimonial-img-1.png"
        );
        assert_eq!(
            v.sample_image_path(3),
            "testimonials-list-3/testimonial-img-1.png"
        );
        assert_eq!(
            v.sample_image_path(4),
            "testimonials-list-3/testimonial-img-2.png"
        );
    }

    #[test]
    fn test_asset_paths_resolve() {
        let assets = AssetPaths::new("https://cdn.example.com/blocks/");
        assert_eq!(
            assets.resolve("testimonials-list-3/testimonial-img-1.png"),
            "https://cdn.example.com/blocks/testimonials-list-3/testimonial-img-1.png"
        );
        assert_eq!(assets.resolve("none"), "none");
        assert_eq!(assets.resolve(""), "");
        assert_eq!(
            assets.resolve("https://elsewhere.org/pic.png"),
            "https://elsewhere.org/pic.png"
        );
    }

    #[test]
    fn test_typography_defaults_only_for_list_four() {
        assert!(BlockVariant::ListTwo.default_typography().is_empty());
        let roles = BlockVariant::ListFour.default_typography();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].title, "- Testimonial");
        assert_eq!(roles[0].font_size, 30.0);
        assert_eq!(roles[0].line_height, 43.0);
        assert_eq!(roles[1].color, "#9c9c9c");
    }

    #[test]
    fn test_line_height_ratios() {
        assert_eq!(
            BlockVariant::ListTwo.line_height_ratio(TextRole::Testimonial),
            Some(1.4)
        );
        assert_eq!(
            BlockVariant::ListThree.line_height_ratio(TextRole::Author),
            Some(1.2)
        );
        assert_eq!(
            BlockVariant::ListFour.line_height_ratio(TextRole::Testimonial),
            None
        );
    }
}
