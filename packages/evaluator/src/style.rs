use quotedeck_schema::{fields, BlockAttributes, BlockVariant, MaxWidth, TextRole, TypographyRole};

/// Format a numeric attribute the way the host templating layer does:
/// shortest round-trip decimal, no trailing `.0` for whole numbers.
pub fn fmt_num(n: f64) -> String {
    format!("{}", n)
}

/// Inline styles of the inner width-limiting `qd-container` element.
///
/// Emits `max-width` plus a `--maxWidth` custom-property mirror (unitless,
/// or `100vw` for the unrestricted sentinel) that the variant stylesheets
/// read from descendants.
pub fn container_styles(attrs: &BlockAttributes) -> Vec<(String, String)> {
    let (max_width, mirror) = match attrs.max_width() {
        MaxWidth::Full => ("100%".to_string(), "100vw".to_string()),
        MaxWidth::Px(px) => (format!("{}px", fmt_num(px)), fmt_num(px)),
    };
    vec![
        ("max-width".to_string(), max_width),
        ("--maxWidth".to_string(), mirror),
    ]
}

/// Custom-property set carried on the block's outer wrapper.
///
/// All variants expose the padding triple; list-3 adds the testimonial
/// font-size pair its stylesheet consumes, list-4 adds the side-padding
/// variable.
pub fn style_vars(variant: BlockVariant, attrs: &BlockAttributes) -> Vec<(String, String)> {
    let padding = attrs.number(fields::CONTAINER_PADDING);
    let mut vars = Vec::new();

    if variant == BlockVariant::ListThree {
        let size = attrs.number(fields::TESTIMONIAL_SIZE);
        vars.push(("--p".to_string(), format!("{}px", fmt_num(size))));
        vars.push(("--plh".to_string(), format!("{}px", fmt_num(size * 1.2))));
    }

    vars.push(("--paddings".to_string(), fmt_num(padding)));
    if variant == BlockVariant::ListFour {
        let side = attrs.number(fields::CONTAINER_SIDE_PADDING);
        vars.push(("--paddings2".to_string(), format!("{}px", fmt_num(side))));
    }
    vars.push(("--paddingsMin".to_string(), fmt_num(padding / 4.0)));
    vars.push((
        "--paddingsMinPx".to_string(),
        format!("{}px", fmt_num(padding / 4.0)),
    ));

    vars
}

fn ratio_style(
    attrs: &BlockAttributes,
    size_field: &str,
    ratio: Option<f64>,
) -> Vec<(String, String)> {
    let color = attrs.string(fields::TEXT_COLOR);
    let mut pairs = vec![("color".to_string(), color.to_string())];
    if let Some(ratio) = ratio {
        let size = attrs.number(size_field);
        pairs.push(("font-size".to_string(), format!("{}px", fmt_num(size))));
        pairs.push((
            "line-height".to_string(),
            format!("{}px", fmt_num(size * ratio)),
        ));
    }
    pairs
}

fn role_record_style(role: &TypographyRole) -> Vec<(String, String)> {
    vec![
        ("color".to_string(), role.color.clone()),
        (
            "font-size".to_string(),
            format!("{}px", fmt_num(role.font_size)),
        ),
        (
            "font-weight".to_string(),
            fmt_num(role.font_weight * 100.0),
        ),
        (
            "line-height".to_string(),
            format!("{}px", fmt_num(role.line_height)),
        ),
        (
            "margin-bottom".to_string(),
            format!("{}px", fmt_num(role.margin_bottom)),
        ),
    ]
}

/// Inline style of one text role inside a testimonial box.
///
/// List-2 sizes both roles inline with a 1.4 line-height ratio. List-3
/// colors the quote (its size rides the `--p`/`--plh` variables) and sizes
/// the author at 1.2. List-4 reads the ordered typography records, falling
/// back per role to the variant defaults when the record is absent.
pub fn text_style(
    variant: BlockVariant,
    attrs: &BlockAttributes,
    role: TextRole,
) -> Vec<(String, String)> {
    match variant {
        BlockVariant::ListTwo => {
            let size_field = match role {
                TextRole::Testimonial => fields::TESTIMONIAL_SIZE,
                TextRole::Author => fields::AUTHOR_SIZE,
            };
            ratio_style(attrs, size_field, variant.line_height_ratio(role))
        }
        BlockVariant::ListThree => match role {
            TextRole::Testimonial => ratio_style(attrs, fields::TESTIMONIAL_SIZE, None),
            TextRole::Author => {
                ratio_style(attrs, fields::AUTHOR_SIZE, variant.line_height_ratio(role))
            }
        },
        BlockVariant::ListFour => {
            let records = attrs.typography();
            match records.get(role.index()) {
                Some(record) => role_record_style(record),
                None => {
                    let defaults = variant.default_typography();
                    role_record_style(&defaults[role.index()])
                }
            }
        }
    }
}

/// The full style derivation for one record: wrapper variables plus
/// container styles, computed together the way every render boundary
/// consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStyles {
    pub vars: Vec<(String, String)>,
    pub container: Vec<(String, String)>,
}

pub fn derive(variant: BlockVariant, attrs: &BlockAttributes) -> DerivedStyles {
    DerivedStyles {
        vars: style_vars(variant, attrs),
        container: container_styles(attrs),
    }
}
