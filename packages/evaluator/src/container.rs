use crate::utils::join_classes;
use crate::vdom::VNode;
use quotedeck_schema::{fields, AssetPaths, BlockAttributes, Capabilities, MaxWidth};

use crate::style::fmt_num;

/// Responsive width class for the serialized container, selected from the
/// configured max width. The stylesheet breakpoints are 992, 768 and 480;
/// the width-100 flag and the non-numeric `100%` sentinel both force the
/// large class.
pub fn responsive_class(attrs: &BlockAttributes) -> &'static str {
    if attrs.bool(fields::WIDTH_100) {
        return "qd-lg";
    }
    match attrs.max_width() {
        MaxWidth::Px(px) if px < 480.0 => "qd-xs",
        MaxWidth::Px(px) if px < 768.0 => "qd-sm",
        MaxWidth::Px(px) if px < 992.0 => "qd-md",
        _ => "qd-lg",
    }
}

fn background_fit(attrs: &BlockAttributes) -> Option<(&'static str, &'static str)> {
    attrs.background_style().map(|fit| (fit.repeat(), fit.size()))
}

/// Ordered inline styles of the container element.
///
/// Assembly order matches the serialized output: background image with its
/// repeat/size pair and position, then color, padding, parallax attachment.
/// When no image is present the repeat/size pair (still honored by the
/// host stylesheet) trails the list instead.
pub fn container_inline_styles(
    attrs: &BlockAttributes,
    caps: Capabilities,
    assets: &AssetPaths,
) -> Vec<(String, String)> {
    let mut styles: Vec<(String, String)> = Vec::new();
    let fit = background_fit(attrs);

    let image = attrs.string(fields::BACKGROUND_IMAGE);
    let image_present = caps.background && !image.is_empty();
    if image_present {
        let value = if image == "none" {
            "none".to_string()
        } else {
            format!("url({})", assets.resolve(image))
        };
        styles.push(("background-image".to_string(), value));
        if let Some((repeat, size)) = fit {
            styles.push(("background-repeat".to_string(), repeat.to_string()));
            styles.push(("background-size".to_string(), size.to_string()));
        }
        styles.push((
            "background-position".to_string(),
            attrs.string(fields::BACKGROUND_POSITION).to_string(),
        ));
    }

    if caps.background {
        let color = attrs.string(fields::BACKGROUND_COLOR);
        if !color.is_empty() {
            styles.push(("background-color".to_string(), color.to_string()));
        }
    }

    if caps.padding && attrs.string(fields::AUTO_PADDING).is_empty() {
        styles.push((
            "padding".to_string(),
            format!(
                "{}px {}px",
                fmt_num(attrs.number(fields::CONTAINER_PADDING)),
                fmt_num(attrs.number(fields::CONTAINER_SIDE_PADDING))
            ),
        ));
    }

    if attrs.bool(fields::PARALLAX) {
        styles.push(("background-attachment".to_string(), "fixed".to_string()));
    }

    if !image_present {
        if let Some((repeat, size)) = fit {
            styles.push(("background-repeat".to_string(), repeat.to_string()));
            styles.push(("background-size".to_string(), size.to_string()));
        }
    }

    styles
}

/// Wrap `children` in the shared container element.
///
/// The class list joins the caller's scope classes, the responsive width
/// class, the alignment value and the auto-padding marker; empty fragments
/// are skipped. A non-empty anchor id becomes the `id` attribute. Pure:
/// children pass through unchanged.
pub fn render(
    attrs: &BlockAttributes,
    caps: Capabilities,
    scope_class: &str,
    assets: &AssetPaths,
    children: Vec<VNode>,
) -> VNode {
    let class = join_classes([
        scope_class,
        responsive_class(attrs),
        attrs.string(fields::ALIGNMENT),
        attrs.string(fields::AUTO_PADDING),
    ]);

    let mut node = VNode::element("div");
    let anchor = attrs.string(fields::UNIQUE_ID);
    if !anchor.is_empty() {
        node = node.with_attr("id", anchor);
    }
    node.with_class(class)
        .with_styles(container_inline_styles(attrs, caps, assets))
        .with_children(children)
}
