use crate::container;
use crate::style::{container_styles, fmt_num, style_vars, text_style};
use crate::utils::{scope_class, strip_tags};
use crate::vdom::{BlockVdom, VNode};
use quotedeck_schema::{
    fields, AssetPaths, BlockAttributes, BlockVariant, NestedSlot, TestimonialItem, TextRole,
};
use tracing::{debug, info, instrument};

/// Projects a block's attribute record into its virtual DOM.
///
/// The projection is the single source of rendered structure: the editor
/// preview and the static save path both read it, so a record always
/// renders the same way on both sides. Evaluation is total (defaults make
/// every normalized record renderable) and deterministic.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    assets: AssetPaths,
}

impl Evaluator {
    pub fn new(assets: AssetPaths) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    /// Evaluate one block instance.
    ///
    /// `nested` carries host-rendered child content; only list-4 places it,
    /// before or after the carousel per the `nestedBlocks` attribute.
    #[instrument(skip(self, attrs, nested), fields(variant = %variant, items = attrs.items().len()))]
    pub fn evaluate(
        &self,
        variant: BlockVariant,
        attrs: &BlockAttributes,
        nested: &[VNode],
    ) -> BlockVdom {
        info!("Starting block evaluation");

        let carousel = self.evaluate_carousel(variant, attrs);
        let mut container_children = Vec::new();

        if variant == BlockVariant::ListFour {
            if attrs.nested_slot() == NestedSlot::Top {
                container_children.extend(nested.iter().cloned());
            }
            container_children.push(self.evaluate_dots(attrs));
        }
        container_children.push(carousel);
        if variant == BlockVariant::ListFour && attrs.nested_slot() == NestedSlot::Bottom {
            container_children.extend(nested.iter().cloned());
        }

        let inner = VNode::element("div")
            .with_class("qd-container")
            .with_styles(container_styles(attrs))
            .with_children(container_children);

        let vars = style_vars(variant, attrs);
        let mut wrapped = container::render(
            attrs,
            variant.capabilities(),
            &scope_class(variant.css_class(), attrs.instance_id()),
            &self.assets,
            vec![inner],
        );
        // List-2 repeats the variable set on the container element so its
        // stylesheet can read them without climbing past the wrapper.
        if variant == BlockVariant::ListTwo {
            wrapped = wrapped.with_styles(vars.clone());
        }

        let root = VNode::element("div")
            .with_styles(vars)
            .with_child(wrapped);

        info!("Block evaluation complete");
        BlockVdom { variant, root }
    }

    fn evaluate_carousel(&self, variant: BlockVariant, attrs: &BlockAttributes) -> VNode {
        let mut carousel = VNode::element("div").with_class("owl-carousel");
        for item in attrs.items() {
            debug!(key = item.key, "Rendering testimonial item");
            carousel = carousel.with_child(self.evaluate_item(variant, attrs, item));
        }
        carousel
    }

    fn evaluate_item(
        &self,
        variant: BlockVariant,
        attrs: &BlockAttributes,
        item: &TestimonialItem,
    ) -> VNode {
        let content = match variant {
            BlockVariant::ListTwo => {
                let icon_url = attrs
                    .icon()
                    .map(|icon| icon.icon_media_url.as_str())
                    .unwrap_or("none");
                let icon_style = if icon_url != "none" {
                    format!("url({})", self.assets.resolve(icon_url))
                } else {
                    "none".to_string()
                };
                VNode::element("div")
                    .with_class("testimonial-content")
                    .with_child(
                        VNode::element("div")
                            .with_class("testimonial-icon")
                            .with_style("background-image", icon_style),
                    )
                    .with_child(self.text_node(variant, attrs, item, TextRole::Testimonial))
                    .with_child(self.text_node(variant, attrs, item, TextRole::Author))
            }
            BlockVariant::ListThree => VNode::element("div")
                .with_class("testimonial-content")
                .with_child(self.text_node(variant, attrs, item, TextRole::Testimonial))
                .with_child(self.text_node(variant, attrs, item, TextRole::Author)),
            BlockVariant::ListFour => VNode::element("div")
                .with_class("kp-content")
                .with_child(self.text_node(variant, attrs, item, TextRole::Testimonial))
                .with_child(self.text_node(variant, attrs, item, TextRole::Author)),
        };

        let mut children = Vec::new();
        if variant == BlockVariant::ListThree {
            children.push(
                VNode::element("div").with_class("testimonial-image").with_child(
                    VNode::element("img")
                        .with_attr("src", self.assets.resolve(&item.image_url))
                        .with_attr("alt", strip_tags(&item.author)),
                ),
            );
        }
        children.push(content);

        VNode::element("div")
            .with_class("testimonial-box")
            .with_key(item.key.to_string())
            .with_children(children)
    }

    fn text_node(
        &self,
        variant: BlockVariant,
        attrs: &BlockAttributes,
        item: &TestimonialItem,
        role: TextRole,
    ) -> VNode {
        let (tag, value) = match role {
            TextRole::Testimonial => (
                if variant == BlockVariant::ListFour {
                    "div"
                } else {
                    "p"
                },
                &item.testimonial,
            ),
            TextRole::Author => ("span", &item.author),
        };

        let mut node = VNode::element(tag);
        if variant == BlockVariant::ListFour && role == TextRole::Testimonial {
            node = node.with_class("kp-p");
        }
        node.with_styles(text_style(variant, attrs, role))
            .with_child(VNode::markup(value.clone()))
    }

    /// The list-4 navigation strip: one dot per item showing its photo,
    /// the first marked active, each sized by the `imgHeight` attribute.
    fn evaluate_dots(&self, attrs: &BlockAttributes) -> VNode {
        let height = format!("{}px", fmt_num(attrs.number(fields::IMG_HEIGHT)));
        let mut dots = VNode::element("div")
            .with_attr("id", "owl-dots")
            .with_class("owl-dots");
        for (index, item) in attrs.items().iter().enumerate() {
            let class = if index == 0 { "owl-dot active" } else { "owl-dot" };
            dots = dots.with_child(
                VNode::element("div")
                    .with_class(class)
                    .with_style("height", height.clone())
                    .with_style("max-height", "100%")
                    .with_key(item.key.to_string())
                    .with_child(
                        VNode::element("img")
                            .with_attr("src", self.assets.resolve(&item.image_url))
                            .with_attr("alt", item.author.clone()),
                    ),
            );
        }
        dots
    }
}
