use quotedeck_evaluator::{BlockVdom, Evaluator, VNode};
use quotedeck_schema::{BlockAttributes, BlockVariant};
use thiserror::Error;

/// Errors that can occur while compiling stored records
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] quotedeck_schema::SchemaError),
}

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        // Compact output is the canonical saved form
        Self {
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn line_break(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize an evaluated block to markup.
pub fn compile_vdom(vdom: &BlockVdom, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node(&vdom.root, &mut ctx);
    ctx.get_output()
}

/// Compile a stored attribute record to its saved markup.
///
/// The record is normalized before evaluation, so sparse records produced by
/// older revisions serialize the same as freshly-edited ones.
pub fn compile_block(
    evaluator: &Evaluator,
    variant: BlockVariant,
    attributes: &BlockAttributes,
    nested: &[VNode],
    options: CompileOptions,
) -> String {
    let mut attributes = attributes.clone();
    variant.schema().normalize(&mut attributes);
    compile_vdom(&evaluator.evaluate(variant, &attributes, nested), options)
}

/// Compile a raw JSON record to its saved markup.
pub fn compile_value(
    evaluator: &Evaluator,
    variant: BlockVariant,
    value: serde_json::Value,
    nested: &[VNode],
    options: CompileOptions,
) -> Result<String, CompileError> {
    let attributes: BlockAttributes = serde_json::from_value(value)?;
    Ok(compile_block(evaluator, variant, &attributes, nested, options))
}

/// Compile a raw JSON record, picking the layout from its registered block
/// name.
pub fn compile_named(
    evaluator: &Evaluator,
    block_name: &str,
    value: serde_json::Value,
    nested: &[VNode],
    options: CompileOptions,
) -> Result<String, CompileError> {
    let variant = BlockVariant::from_block_name(block_name)?;
    compile_value(evaluator, variant, value, nested, options)
}

fn compile_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => compile_element(tag, attributes, styles, children, ctx),

        // Text is escaped; markup fields carry author-controlled HTML and
        // pass through verbatim
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Markup { content } => ctx.add(content),
    }
}

fn compile_element(
    tag: &str,
    attributes: &[(String, String)],
    styles: &[(String, String)],
    children: &[VNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if !styles.is_empty() {
        ctx.add(&format!(" style=\"{}\"", serialize_styles(styles)));
    }

    if children.is_empty() && is_self_closing(tag) {
        ctx.add("/>");
        ctx.line_break();
        return;
    }

    ctx.add(">");

    if has_element_children(children) {
        ctx.line_break();
        ctx.indent();

        for child in children {
            match child {
                VNode::Text { .. } | VNode::Markup { .. } => {
                    if ctx.options.pretty {
                        ctx.add_indent();
                    }
                    compile_node(child, ctx);
                    ctx.line_break();
                }
                _ => compile_node(child, ctx),
            }
        }

        ctx.dedent();
        if ctx.options.pretty {
            ctx.add_indent();
        }
    } else {
        // Inline content stays on the opening line
        for child in children {
            compile_node(child, ctx);
        }
    }

    ctx.add(&format!("</{}>", tag));
    ctx.line_break();
}

fn serialize_styles(styles: &[(String, String)]) -> String {
    styles
        .iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect::<Vec<_>>()
        .join(";")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. }))
}
