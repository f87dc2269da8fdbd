use serde::{Deserialize, Serialize};

/// Virtual DOM node produced by block evaluation.
///
/// Attribute and style pairs are ordered lists, not maps: the save path
/// must serialize bit-identically for identical input, and insertion order
/// is part of that contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        styles: Vec<(String, String)>,
        children: Vec<VNode>,
        /// Explicit key for repeated items (stable list identity)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Plain text node, escaped on serialization
    Text { content: String },

    /// Rich-text fragment emitted verbatim (user content may carry inline
    /// markup such as `<em>`)
    Markup { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn markup(content: impl Into<String>) -> Self {
        VNode::Markup {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.push((name.into(), value.into()));
        }
        self
    }

    pub fn with_styles(mut self, pairs: Vec<(String, String)>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(pairs);
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first search for the first element carrying `class` in its
    /// class list.
    pub fn find_by_class(&self, class: &str) -> Option<&VNode> {
        if let VNode::Element { .. } = self {
            if self
                .attr("class")
                .map(|c| c.split_whitespace().any(|part| part == class))
                .unwrap_or(false)
            {
                return Some(self);
            }
            for child in self.children() {
                if let Some(found) = child.find_by_class(class) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// The evaluated form of one block instance: a single root node plus the
/// variant it was projected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockVdom {
    pub variant: quotedeck_schema::BlockVariant,
    pub root: VNode,
}
