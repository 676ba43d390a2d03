use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classes applied to the visible marker rendered for an [`VNode::Error`]
pub const ERROR_MARKER_CLASS: &str = "text-red-500";

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML or SVG element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Stable key for reorderable siblings (sections, items)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },

    /// Visible stand-in for content that could not be rendered
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        VNode::Error {
            message: message.into(),
            key: None,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Set the `class` attribute. Blank class lists are not emitted.
    pub fn with_class(self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        if class.is_empty() {
            self
        } else {
            self.with_attr("class", class)
        }
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
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

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append `child` only when present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn with_key(mut self, new_key: impl Into<String>) -> Self {
        match self {
            VNode::Element { ref mut key, .. } | VNode::Error { ref mut key, .. } => {
                *key = Some(new_key.into());
            }
            _ => {}
        }
        self
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } | VNode::Error { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the element whose `id` attribute is `id`
    pub fn find_by_id(&self, id: &str) -> Option<&VNode> {
        self.find(&|node| node.attr("id") == Some(id))
    }

    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }

    /// All nodes in document order, this one first
    pub fn descendants(&self) -> Vec<&VNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated text of this subtree. Error messages count as text.
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Error { message, .. } => message.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }
}

/// Third-party embed script an evaluated page depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedScript {
    Twitter,
    Instagram,
}

impl EmbedScript {
    pub fn src(self) -> &'static str {
        match self {
            EmbedScript::Twitter => "https://platform.twitter.com/widgets.js",
            EmbedScript::Instagram => "//www.instagram.com/embed.js",
        }
    }
}

/// Evaluated page: one root node plus the page-level metadata a host needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualDomDocument {
    pub title: String,
    /// Inline styles for the page surface (text color, page background, font)
    pub page_styles: BTreeMap<String, String>,
    pub nodes: Vec<VNode>,
    pub embeds: Vec<EmbedScript>,
}

impl VirtualDomDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_styles: BTreeMap::new(),
            nodes: Vec::new(),
            embeds: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn add_page_style(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.page_styles.insert(key.into(), value.into());
    }

    pub fn find_by_id(&self, id: &str) -> Option<&VNode> {
        self.nodes.iter().find_map(|node| node.find_by_id(id))
    }
}

impl Default for VirtualDomDocument {
    fn default() -> Self {
        Self::new("")
    }
}
