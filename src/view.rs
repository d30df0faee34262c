//! Declarative view trees.
//!
//! Renderers build [`Node`]s; `wasm::dom::mount` turns a tree into real DOM in
//! one pass. Keeping the trees plain data lets the gallery logic be tested on
//! the host.

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

impl Element {
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn action(self, action: &Action) -> Self {
        let (name, value) = action.encode();
        self.attr("data-action", name).attr("data-value", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(text(s))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every element in the tree (pre-order, including `self`) carrying `class`.
    pub fn find_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |e| {
            if e.has_class(class) {
                out.push(e);
            }
        });
        out
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(e) = self {
            f(e);
            for c in &e.children {
                c.walk(f);
            }
        }
    }
}

/// User intents wired through `data-action`/`data-value` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ProjectDetails(String),
    TechList(String),
    WebsitePreview(String),
    Filter(String),
}

impl Action {
    pub fn encode(&self) -> (&'static str, &str) {
        match self {
            Action::ProjectDetails(id) => ("project-details", id.as_str()),
            Action::TechList(tech) => ("tech-list", tech.as_str()),
            Action::WebsitePreview(id) => ("website-preview", id.as_str()),
            Action::Filter(tag) => ("filter", tag.as_str()),
        }
    }

    pub fn decode(name: &str, value: &str) -> Option<Self> {
        let value = value.to_string();
        match name {
            "project-details" => Some(Action::ProjectDetails(value)),
            "tech-list" => Some(Action::TechList(value)),
            "website-preview" => Some(Action::WebsitePreview(value)),
            "filter" => Some(Action::Filter(value)),
            _ => None,
        }
    }
}
