//! Row Template
//!
//! Structured description of a new row. The DOM host renders it to HTML,
//! the in-memory host keeps the nodes as they are.

use crate::naming::{FieldRole, RowNaming};
use crate::{ERROR_CLASS, REMOVE_CLASS, ROLE_ATTR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Label,
    Input,
    ErrorSlot,
    RemoveButton,
}

impl NodeKind {
    fn tag(self) -> &'static str {
        match self {
            NodeKind::Label => "label",
            NodeKind::Input => "input",
            NodeKind::ErrorSlot => "div",
            NodeKind::RemoveButton => "button",
        }
    }
}

/// One child element of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub attrs: Vec<(&'static str, String)>,
    pub text: &'static str,
}

impl NodeSpec {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn to_html(&self, out: &mut String) {
        let tag = self.kind.tag();
        out.push('<');
        out.push_str(tag);
        for (key, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
        }
        if self.kind == NodeKind::Input {
            out.push_str("/>");
        } else {
            out.push('>');
            out.push_str(&escape_html(self.text));
            out.push_str(&format!("</{}>", tag));
        }
    }
}

/// Children of the row at `index`: label, input and error slot per role,
/// then the remove trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    pub nodes: Vec<NodeSpec>,
}

impl RowTemplate {
    pub fn new(naming: &RowNaming, index: usize) -> Self {
        let mut nodes = Vec::with_capacity(FieldRole::ALL.len() * 3 + 1);
        for role in FieldRole::ALL {
            let id = naming.element_id(index, role);
            nodes.push(NodeSpec {
                kind: NodeKind::Label,
                attrs: vec![("for", id.clone()), (ROLE_ATTR, role.token().to_string())],
                text: role.label(),
            });
            nodes.push(NodeSpec {
                kind: NodeKind::Input,
                attrs: vec![
                    ("type", "text".to_string()),
                    ("id", id),
                    ("name", naming.submit_name(index, role)),
                    ("placeholder", role.placeholder().to_string()),
                    (ROLE_ATTR, role.token().to_string()),
                ],
                text: "",
            });
            nodes.push(NodeSpec {
                kind: NodeKind::ErrorSlot,
                attrs: vec![("class", ERROR_CLASS.to_string())],
                text: "",
            });
        }
        nodes.push(NodeSpec {
            kind: NodeKind::RemoveButton,
            attrs: vec![("type", "button".to_string()), ("class", REMOVE_CLASS.to_string())],
            text: "Remover",
        });
        Self { nodes }
    }

    /// Inner HTML of the row element
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.to_html(&mut out);
        }
        out
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
