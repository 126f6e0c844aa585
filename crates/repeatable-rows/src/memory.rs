//! In-Memory Host
//!
//! `RowHost` without a DOM, for tests of row logic.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::host::{FieldNode, RowHost, RowView};
use crate::template::{NodeKind, RowTemplate};

/// Attribute map shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryNode(Rc<RefCell<BTreeMap<String, String>>>);

impl MemoryNode {
    pub fn with_attrs(attrs: &[(&str, &str)]) -> Self {
        let map = attrs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self(Rc::new(RefCell::new(map)))
    }
}

impl FieldNode for MemoryNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.borrow_mut().insert(name.to_string(), value.to_string());
    }
}

#[derive(Debug, Default)]
struct RowNodes {
    labels: Vec<MemoryNode>,
    inputs: Vec<MemoryNode>,
}

/// A row; clones refer to the same row
#[derive(Debug, Clone, Default)]
pub struct MemoryRow(Rc<RowNodes>);

impl MemoryRow {
    pub fn new(labels: Vec<MemoryNode>, inputs: Vec<MemoryNode>) -> Self {
        Self(Rc::new(RowNodes { labels, inputs }))
    }

    pub fn from_template(template: &RowTemplate) -> Self {
        let mut labels = Vec::new();
        let mut inputs = Vec::new();
        for node in &template.nodes {
            let attrs: Vec<(&str, &str)> = node.attrs.iter().map(|(k, v)| (*k, v.as_str())).collect();
            match node.kind {
                NodeKind::Label => labels.push(MemoryNode::with_attrs(&attrs)),
                NodeKind::Input => inputs.push(MemoryNode::with_attrs(&attrs)),
                NodeKind::ErrorSlot | NodeKind::RemoveButton => {}
            }
        }
        Self::new(labels, inputs)
    }

    pub fn same_row(&self, other: &MemoryRow) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl RowView for MemoryRow {
    type Node = MemoryNode;

    fn labels(&self) -> Vec<MemoryNode> {
        self.0.labels.clone()
    }

    fn inputs(&self) -> Vec<MemoryNode> {
        self.0.inputs.clone()
    }
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    rows: RefCell<Vec<MemoryRow>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row as if it were already in the page markup
    pub fn push_row(&self, row: MemoryRow) {
        self.rows.borrow_mut().push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl RowHost for MemoryHost {
    type Row = MemoryRow;

    fn rows(&self) -> Vec<MemoryRow> {
        self.rows.borrow().clone()
    }

    fn append_row(&self, template: &RowTemplate) {
        self.push_row(MemoryRow::from_template(template));
    }

    fn remove_row(&self, row: &MemoryRow) {
        self.rows.borrow_mut().retain(|r| !r.same_row(row));
    }
}
