//! Row Host Traits
//!
//! Abstraction over the container so the reindex logic runs the same on a
//! live DOM and in tests.

use crate::naming::FieldRole;
use crate::template::RowTemplate;
use crate::ROLE_ATTR;

/// A label or input inside a row
pub trait FieldNode {
    fn attr(&self, name: &str) -> Option<String>;
    /// Attribute writes never fail from the caller's point of view
    fn set_attr(&self, name: &str, value: &str);
}

/// One row of the container
pub trait RowView {
    type Node: FieldNode;

    /// Label elements in document order
    fn labels(&self) -> Vec<Self::Node>;
    /// Input elements in document order
    fn inputs(&self) -> Vec<Self::Node>;
}

/// The container holding the rows
pub trait RowHost {
    type Row: RowView;

    /// Current rows in document order
    fn rows(&self) -> Vec<Self::Row>;
    /// Append a row built from `template` as the last child
    fn append_row(&self, template: &RowTemplate);
    /// Remove the row from the container
    fn remove_row(&self, row: &Self::Row);
}

/// Find the node playing `role`.
///
/// An explicit role marker wins; otherwise the first node whose `attr`
/// (`for` on labels, `id` on inputs) contains the role's token.
pub fn find_by_role<'a, N: FieldNode>(nodes: &'a [N], role: FieldRole, attr: &str) -> Option<&'a N> {
    nodes
        .iter()
        .find(|node| node.attr(ROLE_ATTR).and_then(|m| FieldRole::from_marker(&m)) == Some(role))
        .or_else(|| {
            nodes.iter().find(|node| {
                node.attr(attr)
                    .map(|value| value.contains(role.token()))
                    .unwrap_or(false)
            })
        })
}
