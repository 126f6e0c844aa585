//! Repeatable Rows
//!
//! Manages a list of sub-form rows (exercise entries) inside a container.
//! Rows are positional: each row's field ids and submission names embed its
//! current index, and every removal renumbers the rows to `0..len`.
//!
//! - `naming`: field roles and the `array[index].field` naming scheme
//! - `template`: markup of a freshly appended row
//! - `host`: traits over the row container (DOM or in-memory)
//! - `manager`: append / remove / reindex
//! - `dom`: web-sys binding with event delegation on the container
//! - `memory`: in-memory host for tests

mod naming;
mod template;
mod host;
mod manager;
pub mod dom;
pub mod memory;

pub use naming::{FieldRole, RowNaming, DEFAULT_ARRAY_NAME};
pub use template::{NodeKind, NodeSpec, RowTemplate};
pub use host::{find_by_role, FieldNode, RowHost, RowView};
pub use manager::{reindex_row, RowManager};
pub use dom::initialize;

/// Class carried by every row element
pub const ITEM_CLASS: &str = "exercise-item";
/// Class of the per-row delete trigger
pub const REMOVE_CLASS: &str = "remove-exercise-btn";
/// Class of the inline error placeholder following each input
pub const ERROR_CLASS: &str = "error-message";
/// Attribute holding the explicit field role marker
pub const ROLE_ATTR: &str = "data-field";
