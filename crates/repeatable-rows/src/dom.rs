//! DOM Binding
//!
//! `RowHost` over a live container element, and `initialize` which wires
//! the add button and a single delegated click listener on the container.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Node};

use crate::host::{FieldNode, RowHost, RowView};
use crate::manager::RowManager;
use crate::naming::RowNaming;
use crate::template::RowTemplate;
use crate::{ITEM_CLASS, REMOVE_CLASS};

#[derive(Clone, Debug)]
pub struct DomNode(pub Element);

impl FieldNode for DomNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            tracing::warn!("[Rows] setting {}={:?} failed: {:?}", name, value, e);
        }
    }
}

#[derive(Clone, Debug)]
pub struct DomRow(pub Element);

impl RowView for DomRow {
    type Node = DomNode;

    fn labels(&self) -> Vec<DomNode> {
        select_all(&self.0, "label").into_iter().map(DomNode).collect()
    }

    fn inputs(&self) -> Vec<DomNode> {
        select_all(&self.0, "input").into_iter().map(DomNode).collect()
    }
}

/// Rows are the `.exercise-item` elements inside the container
pub struct DomRowHost {
    container: Element,
    document: Document,
}

impl DomRowHost {
    pub fn new(container: Element, document: Document) -> Self {
        Self { container, document }
    }
}

impl RowHost for DomRowHost {
    type Row = DomRow;

    fn rows(&self) -> Vec<DomRow> {
        select_all(&self.container, &format!(".{}", ITEM_CLASS))
            .into_iter()
            .map(DomRow)
            .collect()
    }

    fn append_row(&self, template: &RowTemplate) {
        let row = match self.document.create_element("div") {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("[Rows] create_element failed: {:?}", e);
                return;
            }
        };
        row.set_class_name(ITEM_CLASS);
        row.set_inner_html(&template.to_html());
        if let Err(e) = self.container.append_child(&row) {
            tracing::warn!("[Rows] append_child failed: {:?}", e);
        }
    }

    fn remove_row(&self, row: &DomRow) {
        row.0.remove();
    }
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Row containing the remove trigger the click came from, if any
fn remove_target_row(container: &Element, ev: &Event) -> Option<Element> {
    let origin = ev.target()?.dyn_into::<Element>().ok()?;
    let trigger = origin.closest(&format!(".{}", REMOVE_CLASS)).ok()??;
    let row = trigger.closest(&format!(".{}", ITEM_CLASS)).ok()??;
    let row_node: &Node = &row;
    container.contains(Some(row_node)).then_some(row)
}

/// Wire append and delete on a container with the default array name.
///
/// Several containers may be initialized on one page; `suffix` keeps their
/// element ids apart. Listeners live as long as the page.
pub fn initialize(container: &Element, add_button: &Element, suffix: &str) -> Result<(), JsValue> {
    initialize_with(container, add_button, RowNaming::with_suffix(suffix))
}

pub fn initialize_with(container: &Element, add_button: &Element, naming: RowNaming) -> Result<(), JsValue> {
    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("container has no owner document"))?;
    let manager = Rc::new(RowManager::new(DomRowHost::new(container.clone(), document), naming));

    let on_add = {
        let manager = manager.clone();
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            manager.append();
        })
    };
    add_button.add_event_listener_with_callback("click", on_add.as_ref().unchecked_ref())?;
    on_add.forget();

    // Delegated: covers rows appended later without rebinding
    let on_click = {
        let container = container.clone();
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if let Some(row) = remove_target_row(&container, &ev) {
                manager.remove(&DomRow(row));
            }
        })
    };
    container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    tracing::info!("[Rows] container {:?} ready", container.id());
    Ok(())
}
