//! Row Manager
//!
//! Append and remove rows, keeping indices contiguous from 0.

use crate::host::{find_by_role, FieldNode, RowHost, RowView};
use crate::naming::{FieldRole, RowNaming};
use crate::template::RowTemplate;

/// Rewrite ids, names and label targets of one row to `index`.
/// Missing labels or inputs are skipped individually.
pub fn reindex_row<R: RowView>(row: &R, index: usize, naming: &RowNaming) {
    let labels = row.labels();
    let inputs = row.inputs();
    for role in FieldRole::ALL {
        let id = naming.element_id(index, role);
        if let Some(label) = find_by_role(&labels, role, "for") {
            label.set_attr("for", &id);
        }
        if let Some(input) = find_by_role(&inputs, role, "id") {
            input.set_attr("id", &id);
            input.set_attr("name", &naming.submit_name(index, role));
        }
    }
}

/// Rows of one container. Several managers may coexist, one per suffix.
pub struct RowManager<H: RowHost> {
    host: H,
    naming: RowNaming,
}

impl<H: RowHost> RowManager<H> {
    pub fn new(host: H, naming: RowNaming) -> Self {
        Self { host, naming }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn row_count(&self) -> usize {
        self.host.rows().len()
    }

    /// Append a row at the end, returns its index
    pub fn append(&self) -> usize {
        let index = self.row_count();
        self.host.append_row(&RowTemplate::new(&self.naming, index));
        tracing::debug!("[Rows{}] appended row {}", self.naming.suffix, index);
        index
    }

    /// Remove `row` and renumber the rest, returns the remaining count
    pub fn remove(&self, row: &H::Row) -> usize {
        self.host.remove_row(row);
        let remaining = self.reindex();
        tracing::debug!("[Rows{}] removed row, {} left", self.naming.suffix, remaining);
        remaining
    }

    /// Renumber every row to its position, returns the row count
    pub fn reindex(&self) -> usize {
        let rows = self.host.rows();
        for (index, row) in rows.iter().enumerate() {
            reindex_row(row, index, &self.naming);
        }
        rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryHost, MemoryNode, MemoryRow};
    use crate::ROLE_ATTR;

    fn manager(suffix: &str) -> RowManager<MemoryHost> {
        RowManager::new(MemoryHost::new(), RowNaming::with_suffix(suffix))
    }

    /// (label for, input id, input name) per role, for every row
    fn snapshot(manager: &RowManager<MemoryHost>) -> Vec<Vec<Option<String>>> {
        manager
            .host()
            .rows()
            .iter()
            .map(|row| {
                let labels = row.labels();
                let inputs = row.inputs();
                let mut attrs = Vec::new();
                for role in FieldRole::ALL {
                    attrs.push(find_by_role(&labels, role, "for").and_then(|l| l.attr("for")));
                    let input = find_by_role(&inputs, role, "id");
                    attrs.push(input.and_then(|i| i.attr("id")));
                    attrs.push(input.and_then(|i| i.attr("name")));
                }
                attrs
            })
            .collect()
    }

    fn expected_row(index: usize, suffix: &str) -> Vec<Option<String>> {
        let naming = RowNaming::with_suffix(suffix);
        let mut attrs = Vec::new();
        for role in FieldRole::ALL {
            attrs.push(Some(naming.element_id(index, role)));
            attrs.push(Some(naming.element_id(index, role)));
            attrs.push(Some(naming.submit_name(index, role)));
        }
        attrs
    }

    #[test]
    fn test_append_uses_row_count() {
        let m = manager("-create");
        assert_eq!(m.append(), 0);
        assert_eq!(m.append(), 1);
        assert_eq!(m.append(), 2);
        assert_eq!(snapshot(&m), (0..3).map(|i| expected_row(i, "-create")).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_first_of_two() {
        let m = manager("-create");
        m.append();
        m.append();
        let first = m.host().rows()[0].clone();
        let second_input = m.host().rows()[1].inputs()[0].clone();

        assert_eq!(m.remove(&first), 1);
        assert_eq!(snapshot(&m), vec![expected_row(0, "-create")]);
        assert_eq!(second_input.attr("name").as_deref(), Some("exercicios[0].nomeExercicio"));
    }

    #[test]
    fn test_remove_middle_keeps_contiguous() {
        let m = manager("-update");
        for _ in 0..5 {
            m.append();
        }
        let middle = m.host().rows()[2].clone();
        m.remove(&middle);
        assert_eq!(snapshot(&m), (0..4).map(|i| expected_row(i, "-update")).collect::<Vec<_>>());
        assert_eq!(m.append(), 4);
    }

    #[test]
    fn test_reindex_is_stable() {
        let m = manager("-create");
        m.append();
        m.append();
        m.append();
        m.reindex();
        let first = snapshot(&m);
        m.reindex();
        assert_eq!(snapshot(&m), first);
    }

    #[test]
    fn test_row_without_tokens_is_skipped() {
        let m = manager("-create");
        m.append();
        m.host().push_row(MemoryRow::new(
            vec![MemoryNode::with_attrs(&[("for", "observacao")])],
            vec![MemoryNode::with_attrs(&[("id", "observacao"), ("name", "observacao")])],
        ));
        m.append();
        m.append();

        let first = m.host().rows()[0].clone();
        assert_eq!(m.remove(&first), 3);

        let rows = m.host().rows();
        let odd = &rows[0];
        assert_eq!(odd.inputs()[0].attr("id").as_deref(), Some("observacao"));
        assert_eq!(odd.labels()[0].attr("for").as_deref(), Some("observacao"));
        let snap = snapshot(&m);
        assert_eq!(snap[1], expected_row(1, "-create"));
        assert_eq!(snap[2], expected_row(2, "-create"));
    }

    #[test]
    fn test_partial_row_rewrites_what_exists() {
        let m = manager("-x");
        m.host().push_row(MemoryRow::new(
            vec![],
            vec![MemoryNode::with_attrs(&[("id", "exercicios[7].seriesRepeticoes-x")])],
        ));
        m.reindex();
        let input = m.host().rows()[0].inputs()[0].clone();
        assert_eq!(input.attr("id").as_deref(), Some("exercicios[0].seriesRepeticoes-x"));
        assert_eq!(input.attr("name").as_deref(), Some("exercicios[0].seriesRepeticoes"));
    }

    #[test]
    fn test_reordered_fields_matched_by_token() {
        let m = manager("-update");
        // Server-rendered row, series before name, no role markers
        m.host().push_row(MemoryRow::new(
            vec![
                MemoryNode::with_attrs(&[("for", "exercicios[5].seriesRepeticoes-update")]),
                MemoryNode::with_attrs(&[("for", "exercicios[5].nomeExercicio-update")]),
            ],
            vec![
                MemoryNode::with_attrs(&[("id", "exercicios[5].seriesRepeticoes-update")]),
                MemoryNode::with_attrs(&[("id", "exercicios[5].nomeExercicio-update")]),
            ],
        ));
        m.reindex();
        assert_eq!(snapshot(&m), vec![expected_row(0, "-update")]);
        let inputs = m.host().rows()[0].inputs();
        assert_eq!(inputs[0].attr("name").as_deref(), Some("exercicios[0].seriesRepeticoes"));
        assert_eq!(inputs[1].attr("name").as_deref(), Some("exercicios[0].nomeExercicio"));
    }

    #[test]
    fn test_independent_containers() {
        let create = manager("-create");
        let update = manager("-update");
        create.append();
        create.append();
        update.append();
        assert_eq!(create.row_count(), 2);
        assert_eq!(update.row_count(), 1);
        assert_eq!(snapshot(&update), vec![expected_row(0, "-update")]);
        let marker = update.host().rows()[0].inputs()[0].attr(ROLE_ATTR);
        assert_eq!(marker.as_deref(), Some("nomeExercicio"));
    }

    #[test]
    fn test_remove_last_row_leaves_empty() {
        let m = manager("");
        m.append();
        let only = m.host().rows()[0].clone();
        assert_eq!(m.remove(&only), 0);
        assert!(m.host().is_empty());
        assert_eq!(m.append(), 0);
    }
}
