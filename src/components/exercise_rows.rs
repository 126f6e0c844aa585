//! Exercise Rows Component
//!
//! Repeated exercise entries of a workout form. Rows have no identity beyond
//! their position: every structural change re-renders the list, so ids and
//! submission names always run `0..len`.

use leptos::prelude::*;
use repeatable_rows::{FieldRole, RowNaming, ITEM_CLASS, REMOVE_CLASS};

use crate::models::ExerciseDraft;
use crate::validate::{message_for, FieldErrors};

/// Editable values of one row
#[derive(Clone, Copy)]
pub struct ExerciseRow {
    pub nome: RwSignal<String>,
    pub series: RwSignal<String>,
}

impl ExerciseRow {
    pub fn new() -> Self {
        Self {
            nome: RwSignal::new(String::new()),
            series: RwSignal::new(String::new()),
        }
    }

    pub fn from_draft(draft: &ExerciseDraft) -> Self {
        Self {
            nome: RwSignal::new(draft.nome_exercicio.clone()),
            series: RwSignal::new(draft.series_repeticoes.clone()),
        }
    }

    pub fn draft(&self) -> ExerciseDraft {
        ExerciseDraft {
            nome_exercicio: self.nome.get_untracked(),
            series_repeticoes: self.series.get_untracked(),
        }
    }

    fn field(&self, role: FieldRole) -> RwSignal<String> {
        match role {
            FieldRole::Name => self.nome,
            FieldRole::Series => self.series,
        }
    }
}

fn exercise_row(
    index: usize,
    row: ExerciseRow,
    naming: &RowNaming,
    errors: RwSignal<FieldErrors>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    let fields = FieldRole::ALL
        .into_iter()
        .map(|role| {
            let value = row.field(role);
            let id = naming.element_id(index, role);
            let name = naming.submit_name(index, role);
            let error_key = name.clone();
            view! {
                <label for=id.clone() data-field=role.token()>{role.label()}</label>
                <input
                    type="text"
                    id=id
                    name=name
                    placeholder=role.placeholder()
                    data-field=role.token()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <div class="error-message">{move || message_for(&errors.get(), &error_key)}</div>
            }
        })
        .collect_view();

    view! {
        <div class=ITEM_CLASS>
            {fields}
            <button type="button" class=REMOVE_CLASS on:click=move |_| on_remove.run(index)>
                "Remover"
            </button>
        </div>
    }
}

#[component]
pub fn ExerciseRows(
    naming: RowNaming,
    rows: RwSignal<Vec<ExerciseRow>>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let on_remove = Callback::new(move |index: usize| {
        rows.update(|rows| {
            if index < rows.len() {
                rows.remove(index);
            }
        });
        // Error keys carry the old positions
        errors.set(FieldErrors::new());
        tracing::debug!("[ExerciseRows] removed row {}", index);
    });

    let add = move |_| {
        rows.update(|rows| rows.push(ExerciseRow::new()));
    };

    view! {
        <div class="exercises-container">
            {move || {
                rows.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| exercise_row(index, row, &naming, errors, on_remove))
                    .collect_view()
            }}
        </div>
        <button type="button" class="add-exercise-btn" on:click=add>
            "Adicionar exercício"
        </button>
    }
}
