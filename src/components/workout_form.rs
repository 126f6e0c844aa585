//! Workout Form Component
//!
//! Create or update a workout and its exercise rows. Create and update forms
//! may share a page; the mode's suffix keeps their element ids apart.

use leptos::prelude::*;

use crate::components::{ExerciseRow, ExerciseRows, TextField};
use crate::context::FormsContext;
use crate::models::WorkoutDraft;
use crate::validate::{message_for, validate_workout, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutMode {
    Create,
    Update { workout_id: u64 },
}

impl WorkoutMode {
    pub fn suffix(self) -> &'static str {
        match self {
            WorkoutMode::Create => "-create",
            WorkoutMode::Update { .. } => "-update",
        }
    }

    /// Backend endpoint the form posts to
    pub fn action(self, student_id: u64) -> String {
        match self {
            WorkoutMode::Create => format!("/web/alunos/{}/treinos/criar", student_id),
            WorkoutMode::Update { workout_id } => {
                format!("/web/alunos/{}/treinos/atualizar/{}", student_id, workout_id)
            }
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            WorkoutMode::Create => "Criar treino",
            WorkoutMode::Update { .. } => "Salvar alterações",
        }
    }

    fn workout_id(self) -> Option<u64> {
        match self {
            WorkoutMode::Create => None,
            WorkoutMode::Update { workout_id } => Some(workout_id),
        }
    }
}

#[component]
pub fn WorkoutForm(
    mode: WorkoutMode,
    student_id: u64,
    #[prop(optional)] initial: Option<WorkoutDraft>,
) -> impl IntoView {
    let ctx = use_context::<FormsContext>().expect("FormsContext should be provided");
    let suffix = mode.suffix();
    let initial = initial.unwrap_or_default();

    let nome = RwSignal::new(initial.nome.clone());
    let descricao = RwSignal::new(initial.descricao.clone());
    let rows = RwSignal::new(initial.exercicios.iter().map(ExerciseRow::from_draft).collect::<Vec<_>>());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let draft = WorkoutDraft {
            id: mode.workout_id(),
            nome: nome.get_untracked(),
            descricao: descricao.get_untracked(),
            exercicios: rows.get_untracked().iter().map(ExerciseRow::draft).collect(),
        };
        let found = validate_workout(&draft, &ctx.naming(suffix));
        if !found.is_empty() {
            ev.prevent_default();
            tracing::info!("[WorkoutForm{}] {} invalid field(s)", suffix, found.len());
        }
        errors.set(found);
    };

    let descricao_id = format!("descricao{}", suffix);

    view! {
        <form class="workout-form" method="post" action=mode.action(student_id) on:submit=on_submit>
            <TextField id=format!("nome{}", suffix) name="nome" label="Nome do treino:" value=nome errors=errors />
            <label for=descricao_id.clone()>"Descrição:"</label>
            <textarea
                id=descricao_id
                name="descricao"
                prop:value=move || descricao.get()
                on:input=move |ev| descricao.set(event_target_value(&ev))
            ></textarea>
            <div class="error-message">{move || message_for(&errors.get(), "descricao")}</div>

            <h3>"Exercícios"</h3>
            <ExerciseRows naming=ctx.naming(suffix) rows=rows errors=errors />

            <button type="submit">{mode.submit_label()}</button>
        </form>
    }
}
