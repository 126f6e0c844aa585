//! GymTime Forms App
//!
//! Standalone rendition of the student and workout forms, mounted when the
//! page has no server-rendered form markup.

use leptos::prelude::*;

use crate::components::{StudentForm, WorkoutForm, WorkoutMode};
use crate::config::FormsConfig;
use crate::context::FormsContext;

#[component]
pub fn App(config: FormsConfig) -> impl IntoView {
    let student_id = config.student_id;
    let workout = config.workout.clone();

    provide_context(FormsContext::new(config));

    // Workout forms post under a student, so they need one
    let create_form = student_id.map(|student_id| {
        view! {
            <section class="form-section">
                <h2>"Novo treino"</h2>
                <WorkoutForm mode=WorkoutMode::Create student_id=student_id />
            </section>
        }
    });

    let update_form = match (student_id, workout) {
        (Some(student_id), Some(workout)) => workout.id.map(|workout_id| {
            let mode = WorkoutMode::Update { workout_id };
            view! {
                <section class="form-section">
                    <h2>"Editar treino"</h2>
                    <WorkoutForm mode=mode student_id=student_id initial=workout />
                </section>
            }
        }),
        _ => None,
    };

    view! {
        <main class="main-content">
            <h1>"GymTime"</h1>
            <section class="form-section">
                <h2>"Aluno"</h2>
                <StudentForm />
            </section>
            {create_form}
            {update_form}
        </main>
    }
}
