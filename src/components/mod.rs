//! UI Components
//!
//! Leptos renditions of the student and workout forms.

mod text_field;
mod masked_input;
mod exercise_rows;
mod student_form;
mod workout_form;

pub use text_field::TextField;
pub use masked_input::MaskedInput;
pub use exercise_rows::{ExerciseRow, ExerciseRows};
pub use student_form::StudentForm;
pub use workout_form::{WorkoutForm, WorkoutMode};
