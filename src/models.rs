//! Frontend Models
//!
//! Form payloads as the backend binds them (camelCase field names).

use serde::{Deserialize, Serialize};

/// Student (aluno) form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentDraft {
    pub nome: String,
    pub email: String,
    /// Masked or digit-only
    pub telefone: String,
    /// Masked or digit-only
    pub cpf: String,
}

/// One exercise row of a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseDraft {
    pub nome_exercicio: String,
    pub series_repeticoes: String,
}

/// Workout (treino) form. `id` is set when editing an existing workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutDraft {
    pub id: Option<u64>,
    pub nome: String,
    pub descricao: String,
    pub exercicios: Vec<ExerciseDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_from_json() {
        let json = r#"{
            "id": 7,
            "nome": "Treino A",
            "exercicios": [
                { "nomeExercicio": "Supino", "seriesRepeticoes": "3x10" },
                { "nomeExercicio": "Remada" }
            ]
        }"#;
        let workout: WorkoutDraft = serde_json::from_str(json).unwrap();
        assert_eq!(workout.id, Some(7));
        assert_eq!(workout.descricao, "");
        assert_eq!(workout.exercicios.len(), 2);
        assert_eq!(workout.exercicios[0].series_repeticoes, "3x10");
        assert_eq!(workout.exercicios[1].series_repeticoes, "");
    }

    #[test]
    fn test_exercise_field_names() {
        let value = serde_json::to_value(ExerciseDraft {
            nome_exercicio: "Agachamento".to_string(),
            series_repeticoes: "4x8".to_string(),
        })
        .unwrap();
        assert_eq!(value["nomeExercicio"], "Agachamento");
        assert_eq!(value["seriesRepeticoes"], "4x8");
    }
}
