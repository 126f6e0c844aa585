//! Client-side Validation
//!
//! Same rules the backend applies to student and workout forms, so inline
//! error slots can be filled before the form is posted. The backend stays
//! the authority; these checks only save a round trip.

use std::sync::LazyLock;

use form_mask::{strip_formatting, MaskKind};
use regex::Regex;
use repeatable_rows::{FieldRole, RowNaming};
use thiserror::Error;

use crate::models::{StudentDraft, WorkoutDraft};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ ]+$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{subject} não pode estar em branco.")]
    Blank { subject: &'static str },

    #[error("{subject} deve ter entre {min} e {max} caracteres.")]
    Length { subject: &'static str, min: usize, max: usize },

    #[error("{subject} deve ter no máximo {max} caracteres.")]
    TooLong { subject: &'static str, max: usize },

    #[error("Nome do exercício muito longo (máx {max} caracteres).")]
    ExerciseNameTooLong { max: usize },

    #[error("Séries/repetições muito longas (máx {max} caracteres).")]
    SeriesTooLong { max: usize },

    #[error("O nome deve conter apenas letras e espaços.")]
    NotLetters,

    #[error("Formato de email inválido.")]
    Email,

    #[error("Telefone deve conter 10 ou 11 números, ou ser deixado em branco.")]
    Phone,

    #[error("CPF deve conter exatamente 11 números.")]
    Identifier,
}

/// (submission name, error) pairs
pub type FieldErrors = Vec<(String, FieldError)>;

/// First message for a field, for its error slot
pub fn message_for(errors: &[(String, FieldError)], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|(name, _)| name == field)
        .map(|(_, err)| err.to_string())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_length(value: &str, subject: &'static str, min: usize, max: usize) -> Option<FieldError> {
    let len = char_len(value);
    (len < min || len > max).then_some(FieldError::Length { subject, min, max })
}

fn check_max(value: &str, subject: &'static str, max: usize) -> Option<FieldError> {
    (char_len(value) > max).then_some(FieldError::TooLong { subject, max })
}

pub fn validate_student(student: &StudentDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut push = |field: &str, err: Option<FieldError>| {
        if let Some(err) = err {
            errors.push((field.to_string(), err));
        }
    };

    let nome = student.nome.trim();
    if nome.is_empty() {
        push("nome", Some(FieldError::Blank { subject: "O nome" }));
    } else {
        push("nome", check_length(&student.nome, "O nome", 2, 100));
        push("nome", (!NAME_RE.is_match(&student.nome)).then_some(FieldError::NotLetters));
    }

    if student.email.trim().is_empty() {
        push("email", Some(FieldError::Blank { subject: "O email" }));
    } else {
        push("email", (!EMAIL_RE.is_match(student.email.trim())).then_some(FieldError::Email));
    }

    let telefone = strip_formatting(&student.telefone);
    if !telefone.is_empty() && !MaskKind::Phone.is_complete(&telefone) {
        push("telefone", Some(FieldError::Phone));
    }

    let cpf = strip_formatting(&student.cpf);
    if cpf.is_empty() {
        push("cpf", Some(FieldError::Blank { subject: "O CPF" }));
    } else if !MaskKind::Identifier.is_complete(&cpf) {
        push("cpf", Some(FieldError::Identifier));
    }

    errors
}

/// Exercise errors are keyed by the row's submission name, so they follow
/// the row's current position.
pub fn validate_workout(workout: &WorkoutDraft, naming: &RowNaming) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if workout.nome.trim().is_empty() {
        errors.push(("nome".to_string(), FieldError::Blank { subject: "O nome do treino" }));
    } else if let Some(err) = check_length(&workout.nome, "O nome do treino", 3, 100) {
        errors.push(("nome".to_string(), err));
    }

    if let Some(err) = check_max(&workout.descricao, "A descrição", 500) {
        errors.push(("descricao".to_string(), err));
    }

    for (index, exercise) in workout.exercicios.iter().enumerate() {
        let name_field = naming.submit_name(index, FieldRole::Name);
        if exercise.nome_exercicio.trim().is_empty() {
            errors.push((name_field, FieldError::Blank { subject: "O nome do exercício" }));
        } else if char_len(&exercise.nome_exercicio) > 150 {
            errors.push((name_field, FieldError::ExerciseNameTooLong { max: 150 }));
        }
        if char_len(&exercise.series_repeticoes) > 100 {
            errors.push((naming.submit_name(index, FieldRole::Series), FieldError::SeriesTooLong { max: 100 }));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseDraft;

    fn student() -> StudentDraft {
        StudentDraft {
            nome: "João da Silva".to_string(),
            email: "joao@example.com".to_string(),
            telefone: "(11) 98765-4321".to_string(),
            cpf: "123.456.789-01".to_string(),
        }
    }

    fn fields(errors: &FieldErrors) -> Vec<&str> {
        errors.iter().map(|(field, _)| field.as_str()).collect()
    }

    #[test]
    fn test_valid_student() {
        assert!(validate_student(&student()).is_empty());
    }

    #[test]
    fn test_phone_optional() {
        let s = StudentDraft { telefone: String::new(), ..student() };
        assert!(validate_student(&s).is_empty());
        let s = StudentDraft { telefone: "(11) 3333-4444".to_string(), ..student() };
        assert!(validate_student(&s).is_empty());
    }

    #[test]
    fn test_incomplete_masked_values() {
        let s = StudentDraft {
            telefone: "(11) 9876".to_string(),
            cpf: "123.456.7".to_string(),
            ..student()
        };
        let errors = validate_student(&s);
        assert_eq!(fields(&errors), vec!["telefone", "cpf"]);
        assert_eq!(message_for(&errors, "cpf").unwrap(), "CPF deve conter exatamente 11 números.");
    }

    #[test]
    fn test_blank_student() {
        let errors = validate_student(&StudentDraft::default());
        assert_eq!(fields(&errors), vec!["nome", "email", "cpf"]);
        assert_eq!(message_for(&errors, "nome").unwrap(), "O nome não pode estar em branco.");
    }

    #[test]
    fn test_name_rules() {
        let s = StudentDraft { nome: "J".to_string(), ..student() };
        assert_eq!(
            message_for(&validate_student(&s), "nome").unwrap(),
            "O nome deve ter entre 2 e 100 caracteres."
        );
        let s = StudentDraft { nome: "R2D2".to_string(), ..student() };
        assert_eq!(validate_student(&s), vec![("nome".to_string(), FieldError::NotLetters)]);
    }

    #[test]
    fn test_email_shape() {
        let s = StudentDraft { email: "joao@".to_string(), ..student() };
        assert_eq!(validate_student(&s), vec![("email".to_string(), FieldError::Email)]);
    }

    #[test]
    fn test_workout_rows_keyed_by_position() {
        let workout = WorkoutDraft {
            id: None,
            nome: "Treino A".to_string(),
            descricao: String::new(),
            exercicios: vec![
                ExerciseDraft { nome_exercicio: "Supino".to_string(), series_repeticoes: "3x10".to_string() },
                ExerciseDraft { nome_exercicio: "  ".to_string(), series_repeticoes: "x".repeat(101) },
            ],
        };
        let errors = validate_workout(&workout, &RowNaming::with_suffix("-create"));
        assert_eq!(
            fields(&errors),
            vec!["exercicios[1].nomeExercicio", "exercicios[1].seriesRepeticoes"]
        );
        assert_eq!(
            message_for(&errors, "exercicios[1].seriesRepeticoes").unwrap(),
            "Séries/repetições muito longas (máx 100 caracteres)."
        );
    }

    #[test]
    fn test_exercise_name_too_long() {
        let long = ExerciseDraft { nome_exercicio: "é".repeat(151), series_repeticoes: "4x8".to_string() };
        let fits = ExerciseDraft { nome_exercicio: "é".repeat(150), series_repeticoes: "s".repeat(100) };
        let workout = WorkoutDraft {
            nome: "Treino B".to_string(),
            exercicios: vec![fits, long],
            ..WorkoutDraft::default()
        };
        let errors = validate_workout(&workout, &RowNaming::with_suffix("-update"));
        assert_eq!(fields(&errors), vec!["exercicios[1].nomeExercicio"]);
        assert_eq!(
            message_for(&errors, "exercicios[1].nomeExercicio").unwrap(),
            "Nome do exercício muito longo (máx 150 caracteres)."
        );
    }

    #[test]
    fn test_workout_header() {
        let workout = WorkoutDraft {
            nome: "AB".to_string(),
            descricao: "d".repeat(501),
            ..WorkoutDraft::default()
        };
        let errors = validate_workout(&workout, &RowNaming::with_suffix(""));
        assert_eq!(fields(&errors), vec!["nome", "descricao"]);
        assert_eq!(
            message_for(&errors, "nome").unwrap(),
            "O nome do treino deve ter entre 3 e 100 caracteres."
        );
    }

    #[test]
    fn test_length_counts_chars() {
        // 100 multi-byte letters are within the limit
        let s = StudentDraft { nome: "é".repeat(100), ..student() };
        assert!(validate_student(&s).is_empty());
    }
}
