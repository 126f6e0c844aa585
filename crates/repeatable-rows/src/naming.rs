//! Row Naming
//!
//! Field roles and the array-indexed naming convention the backend binds:
//! `exercicios[2].nomeExercicio`.

/// Array name used by the workout forms
pub const DEFAULT_ARRAY_NAME: &str = "exercicios";

/// The two editable fields of an exercise row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Exercise name
    Name,
    /// Sets/repetitions descriptor, e.g. "3x10"
    Series,
}

impl FieldRole {
    pub const ALL: [FieldRole; 2] = [FieldRole::Name, FieldRole::Series];

    /// Field-name token embedded in ids and submission names
    pub fn token(self) -> &'static str {
        match self {
            FieldRole::Name => "nomeExercicio",
            FieldRole::Series => "seriesRepeticoes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldRole::Name => "Exercício:",
            FieldRole::Series => "Séries/Rep:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldRole::Name => "Nome do Exercício",
            FieldRole::Series => "Ex: 3x10",
        }
    }

    /// Parse a role marker (the token itself)
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.token() == marker)
    }
}

/// Naming scheme of one container: array name plus an id suffix that keeps
/// ids unique when several containers share a page ("-create", "-update").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNaming {
    pub array_name: String,
    pub suffix: String,
}

impl RowNaming {
    pub fn new(array_name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            array_name: array_name.into(),
            suffix: suffix.into(),
        }
    }

    /// Default array name with the given suffix
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self::new(DEFAULT_ARRAY_NAME, suffix)
    }

    /// Submission name: `array[index].token`
    pub fn submit_name(&self, index: usize, role: FieldRole) -> String {
        format!("{}[{}].{}", self.array_name, index, role.token())
    }

    /// Element id and label target: submission name plus suffix
    pub fn element_id(&self, index: usize, role: FieldRole) -> String {
        format!("{}{}", self.submit_name(index, role), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let naming = RowNaming::with_suffix("-create");
        assert_eq!(naming.submit_name(0, FieldRole::Name), "exercicios[0].nomeExercicio");
        assert_eq!(naming.element_id(3, FieldRole::Series), "exercicios[3].seriesRepeticoes-create");
    }

    #[test]
    fn test_empty_suffix() {
        let naming = RowNaming::new("itens", "");
        assert_eq!(naming.element_id(1, FieldRole::Name), naming.submit_name(1, FieldRole::Name));
        assert_eq!(naming.submit_name(1, FieldRole::Name), "itens[1].nomeExercicio");
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(FieldRole::from_marker("nomeExercicio"), Some(FieldRole::Name));
        assert_eq!(FieldRole::from_marker("seriesRepeticoes"), Some(FieldRole::Series));
        assert_eq!(FieldRole::from_marker("exercicios[0].nomeExercicio"), None);
    }
}
