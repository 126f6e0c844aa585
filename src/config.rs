//! Forms Configuration
//!
//! Which fields get masks and which containers get repeatable rows. The host
//! page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="gymtime-forms-config">
//!   { "logLevel": "debug", "rowContainers": [] }
//! </script>
//! ```

use form_mask::MaskKind;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use repeatable_rows::{RowNaming, DEFAULT_ARRAY_NAME};
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::FormsError;
use crate::models::WorkoutDraft;

/// Id of the optional config element in the host page
pub const CONFIG_ELEMENT_ID: &str = "gymtime-forms-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedFieldConfig {
    /// Element id of the input
    pub id: String,
    pub kind: MaskKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowContainerConfig {
    pub container_id: String,
    pub add_button_id: String,
    /// Appended to element ids, e.g. "-create"
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormsConfig {
    pub masked_fields: Vec<MaskedFieldConfig>,
    pub row_containers: Vec<RowContainerConfig>,
    pub array_name: String,
    /// off, error, warn, info, debug, trace
    pub log_level: String,
    /// Student the standalone workout forms post for
    pub student_id: Option<u64>,
    /// Workout loaded into the standalone update form
    pub workout: Option<WorkoutDraft>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            masked_fields: vec![
                MaskedFieldConfig { id: "cpf".to_string(), kind: MaskKind::Identifier },
                MaskedFieldConfig { id: "telefone".to_string(), kind: MaskKind::Phone },
            ],
            row_containers: vec![
                RowContainerConfig {
                    container_id: "exerciciosContainerCreate".to_string(),
                    add_button_id: "addExercicioBtnCreate".to_string(),
                    suffix: "-create".to_string(),
                },
                RowContainerConfig {
                    container_id: "exerciciosContainerUpdate".to_string(),
                    add_button_id: "addExercicioBtnUpdate".to_string(),
                    suffix: "-update".to_string(),
                },
            ],
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            log_level: "info".to_string(),
            student_id: None,
            workout: None,
        }
    }
}

impl FormsConfig {
    pub fn from_json(json: &str) -> Result<Self, FormsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config element if the page has one, defaults otherwise
    pub fn load(document: &Document) -> Result<Self, FormsError> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// Most verbose level to log, `None` when logging is off.
    /// Unknown level names fall back to info.
    pub fn max_level(&self) -> Option<Level> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .unwrap_or(LevelFilter::INFO)
            .into_level()
    }

    pub fn naming(&self, container: &RowContainerConfig) -> RowNaming {
        RowNaming::new(self.array_name.clone(), container.suffix.clone())
    }
}
