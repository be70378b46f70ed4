//! # Engine Options
//!
//! Settings handed to `jsonschema` when a schema is compiled. The
//! defaults select Draft 2020-12 with `format` treated as an assertion,
//! so `"format": "uuid"` rejects malformed identifiers instead of being
//! a bare annotation.
//!
//! Options can be loaded from YAML or JSON:
//!
//! ```yaml
//! draft: "2020-12"
//! validate_formats: true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// JSON Schema draft used to interpret definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaDraft {
    /// Draft 7.
    #[serde(rename = "7")]
    Draft7,
    /// Draft 2019-09.
    #[serde(rename = "2019-09")]
    Draft201909,
    /// Draft 2020-12.
    #[default]
    #[serde(rename = "2020-12")]
    Draft202012,
}

impl From<SchemaDraft> for jsonschema::Draft {
    fn from(draft: SchemaDraft) -> Self {
        match draft {
            SchemaDraft::Draft7 => jsonschema::Draft::Draft7,
            SchemaDraft::Draft201909 => jsonschema::Draft::Draft201909,
            SchemaDraft::Draft202012 => jsonschema::Draft::Draft202012,
        }
    }
}

/// Compilation options for every schema built by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaOptions {
    /// Draft used to interpret definitions.
    pub draft: SchemaDraft,
    /// Whether `format` keywords are asserted.
    pub validate_formats: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            draft: SchemaDraft::default(),
            validate_formats: true,
        }
    }
}

impl SchemaOptions {
    /// Parse options from a YAML (or JSON, which is valid YAML) document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Parse` if the text is not a valid options
    /// document, including unknown keys.
    pub fn from_yaml_str(text: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(text).map_err(|e| SchemaError::Parse {
            format: "yaml",
            reason: e.to_string(),
        })
    }

    /// Compile a definition into an engine validator under these options.
    pub(crate) fn compile(
        &self,
        definition: &serde_json::Value,
    ) -> Result<jsonschema::Validator, SchemaError> {
        jsonschema::options()
            .with_draft(self.draft.into())
            .should_validate_formats(self.validate_formats)
            .build(definition)
            .map_err(|e| SchemaError::Compile {
                reason: e.to_string(),
            })
    }
}
