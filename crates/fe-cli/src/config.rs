//! Config file for the `fe-field` binary

use std::path::Path;

use fe_core::{FieldError, FieldResult};
use fe_randomizer::RandomizerConfig;
use fe_render::RenderConfig;
use serde::{Deserialize, Serialize};

/// Top-level YAML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub randomizer: RandomizerConfig,
    pub render: RenderConfig,
}

impl FieldConfig {
    pub fn from_yaml(text: &str) -> FieldResult<Self> {
        serde_yml::from_str(text).map_err(|e| FieldError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> FieldResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Read `path` when one is given, defaults otherwise.
    ///
    /// A given path that cannot be read is an error.
    pub fn load_or_default(path: Option<&Path>) -> FieldResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> FieldResult<String> {
        serde_yml::to_string(self).map_err(|e| FieldError::Config(e.to_string()))
    }
}
