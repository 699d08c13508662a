use ogo_core::config::OgoConfig;
use ogo_core::model::OperationDefinition;
use ogo_core::{CodeGenerator, GeneratedFile};

use crate::dispatch::content_type::ContentTypeTables;
use crate::emitters;
use crate::error::GeneratorError;

/// Configuration for the Go client generator.
#[derive(Debug, Clone)]
pub struct GoClientConfig {
    /// Go package name stamped into generated files.
    pub package: String,
    /// Content-type family membership driving classification.
    pub tables: ContentTypeTables,
}

impl GoClientConfig {
    /// Build generator config from the project config, parsing the raw
    /// content-type table override when present.
    pub fn from_project(cfg: &OgoConfig) -> Result<Self, GeneratorError> {
        let tables = match &cfg.content_types {
            Some(raw) => serde_json::from_value(raw.clone())?,
            None => ContentTypeTables::default(),
        };
        Ok(Self {
            package: cfg.package.clone(),
            tables,
        })
    }
}

/// Go typed-response client generator.
pub struct GoClientGenerator;

impl CodeGenerator for GoClientGenerator {
    type Config = GoClientConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        operations: &[OperationDefinition],
        config: &GoClientConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        if operations.is_empty() {
            log::warn!("spec declares no operations, nothing to generate");
            return Ok(Vec::new());
        }

        let content =
            emitters::responses::emit_responses(operations, &config.package, &config.tables)?;

        Ok(vec![GeneratedFile {
            path: "responses.go".to_string(),
            content,
        }])
    }
}
