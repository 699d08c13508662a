use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level project configuration loaded from `.ogo.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OgoConfig {
    pub input: String,
    pub output: String,
    /// Package name stamped into the generated Go source.
    pub package: String,
    pub naming: NamingConfig,
    /// Raw override for the content-type family tables. Parsed by the Go
    /// generator, which owns the table schema.
    pub content_types: Option<serde_json::Value>,
}

impl Default for OgoConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "gen".to_string(),
            package: "client".to_string(),
            naming: NamingConfig::default(),
            content_types: None,
        }
    }
}

/// Naming strategy and aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub strategy: NamingStrategy,
    /// Map from resolved operation name (operationId or route-derived) to custom alias.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            strategy: NamingStrategy::UseOperationId,
            aliases: IndexMap::new(),
        }
    }
}

/// How operation names are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    #[default]
    UseOperationId,
    UseRouteBased,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".ogo.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OgoConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OgoConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# ogo configuration — https://github.com/ogo-dev/ogo
input: openapi.yaml
output: gen
package: client      # Go package name for generated files

naming:
  strategy: use_operation_id  # use_operation_id | use_route_based
  aliases: {}
    # createChatCompletion: chat     # operationId → custom name

# Override the content-type family tables. Changing membership changes the
# conditions emitted into generated code.
# content_types:
#   json: [application/json, text/x-json]
#   yaml: [application/yaml, application/x-yaml, text/yaml, text/x-yaml]
#   xml: [application/xml, text/xml]
"#
}
