pub mod config;
pub mod error;
pub mod model;
pub mod parse;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from the operation model.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        operations: &[model::OperationDefinition],
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
